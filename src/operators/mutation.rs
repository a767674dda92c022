//! Swap mutation.

use crate::rng::RandomNumberGenerator;

/// With probability `mutation_rate`, swaps two distinct interior stops.
///
/// The first and last positions hold the depot and are never touched, so a
/// valid tour stays valid. Returns `true` if a swap happened. A rate of 0 is
/// the identity and a rate of 1 always swaps once, provided the tour has at
/// least two interior stops.
///
/// # Examples
///
/// ```
/// use tourga::operators::swap_mutation;
/// use tourga::rng::RandomNumberGenerator;
///
/// let mut rng = RandomNumberGenerator::from_seed(3);
/// let mut stops = vec![0, 1, 2, 3, 0];
/// assert!(!swap_mutation(&mut stops, 0.0, &mut rng));
/// assert_eq!(stops, vec![0, 1, 2, 3, 0]);
/// ```
pub fn swap_mutation(
    stops: &mut [usize],
    mutation_rate: f64,
    rng: &mut RandomNumberGenerator,
) -> bool {
    if stops.len() < 4 {
        return false;
    }
    if rng.probability() >= mutation_rate {
        return false;
    }

    let picked = rng.sample_distinct(stops.len() - 2, 2);
    stops.swap(picked[0] + 1, picked[1] + 1);
    true
}
