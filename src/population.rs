//! # Population
//!
//! Building the first generation and scoring a generation. Scores come back
//! in the same order as the population so the i-th fitness always belongs to
//! the i-th individual, whether or not the work was spread over threads.

use rayon::prelude::*;

use crate::error::{Result, SolverError};
use crate::evolution::Challenge;
use crate::phenotype::Phenotype;
use crate::rng::RandomNumberGenerator;
use crate::tour::Tour;

/// Creates `size` random tours over `num_locations` locations.
///
/// # Errors
///
/// Returns `SolverError::Configuration` if `num_locations < 2` or the depot
/// is not one of the locations.
pub fn initialize_population(
    size: usize,
    num_locations: usize,
    depot: usize,
    rng: &mut RandomNumberGenerator,
) -> Result<Vec<Tour>> {
    (0..size)
        .map(|_| Tour::random(num_locations, depot, rng))
        .collect()
}

/// Scores every individual with `challenge`.
///
/// Populations at least `parallel_threshold` large are scored on the rayon
/// pool; smaller ones sequentially.
///
/// # Errors
///
/// Returns `SolverError::FitnessCalculation` if any score is not finite,
/// which happens when a tour has zero total distance.
pub fn evaluate_population<P, C>(
    population: &[P],
    challenge: &C,
    parallel_threshold: usize,
) -> Result<Vec<f64>>
where
    P: Phenotype,
    C: Challenge<P> + Sync,
{
    if population.len() >= parallel_threshold {
        population
            .par_iter()
            .map(|individual| checked_score(individual, challenge))
            .collect()
    } else {
        population
            .iter()
            .map(|individual| checked_score(individual, challenge))
            .collect()
    }
}

fn checked_score<P, C>(individual: &P, challenge: &C) -> Result<f64>
where
    P: Phenotype,
    C: Challenge<P>,
{
    let score = challenge.score(individual);
    if !score.is_finite() {
        return Err(SolverError::FitnessCalculation(format!(
            "Non-finite fitness score {} for {:?}; the input likely has zero-distance duplicate locations",
            score, individual
        )));
    }
    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::evolution::RouteChallenge;
    use crate::tour::validate_stops;

    fn challenge() -> RouteChallenge {
        RouteChallenge::new(
            DistanceMatrix::from_rows(vec![
                vec![0.0, 1.0, 9.0, 4.0],
                vec![1.0, 0.0, 2.0, 8.0],
                vec![9.0, 2.0, 0.0, 3.0],
                vec![4.0, 8.0, 3.0, 0.0],
            ])
            .unwrap(),
        )
    }

    #[test]
    fn test_initialize_population() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let population = initialize_population(25, 7, 0, &mut rng).unwrap();
        assert_eq!(population.len(), 25);
        for tour in &population {
            assert!(validate_stops(tour.stops(), 7, 0).is_ok());
        }
    }

    #[test]
    fn test_initialize_population_rejects_single_location() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        assert!(initialize_population(5, 1, 0, &mut rng).is_err());
    }

    #[test]
    fn test_evaluate_population_is_index_aligned() {
        let challenge = challenge();
        let population = vec![
            Tour::from_stops(vec![0, 1, 2, 3, 0], 4, 0).unwrap(),
            Tour::from_stops(vec![0, 2, 1, 3, 0], 4, 0).unwrap(),
            Tour::from_stops(vec![0, 3, 2, 1, 0], 4, 0).unwrap(),
        ];

        let fitness = evaluate_population(&population, &challenge, 1000).unwrap();
        assert_eq!(fitness.len(), 3);
        assert!((fitness[0] - 1.0 / 10.0).abs() < 1e-12);
        assert!((fitness[1] - 1.0 / 23.0).abs() < 1e-12);
        assert!((fitness[2] - 1.0 / 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let challenge = challenge();
        let mut rng = RandomNumberGenerator::from_seed(8);
        let population = initialize_population(200, 4, 0, &mut rng).unwrap();

        let sequential = evaluate_population(&population, &challenge, usize::MAX).unwrap();
        let parallel = evaluate_population(&population, &challenge, 0).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_zero_distance_is_fatal() {
        let challenge = RouteChallenge::new(
            DistanceMatrix::from_rows(vec![vec![0.0, 0.0], vec![0.0, 0.0]]).unwrap(),
        );
        let population = vec![Tour::from_stops(vec![0, 1, 0], 2, 0).unwrap()];
        let result = evaluate_population(&population, &challenge, 1000);
        assert!(matches!(result, Err(SolverError::FitnessCalculation(_))));
    }
}
