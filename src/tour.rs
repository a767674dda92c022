//! # Tour
//!
//! A `Tour` is the chromosome evolved by the solver: a closed route that
//! leaves the depot, visits every other location exactly once and returns.
//! For `N` locations it holds `N + 1` stops, the first and last being the
//! depot.
//!
//! ## Example
//!
//! ```rust
//! use tourga::tour::Tour;
//! use tourga::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let tour = Tour::random(5, 0, &mut rng).unwrap();
//! assert_eq!(tour.stops().len(), 6);
//! assert_eq!(tour.stops()[0], 0);
//! assert_eq!(tour.stops()[5], 0);
//!
//! assert!(Tour::from_stops(vec![0, 2, 2, 0], 3, 0).is_err());
//! ```

use std::fmt;

use crate::distance::DistanceMatrix;
use crate::error::{Result, SolverError};
use crate::operators::{order_crossover, swap_mutation};
use crate::phenotype::Phenotype;
use crate::rng::RandomNumberGenerator;

/// A depot-framed permutation of locations.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "TourRepr"))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tour {
    stops: Vec<usize>,
    depot: usize,
}

/// Wire form of a [`Tour`]; deserialized tours go through `from_stops`.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct TourRepr {
    stops: Vec<usize>,
    depot: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<TourRepr> for Tour {
    type Error = SolverError;

    fn try_from(repr: TourRepr) -> Result<Self> {
        let num_locations = repr.stops.len().saturating_sub(1);
        Tour::from_stops(repr.stops, num_locations, repr.depot)
    }
}

impl Tour {
    /// Builds a tour from explicit stops, checking that they form a valid
    /// depot-framed permutation of `num_locations` locations.
    ///
    /// # Errors
    ///
    /// Returns `SolverError::InvalidTour` if the stops are not
    /// `num_locations + 1` long, do not start and end at `depot`, or do not
    /// visit every other location exactly once.
    pub fn from_stops(stops: Vec<usize>, num_locations: usize, depot: usize) -> Result<Self> {
        validate_stops(&stops, num_locations, depot)?;
        Ok(Self { stops, depot })
    }

    /// Builds a tour visiting the non-depot locations in a uniformly random
    /// order.
    ///
    /// # Errors
    ///
    /// Returns `SolverError::Configuration` if `num_locations < 2` or the
    /// depot is not one of the locations.
    pub fn random(
        num_locations: usize,
        depot: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Self> {
        check_locations(num_locations, depot)?;

        let mut interior: Vec<usize> = (0..num_locations).filter(|&l| l != depot).collect();
        rng.shuffle(&mut interior);

        let mut stops = Vec::with_capacity(num_locations + 1);
        stops.push(depot);
        stops.extend(interior);
        stops.push(depot);

        Ok(Self { stops, depot })
    }

    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    pub fn into_stops(self) -> Vec<usize> {
        self.stops
    }

    pub fn depot(&self) -> usize {
        self.depot
    }

    /// Number of locations covered, depot included.
    pub fn num_locations(&self) -> usize {
        self.stops.len() - 1
    }

    /// The stops between the two depot visits.
    pub fn interior(&self) -> &[usize] {
        &self.stops[1..self.stops.len() - 1]
    }

    /// Total cost of driving the tour over `matrix`.
    pub fn distance(&self, matrix: &DistanceMatrix) -> f64 {
        matrix.route_distance(&self.stops)
    }
}

impl Phenotype for Tour {
    fn crossover(&mut self, other: &Self, rng: &mut RandomNumberGenerator) -> Result<()> {
        if self.depot != other.depot {
            return Err(SolverError::InvalidTour(format!(
                "Cannot recombine tours with different depots ({} vs {})",
                self.depot, other.depot
            )));
        }
        self.stops = order_crossover(&self.stops, &other.stops, self.depot, rng)?;
        Ok(())
    }

    fn mutate(&mut self, mutation_rate: f64, rng: &mut RandomNumberGenerator) -> bool {
        swap_mutation(&mut self.stops, mutation_rate, rng)
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for stop in &self.stops {
            if !first {
                write!(f, " -> ")?;
            }
            write!(f, "{}", stop)?;
            first = false;
        }
        Ok(())
    }
}

pub(crate) fn check_locations(num_locations: usize, depot: usize) -> Result<()> {
    if num_locations < 2 {
        return Err(SolverError::Configuration(format!(
            "At least 2 locations are required, got {}",
            num_locations
        )));
    }
    if depot >= num_locations {
        return Err(SolverError::Configuration(format!(
            "Depot {} is not one of the {} locations",
            depot, num_locations
        )));
    }
    Ok(())
}

/// Checks that `stops` is a depot-framed permutation of `num_locations`
/// locations.
pub fn validate_stops(stops: &[usize], num_locations: usize, depot: usize) -> Result<()> {
    if stops.len() != num_locations + 1 {
        return Err(SolverError::InvalidTour(format!(
            "Expected {} stops for {} locations, got {}",
            num_locations + 1,
            num_locations,
            stops.len()
        )));
    }
    if stops.len() < 3 {
        return Err(SolverError::InvalidTour(
            "A tour must visit at least one location besides the depot".to_string(),
        ));
    }
    if depot >= num_locations {
        return Err(SolverError::InvalidTour(format!(
            "Depot {} is out of range for {} locations",
            depot, num_locations
        )));
    }
    if stops[0] != depot || stops[num_locations] != depot {
        return Err(SolverError::InvalidTour(format!(
            "Tour must start and end at depot {}",
            depot
        )));
    }

    let mut seen = vec![false; num_locations];
    seen[depot] = true;
    for &stop in &stops[1..num_locations] {
        match seen.get_mut(stop) {
            Some(visited) if !*visited => *visited = true,
            Some(_) => {
                return Err(SolverError::InvalidTour(format!(
                    "Location {} is visited more than once",
                    stop
                )))
            }
            None => {
                return Err(SolverError::InvalidTour(format!(
                    "Location {} is out of range for {} locations",
                    stop, num_locations
                )))
            }
        }
    }

    Ok(())
}
