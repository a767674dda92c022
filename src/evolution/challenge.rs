use crate::distance::DistanceMatrix;
use crate::phenotype::Phenotype;
use crate::tour::Tour;

/// Scores individuals. `cost` is the raw objective (lower is better) and
/// `score` the fitness the search maximises.
pub trait Challenge<Pheno: Phenotype> {
    fn cost(&self, phenotype: &Pheno) -> f64;

    /// Defaults to the inverse of the cost. A zero cost yields an infinite
    /// score, which the evaluator rejects.
    fn score(&self, phenotype: &Pheno) -> f64 {
        1.0 / self.cost(phenotype)
    }
}

/// Scores tours by the inverse of their total distance over a matrix.
#[derive(Debug, Clone)]
pub struct RouteChallenge {
    matrix: DistanceMatrix,
}

impl RouteChallenge {
    pub fn new(matrix: DistanceMatrix) -> Self {
        Self { matrix }
    }

    pub fn num_locations(&self) -> usize {
        self.matrix.size()
    }
}

impl Challenge<Tour> for RouteChallenge {
    fn cost(&self, tour: &Tour) -> f64 {
        tour.distance(&self.matrix)
    }
}
