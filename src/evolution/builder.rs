use crate::{
    error::{Result, SolverError},
    strategy::BreedStrategy,
    tour::Tour,
};

use super::{Challenge, EvolutionLauncher};

pub struct EvolutionLauncherBuilder<B, F>
where
    B: BreedStrategy<Tour>,
    F: Challenge<Tour>,
{
    breed_strategy: Option<B>,
    challenge: Option<F>,
}

impl<B, F> EvolutionLauncherBuilder<B, F>
where
    B: BreedStrategy<Tour>,
    F: Challenge<Tour> + Sync,
{
    pub fn new() -> Self {
        Self {
            breed_strategy: None,
            challenge: None,
        }
    }

    pub fn with_breed_strategy(mut self, breed_strategy: B) -> Self {
        self.breed_strategy = Some(breed_strategy);
        self
    }

    pub fn with_challenge(mut self, challenge: F) -> Self {
        self.challenge = Some(challenge);
        self
    }

    pub fn build(self) -> Result<EvolutionLauncher<B, F>> {
        let breed_strategy = self.breed_strategy.ok_or_else(|| {
            SolverError::Configuration("Breeding strategy not specified".to_string())
        })?;

        let challenge = self
            .challenge
            .ok_or_else(|| SolverError::Configuration("Challenge not specified".to_string()))?;

        Ok(EvolutionLauncher::new(breed_strategy, challenge))
    }
}

impl<B, F> Default for EvolutionLauncherBuilder<B, F>
where
    B: BreedStrategy<Tour>,
    F: Challenge<Tour> + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::evolution::RouteChallenge;
    use crate::selection::TournamentSelection;
    use crate::strategy::GenerationalStrategy;

    type Builder = EvolutionLauncherBuilder<GenerationalStrategy<TournamentSelection>, RouteChallenge>;

    #[test]
    fn test_build_requires_both_parts() {
        let matrix = DistanceMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();

        assert!(Builder::new().build().is_err());
        assert!(Builder::new()
            .with_challenge(RouteChallenge::new(matrix.clone()))
            .build()
            .is_err());
        assert!(Builder::new()
            .with_breed_strategy(GenerationalStrategy::default())
            .build()
            .is_err());

        let launcher = Builder::default()
            .with_breed_strategy(GenerationalStrategy::default())
            .with_challenge(RouteChallenge::new(matrix))
            .build()
            .unwrap();
        assert_eq!(launcher.challenge().num_locations(), 2);
    }
}
