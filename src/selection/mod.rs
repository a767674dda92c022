pub mod elitist;
pub mod selection_strategy;
pub mod tournament;

pub use elitist::ElitistSelection;
pub use selection_strategy::SelectionStrategy;
pub use tournament::TournamentSelection;
