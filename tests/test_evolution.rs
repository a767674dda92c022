use tourga::{
    distance::DistanceMatrix,
    error::SolverError,
    evolution::{
        solve, Challenge, EvolutionLauncher, EvolutionLauncherBuilder, EvolutionOptions,
        LogLevel, RouteChallenge,
    },
    rng::RandomNumberGenerator,
    selection::TournamentSelection,
    strategy::GenerationalStrategy,
    tour::{validate_stops, Tour},
};

fn four_locations() -> DistanceMatrix {
    DistanceMatrix::from_rows(vec![
        vec![0.0, 1.0, 2.0, 3.0],
        vec![1.0, 0.0, 4.0, 5.0],
        vec![2.0, 4.0, 0.0, 6.0],
        vec![3.0, 5.0, 6.0, 0.0],
    ])
    .unwrap()
}

/// `n` points evenly spaced on a circle of radius 10.
fn circle(n: usize) -> Vec<(f64, f64)> {
    (0..n)
        .map(|i| {
            let angle = 2.0 * std::f64::consts::PI * i as f64 / n as f64;
            (angle.cos() * 10.0, angle.sin() * 10.0)
        })
        .collect()
}

#[test]
fn test_four_location_scenario() {
    let options = EvolutionOptions::builder()
        .population_size(20)
        .num_generations(50)
        .mutation_rate(0.1)
        .elitism_count(2)
        .build();
    let mut rng = RandomNumberGenerator::from_seed(7);

    let result = solve(four_locations(), &options, &mut rng).unwrap();

    assert_eq!(result.tour.stops().len(), 5);
    assert_eq!(result.tour.stops()[0], 0);
    assert_eq!(result.tour.stops()[4], 0);
    assert!(validate_stops(result.tour.stops(), 4, 0).is_ok());
    assert!(result.distance <= 14.0 + 1e-9);
    assert_eq!(result.best_distance_history.len(), 51);
}

#[test]
fn test_elitism_larger_than_population_fails_before_running() {
    let options = EvolutionOptions::builder()
        .population_size(10)
        .elitism_count(11)
        .tournament_size(3)
        .build();
    let mut rng = RandomNumberGenerator::from_seed(7);

    let result = solve(four_locations(), &options, &mut rng);
    assert!(matches!(result, Err(SolverError::Configuration(_))));
}

#[test]
fn test_depot_outside_matrix_is_rejected() {
    let options = EvolutionOptions::builder()
        .population_size(10)
        .tournament_size(3)
        .depot(4)
        .build();
    let mut rng = RandomNumberGenerator::from_seed(7);

    let result = solve(four_locations(), &options, &mut rng);
    assert!(matches!(result, Err(SolverError::Configuration(_))));
}

#[test]
fn test_single_location_is_rejected() {
    let matrix = DistanceMatrix::from_rows(vec![vec![0.0]]).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(7);
    let result = solve(matrix, &EvolutionOptions::default(), &mut rng);
    assert!(matches!(result, Err(SolverError::Configuration(_))));
}

#[test]
fn test_two_locations() {
    let matrix = DistanceMatrix::from_rows(vec![vec![0.0, 2.5], vec![3.5, 0.0]]).unwrap();
    let options = EvolutionOptions::builder()
        .population_size(4)
        .num_generations(3)
        .tournament_size(2)
        .build();
    let mut rng = RandomNumberGenerator::from_seed(7);

    let result = solve(matrix, &options, &mut rng).unwrap();
    assert_eq!(result.tour.stops(), &[0, 1, 0]);
    assert_eq!(result.distance, 6.0);
}

#[test]
fn test_zero_distance_tour_aborts() {
    let matrix = DistanceMatrix::from_rows(vec![vec![0.0; 3]; 3]).unwrap();
    let options = EvolutionOptions::builder()
        .population_size(4)
        .num_generations(3)
        .tournament_size(2)
        .build();
    let mut rng = RandomNumberGenerator::from_seed(7);

    let result = solve(matrix, &options, &mut rng);
    assert!(matches!(result, Err(SolverError::FitnessCalculation(_))));
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let matrix = DistanceMatrix::from_coordinates(&circle(10)).unwrap();
    let options = EvolutionOptions::builder()
        .population_size(30)
        .num_generations(40)
        .log_level(LogLevel::None)
        .build();

    let first = solve(matrix.clone(), &options, &mut RandomNumberGenerator::from_seed(11)).unwrap();
    let second = solve(matrix, &options, &mut RandomNumberGenerator::from_seed(11)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_parallel_evaluation_matches_sequential() {
    let matrix = DistanceMatrix::from_coordinates(&circle(10)).unwrap();
    let sequential = EvolutionOptions::builder()
        .population_size(30)
        .num_generations(20)
        .parallel_threshold(usize::MAX)
        .build();
    let mut parallel = sequential.clone();
    parallel.set_parallel_threshold(1);

    let a = solve(matrix.clone(), &sequential, &mut RandomNumberGenerator::from_seed(3)).unwrap();
    let b = solve(matrix, &parallel, &mut RandomNumberGenerator::from_seed(3)).unwrap();

    assert_eq!(a, b);
}

#[test]
fn test_best_distance_never_gets_worse() {
    let matrix = DistanceMatrix::from_coordinates(&circle(10)).unwrap();
    let options = EvolutionOptions::builder()
        .population_size(40)
        .num_generations(100)
        .mutation_rate(0.2)
        .elitism_count(1)
        .build();
    let mut rng = RandomNumberGenerator::from_seed(5);

    let result = solve(matrix, &options, &mut rng).unwrap();

    for pair in result.best_distance_history.windows(2) {
        assert!(pair[1] <= pair[0] + 1e-9);
    }
    assert!(result.distance <= result.best_distance_history[0]);
}

#[test]
fn test_depot_other_than_zero() {
    let matrix = DistanceMatrix::from_coordinates(&circle(8)).unwrap();
    let options = EvolutionOptions::builder()
        .population_size(20)
        .num_generations(30)
        .depot(3)
        .build();
    let mut rng = RandomNumberGenerator::from_seed(5);

    let result = solve(matrix, &options, &mut rng).unwrap();
    assert_eq!(result.tour.depot(), 3);
    assert!(validate_stops(result.tour.stops(), 8, 3).is_ok());
}

/// Prefers tours whose stops appear in ascending order.
#[derive(Debug, Clone)]
struct AscendingChallenge;

impl Challenge<Tour> for AscendingChallenge {
    fn cost(&self, tour: &Tour) -> f64 {
        let interior = tour.interior();
        let mut inversions = 0;
        for i in 0..interior.len() {
            for j in i + 1..interior.len() {
                if interior[i] > interior[j] {
                    inversions += 1;
                }
            }
        }
        1.0 + inversions as f64
    }
}

#[test]
fn test_launcher_accepts_any_challenge() {
    let launcher = EvolutionLauncherBuilder::new()
        .with_breed_strategy(GenerationalStrategy::new(TournamentSelection::new(3).unwrap()))
        .with_challenge(AscendingChallenge)
        .build()
        .unwrap();
    let options = EvolutionOptions::builder()
        .population_size(30)
        .num_generations(60)
        .mutation_rate(0.3)
        .tournament_size(3)
        .build();
    let mut rng = RandomNumberGenerator::from_seed(13);

    let result = launcher.evolve(&options, 6, &mut rng).unwrap();

    assert!(validate_stops(result.tour.stops(), 6, 0).is_ok());
    assert_eq!(result.distance, AscendingChallenge.cost(&result.tour));
    assert!(result.distance <= result.best_distance_history[0]);
}

#[test]
fn test_launcher_from_parts_matches_solve() {
    let options = EvolutionOptions::builder()
        .population_size(20)
        .num_generations(10)
        .build();
    let launcher = EvolutionLauncher::new(
        GenerationalStrategy::from_options(&options).unwrap(),
        RouteChallenge::new(four_locations()),
    );

    let a = launcher
        .evolve(&options, 4, &mut RandomNumberGenerator::from_seed(1))
        .unwrap();
    let b = solve(four_locations(), &options, &mut RandomNumberGenerator::from_seed(1)).unwrap();
    assert_eq!(a, b);
}
