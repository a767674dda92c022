use std::path::PathBuf;

use tourga::{
    distance::DistanceMatrix,
    error::SolverError,
    evolution::{solve, EvolutionOptions},
    plot::{load_coordinates, route_points, SvgRenderer},
    rng::RandomNumberGenerator,
};

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

#[test]
fn test_load_matrix_from_csv() {
    let matrix = DistanceMatrix::from_csv_path(data("four_locations.csv")).unwrap();
    assert_eq!(matrix.size(), 4);
    assert_eq!(matrix.get(2, 3), 6.0);
    assert!(matrix.is_symmetric(1e-12));
    assert_eq!(matrix.route_distance(&[0, 1, 2, 3, 0]), 14.0);
}

#[test]
fn test_missing_matrix_file() {
    let result = DistanceMatrix::from_csv_path(data("does_not_exist.csv"));
    assert!(matches!(result, Err(SolverError::Other(_))));
}

#[test]
fn test_malformed_matrices() {
    let ragged = "0,1,2\n1,0\n2,1,0\n";
    assert!(matches!(
        DistanceMatrix::from_reader(ragged.as_bytes()),
        Err(SolverError::InvalidMatrix(_))
    ));

    let not_square = "0,1\n1,0\n2,2\n";
    assert!(matches!(
        DistanceMatrix::from_reader(not_square.as_bytes()),
        Err(SolverError::InvalidMatrix(_))
    ));

    let negative = "0,-1\n1,0\n";
    assert!(matches!(
        DistanceMatrix::from_reader(negative.as_bytes()),
        Err(SolverError::InvalidMatrix(_))
    ));

    let text = "0,a\n1,0\n";
    assert!(matches!(
        DistanceMatrix::from_reader(text.as_bytes()),
        Err(SolverError::InvalidMatrix(_))
    ));

    assert!(matches!(
        DistanceMatrix::from_reader("".as_bytes()),
        Err(SolverError::InvalidMatrix(_))
    ));
}

#[test]
fn test_solve_and_render_from_files() {
    let matrix = DistanceMatrix::from_csv_path(data("four_locations.csv")).unwrap();
    let options = EvolutionOptions::builder()
        .population_size(20)
        .num_generations(50)
        .build();
    let mut rng = RandomNumberGenerator::from_seed(99);
    let result = solve(matrix, &options, &mut rng).unwrap();

    let coords = load_coordinates(data("four_locations_coords.csv")).unwrap();
    let points = route_points(&result.tour, &coords).unwrap();
    assert_eq!(points.len(), 5);
    assert_eq!(points.first(), points.last());

    let renderer = SvgRenderer::new();
    let svg = renderer.render(&points, &format!("Distance: {:.2}", result.distance));
    assert!(svg.contains("Distance: 14.00"));

    let out = std::env::temp_dir().join(format!("tourga_render_{}.svg", std::process::id()));
    renderer.save(&svg, &out).unwrap();
    let written = std::fs::read_to_string(&out).unwrap();
    assert_eq!(written, svg);
    std::fs::remove_file(out).unwrap();
}
