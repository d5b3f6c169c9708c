use approx::assert_relative_eq;
use projectile_motion::{
    CalculatorSession, Field, LaunchParameters, TrajectoryReport, TrajectorySolver, NUM_POINTS,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

// Random inputs spanning the full clamped domain of every field
fn random_parameters(rng: &mut StdRng) -> LaunchParameters {
    LaunchParameters::new(
        rng.gen_range(0.0..200.0),
        rng.gen_range(0.0..=90.0),
        rng.gen_range(0.0..500.0),
        rng.gen_range(0.1..30.0),
    )
}

#[test]
fn test_standard_45_degree_launch() {
    println!("SCENARIO: 30 m/s at 45 degrees from the ground");

    let params = LaunchParameters::new(30.0, 45.0, 0.0, 9.81);
    let result = TrajectorySolver::solve(&params);

    assert_relative_eq!(result.vx, 21.213, epsilon = 1e-3);
    assert_relative_eq!(result.vy, 21.213, epsilon = 1e-3);
    assert_relative_eq!(result.time_of_flight, 4.325, epsilon = 1e-3);
    assert_relative_eq!(result.max_height, 22.936, epsilon = 1e-3);
    assert_relative_eq!(result.horizontal_range, 91.743, epsilon = 1e-3);
    assert_eq!(result.points.len(), NUM_POINTS + 1);

    println!(
        "tof={:.3}s max_height={:.3}m range={:.3}m",
        result.time_of_flight, result.max_height, result.horizontal_range
    );
}

#[test]
fn test_projectile_at_rest() {
    let params = LaunchParameters::new(0.0, 45.0, 0.0, 9.81);
    let result = TrajectorySolver::solve(&params);

    assert_eq!(result.vx, 0.0);
    assert_eq!(result.vy, 0.0);
    assert_eq!(result.time_of_flight, 0.0);
    assert_eq!(result.max_height, 0.0);
    assert_eq!(result.horizontal_range, 0.0);
    assert!(result.points.is_empty());
}

#[test]
fn test_dropped_from_height() {
    let params = LaunchParameters::new(0.0, 30.0, 20.0, 9.81);
    let result = TrajectorySolver::solve(&params);

    assert_relative_eq!(result.time_of_flight, (40.0_f64 / 9.81).sqrt(), epsilon = 1e-9);
    assert_eq!(result.horizontal_range, 0.0);
    assert_eq!(result.max_height, 20.0);
    assert_eq!(result.points.len(), NUM_POINTS + 1);
    assert!(result.points.iter().all(|p| p.x == 0.0));
}

#[test]
fn test_vertical_launch() {
    let params = LaunchParameters::new(20.0, 90.0, 0.0, 9.81);
    let result = TrajectorySolver::solve(&params);

    assert_relative_eq!(result.vx, 0.0, epsilon = 1e-9);
    assert_relative_eq!(result.vy, 20.0, epsilon = 1e-9);
    assert_relative_eq!(result.horizontal_range, 0.0, epsilon = 1e-9);
    assert!(!result.points.is_empty());
    for point in &result.points {
        assert_relative_eq!(point.x, 0.0, epsilon = 1e-9);
    }
}

#[test]
fn test_horizontal_launch_from_height() {
    let params = LaunchParameters::new(10.0, 0.0, 5.0, 9.81);
    let result = TrajectorySolver::solve(&params);

    assert_eq!(result.vy, 0.0);
    assert_relative_eq!(result.time_of_flight, (2.0_f64 * 5.0 / 9.81).sqrt(), epsilon = 1e-9);
    assert_relative_eq!(result.time_of_flight, 1.010, epsilon = 1e-3);
    assert_eq!(result.max_height, 5.0);
    assert_relative_eq!(result.horizontal_range, 10.0 * result.time_of_flight, epsilon = 1e-9);
}

#[test]
fn test_results_are_non_negative_for_random_inputs() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..500 {
        let params = random_parameters(&mut rng);
        let result = TrajectorySolver::solve(&params);

        assert!(result.time_of_flight >= 0.0, "{:?}", params);
        assert!(result.horizontal_range >= 0.0, "{:?}", params);
        assert!(result.points.iter().all(|p| p.y >= 0.0), "{:?}", params);
        if result.vy >= 0.0 {
            assert!(result.max_height >= params.initial_height(), "{:?}", params);
        }
        if result.time_of_flight > 0.0 {
            assert_eq!(result.points.len(), NUM_POINTS + 1);
        } else {
            assert!(result.points.is_empty());
        }
    }
}

#[test]
fn test_solve_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..100 {
        let params = random_parameters(&mut rng);
        let first = TrajectorySolver::solve(&params);
        let second = TrajectorySolver::solve(&params);

        assert_eq!(first.time_of_flight.to_bits(), second.time_of_flight.to_bits());
        assert_eq!(first.max_height.to_bits(), second.max_height.to_bits());
        assert_eq!(first.horizontal_range.to_bits(), second.horizontal_range.to_bits());
        assert_eq!(first, second);
    }
}

#[test]
fn test_complementary_angles_share_range_on_flat_ground() {
    let low = TrajectorySolver::solve(&LaunchParameters::new(25.0, 30.0, 0.0, 9.81));
    let high = TrajectorySolver::solve(&LaunchParameters::new(25.0, 60.0, 0.0, 9.81));

    assert_relative_eq!(low.horizontal_range, high.horizontal_range, epsilon = 1e-9);
    assert!(high.max_height > low.max_height);
}

#[test]
fn test_session_drives_report() {
    println!("INTEGRATION TEST: session recompute and report");

    let mut session = CalculatorSession::default();
    session.set(Field::InitialSpeed, 0.0);
    let report = TrajectoryReport::new(session.params(), session.result());
    assert!(report.notice.is_some());

    session.set(Field::InitialHeight, 10.0);
    let report = TrajectoryReport::new(session.params(), session.result());
    assert!(report.notice.is_none());
    let axes = report.axes.expect("falling projectile should have axes");
    assert_relative_eq!(axes.y_domain.1, 11.0, epsilon = 1e-9);
    assert_eq!(axes.x_domain.1, 1.0);
}
