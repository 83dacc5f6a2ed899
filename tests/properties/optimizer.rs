//! Projected gradient ascent: projection, convergence and fixed parameters.

use ibeam_opt::error::IbeamError;
use ibeam_opt::optimize::{optimize, AscentConfig, GradientAscent, OptimizerState, StudyConfig};
use ibeam_opt::parameters::{Bounds, ParameterBounds, ParameterVector};
use ibeam_opt::section::compute_moi_params;

use crate::test_helpers::{depth_only_bounds, DEPTH_MAX, T_FLANGE, T_WEB, WIDTH};

#[test]
fn test_start_above_upper_bound_is_clamped() {
    let bounds = depth_only_bounds();
    let config = AscentConfig::default();
    let initial = ParameterVector::new(DEPTH_MAX + 50.0, WIDTH, T_WEB, T_FLANGE);

    let result = optimize(&initial, &bounds, &config).unwrap();

    assert_eq!(result.records[0].params.depth, DEPTH_MAX);
    assert_eq!(result.final_params.depth, DEPTH_MAX);
    for record in result.records.iter() {
        assert!(bounds.contains(&record.params), "record {:?} outside bounds", record);
    }
}

#[test]
fn test_converges_at_saturated_bound() {
    let bounds = depth_only_bounds();
    let config = AscentConfig::new(1e-3, 100, 1e-6);
    let initial = ParameterVector::new(150.0, WIDTH, T_WEB, T_FLANGE);

    let result = optimize(&initial, &bounds, &config).unwrap();

    assert_eq!(result.state, OptimizerState::Converged);
    assert!(result.iterations < config.max_iterations);
    assert_eq!(result.records.len(), result.iterations);

    let last = result.last_record().unwrap();
    assert_eq!(last.params.depth, DEPTH_MAX);
    assert_eq!(result.final_params.depth, DEPTH_MAX);

    // Ascent never decreases the objective while depth is free to grow
    for pair in result.records.windows(2) {
        assert!(pair[1].moi >= pair[0].moi);
    }
}

#[test]
fn test_large_iteration_cap_from_json() {
    // A cap far beyond what could be preallocated still runs to convergence
    let json = format!(
        r#"{{"learning_rate": 1e-3, "max_iterations": {}, "tolerance": 1e-6}}"#,
        usize::MAX
    );
    let config: AscentConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(config.max_iterations, usize::MAX);

    let initial = ParameterVector::new(150.0, WIDTH, T_WEB, T_FLANGE);
    let result = optimize(&initial, &depth_only_bounds(), &config).unwrap();

    assert_eq!(result.state, OptimizerState::Converged);
    assert_eq!(result.final_params.depth, DEPTH_MAX);
}

#[test]
fn test_pinned_parameter_converges_on_next_step() {
    // Already at the bound with the gradient pointing outward
    let bounds = depth_only_bounds();
    let initial = ParameterVector::new(DEPTH_MAX, WIDTH, T_WEB, T_FLANGE);

    let result = optimize(&initial, &bounds, &AscentConfig::default()).unwrap();

    assert_eq!(result.state, OptimizerState::Converged);
    assert_eq!(result.iterations, 1);
    assert_eq!(result.records[0].moi, compute_moi_params(&initial));
}

#[test]
fn test_fixed_parameters_never_move() {
    let bounds = ParameterBounds::new(
        Bounds::new(100.0, 400.0).unwrap(),
        Bounds::fixed(WIDTH).unwrap(),
        Bounds::new(2.0, 12.0).unwrap(),
        Bounds::fixed(T_FLANGE).unwrap(),
    );
    // Width starts off its fixed value and is pulled onto it
    let initial = ParameterVector::new(150.0, WIDTH + 15.0, 4.0, T_FLANGE);
    let config = AscentConfig::new(1e-4, 50, 1e-9);

    let result = optimize(&initial, &bounds, &config).unwrap();

    assert!(!result.records.is_empty());
    for record in result.records.iter() {
        assert_eq!(record.params.width, WIDTH);
        assert_eq!(record.params.t_flange, T_FLANGE);
        assert!(record.params.t_web >= 2.0 && record.params.t_web <= 12.0);
    }
    assert_eq!(result.final_params.width, WIDTH);
    assert_eq!(result.final_params.t_flange, T_FLANGE);
}

#[test]
fn test_exhausts_iteration_budget() {
    let bounds = ParameterBounds::new(
        Bounds::min_only(10.0),
        Bounds::fixed(WIDTH).unwrap(),
        Bounds::fixed(T_WEB).unwrap(),
        Bounds::fixed(T_FLANGE).unwrap(),
    );
    let config = AscentConfig::new(1e-7, 5, 0.0);
    let initial = ParameterVector::new(150.0, WIDTH, T_WEB, T_FLANGE);

    let result = optimize(&initial, &bounds, &config).unwrap();

    assert_eq!(result.state, OptimizerState::Exhausted);
    assert_eq!(result.iterations, 5);
    let indices: Vec<usize> = result.records.iter().map(|r| r.iteration).collect();
    assert_eq!(indices, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_invalid_start_fails_fast() {
    let optimizer = GradientAscent::new(AscentConfig::default(), ParameterBounds::unbounded()).unwrap();
    let err = optimizer
        .run(&ParameterVector::new(200.0, WIDTH, 0.0, T_FLANGE))
        .unwrap_err();
    assert!(matches!(err, IbeamError::InvalidGeometry(_)));
}

#[test]
fn test_study_config_from_json() {
    let study = StudyConfig::from_json_str(
        r#"{
            "initial": {"depth": 150.0, "width": 40.0, "t_web": 5.0, "t_flange": 5.0},
            "bounds": {
                "depth": {"min": 100.0, "max": 300.0},
                "width": {"min": 40.0, "max": 40.0},
                "t_web": {"min": 5.0, "max": 5.0},
                "t_flange": {"min": 5.0, "max": 5.0}
            },
            "ascent": {"learning_rate": 0.001, "max_iterations": 100, "tolerance": 1e-6}
        }"#,
    )
    .unwrap();

    assert_eq!(study.bounds, depth_only_bounds());
    let result = study.run().unwrap();
    assert!(result.is_converged());
    assert_eq!(result.final_params.depth, DEPTH_MAX);
}
