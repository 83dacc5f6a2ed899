//! Depth sweep ordering, alignment and monotonicity.

use ibeam_opt::parameters::ParameterVector;
use ibeam_opt::section::moment_of_inertia_gradient;
use ibeam_opt::sensitivity::compute_moi_sensitivities;
use ibeam_opt::sweep::{sweep_depths, DepthRange, SweepConfig};

use crate::test_helpers::{rel_close, T_FLANGE, T_WEB, WIDTH};

#[test]
fn test_moi_increases_with_depth() {
    let depths = DepthRange::new(100.0, 201.0, 10.0).unwrap().values().unwrap();
    assert_eq!(depths.len(), 11);

    let rows = sweep_depths(&depths, WIDTH, T_WEB, T_FLANGE);

    for row in rows.iter() {
        assert!(row.sens_depth > 0.0, "sens_depth at {} is {}", row.depth, row.sens_depth);
    }
    for pair in rows.windows(2) {
        assert!(pair[1].i_xx > pair[0].i_xx);
    }
}

#[test]
fn test_rows_keep_input_order() {
    let depths = [200.0, 100.0, 150.0, 125.0];
    let rows = sweep_depths(&depths, WIDTH, T_WEB, T_FLANGE);

    assert_eq!(rows.len(), depths.len());
    for (row, depth) in rows.iter().zip(depths.iter()) {
        assert_eq!(row.depth, *depth);
    }
}

#[test]
fn test_sensitivity_columns_align_with_parameters() {
    let rows = sweep_depths(&[160.0], WIDTH, T_WEB, T_FLANGE);
    let row = rows[0];

    let direct = compute_moi_sensitivities(160.0, WIDTH, T_WEB, T_FLANGE);
    assert_eq!(row.i_xx, direct.moi);
    assert_eq!(
        [row.sens_depth, row.sens_width, row.sens_t_web, row.sens_t_flange],
        direct.gradient
    );

    // The four partials are distinct here, so a swapped column would show
    let analytic = moment_of_inertia_gradient(&ParameterVector::new(160.0, WIDTH, T_WEB, T_FLANGE));
    assert!(rel_close(row.sens_depth, analytic[0], 1e-9));
    assert!(rel_close(row.sens_width, analytic[1], 1e-9));
    assert!(rel_close(row.sens_t_web, analytic[2], 1e-9));
    assert!(rel_close(row.sens_t_flange, analytic[3], 1e-9));
}

#[test]
fn test_default_sweep_config() {
    let rows = SweepConfig::default().run().unwrap();
    let depths: Vec<f64> = rows.iter().map(|r| r.depth).collect();
    assert_eq!(depths, DepthRange::default().values().unwrap());
    assert_eq!(rows.first().map(|r| r.depth), Some(100.0));
    assert_eq!(rows.last().map(|r| r.depth), Some(200.0));
}

#[test]
fn test_nan_depth_flows_through() {
    let rows = sweep_depths(&[f64::NAN, 120.0], WIDTH, T_WEB, T_FLANGE);
    assert!(rows[0].i_xx.is_nan());
    assert!(rows[1].i_xx.is_finite());
}
