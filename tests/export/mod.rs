//! Export of sweep and optimizer tables to files.

use std::fs;

use ibeam_opt::optimize::{optimize, AscentConfig};
use ibeam_opt::parameters::ParameterVector;
use ibeam_opt::report::{write_csv_file, write_json, Table};
use ibeam_opt::sweep::{sweep_depths, SweepRow};
use ibeam_opt::IterationRecord;
use tempfile::tempdir;

use crate::test_helpers::{depth_only_bounds, T_FLANGE, T_WEB, WIDTH};

#[test]
fn test_sweep_csv_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("output.csv");

    let depths = [100.0, 150.0, 200.0];
    let rows = sweep_depths(&depths, WIDTH, T_WEB, T_FLANGE);
    write_csv_file(&rows, &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 1 + depths.len());
    assert_eq!(lines[0], SweepRow::columns().join(","));

    for (line, depth) in lines[1..].iter().zip(depths.iter()) {
        let fields: Vec<f64> = line.split(',').map(|f| f.parse().unwrap()).collect();
        assert_eq!(fields.len(), 6);
        assert_eq!(fields[0], *depth);
    }
}

#[test]
fn test_iteration_records_csv_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("optimization.csv");

    let result = optimize(
        &ParameterVector::new(150.0, WIDTH, T_WEB, T_FLANGE),
        &depth_only_bounds(),
        &AscentConfig::new(1e-3, 100, 1e-6),
    )
    .unwrap();
    write_csv_file(&result.records, &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("iteration,depth,width,t_web,t_flange,i_xx"));

    let iterations: Vec<usize> = lines
        .map(|line| line.split(',').next().unwrap().parse().unwrap())
        .collect();
    assert_eq!(iterations, (0..result.records.len()).collect::<Vec<_>>());
}

#[test]
fn test_records_json() {
    let records = vec![IterationRecord {
        iteration: 0,
        params: ParameterVector::new(200.0, WIDTH, T_WEB, T_FLANGE),
        moi: 6_661_250.0,
    }];

    let mut out = Vec::new();
    write_json(&records, &mut out).unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(parsed[0]["depth"], serde_json::Value::from(200.0));
    assert_eq!(parsed[0]["i_xx"], serde_json::Value::from(6_661_250.0));
}

#[test]
fn test_write_to_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("output.csv");
    let rows = sweep_depths(&[100.0], WIDTH, T_WEB, T_FLANGE);
    assert!(matches!(
        write_csv_file(&rows, &path),
        Err(ibeam_opt::IbeamError::IoError(_))
    ));
}
