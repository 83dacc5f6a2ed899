//! Tabular export of sweep rows and optimizer iterations.
//!
//! Rows are handed over fully computed and in order; this module only
//! formats them.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::Result;
use crate::optimize::IterationRecord;
use crate::sweep::SweepRow;

/// A row type with a fixed set of named numeric columns.
pub trait Table {
    /// Column names, in output order.
    fn columns() -> &'static [&'static str];

    /// Values aligned with [`Table::columns`].
    fn values(&self) -> Vec<f64>;
}

impl Table for SweepRow {
    fn columns() -> &'static [&'static str] {
        &[
            "depth",
            "i_xx",
            "sens_depth",
            "sens_width",
            "sens_t_web",
            "sens_t_flange",
        ]
    }

    fn values(&self) -> Vec<f64> {
        vec![
            self.depth,
            self.i_xx,
            self.sens_depth,
            self.sens_width,
            self.sens_t_web,
            self.sens_t_flange,
        ]
    }
}

impl Table for IterationRecord {
    fn columns() -> &'static [&'static str] {
        &["iteration", "depth", "width", "t_web", "t_flange", "i_xx"]
    }

    fn values(&self) -> Vec<f64> {
        vec![
            self.iteration as f64,
            self.params.depth,
            self.params.width,
            self.params.t_web,
            self.params.t_flange,
            self.moi,
        ]
    }
}

/// Write a header line and one line per row, fields separated by `delimiter`.
///
/// NaN is written as an empty field, the missing-value convention of
/// spreadsheet and dataframe CSV readers. Infinities are written as `inf`
/// and `-inf`.
pub fn write_delimited<T: Table, W: Write>(rows: &[T], mut writer: W, delimiter: char) -> Result<()> {
    let sep = delimiter.to_string();
    writeln!(writer, "{}", T::columns().join(sep.as_str()))?;

    for row in rows {
        let line = row
            .values()
            .iter()
            .map(|v| if v.is_nan() { String::new() } else { v.to_string() })
            .collect::<Vec<_>>()
            .join(sep.as_str());
        writeln!(writer, "{}", line)?;
    }

    writer.flush()?;
    Ok(())
}

/// Write `rows` as comma-separated values to `path`, replacing any existing file.
pub fn write_csv_file<T: Table, P: AsRef<Path>>(rows: &[T], path: P) -> Result<()> {
    let file = File::create(path)?;
    write_delimited(rows, BufWriter::new(file), ',')
}

/// Write `rows` as a JSON array of objects keyed by column name.
///
/// Non-finite values become `null`.
pub fn write_json<T: Table, W: Write>(rows: &[T], mut writer: W) -> Result<()> {
    let objects: Vec<Value> = rows
        .iter()
        .map(|row| {
            let map: Map<String, Value> = T::columns()
                .iter()
                .zip(row.values())
                .map(|(name, value)| (name.to_string(), Value::from(value)))
                .collect();
            Value::Object(map)
        })
        .collect();

    serde_json::to_writer_pretty(&mut writer, &objects)?;
    writer.flush()?;
    Ok(())
}
