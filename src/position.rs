//! Position file reading
//!
//! This module reads the CAD-exported pick-and-place position file into
//! memory, validating the header row and parsing the numeric fields.

use crate::error::{PosConvertError, Result, ResultExt};
use std::path::Path;
use tracing::{debug, info};

/// Column names required in the input header row
pub const REQUIRED_FIELDS: [&str; 6] = ["Ref", "Val", "Package", "PosX", "PosY", "Rot"];

/// One component row from the source position file
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentRecord {
    /// Unique per-board reference label (e.g., "R1")
    pub designator: String,

    /// Source value/comment field
    pub value: String,

    /// Source footprint/package name
    pub footprint: String,

    /// X position in millimeters
    pub x: f64,

    /// Y position in millimeters
    pub y: f64,

    /// Rotation in degrees
    pub rotation: f64,
}

/// Read all component records from a position file, preserving input order.
///
/// The whole file is read into memory before any output is produced.
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<ComponentRecord>> {
    let path = path.as_ref();
    info!("Reading position file: {}", path.display());

    let mut reader = csv::Reader::from_path(path).map_err(|e| {
        if path.exists() {
            anyhow::Error::from(e)
                .context(format!("Failed to read position file: {}", path.display()))
        } else {
            PosConvertError::FileNotFound {
                path: path.display().to_string(),
            }
            .into()
        }
    })?;

    let headers = reader
        .headers()
        .with_path_context("read header row of", path)?
        .clone();

    let mut indices = [0usize; REQUIRED_FIELDS.len()];
    for (i, field) in REQUIRED_FIELDS.iter().enumerate() {
        indices[i] = headers
            .iter()
            .position(|h| h.trim_matches('"') == *field)
            .ok_or_else(|| PosConvertError::MissingField {
                field: field.to_string(),
            })?;
    }
    let [ref_idx, val_idx, package_idx, x_idx, y_idx, rot_idx] = indices;

    let mut records = Vec::new();
    for (row_num, result) in reader.records().enumerate() {
        // Header occupies line 1; data starts at line 2
        let line = row_num + 2;
        let row = result.with_path_context("parse row of", path)?;

        let field = |idx: usize| row.get(idx).unwrap_or("");
        let designator = strip_quotes(field(ref_idx)).to_string();

        let record = ComponentRecord {
            value: strip_quotes(field(val_idx)).to_string(),
            footprint: strip_quotes(field(package_idx)).to_string(),
            x: parse_number("PosX", field(x_idx)).with_record_context(&designator, line)?,
            y: parse_number("PosY", field(y_idx)).with_record_context(&designator, line)?,
            rotation: parse_number("Rot", field(rot_idx)).with_record_context(&designator, line)?,
            designator,
        };

        debug!("Read record: {:?}", record);
        records.push(record);
    }

    info!("Read {} component records", records.len());
    Ok(records)
}

/// Strip surrounding quote characters left over from the CAD export
fn strip_quotes(field: &str) -> &str {
    field.trim_matches('"')
}

/// Parse a coordinate or rotation field as a floating-point number
fn parse_number(field: &str, value: &str) -> std::result::Result<f64, PosConvertError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| PosConvertError::InvalidNumber {
            field: field.to_string(),
            value: value.to_string(),
        })
}
