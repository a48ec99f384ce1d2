//! NEODEN YY1 output format
//!
//! This module owns the machine-side shape of the conversion: the fixed
//! header block, the 13-field data row, the two-decimal number rendering,
//! and CSV serialization.

use crate::error::{Result, ResultExt};
use crate::mapping::{map_footprint, resolve_value};
use crate::position::ComponentRecord;
use std::path::Path;
use tracing::{debug, info};

/// Every row in the output file carries exactly this many fields
pub const FIELD_COUNT: usize = 13;

// Machine-control defaults applied uniformly to every component.
// Operators tune these on the machine, not in this tool.
const DEFAULT_HEAD: &str = "0";
const DEFAULT_FEEDER: &str = "1";
const DEFAULT_MOUNT_SPEED: &str = "100";
const DEFAULT_PICK_HEIGHT: &str = "0.0";
const DEFAULT_PLACE_HEIGHT: &str = "0.0";
const DEFAULT_MODE: &str = "1";
const DEFAULT_SKIP: &str = "0";

/// Render a coordinate with exactly two fractional digits.
///
/// Ties are resolved by the exact binary value of the input, so a source
/// field of "1.005" (stored as 1.00499...) renders as "1.00".
pub fn format_coordinate(raw: f64) -> String {
    format!("{:.2}", raw)
}

/// Render a rotation with exactly two fractional digits.
///
/// No sign inversion or axis adjustment is performed.
pub fn format_rotation(raw: f64) -> String {
    format!("{:.2}", raw)
}

/// One 13-field data row in the NEODEN output
#[derive(Debug, Clone, PartialEq)]
pub struct OutputRow {
    pub designator: String,
    pub comment: String,
    pub footprint: String,
    pub x: String,
    pub y: String,
    pub rotation: String,
}

impl OutputRow {
    /// Derive an output row from one source record and the static maps
    pub fn from_record(record: &ComponentRecord) -> Self {
        let row = Self {
            designator: record.designator.clone(),
            comment: resolve_value(&record.designator, &record.value).to_string(),
            footprint: map_footprint(&record.footprint).to_string(),
            x: format_coordinate(record.x),
            y: format_coordinate(record.y),
            rotation: format_rotation(record.rotation),
        };

        debug!("Converted {} -> {:?}", record.designator, row);
        row
    }

    /// The full 13-field record, machine defaults included
    pub fn to_fields(&self) -> [&str; FIELD_COUNT] {
        [
            &self.designator,
            &self.comment,
            &self.footprint,
            &self.x,
            &self.y,
            &self.rotation,
            DEFAULT_HEAD,
            DEFAULT_FEEDER,
            DEFAULT_MOUNT_SPEED,
            DEFAULT_PICK_HEIGHT,
            DEFAULT_PLACE_HEIGHT,
            DEFAULT_MODE,
            DEFAULT_SKIP,
        ]
    }
}

/// Pad a header row out to the given field count with empty strings
fn padded_to(fields: &[&'static str], len: usize) -> Vec<&'static str> {
    let mut row = fields.to_vec();
    if row.len() < len {
        row.resize(len, "");
    }
    row
}

/// Pad a header row out to the standard field count
fn padded(fields: &[&'static str]) -> Vec<&'static str> {
    padded_to(fields, FIELD_COUNT)
}

/// The fixed 12-row preamble written before any component data.
///
/// Constant across all conversions; never derived from input. The
/// PanelizedPCB and Fiducial rows carry 14 and 15 fields, matching the
/// layout the YY1 controller was observed to accept.
pub fn header_block() -> Vec<Vec<&'static str>> {
    vec![
        padded(&["NEODEN", "YY1", "P&P FILE"]),
        padded(&[]),
        padded_to(
            &[
                "PanelizedPCB",
                "UnitLength",
                "0",
                "UnitWidth",
                "0",
                "Rows",
                "1",
                "Columns",
                "1",
            ],
            14,
        ),
        padded(&[]),
        padded_to(
            &[
                "Fiducial",
                "1-X",
                "5.20",
                "1-Y",
                "55.15",
                "OverallOffsetX",
                "0.04",
                "OverallOffsetY",
                "0.14",
            ],
            15,
        ),
        padded(&[]),
        padded(&[
            "NozzleChange",
            "OFF",
            "BeforeComponent",
            "1",
            "Head1",
            "Drop",
            "Station2",
            "PickUp",
            "Station1",
        ]),
        padded(&[
            "NozzleChange",
            "OFF",
            "BeforeComponent",
            "2",
            "Head2",
            "Drop",
            "Station3",
            "PickUp",
            "Station2",
        ]),
        padded(&[
            "NozzleChange",
            "OFF",
            "BeforeComponent",
            "1",
            "Head1",
            "Drop",
            "Station1",
            "PickUp",
            "Station1",
        ]),
        padded(&[
            "NozzleChange",
            "OFF",
            "BeforeComponent",
            "1",
            "Head1",
            "Drop",
            "Station1",
            "PickUp",
            "Station1",
        ]),
        padded(&[]),
        // Trailing spaces in "Mid Y(mm) " and "Head " are part of the format
        padded(&[
            "Designator",
            "Comment",
            "Footprint",
            "Mid X(mm)",
            "Mid Y(mm) ",
            "Rotation",
            "Head ",
            "FeederNo",
            "Mount Speed(%)",
            "Pick Height(mm)",
            "Place Height(mm)",
            "Mode",
            "Skip",
        ]),
    ]
}

/// Write the header block and data rows as CSV to the given path.
///
/// Fields are quoted only when they contain the delimiter or quote
/// character; records are terminated with CRLF.
pub fn write_csv<P: AsRef<Path>>(path: P, rows: &[OutputRow]) -> Result<()> {
    let path = path.as_ref();
    info!("Writing NEODEN CSV: {}", path.display());

    // Header rows are not all the same width, so the writer must not
    // enforce a uniform field count
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .flexible(true)
        .from_path(path)
        .with_path_context("create output", path)?;

    for header_row in header_block() {
        writer
            .write_record(&header_row)
            .with_path_context("write header to", path)?;
    }

    for row in rows {
        writer
            .write_record(row.to_fields())
            .with_path_context("write data row to", path)?;
    }

    writer.flush().with_path_context("flush output", path)?;

    info!("Wrote {} data rows", rows.len());
    Ok(())
}
