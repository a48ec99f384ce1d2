//! Core conversion engine for pos2neoden
//!
//! This module orchestrates the conversion process: reading the position
//! file, transforming each record through the static maps, and writing
//! the NEODEN CSV.

use crate::{
    config::Config,
    error::Result,
    mapping::{FOOTPRINT_MAP, VALUE_MAP},
    neoden::{self, OutputRow},
    position::{self, ComponentRecord},
    progress::ProgressTracker,
};
use anyhow::Context;
use tracing::{debug, info};

/// The main conversion engine
pub struct Converter {
    config: Config,
    progress_tracker: ProgressTracker,
    stats: ConversionStats,
}

impl Converter {
    /// Create a new converter with the given configuration
    pub fn new(config: Config) -> Self {
        let progress_enabled = !config.no_progress;

        Self {
            config,
            progress_tracker: ProgressTracker::new(progress_enabled),
            stats: ConversionStats::default(),
        }
    }

    /// Run the complete conversion process
    pub fn run(&mut self) -> Result<()> {
        let start = std::time::Instant::now();
        info!("Starting conversion process...");

        // Validate configuration
        self.config
            .validate()
            .context("Configuration validation failed")?;

        // Read the whole input into memory before producing any output
        let records = self
            .read_input()
            .context("Failed to read position file")?;

        // Transform records in input order
        let rows = self.convert_records(&records);

        // Write the header block and data rows
        neoden::write_csv(&self.config.output, &rows).context("Failed to write output file")?;

        info!("Conversion completed in {} ms", start.elapsed().as_millis());
        Ok(())
    }

    /// Read all component records from the input file
    fn read_input(&self) -> Result<Vec<ComponentRecord>> {
        let progress = self
            .progress_tracker
            .create_spinner("Reading position file...");

        let records = position::read_records(&self.config.input)?;

        ProgressTracker::finish_progress(progress, "Position file read");
        Ok(records)
    }

    /// Transform every record into an output row, preserving order
    fn convert_records(&mut self, records: &[ComponentRecord]) -> Vec<OutputRow> {
        info!("Converting {} components...", records.len());

        let progress = self
            .progress_tracker
            .create_conversion_progress(records.len());

        let mut rows = Vec::with_capacity(records.len());
        for record in records {
            let row = OutputRow::from_record(record);

            self.stats.components_converted += 1;
            if FOOTPRINT_MAP.contains_key(record.footprint.as_str()) {
                self.stats.footprints_remapped += 1;
            }
            if VALUE_MAP
                .keys()
                .any(|prefix| record.designator.starts_with(prefix))
            {
                self.stats.values_overridden += 1;
            }

            debug!("Converted component: {}", record.designator);
            rows.push(row);

            ProgressTracker::update_progress(&progress, 1, None);
        }

        ProgressTracker::finish_progress(progress, "Component conversion completed");
        rows
    }

    /// Get statistics about the conversion process
    pub fn get_conversion_stats(&self) -> &ConversionStats {
        &self.stats
    }
}

/// Statistics about the conversion process
#[derive(Debug, Default)]
pub struct ConversionStats {
    pub components_converted: usize,
    pub footprints_remapped: usize,
    pub values_overridden: usize,
}
