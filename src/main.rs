//! pos2neoden - Convert pick-and-place position files to NEODEN YY1 CSV
//!
//! A Rust application for converting PCB CAD position exports into the
//! feeder CSV format consumed by the NEODEN YY1 pick-and-place machine.

use pos2neoden::{config::Config, converter::Converter, error::Result};
use tracing::{error, info};

fn main() -> Result<()> {
    // Parse configuration and initialize logging
    let config = Config::from_args().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    info!("Starting conversion process...");
    if config.verbose {
        info!("Configuration: {:?}", config);
    }

    // Create and run converter
    let mut converter = Converter::new(config);

    match converter.run() {
        Ok(()) => {
            let stats = converter.get_conversion_stats();
            info!("Conversion completed successfully");
            info!("Converted {} components", stats.components_converted);

            println!(
                "Conversion completed successfully: {} components ({} footprints remapped, {} values overridden)",
                stats.components_converted, stats.footprints_remapped, stats.values_overridden
            );
            Ok(())
        }
        Err(e) => {
            error!("Conversion failed: {:#}", e);
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
