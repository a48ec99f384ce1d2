//! pos2neoden - Convert pick-and-place position files to NEODEN YY1 CSV
//!
//! A Rust application for converting PCB CAD position exports (KiCad-style
//! `.pos`/CSV files) into the feeder CSV format consumed by the NEODEN YY1
//! pick-and-place machine controller.

pub mod config;
pub mod converter;
pub mod error;
pub mod mapping;
pub mod neoden;
pub mod position;
pub mod progress;
