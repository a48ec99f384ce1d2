//! Static lookup tables for footprint and value remapping
//!
//! This module holds the process-wide constant dictionaries that translate
//! CAD-side footprint names and designator-based values into what the
//! NEODEN YY1 feeder setup expects.

use lazy_static::lazy_static;
use std::collections::HashMap;
use tracing::debug;

lazy_static! {
    /// Source footprint name -> NEODEN footprint name
    pub static ref FOOTPRINT_MAP: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("R_0603_1608Metric", "0603D");
        m.insert("R_0402_1005Metric", "0402D");
        m.insert("R_0201_0603Metric", "0201D");
        m.insert("LQFP-100_14x14mm_P0.5mm", "LQFP-100");
        m.insert("Fiducial_1.5mm_Mask3mm", "FIDUCIAL");
        m.insert("SOT-23", "SOT-23");
        m.insert("TO-252-2", "TO-252-2");
        m
    };

    /// Designator prefix -> fixed override value
    pub static ref VALUE_MAP: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("R", "1K");
        m
    };
}

/// Translate a footprint name through [`FOOTPRINT_MAP`].
///
/// Unmapped names pass through unchanged.
pub fn map_footprint(name: &str) -> &str {
    match FOOTPRINT_MAP.get(name) {
        Some(&mapped) => {
            debug!("Mapped footprint '{}' -> '{}'", name, mapped);
            mapped
        }
        None => name,
    }
}

/// Resolve the comment value for a component.
///
/// If the designator starts with a prefix in [`VALUE_MAP`], the fixed
/// override value for that prefix is returned regardless of the source
/// value. When several prefixes match, the longest one wins.
pub fn resolve_value<'a>(designator: &str, raw_value: &'a str) -> &'a str {
    let mut best: Option<(&str, &str)> = None;
    for (&prefix, &value) in VALUE_MAP.iter() {
        if designator.starts_with(prefix) {
            match best {
                Some((best_prefix, _)) if best_prefix.len() >= prefix.len() => {}
                _ => best = Some((prefix, value)),
            }
        }
    }

    match best {
        Some((prefix, value)) => {
            debug!(
                "Designator '{}' matched prefix '{}', value overridden to '{}'",
                designator, prefix, value
            );
            value
        }
        None => raw_value,
    }
}
