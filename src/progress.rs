//! Progress tracking and display using indicatif
//!
//! This module provides unified progress bar functionality
//! for the conversion pipeline.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::info;

/// Progress tracker for pos2neoden operations
pub struct ProgressTracker {
    enabled: bool,
}

impl ProgressTracker {
    /// Create a new progress tracker
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Create a progress bar for record operations
    pub fn create_file_progress(&self, total: usize, operation: &str) -> Option<ProgressBar> {
        if !self.enabled || total == 0 {
            return None;
        }

        let pb = ProgressBar::new(total as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▉▊▋▌▍▎▏ ")
        );
        pb.set_message(format!("{}...", operation));
        pb.enable_steady_tick(Duration::from_millis(100));

        info!("Started progress tracking for: {}", operation);
        Some(pb)
    }

    /// Create a spinner for indeterminate operations
    pub fn create_spinner(&self, message: &str) -> Option<ProgressBar> {
        if !self.enabled {
            return None;
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(80));

        info!("Started spinner for: {}", message);
        Some(pb)
    }

    /// Create a progress bar for component conversion
    pub fn create_conversion_progress(&self, total: usize) -> Option<ProgressBar> {
        self.create_file_progress(total, "Converting components")
    }

    /// Update progress and optionally change message
    pub fn update_progress(pb: &Option<ProgressBar>, increment: u64, message: Option<&str>) {
        if let Some(ref progress) = pb {
            progress.inc(increment);
            if let Some(msg) = message {
                progress.set_message(msg.to_string());
            }
        }
    }

    /// Finish progress with success message
    pub fn finish_progress(pb: Option<ProgressBar>, success_message: &str) {
        if let Some(progress) = pb {
            progress.finish_with_message(success_message.to_string());
            info!("Progress completed: {}", success_message);
        }
    }
}
