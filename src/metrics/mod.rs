//! Metrics collection and exposition for Prometheus.
//!
//! This module provides the device registry instruments and renders them
//! for the scrape endpoint.

mod recorder;

pub use recorder::{Metrics, MetricsRecorder};
