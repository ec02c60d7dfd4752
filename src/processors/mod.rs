//! Processors drive the whole pipeline: reading, screening, reporting.

pub mod simple;
