//! Degree distributions and power-law fits of simple graphs.

pub mod config;
pub mod error;
pub mod fit;
pub mod generate;
pub mod graph;
pub mod ingest;
pub mod input;
pub mod pipeline;
pub mod reduce;
pub mod sink;
pub mod types;
