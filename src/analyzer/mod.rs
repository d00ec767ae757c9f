// Analyzer module: price series analytics and date labelling.

pub mod date_format;
pub mod price_analysis;

// Re-export the main Analyzer implementation for ease of use.
pub use price_analysis::{Analyzer, AnalyzerImpl};
