//! Self-positioning questionnaire for physical activity (APS) in care
//! establishments: answer intake, seven-domain scoring, guidance and result
//! export.

pub mod config;
pub mod error;
pub mod results;
pub mod scoring;
pub mod survey;
pub mod telemetry;
