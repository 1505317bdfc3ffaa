// Litmus: dual-model sentiment analysis for text reviews.
//
// This is the library root. Each module corresponds to a stage of the
// sentiment pipeline: text normalization, TF-IDF features, linear models,
// training, per-request analysis, and the delivery surfaces (terminal + web).

pub mod analysis;
pub mod config;
pub mod features;
pub mod feedback;
pub mod model;
pub mod output;
pub mod status;
pub mod text;
pub mod train;
pub mod web;
