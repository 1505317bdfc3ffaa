pub mod analyze;
pub mod feedback;
pub mod models;
