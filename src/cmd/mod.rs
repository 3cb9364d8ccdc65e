pub mod analyze;
pub mod weights;
