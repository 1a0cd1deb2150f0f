pub mod ai;
pub mod generation;
