//! Vocabulary cards and sets (HSK levels and genre collections)

pub mod models;

pub use models::*;
