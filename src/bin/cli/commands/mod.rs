pub mod complete;
pub mod record;
pub mod reset;
pub mod sessions;
pub mod stats;
