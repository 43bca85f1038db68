//! Study sessions over a vocabulary set

pub mod driver;

pub use driver::{answers_match, Advance, AnswerOutcome, SessionDriver, SessionError};
