pub mod error;
pub mod handoff;
pub mod validators;
