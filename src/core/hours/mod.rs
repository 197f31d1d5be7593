//! Opening-hours engine: parsing free-form times, validating ranges and
//! evaluating them against the wall clock.

pub mod clock;
pub mod evaluator;
pub mod parser;
pub mod validator;
