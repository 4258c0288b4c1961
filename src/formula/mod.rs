//! Chemical formula validation and weight calculation.
//!
//! A formula string is first validated into a [`TokenSequence`]; the weight
//! calculator then trusts that sequence completely.

mod charclass;
pub mod error;
mod token;
mod tokenizer;
mod weight;

pub use error::FormulaError;
pub use token::{Token, TokenSequence};
pub use tokenizer::{validate, Validator};
pub use weight::{compute, Composition, WeightCalculator};
