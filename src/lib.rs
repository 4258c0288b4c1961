pub mod element;
pub mod formula;
pub mod report;
pub mod traits;

pub use element::{Element, ElementTable, TableError};
pub use formula::{
    compute, validate, Composition, FormulaError, Token, TokenSequence, Validator,
    WeightCalculator,
};
pub use report::{analyze, Analysis, CompositionSink, ReportRenderer};
pub use traits::ElementLookup;
