//! Handing results to whoever displays them.
//!
//! The core produces an [`Analysis`]; presentation is the receiver's job,
//! either through a [`CompositionSink`] or a [`ReportRenderer`] theme.

use serde::Serialize;

use crate::formula::{compute, validate, Composition, FormulaError, TokenSequence};
use crate::traits::ElementLookup;

/// A validated formula together with its computed composition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub tokens: TokenSequence,
    pub composition: Composition,
}

impl Analysis {
    pub fn total_weight(&self) -> f64 {
        self.composition.total_weight()
    }

    /// Sends the total, the symbol-ordered composition and the formula as
    /// rebuilt from its tokens.
    pub fn publish(&self, sink: &mut impl CompositionSink) {
        let elements: Vec<(&str, f64)> = self.composition.iter().collect();
        sink.receive(
            self.composition.total_weight(),
            &elements,
            &self.tokens.to_string(),
        );
    }
}

/// Validates `formula` and computes its weight in one step.
pub fn analyze<L: ElementLookup + ?Sized>(
    formula: &str,
    lookup: &L,
) -> Result<Analysis, FormulaError> {
    let tokens = validate(formula, lookup)?;
    let composition = compute(&tokens, lookup);
    Ok(Analysis {
        tokens,
        composition,
    })
}

pub trait CompositionSink {
    fn receive(&mut self, total_weight: f64, composition: &[(&str, f64)], formula: &str);
}

/// A presentation theme for analyses.
pub trait ReportRenderer {
    fn render(&self, analysis: &Analysis) -> String;
}

impl<R: ReportRenderer + ?Sized> ReportRenderer for Box<R> {
    fn render(&self, analysis: &Analysis) -> String {
        (**self).render(analysis)
    }
}
