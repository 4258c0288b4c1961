//! Molecular weight of a validated token sequence.
//!
//! Tokens are processed back to front: a multiplier or a closing parenthesis
//! is always seen before the element or group it scales. The calculator keeps
//! one multiplier slot per open group plus the outermost scope; an element's
//! contribution is its atomic weight times every slot on the stack.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::warn;

use crate::formula::token::{Token, TokenSequence};
use crate::traits::ElementLookup;

/// Total weight of a formula and the distinct elements it contains.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Composition {
    total_weight: f64,
    /// Symbol → unmultiplied atomic weight.
    elements: BTreeMap<String, f64>,
}

impl Composition {
    /// Total molecular weight in daltons.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    pub fn elements(&self) -> &BTreeMap<String, f64> {
        &self.elements
    }

    /// Atomic weight of `symbol` if it occurs in the formula.
    pub fn get(&self, symbol: &str) -> Option<f64> {
        self.elements.get(symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Elements in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.elements.iter().map(|(s, w)| (s.as_str(), *w))
    }
}

#[derive(Debug, Clone)]
pub struct WeightCalculator<L> {
    lookup: L,
}

impl<L: ElementLookup> WeightCalculator<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// `tokens` must come from a successful validation against the same
    /// table; the sequence is not checked again.
    pub fn compute(&self, tokens: &TokenSequence) -> Composition {
        compute(tokens, &self.lookup)
    }
}

pub fn compute<L: ElementLookup + ?Sized>(tokens: &TokenSequence, lookup: &L) -> Composition {
    let mut multipliers: Vec<u32> = vec![1];
    let mut composition = Composition::default();

    for token in tokens.iter().rev() {
        match token {
            Token::Multiplier(n) => set_innermost(&mut multipliers, *n),
            Token::CloseParen => multipliers.push(1),
            Token::OpenParen => {
                multipliers.pop();
                set_innermost(&mut multipliers, 1);
            }
            Token::Element(symbol) => {
                let weight = lookup.atomic_weight(symbol).unwrap_or_else(|| {
                    warn!(%symbol, "unresolved element symbol, counting as 0");
                    0.0
                });
                composition
                    .elements
                    .entry(symbol.clone())
                    .or_insert(weight);
                let contribution = multipliers
                    .iter()
                    .fold(weight, |acc, &m| acc * f64::from(m));
                composition.total_weight += contribution;
                set_innermost(&mut multipliers, 1);
            }
        }
    }

    composition
}

fn set_innermost(multipliers: &mut [u32], value: u32) {
    if let Some(top) = multipliers.last_mut() {
        *top = value;
    }
}
