use std::collections::{BTreeMap, HashMap};

/// Resolves element symbols to standard atomic weights.
///
/// The validator only asks whether a symbol exists; the weight calculator
/// asks for the weight of symbols the validator already accepted.
pub trait ElementLookup {
    fn is_valid_symbol(&self, symbol: &str) -> bool {
        self.atomic_weight(symbol).is_some()
    }

    /// Atomic weight in daltons, or `None` if the symbol is unknown.
    fn atomic_weight(&self, symbol: &str) -> Option<f64>;
}

impl<T: ElementLookup + ?Sized> ElementLookup for &T {
    fn is_valid_symbol(&self, symbol: &str) -> bool {
        (**self).is_valid_symbol(symbol)
    }

    fn atomic_weight(&self, symbol: &str) -> Option<f64> {
        (**self).atomic_weight(symbol)
    }
}

impl ElementLookup for HashMap<String, f64> {
    fn is_valid_symbol(&self, symbol: &str) -> bool {
        self.contains_key(symbol)
    }

    fn atomic_weight(&self, symbol: &str) -> Option<f64> {
        self.get(symbol).copied()
    }
}

impl ElementLookup for BTreeMap<String, f64> {
    fn is_valid_symbol(&self, symbol: &str) -> bool {
        self.contains_key(symbol)
    }

    fn atomic_weight(&self, symbol: &str) -> Option<f64> {
        self.get(symbol).copied()
    }
}
