//! Periodic table data used to resolve element symbols.
//!
//! An [`ElementTable`] is built once (from the bundled data, a file, or any
//! reader) and then only borrowed. Records use the line format
//! `name,symbol,atomic_number,atomic_weight`.

use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::traits::ElementLookup;

static BUILTIN_TABLE: &str = include_str!("../data/periodic_table.csv");

/// One record of the periodic table.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: String,
    pub symbol: String,
    pub atomic_num: u8,
    pub atomic_weight: f64,
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Element nb. {}: {} ({}), Atomic weight: {}",
            self.atomic_num, self.name, self.symbol, self.atomic_weight
        )
    }
}

#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read element table: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("malformed element record at line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

impl TableError {
    fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::Malformed {
            line,
            reason: reason.into(),
        }
    }
}

/// Read-only symbol → element map, iterated in symbol order.
#[derive(Debug, Clone, Default)]
pub struct ElementTable {
    elements: BTreeMap<String, Element>,
}

impl ElementTable {
    /// The bundled table of IUPAC standard atomic weights (elements 1–118).
    ///
    /// Radioactive elements without stable isotopes carry the mass number of
    /// their longest-lived isotope.
    pub fn builtin() -> Self {
        Self::parse(BUILTIN_TABLE).expect("bundled periodic table is well-formed")
    }

    pub fn parse(text: &str) -> Result<Self, TableError> {
        Self::from_reader(text.as_bytes())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading element table");
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    /// Reads newline-delimited records. Blank lines are ignored and records
    /// whose atomic weight is not strictly positive are skipped.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, TableError> {
        let mut elements = BTreeMap::new();
        let mut skipped = 0usize;

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let element = parse_record(line, idx + 1)?;
            if element.atomic_weight > 0.0 {
                elements.insert(element.symbol.clone(), element);
            } else {
                debug!(symbol = %element.symbol, line = idx + 1, "skipping element without weight");
                skipped += 1;
            }
        }

        debug!(loaded = elements.len(), skipped, "element table ready");
        Ok(Self { elements })
    }

    pub fn get(&self, symbol: &str) -> Option<&Element> {
        self.elements.get(symbol)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element> + '_ {
        self.elements.values()
    }
}

impl FromStr for ElementTable {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl ElementLookup for ElementTable {
    fn is_valid_symbol(&self, symbol: &str) -> bool {
        self.elements.contains_key(symbol)
    }

    fn atomic_weight(&self, symbol: &str) -> Option<f64> {
        self.elements.get(symbol).map(|e| e.atomic_weight)
    }
}

fn parse_record(line: &str, line_no: usize) -> Result<Element, TableError> {
    let fields: Vec<&str> = line.splitn(4, ',').map(str::trim).collect();
    let &[name, symbol, number, weight] = fields.as_slice() else {
        return Err(TableError::malformed(
            line_no,
            format!("expected 4 comma-separated fields, found {}", fields.len()),
        ));
    };
    if symbol.is_empty() {
        return Err(TableError::malformed(line_no, "empty symbol"));
    }
    let atomic_num = number
        .parse::<u8>()
        .map_err(|e| TableError::malformed(line_no, format!("atomic number '{number}': {e}")))?;
    let atomic_weight = weight
        .parse::<f64>()
        .map_err(|e| TableError::malformed(line_no, format!("atomic weight '{weight}': {e}")))?;

    Ok(Element {
        name: name.to_string(),
        symbol: symbol.to_string(),
        atomic_num,
        atomic_weight,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_approx(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() < tol,
            "expected {expected} ± {tol}, got {actual}"
        );
    }

    #[test]
    fn builtin_has_all_elements() {
        let table = ElementTable::builtin();
        assert_eq!(table.len(), 118);
        assert_eq!(table.get("H").unwrap().atomic_num, 1);
        assert_eq!(table.get("Og").unwrap().atomic_num, 118);
    }

    #[test]
    fn builtin_weights_spot_check() {
        let table = ElementTable::builtin();
        assert_approx(table.atomic_weight("H").unwrap(), 1.008, 1e-6);
        assert_approx(table.atomic_weight("C").unwrap(), 12.011, 1e-6);
        assert_approx(table.atomic_weight("O").unwrap(), 15.999, 1e-6);
        assert_approx(table.atomic_weight("Na").unwrap(), 22.98976928, 1e-6);
        assert_approx(table.atomic_weight("Cl").unwrap(), 35.45, 1e-6);
        assert_approx(table.atomic_weight("Fe").unwrap(), 55.845, 1e-6);
    }

    #[test]
    fn builtin_weights_positive() {
        for e in ElementTable::builtin().iter() {
            assert!(e.atomic_weight > 0.0, "{} has weight {}", e.symbol, e.atomic_weight);
        }
    }

    #[test]
    fn builtin_atomic_numbers_unique() {
        let table = ElementTable::builtin();
        let mut nums: Vec<u8> = table.iter().map(|e| e.atomic_num).collect();
        nums.sort_unstable();
        nums.dedup();
        assert_eq!(nums.len(), 118);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let table = ElementTable::builtin();
        assert!(table.is_valid_symbol("He"));
        assert!(!table.is_valid_symbol("he"));
        assert!(!table.is_valid_symbol("HE"));
        assert!(!table.is_valid_symbol(""));
        assert!(!table.is_valid_symbol("Xx"));
        assert_eq!(table.atomic_weight("Xx"), None);
    }

    #[test]
    fn iteration_is_symbol_ordered() {
        let table = ElementTable::parse("Oxygen,O,8,15.999\nHydrogen,H,1,1.008\nCarbon,C,6,12.011\n")
            .unwrap();
        let symbols: Vec<&str> = table.iter().map(|e| e.symbol.as_str()).collect();
        assert_eq!(symbols, ["C", "H", "O"]);
    }

    #[test]
    fn zero_weight_records_are_skipped() {
        let table = ElementTable::parse("Hydrogen,H,1,1.008\nPlaceholder,Xx,0,0\nNegative,Yy,0,-1.5\n")
            .unwrap();
        assert_eq!(table.len(), 1);
        assert!(!table.is_valid_symbol("Xx"));
        assert!(!table.is_valid_symbol("Yy"));
    }

    #[test]
    fn blank_lines_and_crlf_are_tolerated() {
        let table = ElementTable::parse("\r\nHydrogen,H,1,1.008\r\n\r\n  Helium , He , 2 , 4.0026 \n").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("He").unwrap().name, "Helium");
    }

    #[test]
    fn later_record_replaces_earlier() {
        let table = ElementTable::parse("Hydrogen,H,1,1.008\nHydrogen,H,1,1.00794\n").unwrap();
        assert_eq!(table.len(), 1);
        assert_approx(table.atomic_weight("H").unwrap(), 1.00794, 1e-9);
    }

    #[test]
    fn missing_field_reports_line() {
        let err = ElementTable::parse("Hydrogen,H,1,1.008\nHelium,He,2\n").unwrap_err();
        match err {
            TableError::Malformed { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bad_weight_reports_line() {
        let err = ElementTable::parse("Hydrogen,H,1,heavy\n").unwrap_err();
        assert!(matches!(err, TableError::Malformed { line: 1, .. }));
        assert!(err.to_string().contains("heavy"));
    }

    #[test]
    fn bad_atomic_number_reports_line() {
        let err = ElementTable::parse("Hydrogen,H,one,1.008\n").unwrap_err();
        assert!(matches!(err, TableError::Malformed { line: 1, .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = ElementTable::load("/nonexistent/chemweight/table.csv").unwrap_err();
        assert!(matches!(err, TableError::Io { .. }));
    }

    #[test]
    fn from_str_matches_parse() {
        let table: ElementTable = "Hydrogen,H,1,1.008".parse().unwrap();
        assert!(table.is_valid_symbol("H"));
    }

    #[test]
    fn display_format() {
        let table = ElementTable::builtin();
        assert_eq!(
            table.get("H").unwrap().to_string(),
            "Element nb. 1: Hydrogen (H), Atomic weight: 1.008"
        );
    }
}
