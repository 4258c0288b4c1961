use std::io::{self, Write};

use anyhow::Error;
use chemweight::FormulaError;

pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr, "error: {err}");
    for cause in err.chain().skip(1) {
        let _ = writeln!(stderr, "  caused by: {cause}");
    }
}

pub fn print_rejection(formula: &str, err: &FormulaError) {
    let _ = writeln!(io::stderr().lock(), "{}", rejection_line(formula, err));
}

fn rejection_line(formula: &str, err: &FormulaError) -> String {
    format!("{formula}: {err}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_names_the_formula() {
        assert_eq!(
            rejection_line("OB02", &FormulaError::ExtraLeadingZero),
            "OB02: Erreur: les zéros en trop ne sont pas permis devant un nombre."
        );
    }

    #[test]
    fn empty_formula_keeps_the_separator() {
        assert_eq!(
            rejection_line("", &FormulaError::EmptyFormula),
            ": Erreur: formule de longueur nulle."
        );
    }
}
