use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(
    name = "chemweight",
    about = "Validate chemical formulas and compute their molecular weight",
    version
)]
pub struct Cli {
    /// Formulas to analyze (read one per line from stdin if omitted)
    #[arg(value_name = "FORMULA")]
    pub formulas: Vec<String>,

    /// Element table with `name,symbol,atomic_number,atomic_weight` records
    #[arg(short, long, value_name = "FILE", env = "CHEMWEIGHT_TABLE")]
    pub table: Option<PathBuf>,

    /// Report theme (styled on a terminal, plain otherwise)
    #[arg(long, value_name = "THEME")]
    pub theme: Option<Theme>,

    /// Print one JSON object per valid formula
    #[arg(long, conflicts_with = "theme")]
    pub json: bool,

    /// Only report invalid formulas
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    /// Monochrome text
    Plain,
    /// ANSI colours with subscript multipliers
    Styled,
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formulas_and_theme() {
        let cli = Cli::try_parse_from(["chemweight", "--theme", "plain", "H2O", "NaCl"]).unwrap();
        assert_eq!(cli.formulas, ["H2O", "NaCl"]);
        assert_eq!(cli.theme, Some(Theme::Plain));
        assert!(!cli.json);
    }

    #[test]
    fn json_conflicts_with_theme() {
        assert!(Cli::try_parse_from(["chemweight", "--json", "--theme", "styled", "H"]).is_err());
    }

    #[test]
    fn no_formulas_is_allowed() {
        let cli = Cli::try_parse_from(["chemweight", "-q"]).unwrap();
        assert!(cli.formulas.is_empty());
        assert!(cli.quiet);
    }
}
