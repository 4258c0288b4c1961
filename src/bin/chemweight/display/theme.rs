use std::fmt::Write;

use chemweight::{Analysis, ReportRenderer, Token};

const RESET: &str = "\x1b[0m";
const ELEMENT: &str = "\x1b[1m";
const MULTIPLIER: &str = "\x1b[38;2;0;145;196m";
const PAREN: &str = "\x1b[38;2;175;196;204m";
const HEADER: &str = "\x1b[1;38;2;167;215;232;48;2;17;71;89m";
const ROW_COLORS: [&str; 2] = [
    "\x1b[38;2;74;101;112;48;2;140;196;216m",
    "\x1b[38;2;74;101;112;48;2;179;224;239m",
];

const SYMBOL_WIDTH: usize = 8;
const WEIGHT_WIDTH: usize = 14;

/// Monochrome text report.
pub struct PlainTheme;

impl ReportRenderer for PlainTheme {
    fn render(&self, analysis: &Analysis) -> String {
        let mut s = String::new();
        let _ = writeln!(s, "{} = {:.4}", analysis.tokens, analysis.total_weight());
        let _ = writeln!(s, "{:<SYMBOL_WIDTH$} Weight", "Element");
        for (symbol, weight) in analysis.composition.iter() {
            let _ = writeln!(s, "{symbol:<SYMBOL_WIDTH$} {weight}");
        }
        s
    }
}

/// Coloured report for terminals; multipliers are printed as subscripts and
/// table rows alternate shading.
pub struct StyledTheme;

impl ReportRenderer for StyledTheme {
    fn render(&self, analysis: &Analysis) -> String {
        let mut s = String::new();
        for token in analysis.tokens.iter() {
            match token {
                Token::Element(symbol) => {
                    let _ = write!(s, "{ELEMENT}{symbol}{RESET}");
                }
                Token::Multiplier(n) => {
                    let _ = write!(s, "{MULTIPLIER}{}{RESET}", subscript(*n));
                }
                Token::OpenParen | Token::CloseParen => {
                    let _ = write!(s, "{PAREN}{token}{RESET}");
                }
            }
        }
        let _ = writeln!(s, " = {:.4}", analysis.total_weight());

        let _ = writeln!(
            s,
            "{HEADER}{:<SYMBOL_WIDTH$} {:<WEIGHT_WIDTH$}{RESET}",
            "Element", "Weight"
        );
        for (i, (symbol, weight)) in analysis.composition.iter().enumerate() {
            let _ = writeln!(
                s,
                "{}{symbol:<SYMBOL_WIDTH$} {:<WEIGHT_WIDTH$}{RESET}",
                ROW_COLORS[i % 2],
                weight.to_string()
            );
        }
        s
    }
}

fn subscript(n: u32) -> String {
    n.to_string()
        .chars()
        .map(|d| match d.to_digit(10) {
            Some(v) => char::from_u32(0x2080 + v).unwrap_or(d),
            None => d,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chemweight::{analyze, ElementTable};

    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn plain_report() {
        let analysis = analyze("H2O", &ElementTable::builtin()).unwrap();
        assert_eq!(
            PlainTheme.render(&analysis),
            "H2O = 18.0150\nElement  Weight\nH        1.008\nO        15.999\n"
        );
    }

    #[test]
    fn styled_report_uses_subscripts() {
        let analysis = analyze("(NaCl)4", &ElementTable::builtin()).unwrap();
        let rendered = StyledTheme.render(&analysis);
        let first = strip_ansi(rendered.lines().next().unwrap());
        assert_eq!(first, "(NaCl)\u{2084} = 233.7591");
    }

    #[test]
    fn styled_rows_alternate() {
        let analysis = analyze("CO2", &ElementTable::builtin()).unwrap();
        let rendered = StyledTheme.render(&analysis);
        let rows: Vec<&str> = rendered.lines().skip(2).collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with(ROW_COLORS[0]));
        assert!(rows[1].starts_with(ROW_COLORS[1]));
    }

    #[test]
    fn multi_digit_subscript() {
        assert_eq!(subscript(12), "\u{2081}\u{2082}");
    }
}
