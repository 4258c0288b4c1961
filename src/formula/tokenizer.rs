use tracing::trace;

use crate::formula::charclass::{decimal_value, is_digit, is_letter};
use crate::formula::error::FormulaError;
use crate::formula::token::{Token, TokenSequence};
use crate::traits::ElementLookup;

/// Validates formulas against an element table and splits them into tokens.
#[derive(Debug, Clone)]
pub struct Validator<L> {
    lookup: L,
}

impl<L: ElementLookup> Validator<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Scans `formula` left to right. The first grammar violation stops the
    /// scan and is returned; no partial token sequence escapes.
    pub fn validate(&self, formula: &str) -> Result<TokenSequence, FormulaError> {
        validate(formula, &self.lookup)
    }
}

pub fn validate<L: ElementLookup + ?Sized>(
    formula: &str,
    lookup: &L,
) -> Result<TokenSequence, FormulaError> {
    tokenize(formula, lookup).map_err(|(pos, err)| {
        trace!(formula, pos, error = ?err, "formula rejected");
        err
    })
}

type ScanError = (usize, FormulaError);

fn tokenize<L: ElementLookup + ?Sized>(
    formula: &str,
    lookup: &L,
) -> Result<TokenSequence, ScanError> {
    let chars: Vec<char> = formula.chars().collect();
    match chars.first() {
        None => return Err((0, FormulaError::EmptyFormula)),
        Some(&c) if is_digit(c) => return Err((0, FormulaError::StartsWithDigit)),
        Some(_) => {}
    }

    let mut tokens = TokenSequence::default();
    let mut opens: Vec<usize> = Vec::new();
    let mut closes: Vec<usize> = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            c if is_letter(c) => {
                if !c.is_uppercase() {
                    return Err((i, FormulaError::InvalidCharacter));
                }
                let (symbol, next) = read_symbol(&chars, i);
                if !lookup.is_valid_symbol(&symbol) {
                    return Err((i, FormulaError::UnknownElement));
                }
                tokens.push(Token::Element(symbol));
                i = next;
            }
            c if is_digit(c) => {
                let (value, next) = read_multiplier(&chars, i)?;
                tokens.push(Token::Multiplier(value));
                i = next;
            }
            '(' => {
                if chars.get(i + 1) == Some(&')') {
                    return Err((i, FormulaError::EmptyParentheses));
                }
                tokens.push(Token::OpenParen);
                opens.push(i);
                i += 1;
            }
            ')' => {
                tokens.push(Token::CloseParen);
                closes.push(i);
                i += 1;
            }
            _ => return Err((i, FormulaError::InvalidCharacter)),
        }
    }

    check_balance(&opens, &closes).map_err(|e| (chars.len(), e))?;
    Ok(tokens)
}

/// An uppercase letter followed by a lowercase one always forms a
/// two-letter candidate; there is no fallback to the one-letter symbol.
fn read_symbol(chars: &[char], start: usize) -> (String, usize) {
    match chars.get(start + 1) {
        Some(&next) if is_letter(next) && next.is_lowercase() => {
            ([chars[start], next].iter().collect(), start + 2)
        }
        _ => (chars[start].to_string(), start + 1),
    }
}

/// Reads a run of decimal digits from any script, mixed scripts included.
/// Only the ASCII `'0'` counts as a leading zero.
fn read_multiplier(chars: &[char], start: usize) -> Result<(u32, usize), ScanError> {
    if chars[start] == '0' {
        return Err((start, FormulaError::ExtraLeadingZero));
    }
    if start > 0 && chars[start - 1] == '(' {
        return Err((start, FormulaError::MisplacedMultiplier));
    }

    let mut value: u32 = 0;
    let mut end = start;
    while let Some(digit) = chars.get(end).copied().and_then(decimal_value) {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(digit))
            .ok_or((start, FormulaError::MultiplierTooLarge))?;
        end += 1;
    }
    if value < 2 {
        return Err((start, FormulaError::MultiplierTooSmall));
    }
    Ok((value, end))
}

/// Pairs the k-th `(` with the k-th `)` in scan order.
fn check_balance(opens: &[usize], closes: &[usize]) -> Result<(), FormulaError> {
    if closes.len() > opens.len() {
        return Err(FormulaError::UnmatchedCloseParen);
    }
    if closes.len() < opens.len() {
        return Err(FormulaError::UnmatchedOpenParen);
    }
    if opens.iter().zip(closes).any(|(open, close)| open > close) {
        return Err(FormulaError::UnmatchedCloseParen);
    }
    Ok(())
}
