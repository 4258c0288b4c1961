use thiserror::Error;

/// Grammar violations reported by formula validation.
///
/// Messages are the user-facing strings existing consumers match on and
/// must stay verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum FormulaError {
    #[error("Erreur: formule de longueur nulle.")]
    EmptyFormula,

    #[error("Erreur: la formule commence par un chiffre.")]
    StartsWithDigit,

    #[error("Erreur: ceci n'est pas un atome existant.")]
    UnknownElement,

    /// A multiplier directly after `(`.
    #[error("Erreur: un multiplicateur doit suivre un élément ou une parenthèse fermante.")]
    MisplacedMultiplier,

    #[error("Erreur: Un multiplicateur doit être au moins de 2.")]
    MultiplierTooSmall,

    #[error("Erreur: les zéros en trop ne sont pas permis devant un nombre.")]
    ExtraLeadingZero,

    #[error("Erreur: les parenthèses vides sont interdites.")]
    EmptyParentheses,

    #[error("Erreur: Parenthèse fermante sans parenthèse ouvrante.")]
    UnmatchedCloseParen,

    #[error("Erreur: Parenthèse ouvrante sans parenthèse fermante.")]
    UnmatchedOpenParen,

    /// Also covers a lowercase letter that does not follow an uppercase one.
    #[error("Erreur: caractère invalide (y compris une minuscule qui ne suit pas une majuscule).")]
    InvalidCharacter,

    /// The digit run does not fit in a `u32`.
    #[error("Erreur: Le multiplicateur est trop gros.")]
    MultiplierTooLarge,
}

impl FormulaError {
    pub const ALL: [FormulaError; 11] = [
        Self::EmptyFormula,
        Self::StartsWithDigit,
        Self::UnknownElement,
        Self::MisplacedMultiplier,
        Self::MultiplierTooSmall,
        Self::ExtraLeadingZero,
        Self::EmptyParentheses,
        Self::UnmatchedCloseParen,
        Self::UnmatchedOpenParen,
        Self::InvalidCharacter,
        Self::MultiplierTooLarge,
    ];
}
