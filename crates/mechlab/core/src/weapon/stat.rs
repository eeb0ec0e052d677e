//! Weapon stat expressions.
//!
//! A stat expression is a short string over `d s t h c`, optionally split by
//! one `/`. Each letter stands for a live weapon quantity; the letters on each
//! side are multiplied together and the result is `numerator / denominator`.
//!
//! | Letter | Quantity               |
//! |--------|------------------------|
//! | `d`    | damage per shot        |
//! | `s`    | seconds per shot       |
//! | `t`    | mass in tons           |
//! | `h`    | heat per shot          |
//! | `c`    | critical slots         |
//!
//! ## Examples
//!
//! ```text
//! "d/s"  damage per second
//! "d/h"  damage per heat
//! "d/st" damage per second per ton
//! ```

use std::str::FromStr;

use crate::error::{EngineError, ErrorSeverity};
use crate::modifier::Modifier;

/// Invalid stat expression text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StatExprError {
    #[error("unknown stat identifier '{identifier}' at position {position}")]
    UnknownIdentifier { identifier: char, position: usize },

    #[error("second '/' at position {position}")]
    RepeatedDivision { position: usize },
}

impl EngineError for StatExprError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownIdentifier { .. } => "STAT_UNKNOWN_IDENTIFIER",
            Self::RepeatedDivision { .. } => "STAT_REPEATED_DIVISION",
        }
    }
}

/// A single quantity in a stat expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatTerm {
    Damage,
    Seconds,
    Mass,
    Heat,
    Slots,
}

impl StatTerm {
    fn from_char(c: char) -> Option<Self> {
        match c {
            'd' => Some(Self::Damage),
            's' => Some(Self::Seconds),
            't' => Some(Self::Mass),
            'h' => Some(Self::Heat),
            'c' => Some(Self::Slots),
            _ => None,
        }
    }
}

/// Anything that can supply values for the letters of a stat expression.
pub trait StatSource {
    fn stat_term(&self, term: StatTerm, modifiers: &[Modifier]) -> f64;
}

/// Parsed stat expression.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatExpr {
    numerator: Vec<StatTerm>,
    denominator: Vec<StatTerm>,
}

impl StatExpr {
    /// Evaluates the expression against `source`.
    ///
    /// An empty side contributes 1.
    pub fn evaluate<S>(&self, source: &S, modifiers: &[Modifier]) -> f64
    where
        S: StatSource + ?Sized,
    {
        let product = |terms: &[StatTerm]| {
            terms
                .iter()
                .fold(1.0, |acc, &term| acc * source.stat_term(term, modifiers))
        };
        product(&self.numerator) / product(&self.denominator)
    }

    pub fn numerator(&self) -> &[StatTerm] {
        &self.numerator
    }

    pub fn denominator(&self) -> &[StatTerm] {
        &self.denominator
    }
}

impl FromStr for StatExpr {
    type Err = StatExprError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut expr = Self::default();
        let mut in_denominator = false;

        for (position, c) in text.chars().enumerate() {
            if c == '/' {
                if in_denominator {
                    return Err(StatExprError::RepeatedDivision { position });
                }
                in_denominator = true;
                continue;
            }
            let term = StatTerm::from_char(c)
                .ok_or(StatExprError::UnknownIdentifier { identifier: c, position })?;
            if in_denominator {
                expr.denominator.push(term);
            } else {
                expr.numerator.push(term);
            }
        }

        Ok(expr)
    }
}
