//! Predicates: a closed set of filter conditions interpreted per record

use std::fmt;

use crate::dataset::StudentRecord;

use super::errors::{FilterError, FilterResult};
use super::field::{CategoricalField, Field, NumericField};

/// Selection value meaning "no constraint"
pub const WILDCARD: &str = "All";

/// Prefix that makes a choice literal, so `\All` selects a value named `All`
pub const LITERAL_PREFIX: char = '\\';

/// A categorical selector's state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// Wildcard: every value matches
    #[default]
    All,
    /// Exact match on one value
    Only(String),
}

impl Selection {
    /// Interpret a user choice; [`WILDCARD`] maps to [`Selection::All`].
    ///
    /// A leading [`LITERAL_PREFIX`] is stripped and the rest taken as a
    /// value, which is the only way to select a value spelled `All`.
    pub fn from_choice(choice: &str) -> Self {
        if let Some(literal) = choice.strip_prefix(LITERAL_PREFIX) {
            Selection::Only(literal.to_string())
        } else if choice == WILDCARD {
            Selection::All
        } else {
            Selection::Only(choice.to_string())
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(expected) => expected == value,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Selection::All)
    }

    /// Label shown in selectors
    pub fn label(&self) -> &str {
        match self {
            Selection::All => WILDCARD,
            Selection::Only(value) => value,
        }
    }
}

/// Renders the choice that [`Selection::from_choice`] maps back to `self`
impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Only(value) if value == WILDCARD || value.starts_with(LITERAL_PREFIX) => {
                write!(f, "{}{}", LITERAL_PREFIX, value)
            }
            _ => f.write_str(self.label()),
        }
    }
}

/// A single filter condition on one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Exact match on a categorical field; `Selection::All` always matches
    CategoricalEquals {
        field: CategoricalField,
        selection: Selection,
    },
    /// `lo <= value <= hi`; an inverted range matches nothing
    NumericRange {
        field: NumericField,
        lo: i64,
        hi: i64,
    },
}

impl Predicate {
    pub fn equals(field: CategoricalField, selection: Selection) -> Self {
        Predicate::CategoricalEquals { field, selection }
    }

    pub fn range(field: NumericField, lo: i64, hi: i64) -> Self {
        Predicate::NumericRange { field, lo, hi }
    }

    /// Evaluate against one record
    pub fn matches(&self, record: &StudentRecord) -> bool {
        match self {
            Predicate::CategoricalEquals { field, selection } => {
                selection.matches(field.value(record))
            }
            Predicate::NumericRange { field, lo, hi } => {
                let v = field.value(record);
                *lo <= v && v <= *hi
            }
        }
    }

    /// True when the predicate constrains nothing
    pub fn is_identity(&self) -> bool {
        matches!(
            self,
            Predicate::CategoricalEquals {
                selection: Selection::All,
                ..
            }
        )
    }

    /// Parse `field=value` or `field=lo..hi`.
    ///
    /// A single number on a numeric field is the range `n..n`.
    pub fn parse(expr: &str) -> FilterResult<Self> {
        let (name, value) = expr
            .split_once('=')
            .ok_or_else(|| FilterError::InvalidExpression(expr.to_string()))?;
        let value = value.trim();
        if value.is_empty() {
            return Err(FilterError::InvalidExpression(expr.to_string()));
        }

        match name.parse::<Field>()? {
            Field::Categorical(field) => {
                if value.contains("..") && parse_bounds(value).is_some() {
                    return Err(FilterError::InvalidRange {
                        field: field.name().to_string(),
                        reason: "categorical fields take a single value".to_string(),
                    });
                }
                Ok(Predicate::equals(field, Selection::from_choice(value)))
            }
            Field::Numeric(field) => {
                let (lo, hi) = parse_bounds(value).ok_or_else(|| FilterError::InvalidRange {
                    field: field.name().to_string(),
                    reason: format!("cannot parse '{}'", value),
                })?;
                if lo > hi {
                    return Err(FilterError::InvalidRange {
                        field: field.name().to_string(),
                        reason: format!("lower bound {} exceeds upper bound {}", lo, hi),
                    });
                }
                Ok(Predicate::range(field, lo, hi))
            }
        }
    }
}

fn parse_bounds(value: &str) -> Option<(i64, i64)> {
    match value.split_once("..") {
        Some((lo, hi)) => Some((lo.trim().parse().ok()?, hi.trim().parse().ok()?)),
        None => {
            let n = value.parse().ok()?;
            Some((n, n))
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::CategoricalEquals { field, selection } => {
                write!(f, "{}={}", field, selection)
            }
            Predicate::NumericRange { field, lo, hi } => write!(f, "{}={}..{}", field, lo, hi),
        }
    }
}
