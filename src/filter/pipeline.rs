//! Filter pipeline
//!
//! A [`FilterSet`] is a conjunction of predicates. Applying it borrows the
//! matching records in their original order; the source slice is never
//! touched and no record value is transformed.

use crate::dataset::StudentRecord;

use super::errors::FilterResult;
use super::field::NumericField;
use super::predicate::Predicate;

/// Predicates combined with logical AND
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    predicates: Vec<Predicate>,
}

impl FilterSet {
    /// The empty set: every record passes
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a predicate, builder style
    pub fn with(mut self, predicate: Predicate) -> Self {
        self.push(predicate);
        self
    }

    pub fn push(&mut self, predicate: Predicate) {
        self.predicates.push(predicate);
    }

    /// Parse every expression with [`Predicate::parse`]
    pub fn parse_all<S: AsRef<str>>(exprs: &[S]) -> FilterResult<Self> {
        let predicates = exprs
            .iter()
            .map(|e| Predicate::parse(e.as_ref()))
            .collect::<FilterResult<Vec<_>>>()?;
        Ok(Self { predicates })
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// All predicates must match (AND semantics)
    pub fn matches(&self, record: &StudentRecord) -> bool {
        self.predicates.iter().all(|p| p.matches(record))
    }

    /// Derive the matching subset
    pub fn apply<'a>(&self, records: &'a [StudentRecord]) -> Subset<'a> {
        Subset {
            rows: records.iter().filter(|r| self.matches(r)).collect(),
        }
    }

    /// Human-readable form, e.g. `school=GP & age=15..22`
    pub fn describe(&self) -> String {
        if self.predicates.is_empty() {
            return "(none)".to_string();
        }
        self.predicates
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(" & ")
    }
}

/// A filtered, read-only view over borrowed records
#[derive(Debug, Clone, Default)]
pub struct Subset<'a> {
    rows: Vec<&'a StudentRecord>,
}

impl<'a> Subset<'a> {
    /// Every record, unfiltered
    pub fn all(records: &'a [StudentRecord]) -> Self {
        Self {
            rows: records.iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Records in original order
    pub fn records(&self) -> &[&'a StudentRecord] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a StudentRecord> + '_ {
        self.rows.iter().copied()
    }

    /// First `n` records
    pub fn head(&self, n: usize) -> &[&'a StudentRecord] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// The field's value for every record, in order
    pub fn values(&self, field: NumericField) -> Vec<i64> {
        self.iter().map(|r| field.value(r)).collect()
    }
}
