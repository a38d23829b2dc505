//! Filterable and rankable fields of a [`StudentRecord`]

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::dataset::{yes_no, StudentRecord};

use super::errors::FilterError;

/// Fields compared by exact value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CategoricalField {
    #[serde(rename = "school")]
    School,
    #[serde(rename = "sex")]
    Sex,
    #[serde(rename = "schoolsup")]
    SchoolSup,
    #[serde(rename = "famsup")]
    FamSup,
}

impl CategoricalField {
    pub const ALL: [CategoricalField; 4] = [
        CategoricalField::School,
        CategoricalField::Sex,
        CategoricalField::SchoolSup,
        CategoricalField::FamSup,
    ];

    /// Column name in the source file
    pub fn name(&self) -> &'static str {
        match self {
            CategoricalField::School => "school",
            CategoricalField::Sex => "sex",
            CategoricalField::SchoolSup => "schoolsup",
            CategoricalField::FamSup => "famsup",
        }
    }

    /// The record's value for this field
    pub fn value<'a>(&self, record: &'a StudentRecord) -> &'a str {
        match self {
            CategoricalField::School => &record.school,
            CategoricalField::Sex => &record.sex,
            CategoricalField::SchoolSup => yes_no(record.schoolsup),
            CategoricalField::FamSup => yes_no(record.famsup),
        }
    }
}

impl fmt::Display for CategoricalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Integer-valued fields, including the derived improvement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NumericField {
    #[serde(rename = "age")]
    Age,
    #[serde(rename = "studytime")]
    StudyTime,
    #[serde(rename = "failures")]
    Failures,
    #[serde(rename = "absences")]
    Absences,
    G1,
    G2,
    G3,
    /// G3 − G1
    #[serde(rename = "improvement")]
    Improvement,
}

impl NumericField {
    pub const ALL: [NumericField; 8] = [
        NumericField::Age,
        NumericField::StudyTime,
        NumericField::Failures,
        NumericField::Absences,
        NumericField::G1,
        NumericField::G2,
        NumericField::G3,
        NumericField::Improvement,
    ];

    /// The three grade fields, in time order
    pub const GRADES: [NumericField; 3] = [NumericField::G1, NumericField::G2, NumericField::G3];

    pub fn name(&self) -> &'static str {
        match self {
            NumericField::Age => "age",
            NumericField::StudyTime => "studytime",
            NumericField::Failures => "failures",
            NumericField::Absences => "absences",
            NumericField::G1 => "G1",
            NumericField::G2 => "G2",
            NumericField::G3 => "G3",
            NumericField::Improvement => "improvement",
        }
    }

    pub fn value(&self, record: &StudentRecord) -> i64 {
        match self {
            NumericField::Age => i64::from(record.age),
            NumericField::StudyTime => i64::from(record.studytime),
            NumericField::Failures => i64::from(record.failures),
            NumericField::Absences => i64::from(record.absences),
            NumericField::G1 => i64::from(record.g1),
            NumericField::G2 => i64::from(record.g2),
            NumericField::G3 => i64::from(record.g3),
            NumericField::Improvement => record.improvement(),
        }
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Any field a predicate can name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Categorical(CategoricalField),
    Numeric(NumericField),
}

impl FromStr for Field {
    type Err = FilterError;

    /// Field names are matched case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if let Some(f) = CategoricalField::ALL
            .iter()
            .find(|f| f.name().eq_ignore_ascii_case(wanted))
        {
            return Ok(Field::Categorical(*f));
        }
        NumericField::ALL
            .iter()
            .find(|f| f.name().eq_ignore_ascii_case(wanted))
            .map(|f| Field::Numeric(*f))
            .ok_or_else(|| FilterError::UnknownField(wanted.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> StudentRecord {
        StudentRecord {
            school: "GP".into(),
            sex: "F".into(),
            age: 17,
            studytime: 3,
            failures: 1,
            schoolsup: true,
            famsup: false,
            absences: 4,
            g1: 10,
            g2: 12,
            g3: 15,
        }
    }

    #[test]
    fn test_numeric_values() {
        let r = record();
        assert_eq!(NumericField::Age.value(&r), 17);
        assert_eq!(NumericField::G3.value(&r), 15);
        assert_eq!(NumericField::Improvement.value(&r), 5);
    }

    #[test]
    fn test_categorical_values() {
        let r = record();
        assert_eq!(CategoricalField::School.value(&r), "GP");
        assert_eq!(CategoricalField::SchoolSup.value(&r), "yes");
        assert_eq!(CategoricalField::FamSup.value(&r), "no");
    }

    #[test]
    fn test_parse_field_names() {
        assert_eq!("g3".parse::<Field>().unwrap(), Field::Numeric(NumericField::G3));
        assert_eq!(
            "School".parse::<Field>().unwrap(),
            Field::Categorical(CategoricalField::School)
        );
        assert!(matches!(
            "guardian".parse::<Field>(),
            Err(FilterError::UnknownField(name)) if name == "guardian"
        ));
    }
}
