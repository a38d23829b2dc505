//! Typed student records bound from a [`Table`]

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::errors::{DatasetError, DatasetResult};
use super::table::{CellValue, Table};

/// One student's attributes and grades
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentRecord {
    pub school: String,
    pub sex: String,
    pub age: u8,
    pub studytime: u8,
    pub failures: u32,
    #[serde(serialize_with = "serialize_yes_no")]
    pub schoolsup: bool,
    #[serde(serialize_with = "serialize_yes_no")]
    pub famsup: bool,
    pub absences: u32,
    #[serde(rename = "G1")]
    pub g1: i32,
    #[serde(rename = "G2")]
    pub g2: i32,
    #[serde(rename = "G3")]
    pub g3: i32,
}

impl StudentRecord {
    /// Final grade minus first grade
    /// Final grade minus first grade; widened so any pair of grades fits
    pub fn improvement(&self) -> i64 {
        i64::from(self.g3) - i64::from(self.g1)
    }
}

fn serialize_yes_no<S: serde::Serializer>(value: &bool, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(yes_no(*value))
}

/// Render a support flag the way the source file spells it
pub fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Column positions of the fields a [`StudentRecord`] needs
struct RecordBinding {
    school: usize,
    sex: usize,
    age: usize,
    studytime: usize,
    failures: usize,
    schoolsup: usize,
    famsup: usize,
    absences: usize,
    g1: usize,
    g2: usize,
    g3: usize,
}

/// Header names the binding requires
pub const REQUIRED_COLUMNS: [&str; 11] = [
    "school",
    "sex",
    "age",
    "studytime",
    "failures",
    "schoolsup",
    "famsup",
    "absences",
    "G1",
    "G2",
    "G3",
];

impl RecordBinding {
    fn resolve(table: &Table) -> DatasetResult<Self> {
        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|name| table.column_index(name).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(DatasetError::malformed(format!(
                "Missing required columns: {}",
                missing.join(", ")
            )));
        }

        // Presence was checked above.
        let idx = |name: &str| table.column_index(name).unwrap_or_default();
        Ok(Self {
            school: idx("school"),
            sex: idx("sex"),
            age: idx("age"),
            studytime: idx("studytime"),
            failures: idx("failures"),
            schoolsup: idx("schoolsup"),
            famsup: idx("famsup"),
            absences: idx("absences"),
            g1: idx("G1"),
            g2: idx("G2"),
            g3: idx("G3"),
        })
    }

    fn bind(&self, table: &Table, row: usize) -> DatasetResult<StudentRecord> {
        let cell = CellReader { table, row };
        Ok(StudentRecord {
            school: cell.text(self.school, "school")?,
            sex: cell.text(self.sex, "sex")?,
            age: cell.integer(self.age, "age")?,
            studytime: cell.integer(self.studytime, "studytime")?,
            failures: cell.integer(self.failures, "failures")?,
            schoolsup: cell.flag(self.schoolsup, "schoolsup")?,
            famsup: cell.flag(self.famsup, "famsup")?,
            absences: cell.integer(self.absences, "absences")?,
            g1: cell.integer(self.g1, "G1")?,
            g2: cell.integer(self.g2, "G2")?,
            g3: cell.integer(self.g3, "G3")?,
        })
    }
}

struct CellReader<'a> {
    table: &'a Table,
    row: usize,
}

impl CellReader<'_> {
    fn get(&self, column: usize, name: &str) -> DatasetResult<&CellValue> {
        match self.table.cell(self.row, column) {
            Some(cell) if !cell.is_null() => Ok(cell),
            _ => Err(self.invalid(name, "value is missing")),
        }
    }

    fn invalid(&self, name: &str, reason: &str) -> DatasetError {
        DatasetError::malformed(format!(
            "Column '{}' at data row {}: {}",
            name,
            self.row + 1,
            reason
        ))
    }

    fn text(&self, column: usize, name: &str) -> DatasetResult<String> {
        self.get(column, name)?
            .as_text()
            .ok_or_else(|| self.invalid(name, "value is missing"))
    }

    fn integer<T: TryFrom<i64>>(&self, column: usize, name: &str) -> DatasetResult<T> {
        let value = self
            .get(column, name)?
            .as_i64()
            .ok_or_else(|| self.invalid(name, "expected an integer"))?;
        T::try_from(value).map_err(|_| self.invalid(name, "integer out of range"))
    }

    fn flag(&self, column: usize, name: &str) -> DatasetResult<bool> {
        let raw = self.text(column, name)?;
        match raw.trim().to_ascii_lowercase().as_str() {
            "yes" | "true" | "1" => Ok(true),
            "no" | "false" | "0" => Ok(false),
            _ => Err(self.invalid(name, "expected yes/no")),
        }
    }
}

/// The immutable record set for one session
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<StudentRecord>,
    source: PathBuf,
    loaded_at: DateTime<Utc>,
}

impl Dataset {
    /// Bind every table row to a [`StudentRecord`]
    pub fn from_table(table: &Table, source: &Path) -> DatasetResult<Self> {
        let binding = RecordBinding::resolve(table)?;
        let records = (0..table.row_count())
            .map(|row| binding.bind(table, row))
            .collect::<DatasetResult<Vec<_>>>()
            .map_err(|e| e.with_path(source))?;

        Ok(Self::from_records(records, source))
    }

    /// Wrap records that are already typed
    pub fn from_records(records: Vec<StudentRecord>, source: &Path) -> Self {
        Self {
            records,
            source: source.to_path_buf(),
            loaded_at: Utc::now(),
        }
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}
