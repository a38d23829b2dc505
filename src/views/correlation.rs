//! Pairwise correlation matrix

use serde::Serialize;

use crate::filter::{NumericField, Subset};

use super::stats::pearson;

/// Fields of the correlation heatmap, in display order
pub const CORRELATION_FIELDS: [NumericField; 7] = [
    NumericField::G1,
    NumericField::G2,
    NumericField::G3,
    NumericField::StudyTime,
    NumericField::Failures,
    NumericField::Absences,
    NumericField::Age,
];

/// Symmetric matrix of Pearson coefficients; `None` marks undefined cells
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub fields: Vec<NumericField>,
    pub cells: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    pub fn compute(subset: &Subset<'_>, fields: &[NumericField]) -> Self {
        let columns: Vec<Vec<i64>> = fields.iter().map(|f| subset.values(*f)).collect();
        let n = fields.len();

        let mut cells = vec![vec![None; n]; n];
        for i in 0..n {
            for j in i..n {
                let r = pearson(&columns[i], &columns[j]);
                cells[i][j] = r;
                cells[j][i] = r;
            }
        }

        Self {
            fields: fields.to_vec(),
            cells,
        }
    }

    /// Coefficient between two fields, if both are in the matrix
    pub fn get(&self, a: NumericField, b: NumericField) -> Option<f64> {
        let i = self.fields.iter().position(|f| *f == a)?;
        let j = self.fields.iter().position(|f| *f == b)?;
        self.cells[i][j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::StudentRecord;

    fn record(age: u8, g1: i32, g3: i32) -> StudentRecord {
        StudentRecord {
            school: "GP".into(),
            sex: "M".into(),
            age,
            studytime: 2,
            failures: 0,
            schoolsup: false,
            famsup: false,
            absences: 0,
            g1,
            g2: g1 + 1,
            g3,
        }
    }

    #[test]
    fn test_matrix_is_symmetric_with_unit_diagonal() {
        let records = vec![record(15, 8, 10), record(16, 12, 11), record(18, 14, 17)];
        let subset = Subset::all(&records);
        let m = CorrelationMatrix::compute(&subset, &CORRELATION_FIELDS);

        assert_eq!(m.cells.len(), CORRELATION_FIELDS.len());
        assert!((m.get(NumericField::G1, NumericField::G1).unwrap() - 1.0).abs() < 1e-12);
        assert_eq!(
            m.get(NumericField::G1, NumericField::G3),
            m.get(NumericField::G3, NumericField::G1)
        );
        assert!((m.get(NumericField::G1, NumericField::G2).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_constant_field_is_undefined() {
        let records = vec![record(15, 8, 10), record(16, 12, 11)];
        let subset = Subset::all(&records);
        let m = CorrelationMatrix::compute(&subset, &CORRELATION_FIELDS);

        assert_eq!(m.get(NumericField::StudyTime, NumericField::G3), None);
        assert_eq!(m.get(NumericField::StudyTime, NumericField::StudyTime), None);
    }

    #[test]
    fn test_field_outside_matrix() {
        let subset = Subset::default();
        let m = CorrelationMatrix::compute(&subset, &[NumericField::G1]);
        assert_eq!(m.get(NumericField::G1, NumericField::Improvement), None);
        assert_eq!(m.get(NumericField::G1, NumericField::G1), None);
    }
}
