//! Raw tabular data with per-column type inference
//!
//! The table keeps every column of the source file, in header order. The
//! data service serves it as-is; the typed [`super::StudentRecord`] binding
//! only reads the columns it needs.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Inferred type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// Every non-empty cell is a signed 64-bit integer
    Integer,
    /// Every non-empty cell is a number
    Float,
    /// Anything else
    Text,
}

impl ColumnType {
    /// Infer the narrowest type that holds every raw cell of a column
    pub fn infer<'a>(cells: impl Iterator<Item = &'a str>) -> Self {
        let mut inferred = ColumnType::Integer;

        for cell in cells.filter(|c| !c.is_empty()) {
            match inferred {
                ColumnType::Integer if cell.parse::<i64>().is_ok() => {}
                ColumnType::Integer | ColumnType::Float if cell.parse::<f64>().is_ok() => {
                    inferred = ColumnType::Float;
                }
                _ => return ColumnType::Text,
            }
        }

        inferred
    }
}

/// A single typed cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Integer(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    /// Convert a raw cell according to its column type
    fn from_raw(raw: &str, column_type: ColumnType) -> Self {
        if raw.is_empty() {
            return CellValue::Null;
        }

        match column_type {
            ColumnType::Integer => raw
                .parse()
                .map(CellValue::Integer)
                .unwrap_or_else(|_| CellValue::Text(raw.to_string())),
            ColumnType::Float => raw
                .parse()
                .map(CellValue::Float)
                .unwrap_or_else(|_| CellValue::Text(raw.to_string())),
            ColumnType::Text => CellValue::Text(raw.to_string()),
        }
    }

    /// Integer view of the cell; floats qualify only when integral
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            CellValue::Integer(v) => Some(*v),
            CellValue::Float(v) if v.is_finite() && v.fract() == 0.0 => Some(*v as i64),
            CellValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Text view of the cell
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Null => None,
            CellValue::Integer(v) => Some(v.to_string()),
            CellValue::Float(v) => Some(v.to_string()),
            CellValue::Text(s) => Some(s.clone()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Null => serializer.serialize_none(),
            CellValue::Integer(v) => serializer.serialize_i64(*v),
            CellValue::Float(v) if v.is_finite() => serializer.serialize_f64(*v),
            CellValue::Float(_) => serializer.serialize_none(),
            CellValue::Text(s) => serializer.serialize_str(s),
        }
    }
}

/// Header plus typed rows
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    column_types: Vec<ColumnType>,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Build a table from raw string cells, inferring column types.
    ///
    /// Every row must have exactly `headers.len()` cells.
    pub fn from_raw(headers: Vec<String>, raw_rows: Vec<Vec<String>>) -> Self {
        let column_types: Vec<ColumnType> = (0..headers.len())
            .map(|col| ColumnType::infer(raw_rows.iter().map(|row| row[col].as_str())))
            .collect();

        let rows = raw_rows
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&column_types)
                    .map(|(raw, ty)| CellValue::from_raw(raw, *ty))
                    .collect()
            })
            .collect();

        Self {
            headers,
            column_types,
            rows,
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn column_types(&self) -> &[ColumnType] {
        &self.column_types
    }

    /// Position of a column by exact header name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell at (row, column)
    pub fn cell(&self, row: usize, column: usize) -> Option<&CellValue> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// Rows as header-keyed views, in file order
    pub fn rows(&self) -> impl Iterator<Item = TableRow<'_>> {
        self.rows.iter().map(move |cells| TableRow {
            headers: &self.headers,
            cells,
        })
    }
}

/// One row, serialized as a JSON object whose keys follow header order
#[derive(Debug, Clone, Copy)]
pub struct TableRow<'a> {
    headers: &'a [String],
    cells: &'a [CellValue],
}

impl<'a> TableRow<'a> {
    pub fn get(&self, name: &str) -> Option<&'a CellValue> {
        self.headers
            .iter()
            .position(|h| h == name)
            .and_then(|i| self.cells.get(i))
    }
}

impl Serialize for TableRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.headers.len()))?;
        for (header, cell) in self.headers.iter().zip(self.cells) {
            map.serialize_entry(header, cell)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_infer_integer_float_text() {
        assert_eq!(ColumnType::infer(["1", "2", ""].into_iter()), ColumnType::Integer);
        assert_eq!(ColumnType::infer(["1", "2.5"].into_iter()), ColumnType::Float);
        assert_eq!(ColumnType::infer(["1", "GP"].into_iter()), ColumnType::Text);
        assert_eq!(ColumnType::infer(std::iter::empty()), ColumnType::Integer);
    }

    #[test]
    fn test_row_serializes_in_header_order() {
        let table = Table::from_raw(
            vec!["school".into(), "age".into(), "ratio".into()],
            raw(&[&["GP", "18", "0.5"], &["MS", "", "1"]]),
        );

        let rows: Vec<String> = table
            .rows()
            .map(|r| serde_json::to_string(&r).unwrap())
            .collect();

        assert_eq!(rows[0], r#"{"school":"GP","age":18,"ratio":0.5}"#);
        assert_eq!(rows[1], r#"{"school":"MS","age":null,"ratio":1.0}"#);
    }

    #[test]
    fn test_integral_float_converts_to_integer() {
        assert_eq!(CellValue::Float(12.0).as_i64(), Some(12));
        assert_eq!(CellValue::Float(12.5).as_i64(), None);
        assert_eq!(CellValue::Null.as_i64(), None);
    }

    #[test]
    fn test_column_lookup() {
        let table = Table::from_raw(vec!["G1".into(), "G3".into()], raw(&[&["10", "15"]]));
        assert_eq!(table.column_index("G3"), Some(1));
        assert_eq!(table.column_index("g3"), None);
        assert_eq!(table.cell(0, 1), Some(&CellValue::Integer(15)));
        assert_eq!(table.rows().next().unwrap().get("G1"), Some(&CellValue::Integer(10)));
    }
}
