//! Generated report model and its JSON interchange format.
//!
//! A report is a set of named sheets. On the wire a report is a
//! columns-oriented JSON object, one entry per sheet:
//!
//! ```json
//! { "Balance Sheet": { "2019": { "Assets": 1200.0, "Debt": 300.0 } } }
//! ```
//!
//! Sheet and column order follow the JSON object order; row labels are the
//! union of the per-column label sets in first-seen order.

use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

/// A single table cell.
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Empty,
}

impl CellValue {
    fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(CellValue::Empty),
            Value::Number(n) => Ok(CellValue::Number(n.as_f64().unwrap_or(0.0))),
            Value::String(s) => Ok(CellValue::Text(s.clone())),
            Value::Bool(b) => Ok(CellValue::Text(b.to_string())),
            other => bail!("unsupported cell value: {other}"),
        }
    }

    fn to_json(&self) -> Value {
        match self {
            CellValue::Number(n) => serde_json::Number::from_f64(*n)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            CellValue::Text(s) => Value::String(s.clone()),
            CellValue::Empty => Value::Null,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Empty => Ok(()),
        }
    }
}

/// One named data sheet: ordered columns, labelled rows.
#[derive(Clone, Debug, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub columns: Vec<String>,
    pub row_labels: Vec<String>,
    /// Indexed as `rows[row][column]`, dense; absent cells are `Empty`.
    pub rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    fn from_json(name: &str, value: &Value) -> Result<Self> {
        let Value::Object(columns_map) = value else {
            bail!("sheet {name:?} is not a JSON object");
        };

        let columns: Vec<String> = columns_map.keys().cloned().collect();
        let mut row_labels: Vec<String> = Vec::new();
        for column in columns_map.values() {
            let Value::Object(cells) = column else {
                bail!("column in sheet {name:?} is not a JSON object");
            };
            for label in cells.keys() {
                if !row_labels.iter().any(|l| l == label) {
                    row_labels.push(label.clone());
                }
            }
        }

        let mut rows = vec![vec![CellValue::Empty; columns.len()]; row_labels.len()];
        for (col, column) in columns_map.values().enumerate() {
            let Value::Object(cells) = column else {
                unreachable!("validated above");
            };
            for (label, cell) in cells {
                let row = row_labels
                    .iter()
                    .position(|l| l == label)
                    .context("row label vanished during sheet construction")?;
                rows[row][col] = CellValue::from_json(cell)
                    .with_context(|| format!("sheet {name:?}, column {col}, row {label:?}"))?;
            }
        }

        Ok(Self {
            name: name.to_string(),
            columns,
            row_labels,
            rows,
        })
    }

    fn to_json(&self) -> Value {
        let mut columns_map = Map::new();
        for (col, column) in self.columns.iter().enumerate() {
            let mut cells = Map::new();
            for (row, label) in self.row_labels.iter().enumerate() {
                cells.insert(label.clone(), self.rows[row][col].to_json());
            }
            columns_map.insert(column.clone(), Value::Object(cells));
        }
        Value::Object(columns_map)
    }

    pub fn row_count(&self) -> usize {
        self.row_labels.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

/// A generated report: one or more sheets plus the company it was built for.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedReport {
    pub company: String,
    pub sheets: Vec<Sheet>,
}

impl GeneratedReport {
    /// Load a report from a columns-oriented JSON file. The company name is
    /// taken from the file stem.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading report {}", path.display()))?;
        let company = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "report".to_string());
        Self::from_json_str(&company, &raw)
            .with_context(|| format!("parsing report {}", path.display()))
    }

    pub fn from_json_str(company: &str, raw: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(raw).context("report is not valid JSON")?;
        let Value::Object(sheets_map) = value else {
            bail!("report root is not a JSON object");
        };
        let mut sheets = Vec::with_capacity(sheets_map.len());
        for (name, sheet) in &sheets_map {
            sheets.push(Sheet::from_json(name, sheet)?);
        }
        Ok(Self {
            company: company.to_string(),
            sheets,
        })
    }

    /// Serialize back to the interchange format.
    pub fn to_json_dict(&self) -> Value {
        let mut sheets_map = Map::new();
        for sheet in &self.sheets {
            sheets_map.insert(sheet.name.clone(), sheet.to_json());
        }
        Value::Object(sheets_map)
    }

    pub fn sheet_names(&self) -> impl Iterator<Item = &str> {
        self.sheets.iter().map(|sheet| sheet.name.as_str())
    }
}
