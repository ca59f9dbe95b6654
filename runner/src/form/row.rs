use crate::errors::RunError;
use crate::utils::{mask_sensitive, matches_all_keywords};
use serde::Deserialize;
use std::fmt;
use std::io::Read;
use std::path::Path;

/// One CSV data row. Columns are read by position.
#[derive(Clone, PartialEq, Deserialize)]
pub struct Row {
    pub ein: String,
    pub company_name: String,
    pub sector: String,
    pub address: String,
    pub automation_tool: String,
    pub annual_saving: String,
    pub first_project_date: String,
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Row")
            .field("ein", &self.ein)
            .field("company_name", &self.company_name)
            .field("sector", &self.sector)
            .field("address", &self.address)
            .field("automation_tool", &self.automation_tool)
            .field("annual_saving", &self.annual_saving)
            .field("first_project_date", &self.first_project_date)
            .field("username", &mask_sensitive(&self.username))
            .field("password", &"***")
            .finish()
    }
}

/// Header keywords per column, in file order. Only consulted in strict mode.
pub const COLUMNS: [&[&str]; 9] = [
    &["ein"],
    &["company", "name"],
    &["sector"],
    &["address"],
    &["tool"],
    &["saving"],
    &["date"],
    &["user"],
    &["password"],
];

/// Checks the header row against `COLUMNS`.
pub fn check_headers<S: AsRef<str>>(headers: &[S]) -> Result<(), RunError> {
    if headers.len() != COLUMNS.len() {
        return Err(RunError::Schema(format!(
            "expected {} columns, found {}",
            COLUMNS.len(),
            headers.len()
        )));
    }

    for (i, (header, keywords)) in headers.iter().zip(COLUMNS.iter()).enumerate() {
        if !matches_all_keywords(header.as_ref(), *keywords) {
            return Err(RunError::Schema(format!(
                "column {} '{}' does not look like {:?}",
                i + 1,
                header.as_ref(),
                keywords
            )));
        }
    }

    Ok(())
}

/// Reads every data row, skipping the header.
///
/// A row with the wrong number of columns aborts the load.
pub fn read_rows<R: Read>(reader: R, strict_headers: bool) -> Result<Vec<Row>, RunError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    if strict_headers {
        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
        check_headers(&headers)?;
    }

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        if record.len() != COLUMNS.len() {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            return Err(RunError::Csv(format!(
                "line {}: expected {} columns, found {}",
                line,
                COLUMNS.len(),
                record.len()
            )));
        }
        let row: Row = record.deserialize(None)?;
        rows.push(row);
    }

    Ok(rows)
}

pub fn load_rows(path: impl AsRef<Path>, strict_headers: bool) -> Result<Vec<Row>, RunError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .map_err(|e| RunError::Csv(format!("{}: {}", path.display(), e)))?;
    let rows = read_rows(file, strict_headers)?;
    tracing::info!("📄 {} rows loaded from {}", rows.len(), path.display());
    Ok(rows)
}
