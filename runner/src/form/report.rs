use crate::resolver::FillMethod;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedBy {
    Label,
    Fallback,
    Unresolved,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldReport {
    pub field: &'static str,
    pub keywords: Vec<String>,
    pub resolved_by: ResolvedBy,
    pub index: Option<usize>,
    pub method: Option<FillMethod>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowReport {
    pub row_number: usize,
    pub fields: Vec<FieldReport>,
}

impl RowReport {
    pub fn filled_count(&self) -> usize {
        self.fields
            .iter()
            .filter(|f| f.resolved_by != ResolvedBy::Unresolved)
            .count()
    }

    pub fn unresolved(&self) -> impl Iterator<Item = &FieldReport> {
        self.fields
            .iter()
            .filter(|f| f.resolved_by == ResolvedBy::Unresolved)
    }

    pub fn field(&self, name: &str) -> Option<&FieldReport> {
        self.fields.iter().find(|f| f.field == name)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunReport {
    pub rows: Vec<RowReport>,
}

impl RunReport {
    pub fn total_unresolved(&self) -> usize {
        self.rows.iter().map(|r| r.unresolved().count()).sum()
    }
}
