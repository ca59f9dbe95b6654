use crate::form::row::Row;

/// Keywords required in a field's caption, and the value that goes there.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub keywords: Vec<String>,
    pub value: String,
}

impl FieldSpec {
    pub fn new(name: &'static str, keywords: &[&str], value: impl Into<String>) -> Self {
        Self {
            name,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            value: value.into(),
        }
    }
}

/// Form fields for one row, in fill order.
///
/// Several tokens per field so a caption still matches after labels merge or reword.
pub fn field_specs(row: &Row) -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("ein", &["ein", "employer"], &row.ein),
        FieldSpec::new("company_name", &["company", "name"], &row.company_name),
        FieldSpec::new("sector", &["sector"], &row.sector),
        FieldSpec::new("address", &["company", "address"], &row.address),
        FieldSpec::new("automation_tool", &["automation", "tool"], &row.automation_tool),
        FieldSpec::new(
            "annual_saving",
            &["annual", "automation", "saving"],
            &row.annual_saving,
        ),
        FieldSpec::new("first_project_date", &["date"], &row.first_project_date),
    ]
}
