pub mod fields;
pub mod login;
pub mod report;
pub mod row;
pub mod runner;

pub use fields::{field_specs, FieldSpec};
pub use login::login;
pub use report::{FieldReport, ResolvedBy, RowReport, RunReport};
pub use row::{load_rows, read_rows, Row};
pub use runner::FormRunner;
