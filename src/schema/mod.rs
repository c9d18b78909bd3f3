//! Survey schema: column catalog and per-wave field definitions.

pub mod fields;
pub mod variables;

pub use fields::{FieldPresence, FollowUpField, SurveyField, Wave1Field};
pub use variables::{CareerItemColumns, FollowUpColumns, VariableCatalog, Wave1Columns};
