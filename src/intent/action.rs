use crate::intent::model::{FieldUpdate, StyleIntent};

#[derive(Debug, Clone)]
pub enum IntentAction {
    /// Replace the whole record (bulk set or load).
    Set(StyleIntent),
    /// Replace one field, leaving the others unchanged.
    Update(FieldUpdate),
    /// Back to the all-null initial record.
    Reset,
}
