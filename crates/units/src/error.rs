use thiserror::Error;

/// Failure to interpret a user-supplied unit selector
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    #[error("unknown {kind} unit index {index}")]
    UnknownIndex { kind: &'static str, index: i32 },

    #[error("unknown {kind} unit `{name}`")]
    UnknownName { kind: &'static str, name: String },
}
