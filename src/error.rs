use thiserror::Error;

/// Failures while loading or parsing a rule-definition file.
///
/// All of these are load-time errors; once a [`crate::Definition`] exists, the
/// catalog it carries is internally consistent.
#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("cannot read definition: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: malformed definition line: {content:?}")]
    MalformedLine { line: usize, content: String },

    #[error("line {line}: unknown comparison operator {op:?}")]
    UnknownOperator { line: usize, op: char },

    #[error("line {line}: rule results in unknown state {name:?}")]
    UnknownState { line: usize, name: String },

    #[error("line {line}: rule given before any state")]
    RuleBeforeState { line: usize },

    #[error("duplicate state {0:?}")]
    DuplicateState(String),

    #[error("definition has no {0:?} state")]
    MissingDefault(String),
}

/// A cell edit named a state that is not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown state {0:?}")]
pub struct UnknownState(pub String);
