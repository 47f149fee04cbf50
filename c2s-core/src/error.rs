use crate::inject::Marker;

/// Error type for schema generation.
///
/// Structural errors are fatal usage errors: a skeleton that lacks the path
/// or marker an operation splices into would otherwise produce silently
/// invalid documentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A fixed splice path is absent from the configured skeleton.
    MissingPath {
        kind: &'static str,
        path: &'static str,
    },
    /// A marker-based operation found no marker node in the skeleton.
    MarkerNotFound { kind: &'static str, marker: Marker },
    /// The skeleton root is not a JSON object.
    NotAnObject { kind: &'static str },
    /// A skeleton-set document failed to parse.
    ConfigParse(String),
}

impl std::fmt::Display for SchemaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaError::MissingPath { kind, path } => {
                write!(f, "{kind} skeleton is missing expected path '{path}'")
            }
            SchemaError::MarkerNotFound { kind, marker } => {
                write!(f, "{kind} skeleton has no '{}' marker", marker.flag())
            }
            SchemaError::NotAnObject { kind } => {
                write!(f, "{kind} skeleton root is not an object")
            }
            SchemaError::ConfigParse(msg) => write!(f, "Schema config parse error: {msg}"),
        }
    }
}

impl std::error::Error for SchemaError {}
