//! Error type shared by every stage of the export pipeline.

use shared::{ObjectId, ObjectKind};

pub type Result<T> = std::result::Result<T, ExportError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExportError {
    #[error("unsupported operand types for {op}: {lhs} and {rhs}")]
    UnsupportedOperand {
        op: &'static str,
        lhs: &'static str,
        rhs: &'static str,
    },
    #[error("{0} of an empty sequence")]
    EmptySequence(&'static str),
    #[error("generator for {expected} objects invoked on {object} ({found})")]
    InvalidObjectKind {
        object: ObjectId,
        expected: ObjectKind,
        found: ObjectKind,
    },
    #[error("scene has no drawable geometry")]
    EmptyScene,
    #[error("edge {edge} of {object} references vertex {index}, but the mesh has {vertex_count}")]
    VertexOutOfRange {
        object: ObjectId,
        edge: usize,
        index: usize,
        vertex_count: usize,
    },
}
