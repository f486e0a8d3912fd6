use thiserror::Error;

/// Structural problems found while building a `Program`.
///
/// These are rejected up front so the frozen model never has to represent
/// them; semantic problems in *uses* of the model are diagnostics instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("'{decl}' already declares a member named '{name}'")]
    DuplicateMember { decl: String, name: String },

    #[error("'{decl}' can't extend '{target}' because it isn't a class")]
    InvalidSuperclass { decl: String, target: String },

    #[error("'{decl}' can't mix in '{target}' because it isn't a mixin or class")]
    InvalidMixin { decl: String, target: String },

    #[error("'{target}' can't be used as a supertype of '{decl}'")]
    InvalidSupertype { decl: String, target: String },

    #[error("'{decl}' is a {kind} and can't have {what}")]
    UnsupportedRelation {
        decl: String,
        kind: &'static str,
        what: &'static str,
    },

    #[error("'{decl}' inherits from itself")]
    InheritanceCycle { decl: String },

    #[error("static member '{name}' can't be abstract")]
    AbstractStatic { name: String },

    #[error("no {what} with id {id} in this program")]
    UnknownId { what: &'static str, id: u32 },
}

pub type Result<T, E = ModelError> = std::result::Result<T, E>;
