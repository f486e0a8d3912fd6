//! Program model for the kestrel semantic analyzer.
//!
//! This crate holds the read-only facts the property resolver consults:
//!
//! - **Declarations**: classes, mixins, enums and extensions (`DeclInfo`)
//! - **Elements**: getters, setters and methods (`ElementInfo`)
//! - **Types**: interned `TypeData` behind `TypeId`
//! - **Import prefixes**: `NamespaceInfo`
//!
//! A `Program` is assembled with `ProgramBuilder`, validated once, and then
//! shared immutably. Queries for inheritance (`hierarchy`) and subtyping
//! (`relations`) are methods on `Program`.

mod builder;
mod decl;
mod element;
mod error;
mod format;
mod hierarchy;
mod program;
mod relations;
mod types;

pub use builder::{FieldSpec, MemberSpec, ProgramBuilder};
pub use decl::{DeclId, DeclInfo, DeclKind, NamespaceId, NamespaceInfo, UnitId, UnitInfo};
pub use element::{ElementFlags, ElementId, ElementInfo, ElementKind, Name};
pub use error::{ModelError, Result};
pub use format::TypeFormatter;
pub use hierarchy::{LookupMode, MemberKind};
pub use program::{CoreLibrary, Program, WellKnownNames};
pub use types::{TypeData, TypeId, TypeInterner, TypeParamId, TypeParamInfo};
