//! Property element resolution for the kestrel semantic analyzer.
//!
//! Given one member access site (`a.b`, `a?.b`, `a..b`, `super.b`,
//! `E(a).b`, `prefix.b`, `a[i]`) and a frozen `Program`, the resolver binds
//! the read and write sides of the access to elements and reports what is
//! wrong with it. It never aborts: every call returns a `ResolutionResult`,
//! possibly empty, and all problems go to the caller's `DiagnosticSink`.
//!
//! ```text
//! AccessRequest ──► TargetKind::classify ──► strategy ──► ResolutionResult
//!                                              │
//!                                              └──► DiagnosticSink
//! ```
//!
//! Collaborators (hierarchy queries, general property lookup, override
//! lookup, write-recovery reporting, element views) are reached through
//! the traits in `services`, so each can be replaced in tests.

mod classify;
mod context;
pub mod diagnostics;
mod options;
mod request;
mod resolver;
mod result;
pub mod services;
mod strategies;

pub use classify::TargetKind;
pub use context::ResolverContext;
pub use diagnostics::{DiagnosticArg, DiagnosticCollector, DiagnosticSink, PendingDiagnostic};
pub use options::{NullSafetyMode, OptionsError, ResolverOptions};
pub use request::{
    AccessRequest, Identifier, IdentifierBinding, IndexRequest, SuperContext, TargetExpr,
};
pub use resolver::PropertyElementResolver;
pub use result::{ElementSlot, ResolutionResult};
pub use services::{LookupResult, Services};

#[cfg(test)]
#[path = "../tests/resolver_tests.rs"]
mod tests;
