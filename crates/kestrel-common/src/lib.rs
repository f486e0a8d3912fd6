//! Common types and utilities for the kestrel semantic analyzer.
//!
//! This crate provides foundational types used across all kestrel crates:
//! - String interning (`Atom`, `Interner`)
//! - Source spans (`Span`)
//! - Diagnostic codes, message templates and the rendered `Diagnostic`

// String interning for identifier deduplication
pub mod interner;
pub use interner::{Atom, Interner};

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::Span;

pub mod diagnostics;
pub use diagnostics::{
    DIAGNOSTIC_MESSAGES, Diagnostic, DiagnosticCategory, DiagnosticMessage, diagnostic_codes,
    diagnostic_messages, format_message, get_message_template,
};
