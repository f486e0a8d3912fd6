//! Lazy diagnostics for member resolution.
//!
//! Resolution records structured `PendingDiagnostic`s (code, span, raw
//! arguments) and leaves message formatting to `render`, so a resolution
//! that is thrown away costs no string work.

use kestrel_common::{Atom, Diagnostic, Span, format_message, get_message_template};
use kestrel_model::{Program, TypeFormatter, TypeId};
use std::sync::Arc;

// =============================================================================
// Lazy Diagnostic Arguments
// =============================================================================

/// Argument for a diagnostic message template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticArg {
    /// A type, formatted with `TypeFormatter`
    Type(TypeId),
    /// An interned name
    Atom(Atom),
    String(Arc<str>),
    Number(usize),
}

macro_rules! impl_from_diagnostic_arg {
    ($($source:ty => $variant:ident),* $(,)?) => {
        $(impl From<$source> for DiagnosticArg {
            fn from(v: $source) -> Self { Self::$variant(v) }
        })*
    };
}

impl_from_diagnostic_arg! {
    TypeId => Type,
    Atom   => Atom,
    usize  => Number,
}

impl From<&str> for DiagnosticArg {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for DiagnosticArg {
    fn from(s: String) -> Self {
        Self::String(s.into())
    }
}

/// A diagnostic that hasn't been rendered yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingDiagnostic {
    pub code: u32,
    pub span: Span,
    pub args: Vec<DiagnosticArg>,
}

impl PendingDiagnostic {
    pub fn error(code: u32, span: Span, args: Vec<DiagnosticArg>) -> Self {
        Self { code, span, args }
    }

    /// Format the message and attach the file name.
    pub fn render(&self, program: &Program, file: &str) -> Diagnostic {
        let formatter = TypeFormatter::new(program);
        let args: Vec<String> = self
            .args
            .iter()
            .map(|arg| match arg {
                DiagnosticArg::Type(ty) => formatter.format(*ty),
                DiagnosticArg::Atom(atom) => program.name_of(*atom).to_string(),
                DiagnosticArg::String(s) => s.to_string(),
                DiagnosticArg::Number(n) => n.to_string(),
            })
            .collect();
        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
        let template = get_message_template(self.code).unwrap_or("Unknown diagnostic.");
        Diagnostic::error(
            file.to_string(),
            self.span.start,
            self.span.len(),
            format_message(template, &arg_refs),
            self.code,
        )
    }
}

// =============================================================================
// Sinks
// =============================================================================

/// Receives diagnostics as resolution produces them.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: PendingDiagnostic);

    fn error(&mut self, code: u32, span: Span, args: Vec<DiagnosticArg>) {
        self.report(PendingDiagnostic::error(code, span, args));
    }
}

impl DiagnosticSink for Vec<PendingDiagnostic> {
    fn report(&mut self, diagnostic: PendingDiagnostic) {
        self.push(diagnostic);
    }
}

/// Collects diagnostics for one unit, in emission order.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<PendingDiagnostic>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> &[PendingDiagnostic] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<PendingDiagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    pub fn codes(&self) -> Vec<u32> {
        self.diagnostics.iter().map(|d| d.code).collect()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn render(&self, program: &Program, file: &str) -> Vec<Diagnostic> {
        self.diagnostics
            .iter()
            .map(|d| d.render(program, file))
            .collect()
    }
}

impl DiagnosticSink for DiagnosticCollector {
    fn report(&mut self, diagnostic: PendingDiagnostic) {
        tracing::debug!(code = diagnostic.code, start = diagnostic.span.start, "diagnostic");
        self.diagnostics.push(diagnostic);
    }
}

#[cfg(test)]
#[path = "../tests/diagnostics_tests.rs"]
mod tests;
