//! Diagnoses assignments to something that has no setter.

use super::WriteRecoveryVerifier;
use crate::diagnostics::DiagnosticSink;
use crate::request::Identifier;
use kestrel_common::diagnostic_codes;
use kestrel_model::{ElementFlags, ElementId, ElementKind, Program, TypeId};

/// Picks the assignment diagnostic from what was found instead of a setter:
///
/// - a method: `ASSIGNMENT_TO_METHOD`
/// - a constant's getter: `ASSIGNMENT_TO_CONST`
/// - a final field's getter, or a top-level getter: `ASSIGNMENT_TO_FINAL`
/// - any other member getter: `ASSIGNMENT_TO_FINAL_NO_SETTER`
/// - nothing: `UNDEFINED_SETTER`, or `UNDEFINED_IDENTIFIER` without a receiver
#[derive(Copy, Clone)]
pub struct AssignmentVerifier<'a> {
    program: &'a Program,
}

impl<'a> AssignmentVerifier<'a> {
    pub const fn new(program: &'a Program) -> Self {
        Self { program }
    }
}

impl WriteRecoveryVerifier for AssignmentVerifier<'_> {
    fn verify(
        &self,
        name: &Identifier,
        recovery: Option<ElementId>,
        receiver_type: Option<TypeId>,
        sink: &mut dyn DiagnosticSink,
    ) {
        let span = name.span;
        let Some(info) = recovery.and_then(|e| self.program.element(e)) else {
            match receiver_type {
                Some(ty) => sink.error(
                    diagnostic_codes::UNDEFINED_SETTER,
                    span,
                    vec![name.name.into(), ty.into()],
                ),
                None => sink.error(
                    diagnostic_codes::UNDEFINED_IDENTIFIER,
                    span,
                    vec![name.name.into()],
                ),
            }
            return;
        };

        let final_field = ElementFlags::FINAL | ElementFlags::SYNTHETIC;
        match info.kind {
            ElementKind::Method => {
                sink.error(diagnostic_codes::ASSIGNMENT_TO_METHOD, span, Vec::new());
            }
            ElementKind::Getter if info.flags.contains(ElementFlags::CONST) => {
                sink.error(diagnostic_codes::ASSIGNMENT_TO_CONST, span, Vec::new());
            }
            ElementKind::Getter if info.flags.contains(final_field) => {
                sink.error(
                    diagnostic_codes::ASSIGNMENT_TO_FINAL,
                    span,
                    vec![name.name.into()],
                );
            }
            ElementKind::Getter => match info.enclosing.and_then(|d| self.program.decl(d)) {
                Some(owner) => sink.error(
                    diagnostic_codes::ASSIGNMENT_TO_FINAL_NO_SETTER,
                    span,
                    vec![name.name.into(), owner.name.into()],
                ),
                None => sink.error(
                    diagnostic_codes::ASSIGNMENT_TO_FINAL,
                    span,
                    vec![name.name.into()],
                ),
            },
            // A setter is never a recovery element.
            ElementKind::Setter => {}
        }
    }
}
