//! `expr.name` and `expr?.name` on plain values.

use crate::diagnostics::DiagnosticSink;
use crate::request::AccessRequest;
use crate::resolver::PropertyElementResolver;
use crate::result::ResolutionResult;
use crate::services::PropertyQuery;
use kestrel_common::{Span, diagnostic_codes};
use kestrel_model::{TypeData, TypeId};
use tracing::trace;

/// What the receiver type allows before any lookup happens.
pub(crate) enum ReceiverShape {
    /// Member lookup proceeds on this type.
    Lookup(TypeId),
    /// `dynamic` or `Never`: anything goes, nothing is bound.
    Unchecked,
    /// `void`: reported, nothing is bound.
    Void,
}

impl PropertyElementResolver<'_> {
    /// Widen type parameters to their bound, screen out `dynamic`, `Never`
    /// and `void`, and strip nullability for `?.`.
    pub(crate) fn receiver_shape(
        &self,
        static_type: TypeId,
        is_null_aware: bool,
    ) -> ReceiverShape {
        let program = self.ctx.program;
        let widened = program.resolve_to_bound(static_type);
        match program.type_data(widened) {
            TypeData::Dynamic | TypeData::Never => return ReceiverShape::Unchecked,
            TypeData::Void => return ReceiverShape::Void,
            _ => {}
        }
        if !is_null_aware {
            return ReceiverShape::Lookup(widened);
        }
        // `null?.x` never evaluates `x`.
        let promoted = program.promote_to_non_null(widened);
        match program.type_data(promoted) {
            TypeData::Never => ReceiverShape::Unchecked,
            _ => ReceiverShape::Lookup(promoted),
        }
    }

    pub(crate) fn report_void_receiver(&self, span: Span, sink: &mut dyn DiagnosticSink) {
        sink.error(diagnostic_codes::USE_OF_VOID_RESULT, span, Vec::new());
    }

    pub(crate) fn resolve_expression_property(
        &self,
        static_type: TypeId,
        request: &AccessRequest,
        sink: &mut dyn DiagnosticSink,
    ) -> ResolutionResult {
        let mut result = ResolutionResult::default();
        let property = &request.property;
        let receiver_type = match self.receiver_shape(static_type, request.is_null_aware) {
            ReceiverShape::Lookup(ty) => ty,
            ReceiverShape::Unchecked => {
                trace!(static_type = static_type.0, "unchecked receiver");
                return result;
            }
            ReceiverShape::Void => {
                self.report_void_receiver(property.span, sink);
                return result;
            }
        };

        let program = self.ctx.program;
        let query = PropertyQuery {
            receiver: &request.target,
            receiver_type,
            name: *property,
            unit: self.ctx.unit,
            is_operator: false,
        };
        let lookup = self.ctx.services.properties.resolve(&query, sink);
        let getter = lookup.getter.map(|e| self.normalize(e));
        let setter = lookup.setter.map(|e| self.normalize(e));

        if request.has_read {
            result.read.requested = getter;
            if lookup.needs_getter_error() {
                let is_call = property.name == program.core().names.call;
                if is_call && program.is_function_like(receiver_type) {
                    trace!("call on a function value");
                } else {
                    sink.error(
                        diagnostic_codes::UNDEFINED_GETTER,
                        property.span,
                        vec![property.name.into(), receiver_type.into()],
                    );
                }
            }
        }

        if request.has_write {
            result.write.requested = setter;
            if lookup.needs_setter_error() {
                self.ctx
                    .services
                    .write_verifier
                    .verify(property, getter, Some(receiver_type), sink);
                result.write.recovery = getter;
            }
        }

        result
    }
}
