//! `target[index]`: the `[]` operator on the read side, `[]=` on the write
//! side.

use super::expression::ReceiverShape;
use super::super_reference::SuperLookup;
use crate::diagnostics::DiagnosticSink;
use crate::request::{Identifier, IndexRequest, SuperContext};
use crate::resolver::PropertyElementResolver;
use crate::result::ResolutionResult;
use crate::services::PropertyQuery;
use kestrel_common::diagnostic_codes;
use kestrel_model::{DeclId, ElementId, MemberKind, Name, TypeId};

impl PropertyElementResolver<'_> {
    fn index_operators(&self, request: &IndexRequest) -> (Identifier, Identifier) {
        let names = self.ctx.program.core().names;
        (
            Identifier::new(names.index, request.brackets),
            Identifier::new(names.index_set, request.brackets),
        )
    }

    pub(crate) fn resolve_expression_index(
        &self,
        static_type: TypeId,
        request: &IndexRequest,
        sink: &mut dyn DiagnosticSink,
    ) -> ResolutionResult {
        let mut result = ResolutionResult::default();
        let receiver_type = match self.receiver_shape(static_type, request.is_null_aware) {
            ReceiverShape::Lookup(ty) => ty,
            ReceiverShape::Unchecked => return result,
            ReceiverShape::Void => {
                self.report_void_receiver(request.brackets, sink);
                return result;
            }
        };

        let (read_op, write_op) = self.index_operators(request);
        if request.has_read {
            result.read.requested = self.value_operator(request, receiver_type, &read_op, sink);
        }
        if request.has_write {
            result.write.requested = self.value_operator(request, receiver_type, &write_op, sink);
        }
        result
    }

    fn value_operator(
        &self,
        request: &IndexRequest,
        receiver_type: TypeId,
        operator: &Identifier,
        sink: &mut dyn DiagnosticSink,
    ) -> Option<ElementId> {
        let query = PropertyQuery {
            receiver: &request.target,
            receiver_type,
            name: *operator,
            unit: self.ctx.unit,
            is_operator: true,
        };
        let lookup = self.ctx.services.properties.resolve(&query, sink);
        if lookup.needs_getter_error() {
            sink.error(
                diagnostic_codes::UNDEFINED_OPERATOR,
                operator.span,
                vec![operator.name.into(), receiver_type.into()],
            );
        }
        lookup.getter.map(|e| self.normalize(e))
    }

    pub(crate) fn resolve_override_index(
        &self,
        extension: DeclId,
        extension_name: &Identifier,
        receiver_type: TypeId,
        request: &IndexRequest,
        sink: &mut dyn DiagnosticSink,
    ) -> ResolutionResult {
        let mut result = ResolutionResult::default();
        if request.is_cascaded {
            sink.error(
                diagnostic_codes::EXTENSION_OVERRIDE_WITH_CASCADE,
                extension_name.span,
                Vec::new(),
            );
        }

        let (read_op, write_op) = self.index_operators(request);
        if request.has_read {
            result.read.requested =
                self.override_operator(extension, extension_name, receiver_type, &read_op, sink);
        }
        if request.has_write {
            result.write.requested =
                self.override_operator(extension, extension_name, receiver_type, &write_op, sink);
        }
        result
    }

    fn override_operator(
        &self,
        extension: DeclId,
        extension_name: &Identifier,
        receiver_type: TypeId,
        operator: &Identifier,
        sink: &mut dyn DiagnosticSink,
    ) -> Option<ElementId> {
        let found = self
            .ctx
            .services
            .overrides
            .override_member(extension, receiver_type, operator.name, self.ctx.unit)
            .getter;
        if found.is_none() {
            sink.error(
                diagnostic_codes::UNDEFINED_EXTENSION_OPERATOR,
                operator.span,
                vec![operator.name.into(), extension_name.name.into()],
            );
        }
        found.map(|e| self.normalize(e))
    }

    pub(crate) fn resolve_super_index(
        &self,
        context: SuperContext,
        this_type: Option<TypeId>,
        request: &IndexRequest,
        sink: &mut dyn DiagnosticSink,
    ) -> ResolutionResult {
        let mut result = ResolutionResult::default();
        let Some((class, this_type)) = self.super_class(context, this_type) else {
            return result;
        };
        let (read_op, write_op) = self.index_operators(request);

        if request.has_read {
            result.read.requested = self.super_operator(class, this_type, &read_op, sink);
        }
        if request.has_write {
            result.write.requested = self.super_operator(class, this_type, &write_op, sink);
        }
        result
    }

    fn super_operator(
        &self,
        class: DeclId,
        this_type: TypeId,
        operator: &Identifier,
        sink: &mut dyn DiagnosticSink,
    ) -> Option<ElementId> {
        let name = Name::new(operator.name, self.ctx.unit);
        match self.lookup_super(class, &name, MemberKind::Method) {
            SuperLookup::Concrete(element) => Some(self.normalize(element)),
            SuperLookup::Abstract(element) => {
                self.report_abstract_super_member(operator, element, sink);
                Some(self.normalize(element))
            }
            SuperLookup::Missing => {
                sink.error(
                    diagnostic_codes::UNDEFINED_SUPER_OPERATOR,
                    operator.span,
                    vec![operator.name.into(), this_type.into()],
                );
                None
            }
        }
    }
}

