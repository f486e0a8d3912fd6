//! `Extension(receiver).member`: an explicitly applied extension.

use crate::diagnostics::DiagnosticSink;
use crate::request::{AccessRequest, Identifier};
use crate::resolver::PropertyElementResolver;
use crate::result::ResolutionResult;
use kestrel_common::diagnostic_codes;
use kestrel_model::{DeclId, ElementId, TypeId};

impl PropertyElementResolver<'_> {
    pub(crate) fn resolve_extension_override(
        &self,
        extension: DeclId,
        extension_name: &Identifier,
        receiver_type: TypeId,
        request: &AccessRequest,
        sink: &mut dyn DiagnosticSink,
    ) -> ResolutionResult {
        let mut result = ResolutionResult::default();
        // An override has no value to cascade on. Report and resolve the
        // member anyway.
        if request.is_cascaded {
            sink.error(
                diagnostic_codes::EXTENSION_OVERRIDE_WITH_CASCADE,
                extension_name.span,
                Vec::new(),
            );
        }

        let property = &request.property;
        let lookup = self
            .ctx
            .services
            .overrides
            .override_member(extension, receiver_type, property.name, self.ctx.unit);

        if request.has_read {
            match lookup.getter {
                Some(getter) => {
                    let getter = self.normalize(getter);
                    self.check_override_static_member(property, getter, sink);
                    result.read.requested = Some(getter);
                }
                None => sink.error(
                    diagnostic_codes::UNDEFINED_EXTENSION_GETTER,
                    property.span,
                    vec![property.name.into(), extension_name.name.into()],
                ),
            }
        }

        if request.has_write {
            match lookup.setter {
                Some(setter) => {
                    let setter = self.normalize(setter);
                    self.check_override_static_member(property, setter, sink);
                    result.write.requested = Some(setter);
                }
                None => sink.error(
                    diagnostic_codes::UNDEFINED_EXTENSION_SETTER,
                    property.span,
                    vec![property.name.into(), extension_name.name.into()],
                ),
            }
        }

        result
    }

    /// Overrides always denote instance-side access.
    pub(crate) fn check_override_static_member(
        &self,
        property: &Identifier,
        element: ElementId,
        sink: &mut dyn DiagnosticSink,
    ) {
        if self.is_static(element) {
            sink.error(
                diagnostic_codes::EXTENSION_OVERRIDE_ACCESS_TO_STATIC_MEMBER,
                property.span,
                Vec::new(),
            );
        }
    }
}
