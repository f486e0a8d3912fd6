//! `Extension.member`: members of an extension named as a declaration.

use crate::diagnostics::DiagnosticSink;
use crate::request::AccessRequest;
use crate::resolver::PropertyElementResolver;
use crate::result::ResolutionResult;
use kestrel_common::diagnostic_codes;
use kestrel_model::{DeclId, MemberKind};

impl PropertyElementResolver<'_> {
    /// Extensions have no supertypes, so only directly declared members are
    /// candidates. There is no getter fallback on the write side.
    pub(crate) fn resolve_extension_reference(
        &self,
        extension: DeclId,
        request: &AccessRequest,
        sink: &mut dyn DiagnosticSink,
    ) -> ResolutionResult {
        let program = self.ctx.program;
        let mut result = ResolutionResult::default();
        let Some(info) = program.decl(extension) else {
            return result;
        };
        let property = &request.property;
        let name = property.name;

        if request.has_read {
            let getter = program
                .declared_member(extension, name, MemberKind::Getter)
                .or_else(|| program.declared_member(extension, name, MemberKind::Method))
                .filter(|&e| self.is_accessible(e));
            match getter {
                Some(element) => {
                    let element = self.normalize(element);
                    self.check_static_access_to_instance_member(property, element, sink);
                    result.read.requested = Some(element);
                }
                None => sink.error(
                    diagnostic_codes::UNDEFINED_EXTENSION_GETTER,
                    property.span,
                    vec![name.into(), info.name.into()],
                ),
            }
        }

        if request.has_write {
            let setter = program
                .declared_member(extension, name, MemberKind::Setter)
                .filter(|&e| self.is_accessible(e));
            match setter {
                Some(setter) => {
                    let setter = self.normalize(setter);
                    self.check_static_access_to_instance_member(property, setter, sink);
                    result.write.requested = Some(setter);
                }
                None => sink.error(
                    diagnostic_codes::UNDEFINED_EXTENSION_SETTER,
                    property.span,
                    vec![name.into(), info.name.into()],
                ),
            }
        }

        result
    }
}
