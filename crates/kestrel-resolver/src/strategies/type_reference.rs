//! `Type.member`: static members of a class, mixin or enum.

use crate::diagnostics::DiagnosticSink;
use crate::request::AccessRequest;
use crate::resolver::PropertyElementResolver;
use crate::result::ResolutionResult;
use kestrel_common::diagnostic_codes;
use kestrel_model::{DeclId, MemberKind};

impl PropertyElementResolver<'_> {
    pub(crate) fn resolve_type_reference(
        &self,
        decl: DeclId,
        request: &AccessRequest,
        sink: &mut dyn DiagnosticSink,
    ) -> ResolutionResult {
        let program = self.ctx.program;
        let mut result = ResolutionResult::default();
        let Some(info) = program.decl(decl) else {
            return result;
        };
        let property = &request.property;
        let name = property.name;

        // Methods read as getters; inaccessible private members don't count.
        let getter = program
            .declared_member(decl, name, MemberKind::Getter)
            .or_else(|| program.declared_member(decl, name, MemberKind::Method))
            .filter(|&e| self.is_accessible(e));

        if request.has_read {
            match getter {
                Some(element) => {
                    let element = self.normalize(element);
                    self.check_static_access_to_instance_member(property, element, sink);
                    result.read.requested = Some(element);
                }
                None => {
                    let code = if info.is_enum() {
                        diagnostic_codes::UNDEFINED_ENUM_CONSTANT
                    } else {
                        diagnostic_codes::UNDEFINED_GETTER
                    };
                    sink.error(code, property.span, vec![name.into(), info.name.into()]);
                }
            }
        }

        if request.has_write {
            match program.declared_member(decl, name, MemberKind::Setter) {
                Some(setter) => {
                    if !self.is_accessible(setter) {
                        sink.error(
                            diagnostic_codes::PRIVATE_SETTER,
                            property.span,
                            vec![name.into(), info.name.into()],
                        );
                    }
                    let setter = self.normalize(setter);
                    self.check_static_access_to_instance_member(property, setter, sink);
                    result.write.requested = Some(setter);
                }
                None => {
                    let recovery = getter.map(|e| self.normalize(e));
                    let receiver = program.types().interface(decl);
                    self.ctx
                        .services
                        .write_verifier
                        .verify(property, recovery, Some(receiver), sink);
                    result.write.recovery = recovery;
                }
            }
        }

        result
    }
}
