//! `prefix.name`: top-level declarations imported under a prefix.

use crate::diagnostics::DiagnosticSink;
use crate::request::AccessRequest;
use crate::resolver::PropertyElementResolver;
use crate::result::ResolutionResult;
use kestrel_common::diagnostic_codes;
use kestrel_model::NamespaceId;

impl PropertyElementResolver<'_> {
    pub(crate) fn resolve_import_prefix(
        &self,
        namespace: NamespaceId,
        request: &AccessRequest,
        sink: &mut dyn DiagnosticSink,
    ) -> ResolutionResult {
        let mut result = ResolutionResult::default();
        let Some(ns) = self.ctx.program.namespace(namespace) else {
            return result;
        };
        let property = &request.property;
        // Private names are never exported through a prefix.
        let getter = ns
            .getter(property.name)
            .filter(|&e| self.is_accessible(e))
            .map(|e| self.normalize(e));

        if request.has_read {
            match getter {
                Some(element) => result.read.requested = Some(element),
                None => sink.error(
                    diagnostic_codes::UNDEFINED_PREFIXED_NAME,
                    property.span,
                    vec![property.name.into(), ns.prefix.into()],
                ),
            }
        }

        if request.has_write {
            match ns.setter(property.name).filter(|&e| self.is_accessible(e)) {
                Some(setter) => result.write.requested = Some(self.normalize(setter)),
                None => {
                    self.ctx
                        .services
                        .write_verifier
                        .verify(property, getter, None, sink);
                    result.write.recovery = getter;
                }
            }
        }

        result
    }
}
