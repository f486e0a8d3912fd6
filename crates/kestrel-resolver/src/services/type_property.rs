//! General instance-member lookup on a receiver type.

use super::extension_selection::{ExtensionSelection, describe_extensions, select_extension};
use super::{LookupResult, PropertyLookup, PropertyQuery};
use crate::diagnostics::DiagnosticSink;
use crate::options::ResolverOptions;
use kestrel_common::diagnostic_codes;
use kestrel_model::{DeclId, LookupMode, MemberKind, Name, Program, TypeData, TypeId};
use tracing::trace;

/// Resolves `receiver.name` against the receiver's interface and then
/// against applicable extensions.
///
/// On a potentially nullable receiver only `Object` members and extensions
/// applicable to the nullable type are safe. A member that exists only on
/// the non-nullable type is still returned, with
/// `UNCHECKED_PROPERTY_ACCESS_OF_NULLABLE_VALUE` when configured to report
/// it.
#[derive(Copy, Clone)]
pub struct TypePropertyResolver<'a> {
    program: &'a Program,
    options: &'a ResolverOptions,
}

impl<'a> TypePropertyResolver<'a> {
    pub const fn new(program: &'a Program, options: &'a ResolverOptions) -> Self {
        Self { program, options }
    }

    fn lookup_in_decl(&self, decl: DeclId, name: &Name) -> LookupResult {
        let getter = self
            .program
            .lookup_member(decl, name, MemberKind::Getter, LookupMode::Inherited);
        let setter = self
            .program
            .lookup_member(decl, name, MemberKind::Setter, LookupMode::Inherited);
        LookupResult::new(getter, setter)
    }

    /// Interface members of a non-nullable view of `ty`.
    fn lookup_in_type(&self, ty: TypeId, name: &Name) -> LookupResult {
        let core = self.program.core();
        match self.program.type_data(ty) {
            TypeData::Interface { decl, .. } => self.lookup_in_decl(decl, name),
            TypeData::Function { .. } => self.lookup_in_decl(core.function, name),
            TypeData::Null => self.lookup_in_decl(core.object, name),
            TypeData::TypeParameter { .. } => {
                let bound = self.program.resolve_to_bound(ty);
                if bound == ty {
                    return LookupResult::EMPTY;
                }
                self.lookup_in_type(bound, name)
            }
            TypeData::Dynamic | TypeData::Never | TypeData::Void => LookupResult::EMPTY,
        }
    }

    fn lookup_extension(
        &self,
        query: &PropertyQuery<'_>,
        receiver: TypeId,
        sink: &mut dyn DiagnosticSink,
    ) -> LookupResult {
        match select_extension(self.program, receiver, query.name.name, query.unit) {
            ExtensionSelection::None => LookupResult::EMPTY,
            ExtensionSelection::Single(candidate) => {
                trace!(extension = candidate.extension.0, "extension member");
                LookupResult::new(candidate.getter, candidate.setter)
            }
            ExtensionSelection::Ambiguous(extensions) => {
                sink.error(
                    diagnostic_codes::AMBIGUOUS_EXTENSION_MEMBER_ACCESS,
                    query.name.span,
                    vec![
                        query.name.name.into(),
                        describe_extensions(self.program, &extensions).into(),
                    ],
                );
                LookupResult::ambiguous()
            }
        }
    }
}

impl PropertyLookup for TypePropertyResolver<'_> {
    fn resolve(&self, query: &PropertyQuery<'_>, sink: &mut dyn DiagnosticSink) -> LookupResult {
        let program = self.program;
        let ty = query.receiver_type;
        let name = Name::new(query.name.name, query.unit);

        if matches!(
            program.type_data(ty),
            TypeData::Dynamic | TypeData::Never | TypeData::Void
        ) {
            return LookupResult::EMPTY;
        }

        if !program.is_potentially_nullable(ty) {
            let found = self.lookup_in_type(ty, &name);
            if found.is_found() {
                return found;
            }
            return self.lookup_extension(query, ty, sink);
        }

        let on_object = self.lookup_in_decl(program.core().object, &name);
        if on_object.is_found() {
            return on_object;
        }
        let on_extension = self.lookup_extension(query, ty, sink);
        if on_extension.is_found() || on_extension.is_ambiguous {
            return on_extension;
        }

        let non_null = program.promote_to_non_null(ty);
        let found = self.lookup_in_type(non_null, &name);
        if found.is_found() && self.options.report_unchecked_nullable {
            let code = if query.is_operator {
                diagnostic_codes::UNCHECKED_OPERATOR_INVOCATION_OF_NULLABLE_VALUE
            } else {
                diagnostic_codes::UNCHECKED_PROPERTY_ACCESS_OF_NULLABLE_VALUE
            };
            sink.error(code, query.name.span, vec![query.name.name.into()]);
        }
        found
    }
}
