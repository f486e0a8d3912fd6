//! `super.member`.
//!
//! A super send names a fixed element: lookup runs against the declared
//! superclass chain of the enclosing class and never redispatches.

use crate::diagnostics::DiagnosticSink;
use crate::request::{AccessRequest, Identifier, SuperContext};
use crate::resolver::PropertyElementResolver;
use crate::result::{ElementSlot, ResolutionResult};
use kestrel_common::diagnostic_codes;
use kestrel_model::{DeclId, ElementId, MemberKind, Name, TypeId};
use tracing::trace;

/// Where a super lookup found its member.
pub(crate) enum SuperLookup {
    Concrete(ElementId),
    Abstract(ElementId),
    Missing,
}

impl PropertyElementResolver<'_> {
    /// The class `super` refers from, when `super` is usable here.
    pub(crate) fn super_class(
        &self,
        context: SuperContext,
        this_type: Option<TypeId>,
    ) -> Option<(DeclId, TypeId)> {
        if context != SuperContext::Valid {
            trace!(?context, "super outside an instance member");
            return None;
        }
        let this_type = this_type?;
        let class = self.ctx.program.interface_decl(this_type)?;
        Some((class, this_type))
    }

    /// Concrete member first, then any member.
    pub(crate) fn lookup_super(
        &self,
        class: DeclId,
        name: &Name,
        kind: MemberKind,
    ) -> SuperLookup {
        let hierarchy = &self.ctx.services.hierarchy;
        if let Some(element) = hierarchy.concrete_super_member(class, name, kind) {
            return SuperLookup::Concrete(element);
        }
        match hierarchy.inherited_super_member(class, name, kind) {
            Some(element) => SuperLookup::Abstract(element),
            None => SuperLookup::Missing,
        }
    }

    /// The superclass of `class` handles unknown sends, which makes an
    /// abstract super setter acceptable.
    pub(crate) fn super_declares_catch_all(&self, class: DeclId) -> bool {
        self.ctx
            .program
            .superclass_decl(class)
            .is_some_and(|superclass| self.ctx.services.hierarchy.declares_catch_all(superclass))
    }

    pub(crate) fn report_abstract_super_member(
        &self,
        property: &Identifier,
        element: ElementId,
        sink: &mut dyn DiagnosticSink,
    ) {
        let kind = self
            .ctx
            .program
            .element(element)
            .map_or("member", |e| e.kind.display_name());
        sink.error(
            diagnostic_codes::ABSTRACT_SUPER_MEMBER_REFERENCE,
            property.span,
            vec![kind.into(), property.name.into()],
        );
    }

    pub(crate) fn resolve_super_property(
        &self,
        context: SuperContext,
        this_type: Option<TypeId>,
        request: &AccessRequest,
        sink: &mut dyn DiagnosticSink,
    ) -> ResolutionResult {
        let mut result = ResolutionResult::default();
        let Some((class, this_type)) = self.super_class(context, this_type) else {
            return result;
        };
        let property = &request.property;
        let name = Name::new(property.name, self.ctx.unit);

        if request.has_read {
            match self.lookup_super(class, &name, MemberKind::Getter) {
                SuperLookup::Concrete(element) => {
                    result.read.requested = Some(self.normalize(element));
                }
                SuperLookup::Abstract(element) => {
                    self.report_abstract_super_member(property, element, sink);
                    result.read.requested = Some(self.normalize(element));
                }
                SuperLookup::Missing => sink.error(
                    diagnostic_codes::UNDEFINED_SUPER_GETTER,
                    property.span,
                    vec![property.name.into(), this_type.into()],
                ),
            }
        }

        if request.has_write {
            result.write = self.resolve_super_setter(class, this_type, property, &name, sink);
        }

        result
    }

    fn resolve_super_setter(
        &self,
        class: DeclId,
        this_type: TypeId,
        property: &Identifier,
        name: &Name,
        sink: &mut dyn DiagnosticSink,
    ) -> ElementSlot {
        let mut slot = ElementSlot::default();
        match self.lookup_super(class, name, MemberKind::Setter) {
            SuperLookup::Concrete(element) => {
                slot.requested = Some(self.normalize(element));
            }
            SuperLookup::Abstract(element) if self.super_declares_catch_all(class) => {
                trace!(element = element.0, "abstract super setter handled by noSuchMethod");
                slot.recovery = Some(self.normalize(element));
            }
            SuperLookup::Abstract(element) => {
                self.report_abstract_super_member(property, element, sink);
                slot.requested = Some(self.normalize(element));
            }
            SuperLookup::Missing => sink.error(
                diagnostic_codes::UNDEFINED_SUPER_SETTER,
                property.span,
                vec![property.name.into(), this_type.into()],
            ),
        }
        slot
    }
}
