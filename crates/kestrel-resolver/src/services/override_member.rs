use super::{LookupResult, OverrideMemberLookup};
use kestrel_common::Atom;
use kestrel_model::{DeclId, ElementId, MemberKind, Program, TypeId, UnitId};

/// Looks members up directly on the named extension. The receiver type
/// plays no part: an override selects the extension explicitly.
#[derive(Copy, Clone)]
pub struct ExtensionMemberResolver<'a> {
    program: &'a Program,
}

impl<'a> ExtensionMemberResolver<'a> {
    pub const fn new(program: &'a Program) -> Self {
        Self { program }
    }

    fn visible_member(
        &self,
        extension: DeclId,
        name: Atom,
        kind: MemberKind,
        unit: UnitId,
    ) -> Option<ElementId> {
        self.program
            .declared_member(extension, name, kind)
            .filter(|&e| {
                self.program
                    .element(e)
                    .is_some_and(|info| info.is_accessible_in(unit))
            })
    }
}

impl OverrideMemberLookup for ExtensionMemberResolver<'_> {
    fn override_member(
        &self,
        extension: DeclId,
        _receiver_type: TypeId,
        name: Atom,
        unit: UnitId,
    ) -> LookupResult {
        let getter = self
            .visible_member(extension, name, MemberKind::Getter, unit)
            .or_else(|| self.visible_member(extension, name, MemberKind::Method, unit));
        let setter = self.visible_member(extension, name, MemberKind::Setter, unit);
        LookupResult::new(getter, setter)
    }
}
