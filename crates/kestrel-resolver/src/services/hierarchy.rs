use super::HierarchyQuery;
use kestrel_model::{DeclId, ElementId, LookupMode, MemberKind, Name, Program};

/// `HierarchyQuery` over the program's inheritance chains.
#[derive(Copy, Clone)]
pub struct InheritanceQuery<'a> {
    program: &'a Program,
}

impl<'a> InheritanceQuery<'a> {
    pub const fn new(program: &'a Program) -> Self {
        Self { program }
    }
}

impl HierarchyQuery for InheritanceQuery<'_> {
    fn concrete_super_member(
        &self,
        class: DeclId,
        name: &Name,
        kind: MemberKind,
    ) -> Option<ElementId> {
        self.program
            .super_member(class, name, kind, LookupMode::Concrete)
    }

    fn inherited_super_member(
        &self,
        class: DeclId,
        name: &Name,
        kind: MemberKind,
    ) -> Option<ElementId> {
        self.program
            .super_member(class, name, kind, LookupMode::Inherited)
    }

    fn declares_catch_all(&self, decl: DeclId) -> bool {
        self.program.declares_catch_all(decl)
    }
}
