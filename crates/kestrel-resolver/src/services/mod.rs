//! Collaborator services the resolver delegates to.
//!
//! Each concern the resolver does not own (hierarchy queries, general
//! property lookup, extension override lookup, write-recovery reporting and
//! element view normalization) sits behind a trait so a test can swap in a
//! fake. `Services::standard` wires up the implementations backed by a
//! `Program`.

use crate::diagnostics::DiagnosticSink;
use crate::options::ResolverOptions;
use crate::request::{Identifier, TargetExpr};
use kestrel_common::Atom;
use kestrel_model::{DeclId, ElementId, MemberKind, Name, Program, TypeId, UnitId};

mod assignment_verifier;
mod element_views;
mod extension_selection;
mod hierarchy;
mod override_member;
mod type_property;

pub use assignment_verifier::AssignmentVerifier;
pub use element_views::ElementViews;
pub use extension_selection::{ExtensionCandidate, ExtensionSelection, select_extension};
pub use hierarchy::InheritanceQuery;
pub use override_member::ExtensionMemberResolver;
pub use type_property::TypePropertyResolver;

/// Outcome of a getter/setter lookup.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LookupResult {
    /// Getter, or a method read as a getter.
    pub getter: Option<ElementId>,
    pub setter: Option<ElementId>,
    /// Several extensions matched and none was most specific. The lookup
    /// already reported it.
    pub is_ambiguous: bool,
}

impl LookupResult {
    pub const EMPTY: LookupResult = LookupResult {
        getter: None,
        setter: None,
        is_ambiguous: false,
    };

    pub const fn new(getter: Option<ElementId>, setter: Option<ElementId>) -> Self {
        Self {
            getter,
            setter,
            is_ambiguous: false,
        }
    }

    pub const fn ambiguous() -> Self {
        Self {
            getter: None,
            setter: None,
            is_ambiguous: true,
        }
    }

    pub const fn is_found(&self) -> bool {
        self.getter.is_some() || self.setter.is_some()
    }

    /// The caller should report a missing getter.
    pub const fn needs_getter_error(&self) -> bool {
        self.getter.is_none() && !self.is_ambiguous
    }

    /// The caller should report a missing setter.
    pub const fn needs_setter_error(&self) -> bool {
        self.setter.is_none() && !self.is_ambiguous
    }
}

/// Super-send lookup through the declaration hierarchy.
pub trait HierarchyQuery {
    /// The concrete member `super.<name>` dispatches to from inside `class`.
    fn concrete_super_member(&self, class: DeclId, name: &Name, kind: MemberKind)
    -> Option<ElementId>;

    /// The nearest member above `class`, concrete or not.
    fn inherited_super_member(
        &self,
        class: DeclId,
        name: &Name,
        kind: MemberKind,
    ) -> Option<ElementId>;

    /// `decl` declares or inherits a non-default `noSuchMethod`.
    fn declares_catch_all(&self, decl: DeclId) -> bool;
}

/// One general instance-member lookup.
#[derive(Copy, Clone, Debug)]
pub struct PropertyQuery<'q> {
    pub receiver: &'q TargetExpr,
    /// Receiver type, already widened to its bound and, for `?.`, stripped
    /// of nullability.
    pub receiver_type: TypeId,
    pub name: Identifier,
    /// The unit the access appears in.
    pub unit: UnitId,
    /// The name is an operator (`[]`, `[]=`) rather than a property.
    pub is_operator: bool,
}

/// General property lookup on a receiver type: interface members, then
/// applicable extensions.
pub trait PropertyLookup {
    fn resolve(&self, query: &PropertyQuery<'_>, sink: &mut dyn DiagnosticSink) -> LookupResult;
}

/// Member lookup on an explicitly applied extension.
pub trait OverrideMemberLookup {
    /// Members named `name` declared on `extension` and visible from `unit`,
    /// static ones included. Operators come back in the getter slot, like
    /// methods.
    fn override_member(
        &self,
        extension: DeclId,
        receiver_type: TypeId,
        name: Atom,
        unit: UnitId,
    ) -> LookupResult;
}

/// Reports why a write target has no setter.
pub trait WriteRecoveryVerifier {
    /// `recovery` is the element found in place of a setter, if any.
    /// `receiver_type` is absent for prefixed and top-level names.
    fn verify(
        &self,
        name: &Identifier,
        recovery: Option<ElementId>,
        receiver_type: Option<TypeId>,
        sink: &mut dyn DiagnosticSink,
    );
}

/// Maps an element to the view appropriate for the current unit.
pub trait ElementViewNormalizer {
    fn normalize(&self, element: ElementId) -> ElementId;
}

/// The resolver's collaborators.
pub struct Services<'a> {
    pub hierarchy: Box<dyn HierarchyQuery + 'a>,
    pub properties: Box<dyn PropertyLookup + 'a>,
    pub overrides: Box<dyn OverrideMemberLookup + 'a>,
    pub write_verifier: Box<dyn WriteRecoveryVerifier + 'a>,
    pub normalizer: Box<dyn ElementViewNormalizer + 'a>,
}

impl<'a> Services<'a> {
    pub fn standard(program: &'a Program, options: &'a ResolverOptions) -> Self {
        Self {
            hierarchy: Box::new(InheritanceQuery::new(program)),
            properties: Box::new(TypePropertyResolver::new(program, options)),
            overrides: Box::new(ExtensionMemberResolver::new(program)),
            write_verifier: Box::new(AssignmentVerifier::new(program)),
            normalizer: Box::new(ElementViews::new(program, options.null_safety)),
        }
    }

    pub fn with_hierarchy(mut self, hierarchy: impl HierarchyQuery + 'a) -> Self {
        self.hierarchy = Box::new(hierarchy);
        self
    }

    pub fn with_properties(mut self, properties: impl PropertyLookup + 'a) -> Self {
        self.properties = Box::new(properties);
        self
    }

    pub fn with_overrides(mut self, overrides: impl OverrideMemberLookup + 'a) -> Self {
        self.overrides = Box::new(overrides);
        self
    }

    pub fn with_write_verifier(mut self, verifier: impl WriteRecoveryVerifier + 'a) -> Self {
        self.write_verifier = Box::new(verifier);
        self
    }

    pub fn with_normalizer(mut self, normalizer: impl ElementViewNormalizer + 'a) -> Self {
        self.normalizer = Box::new(normalizer);
        self
    }
}
