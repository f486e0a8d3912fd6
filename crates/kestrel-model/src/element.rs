//! Executable elements: getters, setters and methods.

use crate::decl::{DeclId, UnitId};
use bitflags::bitflags;
use kestrel_common::{Atom, Span};

/// Element handle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Getter,
    Setter,
    Method,
}

impl ElementKind {
    /// Name used in diagnostics ("The getter 'x' is always abstract...").
    pub const fn display_name(self) -> &'static str {
        match self {
            ElementKind::Getter => "getter",
            ElementKind::Setter => "setter",
            ElementKind::Method => "method",
        }
    }
}

bitflags! {
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ElementFlags: u16 {
        const STATIC = 1 << 0;
        const ABSTRACT = 1 << 1;
        /// Name starts with `_`; visible only inside the declaring unit.
        const PRIVATE = 1 << 2;
        /// Getter induced by a `final` field.
        const FINAL = 1 << 3;
        /// Getter induced by a `const` field.
        const CONST = 1 << 4;
        /// Accessor induced by a field rather than written explicitly.
        const SYNTHETIC = 1 << 5;
        const OPERATOR = 1 << 6;
    }
}

#[derive(Clone, Debug)]
pub struct ElementInfo {
    pub name: Atom,
    pub kind: ElementKind,
    pub flags: ElementFlags,
    /// `None` for top-level elements.
    pub enclosing: Option<DeclId>,
    pub unit: UnitId,
    pub span: Option<Span>,
}

impl ElementInfo {
    pub const fn is_static(&self) -> bool {
        self.flags.contains(ElementFlags::STATIC)
    }

    pub const fn is_abstract(&self) -> bool {
        self.flags.contains(ElementFlags::ABSTRACT)
    }

    pub const fn is_private(&self) -> bool {
        self.flags.contains(ElementFlags::PRIVATE)
    }

    /// Private elements are only accessible from their declaring unit.
    pub fn is_accessible_in(&self, unit: UnitId) -> bool {
        !self.is_private() || self.unit == unit
    }
}

/// A member name qualified by the unit it is looked up from.
///
/// Private names from different units are distinct even when spelled the same.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Name {
    pub text: Atom,
    pub unit: UnitId,
}

impl Name {
    pub const fn new(text: Atom, unit: UnitId) -> Self {
        Self { text, unit }
    }

    pub fn matches(&self, element: &ElementInfo) -> bool {
        element.name == self.text && element.is_accessible_in(self.unit)
    }
}
