//! Type and extension declarations, compilation units and import prefixes.

use crate::element::ElementId;
use crate::types::TypeId;
use kestrel_common::Atom;
use rustc_hash::FxHashMap;

/// Compilation unit handle. Privacy is scoped to a unit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitId(pub u32);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeclId(pub u32);

/// Import prefix namespace handle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NamespaceId(pub u32);

#[derive(Clone, Debug)]
pub struct UnitInfo {
    pub name: Atom,
}

/// Kind of declaration.
///
/// | Kind | Has supertypes | Instantiable | Example |
/// |------|----------------|--------------|---------|
/// | Class | yes | unless abstract | `class Foo extends Bar {}` |
/// | Mixin | constraints only | no | `mixin M on Bar {}` |
/// | Enum | implicit `Object` | no | `enum Color { red }` |
/// | Extension | no | no | `extension E on Foo {}` |
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DeclKind {
    Class,
    Mixin,
    Enum,
    Extension,
}

#[derive(Clone, Debug)]
pub struct DeclInfo {
    pub name: Atom,
    pub kind: DeclKind,
    pub unit: UnitId,
    pub is_abstract: bool,
    /// Superclass for classes and enums.
    pub superclass: Option<TypeId>,
    /// Mixins applied on top of the superclass, in application order.
    pub mixins: Vec<TypeId>,
    pub interfaces: Vec<TypeId>,
    /// `on` constraints of a mixin declaration.
    pub superclass_constraints: Vec<TypeId>,
    /// The type an extension attaches to.
    pub extended_type: Option<TypeId>,
    /// Members in declaration order.
    pub members: Vec<ElementId>,
    pub(crate) getters: FxHashMap<Atom, ElementId>,
    pub(crate) setters: FxHashMap<Atom, ElementId>,
    pub(crate) methods: FxHashMap<Atom, ElementId>,
}

impl DeclInfo {
    pub(crate) fn new(name: Atom, kind: DeclKind, unit: UnitId) -> Self {
        Self {
            name,
            kind,
            unit,
            is_abstract: false,
            superclass: None,
            mixins: Vec::new(),
            interfaces: Vec::new(),
            superclass_constraints: Vec::new(),
            extended_type: None,
            members: Vec::new(),
            getters: FxHashMap::default(),
            setters: FxHashMap::default(),
            methods: FxHashMap::default(),
        }
    }

    pub const fn is_enum(&self) -> bool {
        matches!(self.kind, DeclKind::Enum)
    }

    pub const fn is_extension(&self) -> bool {
        matches!(self.kind, DeclKind::Extension)
    }

    pub fn getter(&self, name: Atom) -> Option<ElementId> {
        self.getters.get(&name).copied()
    }

    pub fn setter(&self, name: Atom) -> Option<ElementId> {
        self.setters.get(&name).copied()
    }

    pub fn method(&self, name: Atom) -> Option<ElementId> {
        self.methods.get(&name).copied()
    }
}

/// The names an import prefix makes available.
#[derive(Clone, Debug)]
pub struct NamespaceInfo {
    pub prefix: Atom,
    /// The unit containing the import.
    pub unit: UnitId,
    pub(crate) getters: FxHashMap<Atom, ElementId>,
    pub(crate) setters: FxHashMap<Atom, ElementId>,
}

impl NamespaceInfo {
    pub(crate) fn new(prefix: Atom, unit: UnitId) -> Self {
        Self {
            prefix,
            unit,
            getters: FxHashMap::default(),
            setters: FxHashMap::default(),
        }
    }

    /// Getter or top-level function named `name`.
    pub fn getter(&self, name: Atom) -> Option<ElementId> {
        self.getters.get(&name).copied()
    }

    pub fn setter(&self, name: Atom) -> Option<ElementId> {
        self.setters.get(&name).copied()
    }
}
