//! The frozen program model.
//!
//! A `Program` is produced by `ProgramBuilder::finish` and is read-only from
//! then on (apart from on-demand type interning). It is `Send + Sync`, so
//! several units can be resolved against it concurrently.

use crate::decl::{DeclId, DeclInfo, DeclKind, NamespaceId, NamespaceInfo, UnitId, UnitInfo};
use crate::element::{ElementId, ElementInfo};
use crate::types::{TypeData, TypeId, TypeInterner, TypeParamId, TypeParamInfo};
use kestrel_common::{Atom, Interner};
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Declarations every program has, plus pre-interned well-known names.
#[derive(Clone, Debug)]
pub struct CoreLibrary {
    pub unit: UnitId,
    pub object: DeclId,
    /// The distinguished callable-object type.
    pub function: DeclId,
    /// The metatype: what a type name evaluates to as a value.
    pub type_decl: DeclId,
    pub object_type: TypeId,
    pub function_type: TypeId,
    pub type_type: TypeId,
    pub names: WellKnownNames,
}

#[derive(Copy, Clone, Debug)]
pub struct WellKnownNames {
    pub call: Atom,
    pub no_such_method: Atom,
    pub index: Atom,
    pub index_set: Atom,
}

pub struct Program {
    pub(crate) interner: Arc<Interner>,
    pub(crate) types: TypeInterner,
    pub(crate) units: Vec<UnitInfo>,
    pub(crate) decls: Vec<DeclInfo>,
    pub(crate) elements: Vec<ElementInfo>,
    pub(crate) type_params: Vec<TypeParamInfo>,
    pub(crate) namespaces: Vec<NamespaceInfo>,
    pub(crate) legacy_views: FxHashMap<ElementId, ElementId>,
    pub(crate) core: CoreLibrary,
}

impl Program {
    pub fn interner(&self) -> &Arc<Interner> {
        &self.interner
    }

    pub fn types(&self) -> &TypeInterner {
        &self.types
    }

    pub fn core(&self) -> &CoreLibrary {
        &self.core
    }

    pub fn unit(&self, id: UnitId) -> Option<&UnitInfo> {
        self.units.get(id.0 as usize)
    }

    pub fn decl(&self, id: DeclId) -> Option<&DeclInfo> {
        self.decls.get(id.0 as usize)
    }

    pub fn element(&self, id: ElementId) -> Option<&ElementInfo> {
        self.elements.get(id.0 as usize)
    }

    pub fn type_param(&self, id: TypeParamId) -> Option<&TypeParamInfo> {
        self.type_params.get(id.0 as usize)
    }

    pub fn namespace(&self, id: NamespaceId) -> Option<&NamespaceInfo> {
        self.namespaces.get(id.0 as usize)
    }

    pub fn type_data(&self, id: TypeId) -> TypeData {
        self.types.lookup(id)
    }

    pub fn name_of(&self, atom: Atom) -> Arc<str> {
        self.interner.resolve(atom)
    }

    pub fn intern(&self, text: &str) -> Atom {
        self.interner.intern_string(text)
    }

    pub fn decls(&self) -> impl Iterator<Item = (DeclId, &DeclInfo)> {
        self.decls
            .iter()
            .enumerate()
            .map(|(i, d)| (DeclId(i as u32), d))
    }

    /// Extensions whose members can be applied implicitly from `unit`, in
    /// declaration order. Private extensions are only visible in their unit.
    pub fn extensions_visible_from(&self, unit: UnitId) -> impl Iterator<Item = DeclId> + '_ {
        self.decls().filter_map(move |(id, decl)| {
            if decl.kind != DeclKind::Extension {
                return None;
            }
            let private = self.interner.resolve(decl.name).starts_with('_');
            (!private || decl.unit == unit).then_some(id)
        })
    }

    /// The legacy (pre-null-safety) view of an element, if one was registered.
    pub fn legacy_view(&self, element: ElementId) -> Option<ElementId> {
        self.legacy_views.get(&element).copied()
    }

    /// The declaration behind an interface type, ignoring nullability.
    pub fn interface_decl(&self, ty: TypeId) -> Option<DeclId> {
        match self.types.lookup(ty) {
            TypeData::Interface { decl, .. } => Some(decl),
            _ => None,
        }
    }
}
