//! Type representation.
//!
//! Types are interned: two structurally equal `TypeData` values always get the
//! same `TypeId`, so type equality is an integer comparison. Interning takes
//! `&self` so queries on a frozen `Program` (nullability promotion, bound
//! widening) can mint the types they return.

use crate::decl::DeclId;
use dashmap::DashMap;
use kestrel_common::Atom;
use std::sync::RwLock;

/// Interned type handle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub u32);

impl TypeId {
    /// `dynamic`: member access is checked at runtime.
    pub const DYNAMIC: Self = Self(0);
    /// `Never`: the bottom type, only produced by unreachable code.
    pub const NEVER: Self = Self(1);
    pub const VOID: Self = Self(2);
    pub const NULL: Self = Self(3);
}

/// Type parameter handle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeParamId(pub u32);

#[derive(Clone, Debug)]
pub struct TypeParamInfo {
    pub name: Atom,
    /// `None` means the parameter is bounded by `Object?`.
    pub bound: Option<TypeId>,
}

/// Structural type data.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeData {
    Dynamic,
    Never,
    Void,
    Null,
    /// An instance of a class, mixin or enum declaration.
    Interface { decl: DeclId, nullable: bool },
    /// A plain function type. Signatures are not modelled.
    Function { nullable: bool },
    TypeParameter { param: TypeParamId, nullable: bool },
}

impl TypeData {
    /// The same type with the given nullability. Types without a nullable
    /// form are returned unchanged.
    pub const fn with_nullability(self, nullable: bool) -> Self {
        match self {
            TypeData::Interface { decl, .. } => TypeData::Interface { decl, nullable },
            TypeData::Function { .. } => TypeData::Function { nullable },
            TypeData::TypeParameter { param, .. } => TypeData::TypeParameter { param, nullable },
            other => other,
        }
    }

    pub const fn is_marked_nullable(self) -> bool {
        match self {
            TypeData::Interface { nullable, .. }
            | TypeData::Function { nullable }
            | TypeData::TypeParameter { nullable, .. } => nullable,
            TypeData::Null => true,
            _ => false,
        }
    }
}

/// Thread-safe type interner.
pub struct TypeInterner {
    lookup: DashMap<TypeData, TypeId>,
    types: RwLock<Vec<TypeData>>,
}

impl Default for TypeInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeInterner {
    pub fn new() -> Self {
        let interner = Self {
            lookup: DashMap::new(),
            types: RwLock::new(Vec::new()),
        };
        // Order must match the well-known TypeId constants.
        interner.intern(TypeData::Dynamic);
        interner.intern(TypeData::Never);
        interner.intern(TypeData::Void);
        interner.intern(TypeData::Null);
        interner
    }

    pub fn intern(&self, data: TypeData) -> TypeId {
        if let Some(existing) = self.lookup.get(&data) {
            return *existing;
        }
        *self.lookup.entry(data).or_insert_with(|| {
            let mut types = match self.types.write() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            let id = TypeId(types.len() as u32);
            types.push(data);
            id
        })
    }

    /// Look up the data for an interned type. Unknown ids read as `dynamic`.
    pub fn lookup(&self, id: TypeId) -> TypeData {
        let types = match self.types.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        types
            .get(id.0 as usize)
            .copied()
            .unwrap_or(TypeData::Dynamic)
    }

    pub fn interface(&self, decl: DeclId) -> TypeId {
        self.intern(TypeData::Interface {
            decl,
            nullable: false,
        })
    }

    pub fn function(&self) -> TypeId {
        self.intern(TypeData::Function { nullable: false })
    }

    pub fn type_parameter(&self, param: TypeParamId) -> TypeId {
        self.intern(TypeData::TypeParameter {
            param,
            nullable: false,
        })
    }

    pub fn with_nullability(&self, id: TypeId, nullable: bool) -> TypeId {
        let data = self.lookup(id);
        let adjusted = data.with_nullability(nullable);
        if adjusted == data {
            id
        } else {
            self.intern(adjusted)
        }
    }

    pub fn nullable(&self, id: TypeId) -> TypeId {
        self.with_nullability(id, true)
    }

    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }
}
