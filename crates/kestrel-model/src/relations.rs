//! Type relations and receiver-type normalization.

use crate::decl::DeclId;
use crate::program::Program;
use crate::types::{TypeData, TypeId};
use tracing::trace;

/// Bound chains longer than this are treated as unbounded.
const MAX_BOUND_DEPTH: u32 = 32;

impl Program {
    /// Widen a type parameter to its bound, repeatedly, until a
    /// non-parameter type is reached. An unbounded parameter widens to
    /// `Object?`. A nullable parameter (`T?`) widens to the nullable bound.
    pub fn resolve_to_bound(&self, ty: TypeId) -> TypeId {
        let mut current = ty;
        let mut nullable = false;
        for _ in 0..MAX_BOUND_DEPTH {
            let TypeData::TypeParameter {
                param,
                nullable: marked,
            } = self.type_data(current)
            else {
                break;
            };
            nullable |= marked;
            current = self
                .type_param(param)
                .and_then(|p| p.bound)
                .unwrap_or_else(|| self.types.nullable(self.core.object_type));
        }
        if let TypeData::TypeParameter { .. } = self.type_data(current) {
            trace!(ty = ty.0, "bound chain too deep, widening to Object?");
            return self.types.nullable(self.core.object_type);
        }
        if nullable {
            self.types.nullable(current)
        } else {
            current
        }
    }

    /// Strip nullability. `Null` promotes to `Never`.
    pub fn promote_to_non_null(&self, ty: TypeId) -> TypeId {
        match self.type_data(ty) {
            TypeData::Null => TypeId::NEVER,
            _ => self.types.with_nullability(ty, false),
        }
    }

    /// Whether a value of this type can be `null`.
    pub fn is_potentially_nullable(&self, ty: TypeId) -> bool {
        match self.type_data(ty) {
            TypeData::Dynamic | TypeData::Void | TypeData::Null => true,
            TypeData::Never => false,
            TypeData::Interface { nullable, .. } | TypeData::Function { nullable } => nullable,
            TypeData::TypeParameter { nullable: true, .. } => true,
            TypeData::TypeParameter { .. } => {
                let bound = self.resolve_to_bound(ty);
                self.is_potentially_nullable(bound)
            }
        }
    }

    /// A plain function type or the core `Function` interface.
    pub fn is_function_like(&self, ty: TypeId) -> bool {
        match self.type_data(ty) {
            TypeData::Function { .. } => true,
            TypeData::Interface { decl, .. } => decl == self.core.function,
            _ => false,
        }
    }

    pub fn is_subtype(&self, sub: TypeId, sup: TypeId) -> bool {
        self.is_subtype_inner(sub, sup, 0)
    }

    fn is_subtype_inner(&self, sub: TypeId, sup: TypeId, depth: u32) -> bool {
        if sub == sup {
            return true;
        }
        if depth > MAX_BOUND_DEPTH {
            return false;
        }
        let source = self.type_data(sub);
        let target = self.type_data(sup);

        match target {
            TypeData::Dynamic | TypeData::Void => return true,
            TypeData::Interface {
                decl,
                nullable: true,
            } if decl == self.core.object => return true,
            _ => {}
        }

        match source {
            TypeData::Never => true,
            TypeData::Dynamic | TypeData::Void => false,
            TypeData::Null => target.is_marked_nullable(),
            TypeData::TypeParameter { param, nullable } => {
                if let TypeData::TypeParameter {
                    param: other,
                    nullable: other_nullable,
                } = target
                    && other == param
                {
                    return !nullable || other_nullable;
                }
                let widened = self.resolve_to_bound(sub);
                widened != sub && self.is_subtype_inner(widened, sup, depth + 1)
            }
            TypeData::Interface { .. } | TypeData::Function { .. } => {
                if source.is_marked_nullable() && !target.is_marked_nullable() {
                    return false;
                }
                match (source, target) {
                    (TypeData::Function { .. }, TypeData::Function { .. }) => true,
                    (TypeData::Function { .. }, TypeData::Interface { decl, .. }) => {
                        decl == self.core.function || decl == self.core.object
                    }
                    (
                        TypeData::Interface { decl: sub_decl, .. },
                        TypeData::Interface { decl: sup_decl, .. },
                    ) => self.decl_derives_from(sub_decl, sup_decl),
                    _ => false,
                }
            }
        }
    }

    /// Whether `sup` is reachable from `sub` through superclass, mixin,
    /// interface or constraint edges. Every non-extension declaration
    /// derives from `Object`.
    pub fn decl_derives_from(&self, sub: DeclId, sup: DeclId) -> bool {
        sub == sup || self.all_supertypes(sub).contains(&sup)
    }
}

#[cfg(test)]
#[path = "../tests/relations_tests.rs"]
mod tests;
