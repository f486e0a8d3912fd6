//! Target classification.
//!
//! The same `a.b` syntax means static member access, extension member
//! access, an explicit extension application, a `super` send, an import
//! prefix lookup or plain instance access depending on what `a` is. The
//! decision is made once, here, and each variant gets its own strategy.

use crate::request::{
    AccessRequest, Identifier, IdentifierBinding, IndexRequest, SuperContext, TargetExpr,
};
use kestrel_model::{DeclId, NamespaceId, TypeId};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TargetKind {
    /// `Type.member`: static members of a class, mixin or enum.
    TypeReference(DeclId),
    /// `Extension.member`: static members of an extension.
    ExtensionReference(DeclId),
    /// `Extension(receiver).member`.
    ExtensionOverride {
        extension: DeclId,
        extension_name: Identifier,
        receiver_type: TypeId,
    },
    SuperReference {
        context: SuperContext,
        this_type: Option<TypeId>,
    },
    /// `prefix.name` for an import prefix.
    ImportPrefix(NamespaceId),
    /// Instance access on a value.
    Expression { static_type: TypeId },
}

impl TargetKind {
    /// Classify a property access target. First match wins:
    ///
    /// 1. extension override
    /// 2. `super`
    /// 3. identifier naming a type (not in a cascade)
    /// 4. identifier naming an extension (not in a cascade)
    /// 5. identifier naming an import prefix (not in a cascade)
    /// 6. anything else, by its static type
    ///
    /// In a cascade a type name denotes a `Type` object, so its static type
    /// is used instead of static-member lookup.
    pub fn classify(request: &AccessRequest) -> Self {
        match &request.target {
            TargetExpr::ExtensionOverride {
                extension,
                extension_name,
                receiver_type,
            } => TargetKind::ExtensionOverride {
                extension: *extension,
                extension_name: *extension_name,
                receiver_type: *receiver_type,
            },
            TargetExpr::Super {
                context, this_type, ..
            } => TargetKind::SuperReference {
                context: *context,
                this_type: *this_type,
            },
            TargetExpr::Identifier {
                binding,
                static_type,
                ..
            } => match binding {
                IdentifierBinding::TypeDecl(decl) if !request.is_cascaded => {
                    TargetKind::TypeReference(*decl)
                }
                IdentifierBinding::Extension(decl) if !request.is_cascaded => {
                    TargetKind::ExtensionReference(*decl)
                }
                IdentifierBinding::ImportPrefix(ns) if !request.is_cascaded => {
                    TargetKind::ImportPrefix(*ns)
                }
                _ => TargetKind::Expression {
                    static_type: *static_type,
                },
            },
            TargetExpr::Expression { static_type, .. } => TargetKind::Expression {
                static_type: *static_type,
            },
        }
    }

    /// Classify an index access target. There are no static or prefixed
    /// index operators, so only overrides and `super` are special.
    pub fn classify_index(request: &IndexRequest) -> Self {
        match &request.target {
            TargetExpr::ExtensionOverride {
                extension,
                extension_name,
                receiver_type,
            } => TargetKind::ExtensionOverride {
                extension: *extension,
                extension_name: *extension_name,
                receiver_type: *receiver_type,
            },
            TargetExpr::Super {
                context, this_type, ..
            } => TargetKind::SuperReference {
                context: *context,
                this_type: *this_type,
            },
            TargetExpr::Identifier { static_type, .. }
            | TargetExpr::Expression { static_type, .. } => TargetKind::Expression {
                static_type: *static_type,
            },
        }
    }
}

#[cfg(test)]
#[path = "../tests/classify_tests.rs"]
mod tests;
