//! Access requests: the syntactic shape of a member access site, as handed
//! over by the visitor after identifier resolution and type inference of the
//! receiver.

use kestrel_common::{Atom, Span};
use kestrel_model::{DeclId, NamespaceId, TypeId};

/// A name with the location it was written at.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Identifier {
    pub name: Atom,
    pub span: Span,
}

impl Identifier {
    pub const fn new(name: Atom, span: Span) -> Self {
        Self { name, span }
    }
}

/// What a plain identifier in receiver position was resolved to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IdentifierBinding {
    /// A class, mixin or enum declaration.
    TypeDecl(DeclId),
    /// An extension declaration.
    Extension(DeclId),
    ImportPrefix(NamespaceId),
    /// A variable, parameter, getter or anything else producing a value.
    Value,
}

/// Where a `super` expression appears.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SuperContext {
    /// Inside an instance member of a class or mixin.
    Valid,
    /// Inside a static member.
    Static,
    /// Inside an extension member; extensions have no superclass.
    Extension,
    OutsideClass,
    Annotation,
}

/// The syntactic receiver of a member access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TargetExpr {
    /// Any value-producing expression.
    Expression { static_type: TypeId, span: Span },
    /// A bare identifier, which may denote a declaration rather than a value.
    Identifier {
        name: Identifier,
        binding: IdentifierBinding,
        /// The type of the identifier as a value expression (`Type` for a
        /// type name).
        static_type: TypeId,
    },
    /// `Extension(receiver)`.
    ExtensionOverride {
        extension: DeclId,
        extension_name: Identifier,
        receiver_type: TypeId,
    },
    Super {
        context: SuperContext,
        /// Type of `this` in the enclosing declaration.
        this_type: Option<TypeId>,
        span: Span,
    },
}

impl TargetExpr {
    pub const fn expression(static_type: TypeId, span: Span) -> Self {
        TargetExpr::Expression { static_type, span }
    }

    /// The receiver's static type when it is used as a value.
    pub const fn static_type(&self) -> Option<TypeId> {
        match self {
            TargetExpr::Expression { static_type, .. }
            | TargetExpr::Identifier { static_type, .. } => Some(*static_type),
            TargetExpr::ExtensionOverride { .. } | TargetExpr::Super { .. } => None,
        }
    }
}

/// One property access site: `target.property`, `target?.property`,
/// `..property`, possibly in read, write or read-write position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessRequest {
    pub target: TargetExpr,
    pub property: Identifier,
    /// The receiver is the head of a cascade (`target..property`).
    pub is_cascaded: bool,
    /// `?.` access.
    pub is_null_aware: bool,
    pub has_read: bool,
    pub has_write: bool,
}

impl AccessRequest {
    /// A plain read access.
    pub const fn new(target: TargetExpr, property: Identifier) -> Self {
        Self {
            target,
            property,
            is_cascaded: false,
            is_null_aware: false,
            has_read: true,
            has_write: false,
        }
    }

    pub const fn with_access(mut self, has_read: bool, has_write: bool) -> Self {
        self.has_read = has_read;
        self.has_write = has_write;
        self
    }

    /// Plain assignment: write only.
    pub const fn for_write(self) -> Self {
        self.with_access(false, true)
    }

    /// Compound assignment or increment: read and write.
    pub const fn for_read_write(self) -> Self {
        self.with_access(true, true)
    }

    pub const fn cascaded(mut self) -> Self {
        self.is_cascaded = true;
        self
    }

    pub const fn null_aware(mut self) -> Self {
        self.is_null_aware = true;
        self
    }
}

/// One index access site: `target[index]`, `target?[index]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexRequest {
    pub target: TargetExpr,
    /// The `[...]` part, used for diagnostics.
    pub brackets: Span,
    pub is_cascaded: bool,
    pub is_null_aware: bool,
    pub has_read: bool,
    pub has_write: bool,
}

impl IndexRequest {
    pub const fn new(target: TargetExpr, brackets: Span) -> Self {
        Self {
            target,
            brackets,
            is_cascaded: false,
            is_null_aware: false,
            has_read: true,
            has_write: false,
        }
    }

    pub const fn with_access(mut self, has_read: bool, has_write: bool) -> Self {
        self.has_read = has_read;
        self.has_write = has_write;
        self
    }

    pub const fn cascaded(mut self) -> Self {
        self.is_cascaded = true;
        self
    }

    pub const fn null_aware(mut self) -> Self {
        self.is_null_aware = true;
        self
    }
}
