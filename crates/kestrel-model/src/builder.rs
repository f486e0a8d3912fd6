//! Program construction.
//!
//! ## Usage
//!
//! ```ignore
//! let mut b = ProgramBuilder::new();
//! let lib = b.add_unit("lib.kes");
//! let shape = b.class(lib, "Shape");
//! b.add_member(shape, MemberSpec::getter("area").as_abstract())?;
//! let circle = b.class(lib, "Circle");
//! b.set_superclass(circle, b.interface_type(shape))?;
//! let program = b.finish()?;
//! ```

use crate::decl::{DeclId, DeclInfo, DeclKind, NamespaceId, NamespaceInfo, UnitId, UnitInfo};
use crate::element::{ElementFlags, ElementId, ElementInfo, ElementKind};
use crate::error::{ModelError, Result};
use crate::program::{CoreLibrary, Program, WellKnownNames};
use crate::types::{TypeData, TypeId, TypeInterner, TypeParamId, TypeParamInfo};
use kestrel_common::{Interner, Span};
use rustc_hash::FxHashMap;
use std::sync::Arc;
use tracing::trace;

/// Description of a member to add to a declaration or namespace.
#[derive(Clone, Debug)]
pub struct MemberSpec {
    name: String,
    kind: ElementKind,
    flags: ElementFlags,
    span: Option<Span>,
}

impl MemberSpec {
    fn new(name: &str, kind: ElementKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            flags: ElementFlags::empty(),
            span: None,
        }
    }

    pub fn getter(name: &str) -> Self {
        Self::new(name, ElementKind::Getter)
    }

    pub fn setter(name: &str) -> Self {
        Self::new(name, ElementKind::Setter)
    }

    pub fn method(name: &str) -> Self {
        Self::new(name, ElementKind::Method)
    }

    /// A user-definable operator such as `[]` or `[]=`.
    pub fn operator(name: &str) -> Self {
        let mut spec = Self::new(name, ElementKind::Method);
        spec.flags |= ElementFlags::OPERATOR;
        spec
    }

    pub fn as_static(mut self) -> Self {
        self.flags |= ElementFlags::STATIC;
        self
    }

    pub fn as_abstract(mut self) -> Self {
        self.flags |= ElementFlags::ABSTRACT;
        self
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }
}

/// Description of a field; fields induce a getter and, when mutable, a setter.
#[derive(Clone, Debug)]
pub struct FieldSpec {
    name: String,
    flags: ElementFlags,
}

impl FieldSpec {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            flags: ElementFlags::SYNTHETIC,
        }
    }

    pub fn as_final(mut self) -> Self {
        self.flags |= ElementFlags::FINAL;
        self
    }

    pub fn as_const(mut self) -> Self {
        self.flags |= ElementFlags::CONST | ElementFlags::FINAL;
        self
    }

    pub fn as_static(mut self) -> Self {
        self.flags |= ElementFlags::STATIC;
        self
    }

    pub fn as_abstract(mut self) -> Self {
        self.flags |= ElementFlags::ABSTRACT;
        self
    }
}

pub struct ProgramBuilder {
    interner: Arc<Interner>,
    types: TypeInterner,
    units: Vec<UnitInfo>,
    decls: Vec<DeclInfo>,
    elements: Vec<ElementInfo>,
    type_params: Vec<TypeParamInfo>,
    namespaces: Vec<NamespaceInfo>,
    legacy_views: FxHashMap<ElementId, ElementId>,
    core: CoreLibrary,
}

impl Default for ProgramBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgramBuilder {
    pub fn new() -> Self {
        Self::with_interner(Arc::new(Interner::new()))
    }

    /// Build on an interner shared with the front end.
    pub fn with_interner(interner: Arc<Interner>) -> Self {
        let types = TypeInterner::new();
        let names = WellKnownNames {
            call: interner.intern_string("call"),
            no_such_method: interner.intern_string("noSuchMethod"),
            index: interner.intern_string("[]"),
            index_set: interner.intern_string("[]="),
        };
        let core_unit = UnitId(0);
        let object = DeclId(0);
        let function = DeclId(1);
        let type_decl = DeclId(2);
        let core = CoreLibrary {
            unit: core_unit,
            object,
            function,
            type_decl,
            object_type: types.interface(object),
            function_type: types.interface(function),
            type_type: types.interface(type_decl),
            names,
        };

        let mut builder = Self {
            interner,
            types,
            units: Vec::new(),
            decls: Vec::new(),
            elements: Vec::new(),
            type_params: Vec::new(),
            namespaces: Vec::new(),
            legacy_views: FxHashMap::default(),
            core,
        };
        builder.declare_core_library();
        builder
    }

    fn declare_core_library(&mut self) {
        let unit = self.add_unit("core");
        let object = self.declare(unit, DeclKind::Class, "Object");
        let function = self.declare(unit, DeclKind::Class, "Function");
        let type_decl = self.declare(unit, DeclKind::Class, "Type");
        debug_assert_eq!(
            (unit, object, function, type_decl),
            (
                self.core.unit,
                self.core.object,
                self.core.function,
                self.core.type_decl
            )
        );

        let object_members = [
            MemberSpec::method("toString"),
            MemberSpec::getter("hashCode"),
            MemberSpec::getter("runtimeType"),
            MemberSpec::method("noSuchMethod"),
            MemberSpec::operator("=="),
        ];
        for spec in object_members {
            // Fresh declaration: names are distinct, so this cannot fail.
            let _ = self.add_member(object, spec);
        }
        let object_type = self.core.object_type;
        if let Some(decl) = self.decls.get_mut(function.0 as usize) {
            decl.is_abstract = true;
            decl.superclass = Some(object_type);
        }
        if let Some(decl) = self.decls.get_mut(type_decl.0 as usize) {
            decl.is_abstract = true;
            decl.superclass = Some(object_type);
        }
    }

    pub fn interner(&self) -> &Arc<Interner> {
        &self.interner
    }

    pub fn types(&self) -> &TypeInterner {
        &self.types
    }

    pub fn core(&self) -> &CoreLibrary {
        &self.core
    }

    // =========================================================================
    // Units and declarations
    // =========================================================================

    pub fn add_unit(&mut self, name: &str) -> UnitId {
        let id = UnitId(self.units.len() as u32);
        self.units.push(UnitInfo {
            name: self.interner.intern_string(name),
        });
        id
    }

    pub fn declare(&mut self, unit: UnitId, kind: DeclKind, name: &str) -> DeclId {
        let id = DeclId(self.decls.len() as u32);
        let atom = self.interner.intern_string(name);
        trace!(decl = id.0, ?kind, name, "ProgramBuilder::declare");
        self.decls.push(DeclInfo::new(atom, kind, unit));
        id
    }

    pub fn class(&mut self, unit: UnitId, name: &str) -> DeclId {
        self.declare(unit, DeclKind::Class, name)
    }

    pub fn mixin(&mut self, unit: UnitId, name: &str) -> DeclId {
        self.declare(unit, DeclKind::Mixin, name)
    }

    pub fn enumeration(&mut self, unit: UnitId, name: &str) -> DeclId {
        self.declare(unit, DeclKind::Enum, name)
    }

    /// Declare an extension on `extended_type`. Pass `""` for an unnamed one.
    pub fn extension(&mut self, unit: UnitId, name: &str, extended_type: TypeId) -> DeclId {
        let id = self.declare(unit, DeclKind::Extension, name);
        if let Some(decl) = self.decls.get_mut(id.0 as usize) {
            decl.extended_type = Some(extended_type);
        }
        id
    }

    pub fn set_abstract(&mut self, decl: DeclId) -> Result<()> {
        self.decl_mut(decl)?.is_abstract = true;
        Ok(())
    }

    pub fn set_superclass(&mut self, decl: DeclId, superclass: TypeId) -> Result<()> {
        let target = self.supertype_target(decl, superclass)?;
        if self.decl_ref(target)?.kind != DeclKind::Class {
            return Err(ModelError::InvalidSuperclass {
                decl: self.decl_name(decl),
                target: self.decl_name(target),
            });
        }
        self.require_kind(decl, &[DeclKind::Class], "a superclass")?;
        let superclass = self.types.with_nullability(superclass, false);
        self.decl_mut(decl)?.superclass = Some(superclass);
        Ok(())
    }

    pub fn add_mixin(&mut self, decl: DeclId, mixin: TypeId) -> Result<()> {
        let target = self.supertype_target(decl, mixin)?;
        if !matches!(self.decl_ref(target)?.kind, DeclKind::Mixin | DeclKind::Class) {
            return Err(ModelError::InvalidMixin {
                decl: self.decl_name(decl),
                target: self.decl_name(target),
            });
        }
        self.require_kind(decl, &[DeclKind::Class, DeclKind::Enum], "mixins")?;
        let mixin = self.types.with_nullability(mixin, false);
        self.decl_mut(decl)?.mixins.push(mixin);
        Ok(())
    }

    pub fn add_interface(&mut self, decl: DeclId, interface: TypeId) -> Result<()> {
        self.supertype_target(decl, interface)?;
        self.require_kind(
            decl,
            &[DeclKind::Class, DeclKind::Mixin, DeclKind::Enum],
            "interfaces",
        )?;
        let interface = self.types.with_nullability(interface, false);
        self.decl_mut(decl)?.interfaces.push(interface);
        Ok(())
    }

    /// Add an `on` constraint to a mixin.
    pub fn add_superclass_constraint(&mut self, mixin: DeclId, constraint: TypeId) -> Result<()> {
        self.supertype_target(mixin, constraint)?;
        self.require_kind(mixin, &[DeclKind::Mixin], "superclass constraints")?;
        let constraint = self.types.with_nullability(constraint, false);
        self.decl_mut(mixin)?.superclass_constraints.push(constraint);
        Ok(())
    }

    // =========================================================================
    // Members
    // =========================================================================

    pub fn add_member(&mut self, decl: DeclId, spec: MemberSpec) -> Result<ElementId> {
        let unit = self.decl_ref(decl)?.unit;
        if spec.flags.contains(ElementFlags::STATIC | ElementFlags::ABSTRACT) {
            return Err(ModelError::AbstractStatic { name: spec.name });
        }
        let name = self.interner.intern_string(&spec.name);
        let info = self.decl_ref(decl)?;
        let clash = match spec.kind {
            ElementKind::Getter | ElementKind::Method => {
                info.getters.contains_key(&name) || info.methods.contains_key(&name)
            }
            ElementKind::Setter => info.setters.contains_key(&name),
        };
        if clash {
            return Err(ModelError::DuplicateMember {
                decl: self.decl_name(decl),
                name: spec.name,
            });
        }

        let id = self.push_element(&spec, Some(decl), unit);
        let info = self.decl_mut(decl)?;
        info.members.push(id);
        match spec.kind {
            ElementKind::Getter => info.getters.insert(name, id),
            ElementKind::Setter => info.setters.insert(name, id),
            ElementKind::Method => info.methods.insert(name, id),
        };
        Ok(id)
    }

    /// Add a field, returning its induced getter and setter.
    pub fn add_field(
        &mut self,
        decl: DeclId,
        field: FieldSpec,
    ) -> Result<(ElementId, Option<ElementId>)> {
        let base = MemberSpec {
            name: field.name.clone(),
            kind: ElementKind::Getter,
            flags: field.flags,
            span: None,
        };
        let getter = self.add_member(decl, base.clone())?;
        if field.flags.contains(ElementFlags::FINAL) {
            return Ok((getter, None));
        }
        let setter = self.add_member(
            decl,
            MemberSpec {
                kind: ElementKind::Setter,
                ..base
            },
        )?;
        Ok((getter, Some(setter)))
    }

    /// Add a constant to an enum: a static, const getter.
    pub fn add_enum_constant(&mut self, decl: DeclId, name: &str) -> Result<ElementId> {
        self.require_kind(decl, &[DeclKind::Enum], "constants")?;
        let (getter, _) = self.add_field(decl, FieldSpec::new(name).as_static().as_const())?;
        Ok(getter)
    }

    // =========================================================================
    // Import prefixes
    // =========================================================================

    /// Register an import prefix visible in `unit`.
    pub fn add_namespace(&mut self, unit: UnitId, prefix: &str) -> NamespaceId {
        let id = NamespaceId(self.namespaces.len() as u32);
        let prefix = self.interner.intern_string(prefix);
        self.namespaces.push(NamespaceInfo::new(prefix, unit));
        id
    }

    /// Add a top-level element declared in `declaring_unit` and exported
    /// through `namespace`.
    pub fn add_top_level(
        &mut self,
        namespace: NamespaceId,
        declaring_unit: UnitId,
        spec: MemberSpec,
    ) -> Result<ElementId> {
        let name = self.interner.intern_string(&spec.name);
        let Some(ns) = self.namespaces.get(namespace.0 as usize) else {
            return Err(ModelError::UnknownId {
                what: "namespace",
                id: namespace.0,
            });
        };
        let clash = match spec.kind {
            ElementKind::Setter => ns.setters.contains_key(&name),
            _ => ns.getters.contains_key(&name),
        };
        if clash {
            return Err(ModelError::DuplicateMember {
                decl: self.interner.resolve(ns.prefix).to_string(),
                name: spec.name,
            });
        }
        let id = self.push_element(&spec, None, declaring_unit);
        if let Some(ns) = self.namespaces.get_mut(namespace.0 as usize) {
            match spec.kind {
                ElementKind::Setter => ns.setters.insert(name, id),
                _ => ns.getters.insert(name, id),
            };
        }
        Ok(id)
    }

    /// Register `view` as the legacy (pre-null-safety) view of `element`.
    pub fn legacy_view(&mut self, element: ElementId, view: ElementId) {
        self.legacy_views.insert(element, view);
    }

    // =========================================================================
    // Types
    // =========================================================================

    pub fn interface_type(&self, decl: DeclId) -> TypeId {
        self.types.interface(decl)
    }

    pub fn nullable(&self, ty: TypeId) -> TypeId {
        self.types.nullable(ty)
    }

    pub fn function_type(&self) -> TypeId {
        self.types.function()
    }

    /// Declare a type parameter and return the type referring to it.
    pub fn type_parameter(&mut self, name: &str, bound: Option<TypeId>) -> TypeId {
        let id = TypeParamId(self.type_params.len() as u32);
        self.type_params.push(TypeParamInfo {
            name: self.interner.intern_string(name),
            bound,
        });
        self.types.type_parameter(id)
    }

    // =========================================================================
    // Finish
    // =========================================================================

    /// Validate the hierarchy and freeze the program.
    pub fn finish(mut self) -> Result<Program> {
        let object = self.core.object;
        let object_type = self.core.object_type;
        for (index, decl) in self.decls.iter_mut().enumerate() {
            let implicit_object = matches!(decl.kind, DeclKind::Class | DeclKind::Enum)
                && decl.superclass.is_none()
                && DeclId(index as u32) != object;
            if implicit_object {
                decl.superclass = Some(object_type);
            }
        }
        self.check_cycles()?;

        trace!(
            decls = self.decls.len(),
            elements = self.elements.len(),
            types = self.types.len(),
            "ProgramBuilder::finish"
        );
        Ok(Program {
            interner: self.interner,
            types: self.types,
            units: self.units,
            decls: self.decls,
            elements: self.elements,
            type_params: self.type_params,
            namespaces: self.namespaces,
            legacy_views: self.legacy_views,
            core: self.core,
        })
    }

    fn check_cycles(&self) -> Result<()> {
        #[derive(Copy, Clone, PartialEq)]
        enum Mark {
            Unvisited,
            InProgress,
            Done,
        }

        let mut marks = vec![Mark::Unvisited; self.decls.len()];
        for start in 0..self.decls.len() {
            if marks[start] != Mark::Unvisited {
                continue;
            }
            // Iterative DFS: (decl, next edge index)
            let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
            marks[start] = Mark::InProgress;
            while let Some(top) = stack.len().checked_sub(1) {
                let (current, edge) = stack[top];
                let edges = self.supertype_decls(DeclId(current as u32));
                if edge < edges.len() {
                    let next = edges[edge].0 as usize;
                    stack[top].1 += 1;
                    match marks.get(next) {
                        Some(Mark::InProgress) => {
                            return Err(ModelError::InheritanceCycle {
                                decl: self.decl_name(DeclId(next as u32)),
                            });
                        }
                        Some(Mark::Unvisited) => {
                            marks[next] = Mark::InProgress;
                            stack.push((next, 0));
                        }
                        _ => {}
                    }
                } else {
                    marks[current] = Mark::Done;
                    stack.pop();
                }
            }
        }
        Ok(())
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn push_element(
        &mut self,
        spec: &MemberSpec,
        enclosing: Option<DeclId>,
        unit: UnitId,
    ) -> ElementId {
        let id = ElementId(self.elements.len() as u32);
        let mut flags = spec.flags;
        if spec.name.starts_with('_') {
            flags |= ElementFlags::PRIVATE;
        }
        self.elements.push(ElementInfo {
            name: self.interner.intern_string(&spec.name),
            kind: spec.kind,
            flags,
            enclosing,
            unit,
            span: spec.span,
        });
        id
    }

    fn supertype_decls(&self, decl: DeclId) -> Vec<DeclId> {
        let Some(info) = self.decls.get(decl.0 as usize) else {
            return Vec::new();
        };
        info.superclass
            .iter()
            .chain(&info.mixins)
            .chain(&info.interfaces)
            .chain(&info.superclass_constraints)
            .filter_map(|&ty| match self.types.lookup(ty) {
                TypeData::Interface { decl, .. } => Some(decl),
                _ => None,
            })
            .collect()
    }

    /// Resolve a supertype reference to its declaration, rejecting
    /// non-interface types and extensions.
    fn supertype_target(&self, decl: DeclId, ty: TypeId) -> Result<DeclId> {
        self.decl_ref(decl)?;
        let target = match self.types.lookup(ty) {
            TypeData::Interface { decl, .. } => decl,
            _ => {
                return Err(ModelError::InvalidSupertype {
                    decl: self.decl_name(decl),
                    target: format!("{:?}", self.types.lookup(ty)),
                });
            }
        };
        if self.decl_ref(target)?.kind == DeclKind::Extension {
            return Err(ModelError::InvalidSupertype {
                decl: self.decl_name(decl),
                target: self.decl_name(target),
            });
        }
        Ok(target)
    }

    fn require_kind(&self, decl: DeclId, allowed: &[DeclKind], what: &'static str) -> Result<()> {
        let kind = self.decl_ref(decl)?.kind;
        if allowed.contains(&kind) {
            return Ok(());
        }
        Err(ModelError::UnsupportedRelation {
            decl: self.decl_name(decl),
            kind: match kind {
                DeclKind::Class => "class",
                DeclKind::Mixin => "mixin",
                DeclKind::Enum => "enum",
                DeclKind::Extension => "extension",
            },
            what,
        })
    }

    fn decl_ref(&self, decl: DeclId) -> Result<&DeclInfo> {
        self.decls.get(decl.0 as usize).ok_or(ModelError::UnknownId {
            what: "declaration",
            id: decl.0,
        })
    }

    fn decl_mut(&mut self, decl: DeclId) -> Result<&mut DeclInfo> {
        self.decls
            .get_mut(decl.0 as usize)
            .ok_or(ModelError::UnknownId {
                what: "declaration",
                id: decl.0,
            })
    }

    fn decl_name(&self, decl: DeclId) -> String {
        self.decls
            .get(decl.0 as usize)
            .map(|d| self.interner.resolve(d.name).to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "../tests/builder_tests.rs"]
mod tests;
