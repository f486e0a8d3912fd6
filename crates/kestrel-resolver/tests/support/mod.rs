//! Shared scaffolding for the resolver integration tests.

#![allow(dead_code)]

use kestrel_common::Span;
use kestrel_model::{DeclId, NamespaceId, Program, TypeId, UnitId};
use kestrel_resolver::{
    AccessRequest, DiagnosticCollector, Identifier, IdentifierBinding, IndexRequest,
    PropertyElementResolver, ResolutionResult, ResolverContext, ResolverOptions, SuperContext,
    TargetExpr,
};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

/// A finished program plus the unit the access sites live in.
pub struct Scenario {
    pub program: Program,
    pub unit: UnitId,
    pub options: ResolverOptions,
}

impl Scenario {
    pub fn new(program: Program, unit: UnitId) -> Self {
        init_tracing();
        Self {
            program,
            unit,
            options: ResolverOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ResolverOptions) -> Self {
        self.options = options;
        self
    }

    pub fn ident(&self, name: &str, start: u32) -> Identifier {
        Identifier::new(self.program.intern(name), Span::at(start, name.len() as u32))
    }

    /// `receiver.property` on a value of type `ty`.
    pub fn on_value(&self, ty: TypeId, property: &str) -> AccessRequest {
        AccessRequest::new(TargetExpr::expression(ty, Span::at(0, 8)), self.ident(property, 9))
    }

    /// `Type.property`.
    pub fn on_type(&self, decl: DeclId, type_name: &str, property: &str) -> AccessRequest {
        let target = TargetExpr::Identifier {
            name: self.ident(type_name, 0),
            binding: IdentifierBinding::TypeDecl(decl),
            static_type: self.program.core().type_type,
        };
        AccessRequest::new(target, self.ident(property, type_name.len() as u32 + 1))
    }

    /// `Extension.property`.
    pub fn on_extension(&self, decl: DeclId, name: &str, property: &str) -> AccessRequest {
        let target = TargetExpr::Identifier {
            name: self.ident(name, 0),
            binding: IdentifierBinding::Extension(decl),
            static_type: TypeId::DYNAMIC,
        };
        AccessRequest::new(target, self.ident(property, name.len() as u32 + 1))
    }

    /// `Extension(receiver).property`.
    pub fn on_override(
        &self,
        decl: DeclId,
        name: &str,
        receiver_type: TypeId,
        property: &str,
    ) -> AccessRequest {
        AccessRequest::new(
            self.override_target(decl, name, receiver_type),
            self.ident(property, 20),
        )
    }

    pub fn override_target(&self, decl: DeclId, name: &str, receiver_type: TypeId) -> TargetExpr {
        TargetExpr::ExtensionOverride {
            extension: decl,
            extension_name: self.ident(name, 0),
            receiver_type,
        }
    }

    /// `super.property` inside an instance member of the class typed `this_type`.
    pub fn on_super(&self, this_type: TypeId, property: &str) -> AccessRequest {
        AccessRequest::new(self.super_target(this_type), self.ident(property, 6))
    }

    pub fn super_target(&self, this_type: TypeId) -> TargetExpr {
        TargetExpr::Super {
            context: SuperContext::Valid,
            this_type: Some(this_type),
            span: Span::at(0, 5),
        }
    }

    /// `prefix.property`.
    pub fn on_prefix(&self, namespace: NamespaceId, prefix: &str, property: &str) -> AccessRequest {
        let target = TargetExpr::Identifier {
            name: self.ident(prefix, 0),
            binding: IdentifierBinding::ImportPrefix(namespace),
            static_type: TypeId::DYNAMIC,
        };
        AccessRequest::new(target, self.ident(property, prefix.len() as u32 + 1))
    }

    /// `receiver[...]` on a value of type `ty`.
    pub fn index_on_value(&self, ty: TypeId) -> IndexRequest {
        IndexRequest::new(TargetExpr::expression(ty, Span::at(0, 8)), Span::at(8, 3))
    }

    pub fn resolver(&self) -> PropertyElementResolver<'_> {
        PropertyElementResolver::new(ResolverContext::new(&self.program, self.unit, &self.options))
    }

    pub fn resolve(&self, request: &AccessRequest) -> (ResolutionResult, DiagnosticCollector) {
        let mut sink = DiagnosticCollector::new();
        let result = self.resolver().resolve(request, &mut sink);
        (result, sink)
    }

    pub fn resolve_index(&self, request: &IndexRequest) -> (ResolutionResult, DiagnosticCollector) {
        let mut sink = DiagnosticCollector::new();
        let result = self.resolver().resolve_index(request, &mut sink);
        (result, sink)
    }

    /// Rendered message texts, in emission order.
    pub fn messages(&self, sink: &DiagnosticCollector) -> Vec<String> {
        sink.render(&self.program, "main.kes")
            .into_iter()
            .map(|d| d.message_text)
            .collect()
    }
}
