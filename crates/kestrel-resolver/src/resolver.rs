//! The property element resolver.
//!
//! `resolve` classifies the access target and hands off to one strategy per
//! target kind (see `strategies/`). Each strategy fills the read and write
//! slots of a `ResolutionResult` and reports through the caller's sink.

use crate::classify::TargetKind;
use crate::context::ResolverContext;
use crate::diagnostics::DiagnosticSink;
use crate::request::{AccessRequest, Identifier, IndexRequest};
use crate::result::ResolutionResult;
use kestrel_common::diagnostic_codes;
use kestrel_model::ElementId;
use tracing::{debug, trace};

pub struct PropertyElementResolver<'a> {
    pub(crate) ctx: ResolverContext<'a>,
}

impl<'a> PropertyElementResolver<'a> {
    pub fn new(ctx: ResolverContext<'a>) -> Self {
        Self { ctx }
    }

    /// Bind the property of `request` to its read and write elements.
    ///
    /// Failures are reported to `sink` and leave the affected slots empty
    /// (or filled with a recovery element); resolution never aborts.
    pub fn resolve(
        &self,
        request: &AccessRequest,
        sink: &mut dyn DiagnosticSink,
    ) -> ResolutionResult {
        if !request.has_read && !request.has_write {
            return ResolutionResult::default();
        }

        let kind = TargetKind::classify(request);
        debug!(
            ?kind,
            name = %self.ctx.program.name_of(request.property.name),
            read = request.has_read,
            write = request.has_write,
            "resolve property"
        );

        match kind {
            TargetKind::ExtensionOverride {
                extension,
                extension_name,
                receiver_type,
            } => self.resolve_extension_override(
                extension,
                &extension_name,
                receiver_type,
                request,
                sink,
            ),
            TargetKind::SuperReference { context, this_type } => {
                self.resolve_super_property(context, this_type, request, sink)
            }
            TargetKind::TypeReference(decl) => self.resolve_type_reference(decl, request, sink),
            TargetKind::ExtensionReference(decl) => {
                self.resolve_extension_reference(decl, request, sink)
            }
            TargetKind::ImportPrefix(namespace) => {
                self.resolve_import_prefix(namespace, request, sink)
            }
            TargetKind::Expression { static_type } => {
                self.resolve_expression_property(static_type, request, sink)
            }
        }
    }

    /// Bind the `[]` (read) and `[]=` (write) operators of an index access.
    pub fn resolve_index(
        &self,
        request: &IndexRequest,
        sink: &mut dyn DiagnosticSink,
    ) -> ResolutionResult {
        if !request.has_read && !request.has_write {
            return ResolutionResult::default();
        }

        let kind = TargetKind::classify_index(request);
        debug!(?kind, read = request.has_read, write = request.has_write, "resolve index");

        match kind {
            TargetKind::ExtensionOverride {
                extension,
                extension_name,
                receiver_type,
            } => self.resolve_override_index(
                extension,
                &extension_name,
                receiver_type,
                request,
                sink,
            ),
            TargetKind::SuperReference { context, this_type } => {
                self.resolve_super_index(context, this_type, request, sink)
            }
            TargetKind::Expression { static_type } => {
                self.resolve_expression_index(static_type, request, sink)
            }
            // `classify_index` never produces these.
            TargetKind::TypeReference(_)
            | TargetKind::ExtensionReference(_)
            | TargetKind::ImportPrefix(_) => ResolutionResult::default(),
        }
    }

    // =========================================================================
    // Shared helpers
    // =========================================================================

    pub(crate) fn normalize(&self, element: ElementId) -> ElementId {
        self.ctx.services.normalizer.normalize(element)
    }

    pub(crate) fn is_accessible(&self, element: ElementId) -> bool {
        self.ctx
            .program
            .element(element)
            .is_some_and(|e| e.is_accessible_in(self.ctx.unit))
    }

    pub(crate) fn is_static(&self, element: ElementId) -> bool {
        self.ctx
            .program
            .element(element)
            .is_some_and(|e| e.is_static())
    }

    /// A static-style access (`Type.name`, `Extension.name`) found an
    /// instance member.
    pub(crate) fn check_static_access_to_instance_member(
        &self,
        property: &Identifier,
        element: ElementId,
        sink: &mut dyn DiagnosticSink,
    ) {
        if !self.is_static(element) {
            trace!(element = element.0, "instance member through static access");
            sink.error(
                diagnostic_codes::STATIC_ACCESS_TO_INSTANCE_MEMBER,
                property.span,
                vec![property.name.into()],
            );
        }
    }
}
