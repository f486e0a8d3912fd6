//! Per-unit resolution context.

use crate::options::ResolverOptions;
use crate::services::Services;
use kestrel_model::{Program, UnitId};

/// Everything resolution of one unit needs: the frozen program, the unit
/// being resolved, the options and the collaborator services.
///
/// Contexts borrow the program immutably, so several units can be resolved
/// on different threads against the same `Program`.
pub struct ResolverContext<'a> {
    pub program: &'a Program,
    pub unit: UnitId,
    pub options: &'a ResolverOptions,
    pub services: Services<'a>,
}

impl<'a> ResolverContext<'a> {
    /// A context wired to the standard services.
    pub fn new(program: &'a Program, unit: UnitId, options: &'a ResolverOptions) -> Self {
        Self {
            program,
            unit,
            options,
            services: Services::standard(program, options),
        }
    }

    pub fn with_services(mut self, services: Services<'a>) -> Self {
        self.services = services;
        self
    }
}
