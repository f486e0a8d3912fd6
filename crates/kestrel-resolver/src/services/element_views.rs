use super::ElementViewNormalizer;
use crate::options::NullSafetyMode;
use kestrel_model::{ElementId, Program};

/// Sound units see elements as declared; legacy units see the
/// nullability-erased view where the program provides one.
#[derive(Copy, Clone)]
pub struct ElementViews<'a> {
    program: &'a Program,
    mode: NullSafetyMode,
}

impl<'a> ElementViews<'a> {
    pub const fn new(program: &'a Program, mode: NullSafetyMode) -> Self {
        Self { program, mode }
    }
}

impl ElementViewNormalizer for ElementViews<'_> {
    fn normalize(&self, element: ElementId) -> ElementId {
        match self.mode {
            NullSafetyMode::Sound => element,
            NullSafetyMode::Legacy => self.program.legacy_view(element).unwrap_or(element),
        }
    }
}
