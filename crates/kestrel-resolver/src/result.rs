//! Resolution results.

use kestrel_model::ElementId;

/// The element bound on one side (read or write) of an access.
///
/// `recovery` never signals success: it is a plausible element attached
/// after an error has been reported so later passes have something to work
/// with.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementSlot {
    pub requested: Option<ElementId>,
    pub recovery: Option<ElementId>,
}

impl ElementSlot {
    /// Requested element, else the recovery element.
    pub const fn effective(&self) -> Option<ElementId> {
        match self.requested {
            Some(element) => Some(element),
            None => self.recovery,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.requested.is_none() && self.recovery.is_none()
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolutionResult {
    pub read: ElementSlot,
    pub write: ElementSlot,
}

impl ResolutionResult {
    pub const fn read_element_requested(&self) -> Option<ElementId> {
        self.read.requested
    }

    pub const fn read_element_recovery(&self) -> Option<ElementId> {
        self.read.recovery
    }

    pub const fn write_element_requested(&self) -> Option<ElementId> {
        self.write.requested
    }

    pub const fn write_element_recovery(&self) -> Option<ElementId> {
        self.write.recovery
    }

    /// The element downstream passes should use for reading.
    pub const fn read_element(&self) -> Option<ElementId> {
        self.read.effective()
    }

    /// The element downstream passes should use for writing.
    pub const fn write_element(&self) -> Option<ElementId> {
        self.write.effective()
    }

    pub const fn is_empty(&self) -> bool {
        self.read.is_empty() && self.write.is_empty()
    }
}
