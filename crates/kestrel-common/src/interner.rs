//! String interning.
//!
//! Identifiers are interned once and compared as `Atom`s afterwards. The
//! interner is shared between the program model and the resolver, possibly
//! across threads, so interning goes through a sharded map and takes `&self`.

use dashmap::DashMap;
use std::sync::{Arc, RwLock};

/// An interned string handle. Equality is O(1).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Atom(pub u32);

impl Atom {
    /// The empty string is always interned first.
    pub const EMPTY: Self = Self(0);
}

/// Thread-safe string interner.
///
/// ```ignore
/// let interner = Interner::new();
/// let a = interner.intern_string("length");
/// assert_eq!(a, interner.intern_string("length"));
/// assert_eq!(&*interner.resolve(a), "length");
/// ```
pub struct Interner {
    lookup: DashMap<Arc<str>, Atom>,
    strings: RwLock<Vec<Arc<str>>>,
}

impl Default for Interner {
    fn default() -> Self {
        Self::new()
    }
}

impl Interner {
    pub fn new() -> Self {
        let interner = Self {
            lookup: DashMap::new(),
            strings: RwLock::new(Vec::new()),
        };
        interner.intern_string("");
        interner
    }

    /// Intern a string, returning the existing atom if it was seen before.
    pub fn intern_string(&self, text: &str) -> Atom {
        if let Some(existing) = self.lookup.get(text) {
            return *existing;
        }
        let text: Arc<str> = Arc::from(text);
        // The entry lock serializes concurrent interning of the same string,
        // so the vector push happens exactly once per distinct text.
        *self.lookup.entry(text.clone()).or_insert_with(|| {
            let mut strings = match self.strings.write() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            let atom = Atom(strings.len() as u32);
            strings.push(text);
            atom
        })
    }

    /// Resolve an atom back to its text. Unknown atoms resolve to `""`.
    pub fn resolve(&self, atom: Atom) -> Arc<str> {
        let strings = match self.strings.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        strings
            .get(atom.0 as usize)
            .cloned()
            .unwrap_or_else(|| Arc::from(""))
    }

    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }
}

#[cfg(test)]
#[path = "../tests/interner_tests.rs"]
mod tests;
