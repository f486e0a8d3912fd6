//! Member lookup through the declaration hierarchy.
//!
//! The walk order is the dispatch order: a declaration's own members, then
//! its mixins from the last applied to the first, then its superclass, which
//! is walked the same way. `LookupMode::Inherited` continues into interfaces
//! and mixin constraints breadth-first once the superclass chain is exhausted.
//!
//! Hierarchy flattening is not cached; chains are short and the resolver asks
//! one question per access site.

use crate::decl::{DeclId, DeclKind};
use crate::element::{ElementId, Name};
use crate::program::Program;
use crate::types::TypeId;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use std::collections::VecDeque;

/// What to look for. A `Getter` query is also satisfied by a method, which
/// reads as a function-valued getter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Getter,
    Setter,
    Method,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LookupMode {
    /// Only members with an implementation.
    Concrete,
    /// Any member, abstract or not, including those only reachable through
    /// interfaces.
    Inherited,
}

type Chain = SmallVec<[DeclId; 8]>;

impl Program {
    /// The declaration behind `decl`'s superclass type.
    pub fn superclass_decl(&self, decl: DeclId) -> Option<DeclId> {
        let superclass = self.decl(decl)?.superclass?;
        self.interface_decl(superclass)
    }

    /// A member declared directly on `decl`, static or instance, without
    /// inheritance and without the getter-method fallback.
    pub fn declared_member(
        &self,
        decl: DeclId,
        name: kestrel_common::Atom,
        kind: MemberKind,
    ) -> Option<ElementId> {
        let info = self.decl(decl)?;
        match kind {
            MemberKind::Getter => info.getter(name),
            MemberKind::Setter => info.setter(name),
            MemberKind::Method => info.method(name),
        }
    }

    /// Look up an instance member of `decl` as seen from `name.unit`.
    pub fn lookup_member(
        &self,
        decl: DeclId,
        name: &Name,
        kind: MemberKind,
        mode: LookupMode,
    ) -> Option<ElementId> {
        let chain = self.class_chain(decl);
        self.lookup_in_chain(&chain, name, kind, mode)
    }

    /// The member `super.<name>` binds to inside `class`: the walk starts
    /// after `class`'s own members.
    ///
    /// Inside a mixin the superclass is only known through its constraints,
    /// and whatever they declare will be concrete in any valid application,
    /// so constraint members count as concrete.
    pub fn super_member(
        &self,
        class: DeclId,
        name: &Name,
        kind: MemberKind,
        mode: LookupMode,
    ) -> Option<ElementId> {
        let info = self.decl(class)?;
        if info.kind == DeclKind::Mixin {
            return info
                .superclass_constraints
                .iter()
                .filter_map(|&ty| self.interface_decl(ty))
                .find_map(|c| self.lookup_member(c, name, kind, LookupMode::Inherited));
        }
        let chain = self.class_chain(class);
        self.lookup_in_chain(&chain[1..], name, kind, mode)
    }

    /// Whether `decl` or one of its superclasses below `Object` declares a
    /// concrete `noSuchMethod`, so unknown member sends are handled at runtime.
    pub fn declares_catch_all(&self, decl: DeclId) -> bool {
        let no_such_method = self.core.names.no_such_method;
        let object = self.core.object;
        self.class_chain(decl).into_iter().any(|d| {
            d != object
                && self
                    .declared_member(d, no_such_method, MemberKind::Method)
                    .and_then(|m| self.element(m))
                    .is_some_and(|m| !m.is_abstract() && !m.is_static())
        })
    }

    /// Every declaration `decl` inherits from, including itself, `Object`
    /// last (for classes, mixins and enums). Breadth-first, no duplicates.
    pub fn all_supertypes(&self, decl: DeclId) -> Vec<DeclId> {
        let mut seen = FxHashSet::default();
        let mut order = Vec::new();
        let mut queue = VecDeque::from([decl]);
        while let Some(current) = queue.pop_front() {
            if !seen.insert(current) {
                continue;
            }
            order.push(current);
            queue.extend(self.direct_supertypes(current));
        }
        let object = self.core.object;
        let is_extension = self.decl(decl).is_some_and(|d| d.is_extension());
        if let Some(pos) = order.iter().position(|&d| d == object) {
            order.remove(pos);
            order.push(object);
        } else if !is_extension {
            order.push(object);
        }
        order
    }

    fn direct_supertypes(&self, decl: DeclId) -> impl Iterator<Item = DeclId> + '_ {
        let types: SmallVec<[TypeId; 4]> = self
            .decl(decl)
            .map(|info| {
                info.superclass
                    .iter()
                    .chain(&info.mixins)
                    .chain(&info.interfaces)
                    .chain(&info.superclass_constraints)
                    .copied()
                    .collect()
            })
            .unwrap_or_default();
        types
            .into_iter()
            .filter_map(move |ty| self.interface_decl(ty))
    }

    /// `decl`, its mixins in reverse application order, then the same for
    /// each superclass.
    fn class_chain(&self, decl: DeclId) -> Chain {
        let mut chain = Chain::new();
        let mut seen = FxHashSet::default();
        let mut current = Some(decl);
        while let Some(d) = current {
            if !seen.insert(d) {
                break;
            }
            chain.push(d);
            let Some(info) = self.decl(d) else { break };
            for &mixin in info.mixins.iter().rev() {
                if let Some(m) = self.interface_decl(mixin) {
                    chain.push(m);
                }
            }
            current = self.superclass_decl(d);
        }
        chain
    }

    fn lookup_in_chain(
        &self,
        chain: &[DeclId],
        name: &Name,
        kind: MemberKind,
        mode: LookupMode,
    ) -> Option<ElementId> {
        if let Some(found) = chain
            .iter()
            .find_map(|&d| self.instance_member_in(d, name, kind, mode))
        {
            return Some(found);
        }
        if mode == LookupMode::Concrete {
            return None;
        }

        let mut seen: FxHashSet<DeclId> = chain.iter().copied().collect();
        let mut queue: VecDeque<DeclId> = chain
            .iter()
            .filter_map(|&d| self.decl(d))
            .flat_map(|info| info.interfaces.iter().chain(&info.superclass_constraints))
            .filter_map(|&ty| self.interface_decl(ty))
            .collect();
        while let Some(current) = queue.pop_front() {
            if !seen.insert(current) {
                continue;
            }
            if let Some(found) = self.instance_member_in(current, name, kind, mode) {
                return Some(found);
            }
            queue.extend(self.direct_supertypes(current));
        }
        None
    }

    fn instance_member_in(
        &self,
        decl: DeclId,
        name: &Name,
        kind: MemberKind,
        mode: LookupMode,
    ) -> Option<ElementId> {
        let info = self.decl(decl)?;
        let candidate = match kind {
            MemberKind::Getter => info.getter(name.text).or_else(|| info.method(name.text)),
            MemberKind::Setter => info.setter(name.text),
            MemberKind::Method => info.method(name.text),
        }?;
        let element = self.element(candidate)?;
        let usable = name.matches(element)
            && !element.is_static()
            && (mode == LookupMode::Inherited || !element.is_abstract());
        usable.then_some(candidate)
    }
}

#[cfg(test)]
#[path = "../tests/hierarchy_tests.rs"]
mod tests;
