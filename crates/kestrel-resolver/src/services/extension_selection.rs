//! Implicit extension member selection.
//!
//! An extension applies to a receiver when the receiver's type is a subtype
//! of the extension's extended type. When several applicable extensions
//! declare the member, the one whose extended type is strictly more specific
//! than every other wins; otherwise the access is ambiguous.

use kestrel_common::Atom;
use kestrel_model::{DeclId, ElementId, MemberKind, Program, TypeId, UnitId};
use smallvec::SmallVec;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ExtensionCandidate {
    pub extension: DeclId,
    pub extended_type: TypeId,
    pub getter: Option<ElementId>,
    pub setter: Option<ElementId>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExtensionSelection {
    None,
    Single(ExtensionCandidate),
    Ambiguous(Vec<DeclId>),
}

type Candidates = SmallVec<[ExtensionCandidate; 4]>;

/// Choose the extension providing `name` for a receiver of type `receiver`,
/// considering extensions visible from `unit`.
pub fn select_extension(
    program: &Program,
    receiver: TypeId,
    name: Atom,
    unit: UnitId,
) -> ExtensionSelection {
    let candidates: Candidates = program
        .extensions_visible_from(unit)
        .filter_map(|extension| candidate(program, extension, receiver, name, unit))
        .collect();

    match candidates.as_slice() {
        [] => ExtensionSelection::None,
        [only] => ExtensionSelection::Single(*only),
        all => {
            let mut most_specific = all.iter().filter(|c| {
                all.iter().all(|other| {
                    other.extension == c.extension
                        || (program.is_subtype(c.extended_type, other.extended_type)
                            && !program.is_subtype(other.extended_type, c.extended_type))
                })
            });
            match (most_specific.next(), most_specific.next()) {
                (Some(winner), None) => ExtensionSelection::Single(*winner),
                _ => ExtensionSelection::Ambiguous(all.iter().map(|c| c.extension).collect()),
            }
        }
    }
}

fn candidate(
    program: &Program,
    extension: DeclId,
    receiver: TypeId,
    name: Atom,
    unit: UnitId,
) -> Option<ExtensionCandidate> {
    let extended_type = program.decl(extension)?.extended_type?;
    if !program.is_subtype(receiver, extended_type) {
        return None;
    }
    let instance_member = |kind| {
        program
            .declared_member(extension, name, kind)
            .filter(|&id| {
                program
                    .element(id)
                    .is_some_and(|e| !e.is_static() && e.is_accessible_in(unit))
            })
    };
    let getter =
        instance_member(MemberKind::Getter).or_else(|| instance_member(MemberKind::Method));
    let setter = instance_member(MemberKind::Setter);
    if getter.is_none() && setter.is_none() {
        return None;
    }
    Some(ExtensionCandidate {
        extension,
        extended_type,
        getter,
        setter,
    })
}

/// `extensions 'A' and 'B'`, `extensions 'A', 'B' and 'C'`.
pub(crate) fn describe_extensions(program: &Program, extensions: &[DeclId]) -> String {
    let names: Vec<String> = extensions
        .iter()
        .map(|&d| match program.decl(d) {
            Some(decl) => format!("'{}'", program.name_of(decl.name)),
            None => "'<unknown>'".to_string(),
        })
        .collect();
    match names.split_last() {
        Some((last, rest)) if !rest.is_empty() => {
            format!("extensions {} and {last}", rest.join(", "))
        }
        Some((last, _)) => format!("extension {last}"),
        None => String::new(),
    }
}
