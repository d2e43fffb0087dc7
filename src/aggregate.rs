// src/aggregate.rs
//! Entity aggregation: flat subject records grouped into labeled collections.

use indexmap::IndexMap;

use crate::model::{GroupKind, Subject};

/// One aggregated group: the subject codes that carry this label, in input
/// order, plus the teacher position for teacher groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupEntry {
    pub members: Vec<String>,
    pub position: Option<String>,
}

/// Insertion-ordered `label -> entry` map; iteration order is first-seen
/// label order.
pub type GroupMap = IndexMap<String, GroupEntry>;

/// Groups `subjects` by the label `kind` extracts, in one pass over input
/// order. A label already present gets the subject's code appended; a new
/// label opens an entry with only that code. For teacher groups the position
/// is copied from the first-seen subject's detail at creation time and never
/// updated afterward. Empty labels aggregate like any other label.
#[must_use]
pub fn aggregate(kind: GroupKind, subjects: &[Subject]) -> GroupMap {
    let mut groups = GroupMap::new();

    for subject in subjects {
        let label = kind.label(subject);
        if let Some(entry) = groups.get_mut(label) {
            entry.members.push(subject.code.clone());
            continue;
        }

        let position = match kind {
            GroupKind::Teacher => subject.detail.teacher_position.clone(),
            _ => None,
        };
        groups.insert(
            label.to_string(),
            GroupEntry {
                members: vec![subject.code.clone()],
                position,
            },
        );
    }

    groups
}
