// src/graph/builder.rs
//! Two-phase graph construction: aggregate and mint, then materialize.

use std::collections::HashMap;

use crate::aggregate::{aggregate, GroupMap};
use crate::contact::{extract, AddressEntry, ContactMap};
use crate::error::{GraphError, Result};
use crate::minter::{IdKey, IdStore};
use crate::model::{display_name, GroupKind, NodeKind, SearchRecord, Subject};

use super::nodes::{
    AddressRef, ContactNode, ContentGraph, DetailNode, GroupNode, Reference, ReferenceList,
    SubjectNode,
};

const DETAIL_KIND: &str = "detail";
const CONTACT_KIND: &str = "contact";

/// Owns the per-run identifier table and drives the build.
///
/// Phase 1 aggregates the group collections, extracts contacts, and mints
/// every identifier the run will need. Phase 2 materializes nodes with only
/// read access to the now-frozen table; a missed lookup there is a
/// consistency violation and aborts the build.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    store: IdStore,
}

impl GraphBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The run's identifier table, for reverse resolution.
    #[must_use]
    pub fn store(&self) -> &IdStore {
        &self.store
    }

    /// Runs the full transformation over both datasets.
    ///
    /// # Errors
    ///
    /// Returns `MissingReferent` if materialization needs an identifier that
    /// was never minted, or `IdentifierExhaustion` from the minter.
    pub fn build(&mut self, subjects: &[Subject], search: &[SearchRecord]) -> Result<ContentGraph> {
        let groups = GroupKind::ALL.map(|kind| (kind, aggregate(kind, subjects)));
        let by_code: HashMap<&str, &Subject> =
            subjects.iter().map(|s| (s.code.as_str(), s)).collect();
        let contacts = extract(search, &by_code);

        self.mint_all(&groups, subjects, &contacts)?;

        // The table is frozen from here on; lookups only.
        let store = &self.store;
        let mut graph = ContentGraph::default();

        for (kind, map) in &groups {
            let nodes = materialize_groups(store, *kind, map)?;
            match kind {
                GroupKind::Teacher => graph.teachers = nodes,
                GroupKind::Category => graph.categories = nodes,
                GroupKind::Year => graph.years = nodes,
                GroupKind::Field => graph.fields = nodes,
            }
        }

        for subject in subjects {
            let (detail, node) = materialize_subject(store, subject)?;
            graph.details.push(detail);
            graph.subjects.push(node);
        }

        for (teacher, addresses) in &contacts {
            graph
                .contacts
                .push(materialize_contact(store, teacher, addresses)?);
        }

        Ok(graph)
    }

    fn mint_all(
        &mut self,
        groups: &[(GroupKind, GroupMap); 4],
        subjects: &[Subject],
        contacts: &ContactMap,
    ) -> Result<()> {
        for (kind, map) in groups {
            for label in map.keys() {
                self.store.mint(&IdKey::new(kind.as_str(), label))?;
            }
        }
        for subject in subjects {
            self.store.mint(&IdKey::new(DETAIL_KIND, &subject.code))?;
        }
        for teacher in contacts.keys() {
            self.store.mint(&IdKey::new(CONTACT_KIND, teacher))?;
        }
        Ok(())
    }
}

/// Resolves a categorical label to an edge pointing at its group node.
///
/// # Errors
///
/// Returns `MissingReferent` if no identifier was minted for the label,
/// i.e. the group was never aggregated.
pub fn resolve_group_ref(store: &IdStore, kind: GroupKind, label: &str) -> Result<Reference> {
    let id = lookup_minted(store, kind.as_str(), label)?;
    Ok(Reference::new(kind.node_kind(), id))
}

fn lookup_minted<'s>(store: &'s IdStore, kind: &'static str, label: &str) -> Result<&'s str> {
    store
        .lookup(&IdKey::new(kind, label))
        .ok_or_else(|| GraphError::MissingReferent {
            kind,
            label: label.to_string(),
        })
}

fn materialize_groups(store: &IdStore, kind: GroupKind, map: &GroupMap) -> Result<Vec<GroupNode>> {
    map.iter()
        .map(|(label, entry)| {
            let id = lookup_minted(store, kind.as_str(), label)?;
            Ok(GroupNode {
                id: id.to_string(),
                kind: kind.node_kind(),
                name: display_name(label),
                members: entry.members.clone(),
                position: entry.position.clone(),
                subjects: ReferenceList::subjects(&entry.members),
            })
        })
        .collect()
}

fn materialize_subject(store: &IdStore, subject: &Subject) -> Result<(DetailNode, SubjectNode)> {
    let detail_id = lookup_minted(store, DETAIL_KIND, &subject.code)?;

    let detail = DetailNode {
        id: detail_id.to_string(),
        path: format!("subject/{}/detail", subject.code),
        subject: Reference::subject(&subject.code),
        teacher_position: subject.detail.teacher_position.clone(),
        attributes: subject.detail.attributes.clone(),
    };

    let node = SubjectNode {
        id: subject.code.clone(),
        code: subject.code.clone(),
        teacher: resolve_group_ref(store, GroupKind::Teacher, &subject.teacher)?,
        category: resolve_group_ref(store, GroupKind::Category, &subject.category)?,
        year: resolve_group_ref(store, GroupKind::Year, &subject.year)?,
        field: resolve_group_ref(store, GroupKind::Field, &subject.field)?,
        detail: Reference::new(NodeKind::Detail, detail_id),
        attributes: subject.attributes.clone(),
    };

    Ok((detail, node))
}

fn materialize_contact(
    store: &IdStore,
    teacher: &str,
    addresses: &[AddressEntry],
) -> Result<ContactNode> {
    let id = lookup_minted(store, CONTACT_KIND, teacher)?;
    let teacher_ref = resolve_group_ref(store, GroupKind::Teacher, teacher)?;

    Ok(ContactNode {
        id: id.to_string(),
        teacher: teacher_ref,
        addresses: addresses
            .iter()
            .map(|entry| AddressRef {
                address: entry.address.clone(),
                subject: Reference::subject(&entry.subject),
            })
            .collect(),
    })
}
