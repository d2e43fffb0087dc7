// src/graph/nodes.rs
//! Output node and reference types handed to the storage layer.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::model::NodeKind;

/// A typed edge to another node, by identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reference {
    pub kind: NodeKind,
    pub id: String,
}

impl Reference {
    #[must_use]
    pub fn new(kind: NodeKind, id: &str) -> Self {
        Self {
            kind,
            id: id.to_string(),
        }
    }

    /// Edge to a subject node; subject ids are their codes.
    #[must_use]
    pub fn subject(code: &str) -> Self {
        Self::new(NodeKind::Subject, code)
    }
}

/// A counted collection of edges, the shape group nodes expose their
/// membership under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceList {
    pub total_count: usize,
    pub nodes: Vec<Reference>,
}

impl ReferenceList {
    /// Builds the membership collection for a group node.
    #[must_use]
    pub fn subjects(codes: &[String]) -> Self {
        Self {
            total_count: codes.len(),
            nodes: codes.iter().map(|code| Reference::subject(code)).collect(),
        }
    }
}

/// One derived group entity (teacher, category, year, or field).
#[derive(Debug, Clone, Serialize)]
pub struct GroupNode {
    pub id: String,
    pub kind: NodeKind,
    pub name: String,
    pub members: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    pub subjects: ReferenceList,
}

/// The detail metadata promoted out of a subject into its own node.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailNode {
    pub id: String,
    pub path: String,
    pub subject: Reference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_position: Option<String>,
    pub attributes: Map<String, Value>,
}

/// One syllabus subject with every categorical label resolved to an edge.
#[derive(Debug, Clone, Serialize)]
pub struct SubjectNode {
    pub id: String,
    pub code: String,
    pub teacher: Reference,
    pub category: Reference,
    pub year: Reference,
    pub field: Reference,
    pub detail: Reference,
    pub attributes: Map<String, Value>,
}

/// One teacher's deduplicated address list.
#[derive(Debug, Clone, Serialize)]
pub struct ContactNode {
    pub id: String,
    pub teacher: Reference,
    pub addresses: Vec<AddressRef>,
}

/// A single address paired with the subject it was discovered in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressRef {
    pub address: String,
    pub subject: Reference,
}

/// The finished graph: every node the run emits, in emission order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ContentGraph {
    pub teachers: Vec<GroupNode>,
    pub categories: Vec<GroupNode>,
    pub years: Vec<GroupNode>,
    pub fields: Vec<GroupNode>,
    pub subjects: Vec<SubjectNode>,
    pub details: Vec<DetailNode>,
    pub contacts: Vec<ContactNode>,
}

impl ContentGraph {
    /// Total node count across all kinds.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.teachers.len()
            + self.categories.len()
            + self.years.len()
            + self.fields.len()
            + self.subjects.len()
            + self.details.len()
            + self.contacts.len()
    }
}
