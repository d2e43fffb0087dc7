// src/model.rs
//! Input records and the kind enums shared across the pipeline.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Display name used for group labels that arrive empty.
pub const UNKNOWN_NAME: &str = "不明";

/// One record from the syllabus dataset. `code` is the primary key; the four
/// categorical fields are raw text labels, not yet identifiers. Attributes
/// outside this shape pass through untouched into the emitted node.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Subject {
    pub code: String,
    pub teacher: String,
    pub category: String,
    pub year: String,
    pub field: String,
    #[serde(default)]
    pub detail: SubjectDetail,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Subject {
    #[must_use]
    pub fn new(code: &str, teacher: &str, category: &str, year: &str, field: &str) -> Self {
        Self {
            code: code.to_string(),
            teacher: teacher.to_string(),
            category: category.to_string(),
            year: year.to_string(),
            field: field.to_string(),
            detail: SubjectDetail::default(),
            attributes: Map::new(),
        }
    }

    /// Sets the nested teacher position, as found in the syllabus detail.
    #[must_use]
    pub fn with_position(mut self, position: &str) -> Self {
        self.detail.teacher_position = Some(position.to_string());
        self
    }
}

/// Nested metadata carried by each subject. Detached and promoted to its own
/// node during materialization, 1:1 with the owning subject.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubjectDetail {
    #[serde(rename = "teacherPosition", default)]
    pub teacher_position: Option<String>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// One record from the full-text search dataset. `id` matches a subject
/// code; records without a text payload are malformed and skipped.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRecord {
    pub id: String,
    #[serde(default)]
    pub text: Option<String>,
}

/// Every node kind the materializer emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Subject,
    Detail,
    Teacher,
    Category,
    Year,
    Field,
    Contact,
}

impl NodeKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Subject => "subject",
            NodeKind::Detail => "detail",
            NodeKind::Teacher => "teacher",
            NodeKind::Category => "category",
            NodeKind::Year => "year",
            NodeKind::Field => "field",
            NodeKind::Contact => "contact",
        }
    }
}

/// The four categorical kinds subjects are aggregated by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    Teacher,
    Category,
    Year,
    Field,
}

impl GroupKind {
    pub const ALL: [GroupKind; 4] = [
        GroupKind::Teacher,
        GroupKind::Category,
        GroupKind::Year,
        GroupKind::Field,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.node_kind().as_str()
    }

    #[must_use]
    pub fn node_kind(self) -> NodeKind {
        match self {
            GroupKind::Teacher => NodeKind::Teacher,
            GroupKind::Category => NodeKind::Category,
            GroupKind::Year => NodeKind::Year,
            GroupKind::Field => NodeKind::Field,
        }
    }

    /// The raw label this kind groups by on a subject.
    #[must_use]
    pub fn label(self, subject: &Subject) -> &str {
        match self {
            GroupKind::Teacher => &subject.teacher,
            GroupKind::Category => &subject.category,
            GroupKind::Year => &subject.year,
            GroupKind::Field => &subject.field,
        }
    }
}

/// Falls back to the placeholder when a label arrives empty.
#[must_use]
pub fn display_name(label: &str) -> String {
    if label.is_empty() {
        UNKNOWN_NAME.to_string()
    } else {
        label.to_string()
    }
}
