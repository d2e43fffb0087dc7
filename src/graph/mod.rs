// src/graph/mod.rs
//! Graph materialization: finished nodes and resolved references.

pub mod builder;
pub mod nodes;

pub use builder::{resolve_group_ref, GraphBuilder};
pub use nodes::{
    AddressRef, ContactNode, ContentGraph, DetailNode, GroupNode, Reference, ReferenceList,
    SubjectNode,
};

use crate::error::Result;
use crate::model::{SearchRecord, Subject};

/// Builds the content graph with a fresh identifier table, the common
/// single-run case.
///
/// # Errors
///
/// See [`GraphBuilder::build`].
pub fn build_graph(subjects: &[Subject], search: &[SearchRecord]) -> Result<ContentGraph> {
    GraphBuilder::new().build(subjects, search)
}
