// tests/unit_aggregate.rs
//! Tests for grouping flat subject records into labeled collections.

use syllabus_graph::aggregate::aggregate;
use syllabus_graph::model::{GroupKind, Subject};

fn sample_subjects() -> Vec<Subject> {
    vec![
        Subject::new("101", "Smith", "Math", "2020", "Algebra"),
        Subject::new("102", "Smith", "Math", "2021", "Geometry"),
        Subject::new("103", "Jones", "Physics", "2020", "Mechanics"),
    ]
}

#[test]
fn test_groups_by_teacher_in_first_seen_order() {
    let groups = aggregate(GroupKind::Teacher, &sample_subjects());

    assert_eq!(groups.len(), 2);
    let labels: Vec<&String> = groups.keys().collect();
    assert_eq!(labels, ["Smith", "Jones"]);
    assert_eq!(groups["Smith"].members, ["101", "102"]);
    assert_eq!(groups["Jones"].members, ["103"]);
}

#[test]
fn test_membership_is_exhaustive_and_consistent() {
    let subjects = sample_subjects();
    for kind in GroupKind::ALL {
        let groups = aggregate(kind, &subjects);
        for subject in &subjects {
            let entry = &groups[kind.label(subject)];
            let hits = entry.members.iter().filter(|c| *c == &subject.code).count();
            assert_eq!(hits, 1, "{} must appear exactly once", subject.code);
        }
    }
}

#[test]
fn test_teacher_position_copied_from_first_seen_subject() {
    let subjects = vec![
        Subject::new("101", "Smith", "Math", "2020", "Algebra").with_position("Professor"),
        Subject::new("102", "Smith", "Math", "2021", "Geometry").with_position("Lecturer"),
    ];
    let groups = aggregate(GroupKind::Teacher, &subjects);

    assert_eq!(groups["Smith"].position.as_deref(), Some("Professor"));
}

#[test]
fn test_non_teacher_kinds_carry_no_position() {
    let subjects =
        vec![Subject::new("101", "Smith", "Math", "2020", "Algebra").with_position("Professor")];
    let groups = aggregate(GroupKind::Category, &subjects);

    assert_eq!(groups["Math"].position, None);
}

#[test]
fn test_empty_label_still_gets_a_group() {
    let subjects = vec![Subject::new("101", "Smith", "", "2020", "Algebra")];
    let groups = aggregate(GroupKind::Category, &subjects);

    assert_eq!(groups[""].members, ["101"]);
}
