//! Tests for outline scanning and tree building

use super::helpers::{cerebrum_with_input, depths, leveled, run};
use crate::interpreter::outline::{build_tree, depth_first, marker_run, scan, Line};
use crate::interpreter::OutlineError;

/* ===================== Scanning ===================== */

#[test]
fn test_marker_run() {
    assert_eq!(marker_run("* print hi", '*'), Some(1));
    assert_eq!(marker_run("*** print hi", '*'), Some(3));
    assert_eq!(marker_run("**print hi", '*'), None);
    assert_eq!(marker_run("print hi", '*'), None);
    assert_eq!(marker_run("*", '*'), None);
    assert_eq!(marker_run("# print hi", '#'), Some(1));
}

#[test]
fn test_scan_ignores_preamble_and_unmarked_lines() {
    let text = "Title line\n\n* first\nstray text\n** second\n* third  ";

    let lines = scan(text, '*').unwrap();
    assert_eq!(
        lines,
        vec![
            Line {
                number: 3,
                depth: 1,
                text: "first"
            },
            Line {
                number: 5,
                depth: 2,
                text: "second"
            },
            Line {
                number: 6,
                depth: 1,
                text: "third"
            },
        ]
    );
}

#[test]
fn test_scan_depth_is_relative_to_base_level() {
    let lines = scan("** a\n*** b\n** c", '*').unwrap();
    let depths: Vec<usize> = lines.iter().map(|line| line.depth).collect();
    assert_eq!(depths, vec![1, 2, 1]);
}

#[test]
fn test_scan_rejects_lines_above_base_level() {
    let err = scan("** a\n* b", '*').unwrap_err();
    assert_eq!(
        err,
        OutlineError::BelowBase {
            line: 2,
            depth: 1,
            base: 2
        }
    );
}

#[test]
fn test_scan_keeps_text_after_first_separator() {
    let lines = scan("* print  two spaces", '*').unwrap();
    assert_eq!(lines[0].text, "print  two spaces");
}

/* ===================== Tree Building ===================== */

#[test]
fn test_flat_list_stays_flat() {
    let tree = build_tree(leveled(&[1, 1, 1]), 1).unwrap();

    let texts: Vec<&str> = tree.iter().map(|n| n.text()).collect();
    assert_eq!(texts, vec!["line 1", "line 2", "line 3"]);
    assert!(tree.iter().all(|n| n.chain().is_empty()));
}

#[test]
fn test_mid_sequence_block_attaches_to_previous() {
    let tree = build_tree(leveled(&[1, 2, 2, 1]), 1).unwrap();

    assert_eq!(tree.len(), 2);
    assert_eq!(tree[0].text(), "line 1");
    assert_eq!(tree[0].chain().len(), 1);
    let children: Vec<&str> = tree[0].children().map(|n| n.text()).collect();
    assert_eq!(children, vec!["line 2", "line 3"]);

    // The line that closed the block is kept as a sibling
    assert_eq!(tree[1].text(), "line 4");
    assert!(tree[1].chain().is_empty());
}

#[test]
fn test_trailing_block_attaches_to_previous() {
    let tree = build_tree(leveled(&[1, 1, 2, 2]), 1).unwrap();

    assert_eq!(tree.len(), 2);
    assert!(tree[0].chain().is_empty());
    assert_eq!(tree[1].chain().len(), 1);
    let children: Vec<&str> = tree[1].children().map(|n| n.text()).collect();
    assert_eq!(children, vec!["line 3", "line 4"]);
}

#[test]
fn test_mid_sequence_and_trailing_paths_agree() {
    // Same block shape, once followed by a sibling and once at the very end
    let mid = build_tree(leveled(&[1, 2, 3, 2, 1]), 1).unwrap();
    let trailing = build_tree(leveled(&[1, 2, 3, 2]), 1).unwrap();

    assert_eq!(mid[0].chain(), trailing[0].chain());
    assert_eq!(mid[0].chain()[0][0].children().count(), 1);
}

#[test]
fn test_depth_round_trip() {
    let cases: [&[usize]; 5] = [
        &[1, 1, 1],
        &[1, 2, 2, 1],
        &[1, 1, 2, 2],
        &[1, 2, 3, 3, 2, 1, 2, 3],
        &[1, 2, 3, 4, 1, 2],
    ];

    for case in cases {
        let tree = build_tree(leveled(case), 1).unwrap();
        assert_eq!(depths(&tree), case.to_vec(), "round trip of {:?}", case);

        let lines: Vec<usize> = depth_first(&tree).iter().map(|n| n.line()).collect();
        assert_eq!(lines, (1..=case.len()).collect::<Vec<_>>());
    }
}

#[test]
fn test_read_round_trip() {
    let source = "\
* loop
** print a
*** print b
** print c
* print d
** print e";

    let mut cerebrum = cerebrum_with_input(&[]);
    assert_eq!(cerebrum.read(source).unwrap(), 6);
    assert_eq!(depths(cerebrum.neurons()), vec![1, 2, 3, 2, 1, 2]);
}

#[test]
fn test_skipped_level_is_orphaned() {
    let err = build_tree(leveled(&[1, 3]), 1).unwrap_err();
    assert_eq!(
        err,
        OutlineError::Orphaned {
            line: 2,
            depth: 3,
            parent: 2
        }
    );
}

#[test]
fn test_leading_deep_line_is_orphaned() {
    let err = build_tree(leveled(&[2, 1]), 1).unwrap_err();
    assert_eq!(
        err,
        OutlineError::Orphaned {
            line: 1,
            depth: 2,
            parent: 1
        }
    );
}

#[test]
fn test_shallower_line_is_a_structural_error() {
    let err = build_tree(leveled(&[2, 1]), 2).unwrap_err();
    assert_eq!(
        err,
        OutlineError::Shallower {
            line: 2,
            depth: 1,
            expected: 2
        }
    );
}

#[test]
fn test_empty_input_builds_empty_tree() {
    assert!(build_tree(Vec::new(), 1).unwrap().is_empty());
    assert!(run("").neurons().is_empty());
}
