//! Tests for depth-indented rendering

use treedoc::{render, render_range, Tree, TreeDisplay, TreeMode};

fn binary_scenario() -> Tree {
    let mut tree = Tree::with_root(10);
    for (path, value) in [("L", 5), ("R", 15), ("LL", 3), ("LR", 7), ("RL", 12), ("RR", 18)] {
        tree.insert_by_path(path, value, TreeMode::Binary).unwrap();
    }
    tree
}

#[test]
fn given_binary_scenario_when_rendering_then_output_matches_exactly() {
    let tree = binary_scenario();

    let expected = "\
Root:10
 L---5
  L---3
  R---7
 R---15
  L---12
  R---18
";
    assert_eq!(render(&tree, TreeMode::Binary), expected);
}

#[test]
fn given_general_tree_when_rendering_then_glyphs_are_child_indices() {
    let mut tree = Tree::with_root("CEO");
    tree.insert_by_path("0", "CTO", TreeMode::General).unwrap();
    tree.insert_by_path("1", "CFO", TreeMode::General).unwrap();
    tree.insert_by_path("0-0", "Eng Mgr", TreeMode::General)
        .unwrap();

    let expected = "\
Root:CEO
 0---CTO
  0---Eng Mgr
 1---CFO
";
    assert_eq!(render(&tree, TreeMode::General), expected);
}

#[test]
fn given_depth_window_when_rendering_range_then_only_window_lines_appear() {
    let tree = binary_scenario();

    let expected = " L---5\n  L---3\n  R---7\n R---15\n  L---12\n  R---18\n";
    assert_eq!(render_range(&tree, TreeMode::Binary, 1, 2), expected);

    let top = "Root:10\n L---5\n R---15\n";
    assert_eq!(render_range(&tree, TreeMode::Binary, 0, 1), top);
}

#[test]
fn given_window_below_tree_depth_when_rendering_range_then_output_is_empty() {
    let tree = binary_scenario();
    assert_eq!(render_range(&tree, TreeMode::Binary, 5, 9), "");
}

#[test]
fn given_full_range_when_rendering_then_matches_plain_render() {
    let tree = binary_scenario();
    assert_eq!(
        render_range(&tree, TreeMode::Binary, 0, usize::MAX),
        render(&tree, TreeMode::Binary)
    );
}

#[test]
fn given_tree_when_converting_to_termtree_then_all_values_appear() {
    let tree = binary_scenario();
    let displayed = tree.to_tree_string().to_string();
    for value in ["10", "5", "3", "7", "15", "12", "18"] {
        assert!(displayed.contains(value), "{} missing from display", value);
    }
}

#[test]
fn given_empty_tree_when_converting_to_termtree_then_placeholder_is_shown() {
    let tree = Tree::new();
    assert!(tree.to_tree_string().to_string().contains("Empty tree"));
}
