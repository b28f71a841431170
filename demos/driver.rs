//! Walks through the library: basic operations, rank and range queries, a
//! rough timing pass and two renderings of a tree.
//!
//! Run with `cargo run --example driver`. Pass `--dot` to also print the
//! scenario tree as a Graphviz graph, and set `RUST_LOG=trace` to see the
//! library's own logging.

use std::fmt::{self, Write as _};
use std::time::Instant;

use bst_engine::{Node, Traversal, Tree};

const SCENARIO: [i32; 11] = [50, 30, 70, 20, 40, 60, 80, 15, 25, 35, 45];

/// Joins the keys visited in `order` with spaces.
fn joined(tree: &Tree<i32>, order: Traversal) -> String {
    let mut out = String::new();
    tree.traverse(order, |key| {
        let _ = write!(out, "{key} ");
    });
    out
}

/// Draws the tree sideways: the root on the left, right subtrees above their
/// parent and left subtrees below.
fn print_horizontal(node: Option<&Node<i32>>, depth: usize) {
    let Some(node) = node else {
        return;
    };
    print_horizontal(node.right(), depth + 1);
    println!("{:indent$}{}", "", node.key(), indent = depth * 6);
    print_horizontal(node.left(), depth + 1);
}

/// Renders the tree in the Graphviz DOT language. Missing children are drawn
/// as invisible points so that a lone child still leans the right way.
fn to_dot(tree: &Tree<i32>) -> Result<String, fmt::Error> {
    let mut out = String::from("digraph BST {\n    node [shape=circle];\n");
    let mut stack: Vec<&Node<i32>> = tree.root().into_iter().collect();
    let mut nulls = 0;

    while let Some(node) = stack.pop() {
        for child in [node.left(), node.right()] {
            match child {
                Some(child) => {
                    writeln!(out, "    {} -> {};", node.key(), child.key())?;
                    stack.push(child);
                }
                None => {
                    writeln!(out, "    null{nulls} [shape=point, style=invis];")?;
                    writeln!(out, "    {} -> null{nulls} [style=invis];", node.key())?;
                    nulls += 1;
                }
            }
        }
    }

    out.push_str("}\n");
    Ok(out)
}

fn basic_operations(print_dot: bool) -> Result<(), Box<dyn std::error::Error>> {
    println!("\n=== Example 1: Basic BST Operations ===");

    let mut tree = Tree::new();
    for key in SCENARIO {
        tree.insert(key);
    }
    println!("Inserted: {SCENARIO:?}");

    println!("Tree size: {}", tree.len());
    println!("Tree height: {:?}", tree.height());
    println!("Min value: {}", tree.min()?);
    println!("Max value: {}", tree.max()?);

    println!("\nTraversals:");
    println!("Inorder    : {}", joined(&tree, Traversal::Inorder));
    println!("Preorder   : {}", joined(&tree, Traversal::Preorder));
    println!("Postorder  : {}", joined(&tree, Traversal::Postorder));
    println!("Level Order: {}", joined(&tree, Traversal::LevelOrder));

    println!("\nShape:");
    print_horizontal(tree.root(), 0);
    if print_dot {
        println!("\n{}", to_dot(&tree)?);
    }

    println!("\nSearch Operations:");
    for key in [30, 35, 100] {
        let found = if tree.search(&key) { "Found" } else { "Not Found" };
        println!("Value {key}: {found}");
    }

    println!("\nDelete Operations:");
    for key in [20, 30, 50] {
        tree.try_delete(&key)?;
        println!(
            "After deleting {key}: {}(Size: {})",
            joined(&tree, Traversal::Inorder),
            tree.len()
        );
    }

    Ok(())
}

fn advanced_operations() -> Result<(), Box<dyn std::error::Error>> {
    println!("\n=== Example 2: Advanced BST Operations ===");

    // A fixed scramble keeps the output reproducible.
    let tree: Tree<i32> = (0..15).map(|i| (i * 37 + 11) % 100).collect();
    println!("Tree (inorder): {}", joined(&tree, Traversal::Inorder));

    println!("\nKth Smallest Elements:");
    for k in 1..=5 {
        println!("{k}th smallest: {}", tree.kth_smallest(k)?);
    }
    println!("2nd largest: {}", tree.kth_largest(2)?);

    let in_range: Vec<_> = tree.range(&25, &75).collect();
    println!("\nValues in range [25, 75]: {in_range:?}");

    println!("Is valid BST? {}", if tree.is_valid() { "Yes" } else { "No" });
    println!("Is balanced? {}", if tree.is_balanced() { "Yes" } else { "No" });

    let copy = Tree::from_preorder(tree.to_preorder())?;
    println!("Rebuilt from preorder equals original? {}", copy == tree);

    Ok(())
}

fn performance() {
    println!("\n=== Example 3: Performance Analysis ===");

    let mut tree = Tree::new();
    let scramble = |i: u64| (i.wrapping_mul(2_654_435_761) % 100_000) as i32;

    let start = Instant::now();
    for i in 0..10_000 {
        tree.insert(scramble(i));
    }
    println!("Inserted 10000 keys in {:.2?}", start.elapsed());

    let start = Instant::now();
    let hits = (0..1_000)
        .filter(|&i| tree.search(&scramble(i * 7 + 3)))
        .count();
    println!("1000 searches ({hits} hits) in {:.2?}", start.elapsed());

    println!("\nFinal tree size: {}", tree.len());
    println!("Final tree height: {:?}", tree.height());
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let print_dot = std::env::args().any(|arg| arg == "--dot");

    println!("=== Binary Search Tree ===");
    basic_operations(print_dot)?;
    advanced_operations()?;
    performance();
    println!("\n=== Done ===");

    Ok(())
}
