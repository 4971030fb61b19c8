//! Console walkthrough of the tree API: builds a tree from a scrambled
//! collection, mutates it, skews it, and rebalances it, drawing the
//! structure at each step.

use balanced_bst::render::render;
use balanced_bst::tree::Tree;

fn main() {
    // Build a balanced tree from a collection with duplicates.
    let mut tree = Tree::new(vec![1, 7, 4, 23, 8, 9, 4, 3, 5, 7, 9, 67, 6345, 324]);
    println!("{}", render(&tree));

    // Point insertions land wherever their descent takes them.
    tree.insert(2);
    tree.insert(10);
    println!("{}", render(&tree));
    println!("backing values: {:?}", tree.values());

    tree.rebalance();
    println!("{}", render(&tree));

    // Delete a node with two children.
    tree.delete(&4);
    println!("{}", render(&tree));

    println!("find 23: {:?}", tree.find(&23).map(|node| node.value()));

    println!("level order: {:?}", tree.level_order());
    println!("pre order:   {:?}", tree.pre_order());
    println!("in order:    {:?}", tree.in_order());
    println!("post order:  {:?}", tree.post_order());

    println!("height of root: {}", tree.height());
    println!(
        "height of 2: {:?}",
        tree.find(&2).map(|node| node.height())
    );
    println!("depth of 2: {}", tree.depth(&2));
    println!("depth of 9: {}", tree.depth(&9));
    println!("balanced: {}", tree.is_balanced());

    // A run of ascending insertions chains down the right-hand side.
    for value in [50, 60, 70, 80] {
        tree.insert(value);
    }
    println!("{}", render(&tree));
    println!("balanced: {}", tree.is_balanced());

    tree.rebalance();
    println!("{}", render(&tree));
    println!("balanced: {}", tree.is_balanced());
}
