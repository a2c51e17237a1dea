//! Walks through the basic operations of both trees and prints what they do.
//!
//! Set `RUST_LOG=scapegoat=debug` to see the rebuilds as they happen.

use scapegoat::{ScapegoatTree, Tree};
use tracing_subscriber::EnvFilter;

const KEYS: [&str; 7] = ["d", "b", "a", "c", "f", "e", "g"];
const ASCENDING: [&str; 7] = ["a", "b", "c", "d", "e", "f", "g"];

fn joined(keys: Vec<&&str>) -> String {
    keys.into_iter().copied().collect()
}

fn print_shape(tree: &Tree<&str>) {
    println!("size: {}", tree.size());
    println!("height: {}", tree.height());
    println!("balanced: {}", tree.is_balanced());
}

fn main() -> scapegoat::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();

    for victim in ASCENDING {
        let mut tree = Tree::new();
        for key in KEYS {
            tree.insert(key)?;
        }
        println!("{}", joined(tree.inorder()));
        println!("{}", joined(tree.preorder()));
        println!("{}", joined(tree.postorder()));

        println!("{}", tree.delete(&victim)?);
        println!("{}", joined(tree.inorder()));
    }

    let mut tree = Tree::new();
    for key in ASCENDING {
        tree.insert(key)?;
    }
    print_shape(&tree);
    tree.balance();
    print_shape(&tree);

    let mut scapegoat = ScapegoatTree::new();
    for key in ASCENDING {
        scapegoat.insert(key)?;
    }
    print_shape(&scapegoat);
    println!("{}", scapegoat.to_dot());

    Ok(())
}
