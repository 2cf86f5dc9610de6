//! Didactic tree toolkit: path-addressed binary and general trees with YAML
//! persistence.
//!
//! Trees are built from directional paths ("LRL" in binary mode, "0-2-1" in
//! general mode), mutated in place, rendered as depth-indented text, and
//! round-tripped through a hierarchical YAML document format.
//!
//! ```
//! use treedoc::{render, Tree, TreeMode};
//!
//! let mut tree = Tree::with_root(10);
//! tree.insert_by_path("L", 5, TreeMode::Binary).unwrap();
//! tree.insert_by_path("R", 15, TreeMode::Binary).unwrap();
//! assert!(tree.find(5).is_some());
//! println!("{}", render(&tree, TreeMode::Binary));
//! ```

pub mod cli;
pub mod document;
pub mod errors;
pub mod exitcode;
pub mod node;
pub mod path;
pub mod render;
pub mod tree;
pub mod util;

pub use errors::{TreeError, TreeResult};
pub use node::Node;
pub use path::{Step, TreeMode};
pub use render::{render, render_range, TreeDisplay};
pub use tree::Tree;
