//! # map2pddl
//!
//! Compiles a map described as annotated nodes and edges into a PDDL problem
//! for the `exploration-game` planning domain.
//!
//! ## Architecture
//!
//! map list files → (node data, edge data) → attribute parser → `Statement`s
//! → deduplicated object/fact sets → serialized problem text.
//!
//! The attribute grammar is small: a node attribute is empty, a collect
//! (`?requirement=>+items`), or an exclusive choice (`+a^b`); an edge
//! attribute is empty or a requirement (`?a&b|c`). See `attribute_parser`.

pub mod attribute_parser;
pub mod compiler;
pub mod map_file;
pub mod object_name;
pub mod types;

pub use compiler::ProblemCompiler;
pub use object_name::to_object_name;
pub use types::{CompileError, EdgeData, NodeData, Statement};
