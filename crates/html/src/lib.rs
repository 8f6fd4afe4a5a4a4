pub mod debug;
pub mod dom_utils;
pub mod perf_fixtures;

mod tree_builder;
mod types;

pub use crate::tree_builder::{
    TreeBuilder, TreeBuilderConfig, TreeBuilderError, TreeBuilderResult, parse, parse_bytes,
    parse_with_config,
};
pub use crate::types::{Attributes, Dom, Id, Node, NodeId, NodeKind};
