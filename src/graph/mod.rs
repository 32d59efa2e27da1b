//! The editor's data model: groups of layers of nodes, directed connections
//! between nodes, and the operations that keep them consistent.
//!
//! This module has no browser dependencies and is tested natively.

pub mod connect;
pub mod editor;
pub mod error;
pub mod layout;
pub mod model;
pub mod reorder;
pub mod seed;
pub mod types;

pub use connect::{ConnectionGesture, Selection};
pub use editor::EditorState;
pub use error::{EntityKind, GraphError, GraphResult, Violation};
pub use model::{GraphModel, GroupSummary};
pub use types::{Connection, Group, GroupId, Layer, Node, NodeId, NodeLocation};
