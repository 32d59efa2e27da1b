//! Errors returned by graph operations.

use std::fmt;

use thiserror::Error;

/// Kind of entity a failed lookup was addressing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
	/// A group, addressed by id.
	Group,
	/// A layer, addressed by group and index.
	Layer,
	/// A node, addressed by id.
	Node,
}

impl fmt::Display for EntityKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			EntityKind::Group => "group",
			EntityKind::Layer => "layer",
			EntityKind::Node => "node",
		})
	}
}

/// A mutation that would break a model invariant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Violation {
	/// Removing the only layer of a group.
	LastLayer {
		/// The group that would be left empty.
		group: String,
	},
}

impl fmt::Display for Violation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Violation::LastLayer { group } => {
				write!(f, "group {group} must keep at least one layer")
			}
		}
	}
}

/// Every way a graph operation can be rejected. All are recoverable and
/// leave the model untouched.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum GraphError {
	/// The addressed entity does not exist.
	#[error("{kind} not found: {id}")]
	NotFound {
		/// What was looked up.
		kind: EntityKind,
		/// The id, or `group[index]` for layers.
		id: String,
	},
	/// The mutation would break a model invariant.
	#[error("invariant violation: {0}")]
	InvariantViolation(Violation),
}

impl GraphError {
	/// No group with this id.
	pub fn group(id: &str) -> Self {
		GraphError::NotFound {
			kind: EntityKind::Group,
			id: id.to_string(),
		}
	}

	/// Layers have no ids of their own, so they are named `group[index]`.
	pub fn layer(group: &str, index: usize) -> Self {
		GraphError::NotFound {
			kind: EntityKind::Layer,
			id: format!("{group}[{index}]"),
		}
	}

	/// No node with this id.
	pub fn node(id: &str) -> Self {
		GraphError::NotFound {
			kind: EntityKind::Node,
			id: id.to_string(),
		}
	}

	/// The group's only layer was about to be removed.
	pub fn last_layer(group: &str) -> Self {
		GraphError::InvariantViolation(Violation::LastLayer {
			group: group.to_string(),
		})
	}
}

/// Result of a graph operation.
pub type GraphResult<T> = Result<T, GraphError>;
