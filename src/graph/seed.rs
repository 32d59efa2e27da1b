//! Demo content.

use super::model::GraphModel;
use super::types::{Connection, Group, Node};

/// The two-stage pipeline shown when the editor first opens.
pub fn sample_pipeline() -> GraphModel {
	let mut pre = Group::new("group1", "Pre-Pipeline");
	pre.layers[0].push(Node::new(
		"1A",
		"Create Account Plan",
		"https://example.com/1A",
		"Some metadata for 1A",
	));

	let mut qualification = Group::new("group2", "Qualification");
	qualification.layers[0].push(Node::new(
		"2A",
		"Qualify the Lead",
		"https://example.com/2A",
		"Some metadata for 2A",
	));

	GraphModel::from_parts(vec![pre, qualification], vec![Connection::new("1A", "2A")])
}
