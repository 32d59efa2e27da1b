//! Groups, layers, nodes and the connections between them.
//!
//! Every mutation validates its whole address before it touches anything, so
//! a rejected call leaves the model exactly as it was.

use std::collections::HashSet;

use super::error::{GraphError, GraphResult};
use super::types::{Connection, Group, GroupId, Layer, Node, NodeId, NodeLocation};

/// Link given to nodes created by [`GraphModel::add_node`].
pub const DEFAULT_NODE_LINK: &str = "https://example.com/new-node";
/// Metadata given to nodes created by [`GraphModel::add_node`].
pub const DEFAULT_NODE_DATA: &str = "New metadata";

/// Per-group counts used for the debug state dump.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupSummary {
	/// Group id.
	pub id: GroupId,
	/// Group heading.
	pub label: String,
	/// Number of layers.
	pub layer_count: usize,
	/// Nodes across all layers.
	pub node_count: usize,
}

/// The whole graph: ordered groups and the directed connections between
/// their nodes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GraphModel {
	groups: Vec<Group>,
	connections: Vec<Connection>,
	next_seq: u64,
}

impl GraphModel {
	/// An empty model with no groups.
	pub fn new() -> Self {
		Self::default()
	}

	/// Build a model from existing data.
	///
	/// The first group or node to claim an id keeps it and later ones are
	/// dropped. Connections with a missing endpoint and repeated pairs are
	/// dropped too, and layerless groups get an empty layer.
	pub fn from_parts(groups: Vec<Group>, connections: Vec<Connection>) -> Self {
		let mut model = Self {
			groups: Vec::with_capacity(groups.len()),
			connections: Vec::new(),
			next_seq: 0,
		};
		let mut group_ids = HashSet::new();
		let mut node_ids = HashSet::new();
		for mut group in groups {
			if !group_ids.insert(group.id.clone()) {
				continue;
			}
			for layer in &mut group.layers {
				layer.retain(|n| node_ids.insert(n.id.clone()));
			}
			if group.layers.is_empty() {
				group.layers.push(Layer::new());
			}
			model.groups.push(group);
		}
		for connection in connections {
			// Endpoint and duplicate checks are the same as for user input.
			let _ = model.add_connection(&connection.from, &connection.to);
		}
		model
	}

	/// Groups in display order.
	pub fn groups(&self) -> &[Group] {
		&self.groups
	}

	/// Connections in insertion order.
	pub fn connections(&self) -> &[Connection] {
		&self.connections
	}

	/// Look a group up by id.
	pub fn group(&self, group_id: &str) -> Option<&Group> {
		self.groups.iter().find(|g| g.id == group_id)
	}

	fn group_index(&self, group_id: &str) -> GraphResult<usize> {
		self.groups
			.iter()
			.position(|g| g.id == group_id)
			.ok_or_else(|| GraphError::group(group_id))
	}

	/// Index of the group plus a check that `layer_index` exists in it.
	fn layer_address(&self, group_id: &str, layer_index: usize) -> GraphResult<usize> {
		let gi = self.group_index(group_id)?;
		if layer_index >= self.groups[gi].layers.len() {
			return Err(GraphError::layer(group_id, layer_index));
		}
		Ok(gi)
	}

	/// Every node, group by group and layer by layer.
	pub fn nodes(&self) -> impl Iterator<Item = &Node> {
		self.groups.iter().flat_map(Group::nodes)
	}

	/// Look a node up by id, wherever it lives.
	pub fn node(&self, node_id: &str) -> Option<&Node> {
		self.nodes().find(|n| n.id == node_id)
	}

	/// Whether a node with this id exists.
	pub fn contains_node(&self, node_id: &str) -> bool {
		self.node(node_id).is_some()
	}

	/// Total number of nodes.
	pub fn node_count(&self) -> usize {
		self.groups.iter().map(Group::node_count).sum()
	}

	/// Group, layer and position of a node.
	pub fn locate_node(&self, node_id: &str) -> Option<NodeLocation> {
		self.groups.iter().enumerate().find_map(|(gi, group)| {
			group.layers.iter().enumerate().find_map(|(li, layer)| {
				layer.iter().position(|n| n.id == node_id).map(|pos| NodeLocation {
					group_index: gi,
					group_id: group.id.clone(),
					layer_index: li,
					position: pos,
				})
			})
		})
	}

	/// One [`GroupSummary`] per group, in display order.
	pub fn summary(&self) -> Vec<GroupSummary> {
		self.groups
			.iter()
			.map(|g| GroupSummary {
				id: g.id.clone(),
				label: g.label.clone(),
				layer_count: g.layers.len(),
				node_count: g.node_count(),
			})
			.collect()
	}

	/// Label of a node, falling back to its id.
	pub fn display_name<'a>(&'a self, node_id: &'a str) -> &'a str {
		self.node(node_id).map_or(node_id, |n| n.label.as_str())
	}

	/// Append a group with one empty layer and return its id.
	pub fn add_group(&mut self) -> GroupId {
		let mut n = self.groups.len() + 1;
		// Deletions can leave `group{len+1}` in use.
		while self.group(&format!("group{n}")).is_some() {
			n += 1;
		}
		let group = Group::new(format!("group{n}"), format!("New Group {n}"));
		let id = group.id.clone();
		self.groups.push(group);
		id
	}

	/// Append an empty layer and return its index.
	pub fn add_layer(&mut self, group_id: &str) -> GraphResult<usize> {
		let gi = self.group_index(group_id)?;
		let layers = &mut self.groups[gi].layers;
		layers.push(Layer::new());
		Ok(layers.len() - 1)
	}

	fn fresh_node_id(&mut self, group_id: &str, layer_index: usize) -> NodeId {
		loop {
			self.next_seq += 1;
			let id = format!("{group_id}-{layer_index}-{}", self.next_seq);
			if !self.contains_node(&id) {
				return id;
			}
		}
	}

	/// Append a node with a fresh id and default link and metadata to the
	/// given layer. Returns the new id.
	pub fn add_node(
		&mut self,
		group_id: &str,
		layer_index: usize,
		label: impl Into<String>,
	) -> GraphResult<NodeId> {
		let gi = self.layer_address(group_id, layer_index)?;
		let id = self.fresh_node_id(group_id, layer_index);
		let node = Node::new(id.clone(), label, DEFAULT_NODE_LINK, DEFAULT_NODE_DATA);
		self.groups[gi].layers[layer_index].push(node);
		Ok(id)
	}

	/// Re-parent a node to the end of another layer. Moving onto its own layer
	/// sends it to the back.
	pub fn move_node(
		&mut self,
		node_id: &str,
		target_group: &str,
		target_layer: usize,
	) -> GraphResult<()> {
		let target = self.layer_address(target_group, target_layer)?;
		let from = self
			.locate_node(node_id)
			.ok_or_else(|| GraphError::node(node_id))?;
		let node = self.groups[from.group_index].layers[from.layer_index].remove(from.position);
		self.groups[target].layers[target_layer].push(node);
		Ok(())
	}

	/// Remove a node from the given layer and every connection touching it.
	pub fn delete_node(
		&mut self,
		node_id: &str,
		group_id: &str,
		layer_index: usize,
	) -> GraphResult<Node> {
		let gi = self.layer_address(group_id, layer_index)?;
		let layer = &mut self.groups[gi].layers[layer_index];
		let pos = layer
			.iter()
			.position(|n| n.id == node_id)
			.ok_or_else(|| GraphError::node(node_id))?;
		let node = layer.remove(pos);
		self.cascade_remove_node(&node.id);
		Ok(node)
	}

	/// Remove a layer with its nodes. The last layer of a group stays.
	pub fn delete_layer(&mut self, group_id: &str, layer_index: usize) -> GraphResult<Layer> {
		let gi = self.layer_address(group_id, layer_index)?;
		if self.groups[gi].layers.len() == 1 {
			return Err(GraphError::last_layer(group_id));
		}
		let layer = self.groups[gi].layers.remove(layer_index);
		self.cascade_remove_nodes(layer.iter().map(|n| n.id.as_str()));
		Ok(layer)
	}

	/// Remove a group with all its layers, nodes and their connections.
	pub fn delete_group(&mut self, group_id: &str) -> GraphResult<Group> {
		let gi = self.group_index(group_id)?;
		let group = self.groups.remove(gi);
		self.cascade_remove_nodes(group.nodes().map(|n| n.id.as_str()));
		Ok(group)
	}

	/// Replace the label, link and metadata of a node.
	pub fn edit_node(
		&mut self,
		node_id: &str,
		label: impl Into<String>,
		link: impl Into<String>,
		data: impl Into<String>,
	) -> GraphResult<()> {
		let node = self
			.groups
			.iter_mut()
			.flat_map(|g| g.layers.iter_mut().flatten())
			.find(|n| n.id == node_id)
			.ok_or_else(|| GraphError::node(node_id))?;
		node.label = label.into();
		node.link = link.into();
		node.data = data.into();
		Ok(())
	}

	/// Add `from -> to`. Returns `false` when the pair is already present.
	pub fn add_connection(&mut self, from: &str, to: &str) -> GraphResult<bool> {
		for id in [from, to] {
			if !self.contains_node(id) {
				return Err(GraphError::node(id));
			}
		}
		if self.has_connection(from, to) {
			return Ok(false);
		}
		self.connections.push(Connection::new(from, to));
		Ok(true)
	}

	/// Whether the exact ordered pair is present.
	pub fn has_connection(&self, from: &str, to: &str) -> bool {
		self.connections.iter().any(|c| c.from == from && c.to == to)
	}

	/// Remove the exact ordered pair. Returns whether it was present.
	pub fn delete_connection(&mut self, from: &str, to: &str) -> bool {
		let before = self.connections.len();
		self.connections.retain(|c| !(c.from == from && c.to == to));
		self.connections.len() != before
	}

	/// Splice the group at `from` out and back in at `to`.
	///
	/// Both indices must be in range; callers derive them from the rendered
	/// groups.
	pub fn move_group(&mut self, from: usize, to: usize) -> bool {
		let len = self.groups.len();
		debug_assert!(from < len && to < len, "move_group({from}, {to}) with {len} groups");
		if from >= len || to >= len {
			return false;
		}
		if from != to {
			let group = self.groups.remove(from);
			self.groups.insert(to, group);
		}
		true
	}

	/// Drop every connection that mentions `node_id`. Returns how many went.
	pub fn cascade_remove_node(&mut self, node_id: &str) -> usize {
		self.cascade_remove_nodes(std::iter::once(node_id))
	}

	/// Drop every connection that mentions any of `ids`.
	fn cascade_remove_nodes<'a>(&mut self, ids: impl Iterator<Item = &'a str>) -> usize {
		let ids: HashSet<&str> = ids.collect();
		let before = self.connections.len();
		self.connections
			.retain(|c| !ids.contains(c.from.as_str()) && !ids.contains(c.to.as_str()));
		before - self.connections.len()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::error::EntityKind;

	fn two_groups() -> GraphModel {
		let mut g1 = Group::new("group1", "Pre-Pipeline");
		g1.layers[0].push(Node::new("1A", "Create Account Plan", "", ""));
		let mut g2 = Group::new("group2", "Qualification");
		g2.layers[0].push(Node::new("2A", "Qualify the Lead", "", ""));
		GraphModel::from_parts(vec![g1, g2], vec![Connection::new("1A", "2A")])
	}

	#[test]
	fn from_parts_drops_dangling_and_repeated_connections() {
		let mut g = Group::new("group1", "G");
		g.layers[0].push(Node::new("a", "A", "", ""));
		g.layers[0].push(Node::new("b", "B", "", ""));
		let model = GraphModel::from_parts(
			vec![g, Group { id: "group2".into(), label: "E".into(), layers: vec![] }],
			vec![
				Connection::new("a", "b"),
				Connection::new("a", "b"),
				Connection::new("a", "ghost"),
			],
		);
		assert_eq!(model.connections(), &[Connection::new("a", "b")]);
		assert_eq!(model.groups()[1].layers.len(), 1);
	}

	#[test]
	fn from_parts_keeps_first_claim_on_repeated_ids() {
		let mut first = Group::new("group1", "First");
		first.layers[0].push(Node::new("x", "first", "", ""));
		first.layers[0].push(Node::new("x", "again", "", ""));
		let mut second = Group::new("group1", "Second");
		second.layers[0].push(Node::new("x", "second", "", ""));
		let mut other = Group::new("group2", "Other");
		other.layers[0].push(Node::new("x", "elsewhere", "", ""));
		other.layers[0].push(Node::new("y", "y", "", ""));
		let mut model = GraphModel::from_parts(vec![first, second, other], vec![Connection::new("x", "y")]);

		let group_ids: Vec<_> = model.groups().iter().map(|g| g.id.as_str()).collect();
		assert_eq!(group_ids, ["group1", "group2"]);
		assert_eq!(model.group("group1").unwrap().label, "First");
		let ids: Vec<_> = model.nodes().map(|n| n.id.as_str()).collect();
		assert_eq!(ids, ["x", "y"]);

		model.edit_node("x", "edited", "", "").unwrap();
		let labels: Vec<_> = model.nodes().map(|n| n.label.as_str()).collect();
		assert_eq!(labels, ["edited", "y"]);
		assert_eq!(model.locate_node("x").map(|l| l.group_id), Some("group1".to_string()));
		assert_eq!(model.connections(), &[Connection::new("x", "y")]);
	}

	#[test]
	fn add_group_skips_ids_still_in_use() {
		let mut model = two_groups();
		model.add_group();
		model.delete_group("group1").unwrap();
		// Two groups left, but group3 is taken.
		assert_eq!(model.add_group(), "group4");
		assert_eq!(model.group("group4").unwrap().label, "New Group 4");
	}

	#[test]
	fn add_layer_returns_new_index() {
		let mut model = two_groups();
		assert_eq!(model.add_layer("group1"), Ok(1));
		assert_eq!(model.add_layer("group1"), Ok(2));
		assert_eq!(model.add_layer("nope"), Err(GraphError::group("nope")));
	}

	#[test]
	fn add_node_uses_defaults_and_rejects_bad_address() {
		let mut model = two_groups();
		let id = model.add_node("group2", 0, "New Node").unwrap();
		assert!(id.starts_with("group2-0-"));
		let node = model.node(&id).unwrap();
		assert_eq!(node.link, DEFAULT_NODE_LINK);
		assert_eq!(node.data, DEFAULT_NODE_DATA);
		assert_eq!(model.group("group2").unwrap().layers[0].last(), Some(node));

		let before = model.clone();
		assert_eq!(
			model.add_node("group2", 4, "x"),
			Err(GraphError::layer("group2", 4))
		);
		assert!(matches!(
			model.add_node("group9", 0, "x"),
			Err(GraphError::NotFound { kind: EntityKind::Group, .. })
		));
		assert_eq!(model, before);
	}

	#[test]
	fn add_node_never_reuses_an_existing_id() {
		let mut g = Group::new("group1", "G");
		g.layers[0].push(Node::new("group1-0-1", "taken", "", ""));
		let mut model = GraphModel::from_parts(vec![g], vec![]);
		let id = model.add_node("group1", 0, "fresh").unwrap();
		assert_eq!(id, "group1-0-2");
	}

	#[test]
	fn move_node_with_bad_target_keeps_node_in_place() {
		let mut model = two_groups();
		let before = model.clone();
		assert_eq!(
			model.move_node("1A", "group2", 3),
			Err(GraphError::layer("group2", 3))
		);
		assert_eq!(model.move_node("ghost", "group2", 0), Err(GraphError::node("ghost")));
		assert_eq!(model, before);
	}

	#[test]
	fn move_node_within_same_layer_moves_to_back() {
		let mut model = two_groups();
		let id = model.add_node("group1", 0, "second").unwrap();
		model.move_node("1A", "group1", 0).unwrap();
		let layer = &model.group("group1").unwrap().layers[0];
		assert_eq!(layer.iter().map(|n| n.id.as_str()).collect::<Vec<_>>(), [id.as_str(), "1A"]);
	}

	#[test]
	fn move_node_keeps_connections() {
		let mut model = two_groups();
		model.move_node("1A", "group2", 0).unwrap();
		assert_eq!(model.connections(), &[Connection::new("1A", "2A")]);
	}

	#[test]
	fn delete_node_requires_matching_layer() {
		let mut model = two_groups();
		assert_eq!(model.delete_node("1A", "group2", 0), Err(GraphError::node("1A")));
		assert_eq!(model.connections().len(), 1);
	}

	#[test]
	fn delete_layer_cascades_its_nodes() {
		let mut model = two_groups();
		model.add_layer("group2").unwrap();
		model.move_node("2A", "group2", 1).unwrap();
		let removed = model.delete_layer("group2", 1).unwrap();
		assert_eq!(removed.len(), 1);
		assert!(!model.contains_node("2A"));
		assert!(model.connections().is_empty());
		assert_eq!(model.group("group2").unwrap().layers.len(), 1);
	}

	#[test]
	fn edit_node_finds_node_anywhere() {
		let mut model = two_groups();
		model.move_node("1A", "group2", 0).unwrap();
		model.edit_node("1A", "Plan", "https://x.test", "notes").unwrap();
		let node = model.node("1A").unwrap();
		assert_eq!((node.label.as_str(), node.link.as_str(), node.data.as_str()), ("Plan", "https://x.test", "notes"));
		assert_eq!(model.edit_node("nope", "", "", ""), Err(GraphError::node("nope")));
	}

	#[test]
	fn add_connection_allows_reverse_and_self_loop() {
		let mut model = two_groups();
		assert_eq!(model.add_connection("2A", "1A"), Ok(true));
		assert_eq!(model.add_connection("1A", "1A"), Ok(true));
		assert_eq!(model.connections().len(), 3);
		assert_eq!(model.add_connection("1A", "zz"), Err(GraphError::node("zz")));
	}

	#[test]
	fn delete_connection_is_direction_sensitive() {
		let mut model = two_groups();
		assert!(!model.delete_connection("2A", "1A"));
		assert!(model.delete_connection("1A", "2A"));
		assert!(model.connections().is_empty());
	}

	#[test]
	fn move_group_splices() {
		let mut model = two_groups();
		model.add_group();
		assert!(model.move_group(0, 2));
		let ids: Vec<_> = model.groups().iter().map(|g| g.id.as_str()).collect();
		assert_eq!(ids, ["group2", "group3", "group1"]);
		assert!(model.move_group(2, 0));
		let ids: Vec<_> = model.groups().iter().map(|g| g.id.as_str()).collect();
		assert_eq!(ids, ["group1", "group2", "group3"]);
	}

	#[test]
	fn cascade_counts_removed_connections() {
		let mut model = two_groups();
		model.add_connection("2A", "1A").unwrap();
		model.add_connection("2A", "2A").unwrap();
		assert_eq!(model.cascade_remove_node("1A"), 2);
		assert_eq!(model.connections(), &[Connection::new("2A", "2A")]);
	}

	#[test]
	fn every_deletion_path_cascades_the_same_way() {
		let mut model = two_groups();
		model.add_layer("group1").unwrap();
		let a = model.add_node("group1", 1, "a").unwrap();
		for (from, to) in [(a.as_str(), "2A"), ("2A", a.as_str()), (a.as_str(), a.as_str()), ("2A", "1A")] {
			model.add_connection(from, to).unwrap();
		}
		let mut by_layer = model.clone();
		let mut by_node = model.clone();
		by_layer.delete_layer("group1", 1).unwrap();
		by_node.delete_node(&a, "group1", 1).unwrap();
		assert_eq!(by_layer.connections(), by_node.connections());
		assert_eq!(
			by_node.connections(),
			&[Connection::new("1A", "2A"), Connection::new("2A", "1A")]
		);

		model.delete_group("group1").unwrap();
		assert!(model.connections().is_empty());
	}

	#[test]
	fn summary_and_display_name() {
		let model = two_groups();
		let summary = model.summary();
		assert_eq!(summary[0].layer_count, 1);
		assert_eq!(summary[0].node_count, 1);
		assert_eq!(model.display_name("1A"), "Create Account Plan");
		assert_eq!(model.display_name("missing"), "missing");
	}
}
