//! Plain data types of the graph.

/// Globally unique node identifier.
pub type NodeId = String;
/// Group identifier of the form `groupN`.
pub type GroupId = String;

/// A labelled vertex with auxiliary link and free-text metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
	pub id: NodeId,
	/// Text shown on the card.
	pub label: String,
	/// Not validated as a URI.
	pub link: String,
	/// Free-text metadata.
	pub data: String,
}

impl Node {
	/// Build a node from its four fields.
	pub fn new(
		id: impl Into<NodeId>,
		label: impl Into<String>,
		link: impl Into<String>,
		data: impl Into<String>,
	) -> Self {
		Self {
			id: id.into(),
			label: label.into(),
			link: link.into(),
			data: data.into(),
		}
	}
}

/// Nodes of one layer, in insertion order.
pub type Layer = Vec<Node>;

/// A named container of layers. Never has zero layers once inside a model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
	pub id: GroupId,
	/// Heading shown on the group card.
	pub label: String,
	/// Layers in display order.
	pub layers: Vec<Layer>,
}

impl Group {
	/// A group holding a single empty layer.
	pub fn new(id: impl Into<GroupId>, label: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			label: label.into(),
			layers: vec![Layer::new()],
		}
	}

	/// Every node in the group, layer by layer.
	pub fn nodes(&self) -> impl Iterator<Item = &Node> {
		self.layers.iter().flatten()
	}

	/// Nodes across all layers.
	pub fn node_count(&self) -> usize {
		self.layers.iter().map(Vec::len).sum()
	}
}

/// A directed edge between two node ids.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Connection {
	/// Source node.
	pub from: NodeId,
	/// Target node.
	pub to: NodeId,
}

impl Connection {
	/// The directed pair `from -> to`.
	pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>) -> Self {
		Self {
			from: from.into(),
			to: to.into(),
		}
	}

	/// True when either endpoint is `node_id`.
	pub fn touches(&self, node_id: &str) -> bool {
		self.from == node_id || self.to == node_id
	}
}

/// Where a node currently lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeLocation {
	/// Index of the group in display order.
	pub group_index: usize,
	/// Id of the same group.
	pub group_id: GroupId,
	/// Layer within the group.
	pub layer_index: usize,
	/// Position within the layer.
	pub position: usize,
}
