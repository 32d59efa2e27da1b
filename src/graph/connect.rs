//! Connection drawing as a two-click gesture.

use super::types::NodeId;

/// Two-click connection authoring: arm, pick the source, pick the target.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ConnectionGesture {
	/// Clicks on nodes do nothing.
	#[default]
	Idle,
	/// Armed, with the source once it is picked.
	Selecting(Vec<NodeId>),
}

/// What a node click did to the gesture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
	/// Not armed; the click belongs to some other gesture.
	Ignored,
	/// Source picked, waiting for the target.
	Pending(NodeId),
	/// Both endpoints picked. The gesture is back to idle.
	Complete {
		/// First node clicked.
		from: NodeId,
		/// Second node clicked.
		to: NodeId,
	},
}

impl ConnectionGesture {
	/// Arm from any state, discarding a half-made selection.
	pub fn start(&mut self) {
		*self = ConnectionGesture::Selecting(Vec::new());
	}

	/// Back to idle.
	pub fn cancel(&mut self) {
		*self = ConnectionGesture::Idle;
	}

	/// Whether node clicks currently feed the gesture.
	pub fn is_armed(&self) -> bool {
		matches!(self, ConnectionGesture::Selecting(_))
	}

	/// Nodes picked so far.
	pub fn selected(&self) -> &[NodeId] {
		match self {
			ConnectionGesture::Idle => &[],
			ConnectionGesture::Selecting(picked) => picked,
		}
	}

	/// Whether `node_id` is among the picked nodes.
	pub fn is_selected(&self, node_id: &str) -> bool {
		self.selected().iter().any(|id| id == node_id)
	}

	/// Feed a node click. Clicking the same node twice yields a self-loop.
	pub fn select(&mut self, node_id: &str) -> Selection {
		let ConnectionGesture::Selecting(picked) = self else {
			return Selection::Ignored;
		};
		picked.push(node_id.to_string());
		if picked.len() < 2 {
			return Selection::Pending(node_id.to_string());
		}
		let mut picked = std::mem::take(picked).into_iter();
		let (from, to) = (picked.next(), picked.next());
		*self = ConnectionGesture::Idle;
		match (from, to) {
			(Some(from), Some(to)) => Selection::Complete { from, to },
			_ => Selection::Ignored,
		}
	}
}
