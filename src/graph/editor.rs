//! Model plus gesture, the unit the view swaps on every action.

use super::connect::{ConnectionGesture, Selection};
use super::error::{GraphError, GraphResult};
use super::model::GraphModel;

/// The model together with the in-progress connection gesture.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditorState {
	/// The graph being edited.
	pub model: GraphModel,
	/// Connection mode and its picked source.
	pub gesture: ConnectionGesture,
}

impl EditorState {
	/// Wrap `model` with connection mode off.
	pub fn new(model: GraphModel) -> Self {
		Self {
			model,
			gesture: ConnectionGesture::Idle,
		}
	}

	/// Arm connection mode.
	pub fn start_adding_connection(&mut self) {
		self.gesture.start();
	}

	/// Disarm connection mode.
	pub fn cancel_connection(&mut self) {
		self.gesture.cancel();
	}

	/// Route a node click into the gesture and commit the connection once
	/// both endpoints are picked. Unknown nodes are rejected without
	/// disturbing the gesture.
	pub fn select_node(&mut self, node_id: &str) -> GraphResult<Selection> {
		if !self.gesture.is_armed() {
			return Ok(Selection::Ignored);
		}
		if !self.model.contains_node(node_id) {
			return Err(GraphError::node(node_id));
		}
		// The source may have been deleted since it was picked.
		if let ConnectionGesture::Selecting(picked) = &mut self.gesture {
			picked.retain(|id| self.model.contains_node(id));
		}
		let selection = self.gesture.select(node_id);
		if let Selection::Complete { from, to } = &selection {
			self.model.add_connection(from, to)?;
		}
		Ok(selection)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::seed::sample_pipeline;
	use crate::graph::types::Connection;

	#[test]
	fn clicks_while_idle_change_nothing() {
		let mut state = EditorState::new(sample_pipeline());
		let before = state.clone();
		assert_eq!(state.select_node("1A"), Ok(Selection::Ignored));
		assert_eq!(state, before);
	}

	#[test]
	fn unknown_node_keeps_pending_selection() {
		let mut state = EditorState::new(sample_pipeline());
		state.start_adding_connection();
		state.select_node("2A").unwrap();
		assert_eq!(state.select_node("ghost"), Err(GraphError::node("ghost")));
		assert_eq!(state.gesture.selected(), ["2A".to_string()]);
		state.select_node("1A").unwrap();
		assert!(state.model.has_connection("2A", "1A"));
	}

	#[test]
	fn repeated_gesture_does_not_duplicate() {
		let mut state = EditorState::new(sample_pipeline());
		state.start_adding_connection();
		state.select_node("1A").unwrap();
		state.select_node("2A").unwrap();
		assert_eq!(state.model.connections(), &[Connection::new("1A", "2A")]);
	}

	#[test]
	fn deleted_source_is_dropped_from_selection() {
		let mut state = EditorState::new(sample_pipeline());
		state.start_adding_connection();
		state.select_node("1A").unwrap();
		state.model.delete_node("1A", "group1", 0).unwrap();
		assert_eq!(state.select_node("2A"), Ok(Selection::Pending("2A".into())));
		assert!(state.model.connections().is_empty());
	}

	#[test]
	fn cancel_disarms() {
		let mut state = EditorState::new(sample_pipeline());
		state.start_adding_connection();
		state.select_node("1A").unwrap();
		state.cancel_connection();
		assert_eq!(state.select_node("2A"), Ok(Selection::Ignored));
		assert_eq!(state.model.connections().len(), 1);
	}
}
