use leptos::prelude::*;
use log::{debug, info, warn};

use crate::graph::layout::compute_columns;
use crate::graph::reorder::Debounce;
use crate::graph::{EditorState, GraphModel, GraphResult, GroupId, Node, NodeId, Selection};

/// What is currently being dragged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DragItem {
	/// A node card, by id.
	Node(NodeId),
	/// A group, by its current index in the group order.
	Group(usize),
}

/// Run `op` on a copy of `current`. The copy comes back only when the
/// operation succeeded and actually changed something.
fn stage<T>(
	current: &EditorState,
	op: impl FnOnce(&mut EditorState) -> GraphResult<T>,
) -> GraphResult<(Option<EditorState>, T)> {
	let mut next = current.clone();
	let out = op(&mut next)?;
	Ok(((next != *current).then_some(next), out))
}

/// Reactive handle over the editor. Every operation works on a copy of the
/// state and only publishes it when the whole operation succeeded and
/// changed something; failures become a dismissible notice.
#[derive(Clone, Copy)]
pub struct GraphStore {
	editor: RwSignal<EditorState>,
	notice: RwSignal<Option<String>>,
	editing: RwSignal<Option<NodeId>>,
	menu_open: RwSignal<bool>,
	drag: RwSignal<Option<DragItem>>,
	reorder: StoredValue<Debounce>,
}

impl GraphStore {
	/// Wrap `model` with connection mode off and nothing open or dragged.
	pub fn new(model: GraphModel, reorder_debounce_ms: f64) -> Self {
		Self {
			editor: RwSignal::new(EditorState::new(model)),
			notice: RwSignal::new(None),
			editing: RwSignal::new(None),
			menu_open: RwSignal::new(false),
			drag: RwSignal::new(None),
			reorder: StoredValue::new(Debounce::new(reorder_debounce_ms)),
		}
	}

	fn apply<T>(&self, action: &str, op: impl FnOnce(&mut EditorState) -> GraphResult<T>) -> Option<T> {
		match self.editor.with_untracked(|current| stage(current, op)) {
			Ok((next, out)) => {
				if let Some(next) = next {
					self.editor.set(next);
				}
				Some(out)
			}
			Err(err) => {
				warn!("{} rejected: {}", action, err);
				self.notice.set(Some(err.to_string()));
				None
			}
		}
	}

	/// Tracked read access to the editor state.
	pub fn with<R>(&self, f: impl FnOnce(&EditorState) -> R) -> R {
		self.editor.with(f)
	}

	/// Read access that does not subscribe the caller.
	pub fn with_untracked<R>(&self, f: impl FnOnce(&EditorState) -> R) -> R {
		self.editor.with_untracked(f)
	}

	/// Group ids split into columns for the given height.
	pub fn columns(&self, available_height: f64, group_height: f64) -> Vec<Vec<GroupId>> {
		self.with(|s| compute_columns(s.model.groups(), available_height, group_height))
	}

	/// Append a new group with one empty layer.
	pub fn add_group(&self) {
		if let Some(id) = self.apply("add group", |s| Ok(s.model.add_group())) {
			info!("Added group {}", id);
		}
	}

	/// Append an empty layer to a group.
	pub fn add_layer(&self, group_id: &str) {
		if let Some(index) = self.apply("add layer", |s| s.model.add_layer(group_id)) {
			info!("Added layer {} to {}", index, group_id);
		}
	}

	/// Append a node labelled `label` to a layer.
	pub fn add_node(&self, group_id: &str, layer_index: usize, label: &str) {
		if let Some(id) = self.apply("add node", |s| s.model.add_node(group_id, layer_index, label)) {
			info!("Added node {} to {}[{}]", id, group_id, layer_index);
		}
	}

	/// Move a node to the end of another layer.
	pub fn move_node(&self, node_id: &str, group_id: &str, layer_index: usize) {
		if self
			.apply("move node", |s| s.model.move_node(node_id, group_id, layer_index))
			.is_some()
		{
			info!("Moved node {} to {}[{}]", node_id, group_id, layer_index);
		}
	}

	/// Delete a node and its connections.
	pub fn delete_node(&self, node_id: &str, group_id: &str, layer_index: usize) {
		if let Some(node) = self.apply("delete node", |s| s.model.delete_node(node_id, group_id, layer_index)) {
			info!("Deleted node {} ({})", node.id, node.label);
		}
	}

	/// Delete a layer with its nodes.
	pub fn delete_layer(&self, group_id: &str, layer_index: usize) {
		if let Some(layer) = self.apply("delete layer", |s| s.model.delete_layer(group_id, layer_index)) {
			info!("Deleted layer {}[{}] with {} nodes", group_id, layer_index, layer.len());
		}
	}

	/// Delete a group with everything in it.
	pub fn delete_group(&self, group_id: &str) {
		if let Some(group) = self.apply("delete group", |s| s.model.delete_group(group_id)) {
			info!("Deleted group {} ({} nodes)", group.id, group.node_count());
		}
	}

	/// Save the edit dialog fields onto a node.
	pub fn edit_node(&self, node_id: &str, label: String, link: String, data: String) {
		if self
			.apply("edit node", |s| s.model.edit_node(node_id, label, link, data))
			.is_some()
		{
			info!("Edited node {}", node_id);
		}
	}

	/// Remove the `from -> to` connection if present.
	pub fn delete_connection(&self, from: &str, to: &str) {
		if self.apply("delete connection", |s| Ok(s.model.delete_connection(from, to))) == Some(true) {
			info!("Deleted connection {} -> {}", from, to);
		}
	}

	/// Move the group at index `from` to index `to`.
	pub fn move_group(&self, from: usize, to: usize) {
		if self.apply("move group", |s| Ok(s.model.move_group(from, to))) == Some(true) {
			debug!("Moved group {} -> {}", from, to);
		}
	}

	/// Arm connection mode; the next two node clicks make a connection.
	pub fn start_adding_connection(&self) {
		self.editor.update(|s| s.start_adding_connection());
		info!("Connection mode armed");
	}

	/// Leave connection mode and forget any picked source.
	pub fn cancel_connection(&self) {
		if self.with_untracked(|s| s.gesture.is_armed()) {
			self.editor.update(|s| s.cancel_connection());
			info!("Connection mode cancelled");
		}
	}

	/// Feed a node click into connection mode. Does nothing while unarmed.
	pub fn select_node(&self, node_id: &str) {
		if !self.with_untracked(|s| s.gesture.is_armed()) {
			return;
		}
		let before = self.with_untracked(|s| s.model.connections().len());
		match self.apply("select node", |s| s.select_node(node_id)) {
			Some(Selection::Pending(id)) => debug!("Connection source {}", id),
			Some(Selection::Complete { from, to }) => {
				if self.with_untracked(|s| s.model.connections().len()) > before {
					info!("Adding connection from {} to {}", from, to);
				} else {
					debug!("Connection {} -> {} already exists", from, to);
				}
			}
			_ => {}
		}
	}

	/// Tracked; whether connection mode is armed.
	pub fn is_connecting(&self) -> bool {
		self.with(|s| s.gesture.is_armed())
	}

	/// Tracked; whether the node is the picked connection source.
	pub fn is_selected(&self, node_id: &str) -> bool {
		self.with(|s| s.gesture.is_selected(node_id))
	}

	/// The last rejection message, if not dismissed.
	pub fn notice(&self) -> Option<String> {
		self.notice.get()
	}

	pub fn dismiss_notice(&self) {
		self.notice.set(None);
	}

	/// Open the edit dialog for a node.
	pub fn open_editor(&self, node_id: &str) {
		self.editing.set(Some(node_id.to_string()));
	}

	pub fn close_editor(&self) {
		self.editing.set(None);
	}

	/// The node open in the edit dialog, if it still exists.
	pub fn editing(&self) -> Option<Node> {
		let id = self.editing.get()?;
		self.with(|s| s.model.node(&id).cloned())
	}

	/// Whether the floating menu is expanded.
	pub fn menu_open(&self) -> bool {
		self.menu_open.get()
	}

	pub fn toggle_menu(&self) {
		self.menu_open.update(|open| *open = !*open);
	}

	pub fn close_menu(&self) {
		self.menu_open.set(false);
	}

	/// Record the item a drag started on.
	pub fn begin_drag(&self, item: DragItem) {
		if matches!(item, DragItem::Group(_)) {
			self.reorder.update_value(Debounce::reset);
		}
		self.drag.set(Some(item));
	}

	/// Untracked; the item being dragged.
	pub fn dragging(&self) -> Option<DragItem> {
		self.drag.get_untracked()
	}

	/// Tracked; dims the card of the node being dragged.
	pub fn is_dragging_node(&self, node_id: &str) -> bool {
		self.drag
			.with(|d| matches!(d, Some(DragItem::Node(id)) if id == node_id))
	}

	pub fn end_drag(&self) {
		self.drag.set(None);
	}

	/// Reorder while a group is dragged over the group at `hover_index`.
	pub fn drag_group_over(&self, hover_index: usize, crossed: bool, now_ms: f64) {
		let Some(DragItem::Group(from)) = self.dragging() else {
			return;
		};
		if from == hover_index || !crossed {
			return;
		}
		let mut ready = false;
		self.reorder.update_value(|d| ready = d.ready(now_ms));
		if ready {
			self.move_group(from, hover_index);
			self.drag.set(Some(DragItem::Group(hover_index)));
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::GraphError;
	use crate::graph::seed::sample_pipeline;

	#[test]
	fn idle_click_stages_nothing() {
		let current = EditorState::new(sample_pipeline());
		let staged = stage(&current, |s| s.select_node("1A"));
		assert_eq!(staged, Ok((None, Selection::Ignored)));
	}

	#[test]
	fn no_op_mutations_stage_nothing() {
		let current = EditorState::new(sample_pipeline());
		assert_eq!(stage(&current, |s| Ok(s.model.move_group(0, 0))), Ok((None, true)));
		assert_eq!(
			stage(&current, |s| Ok(s.model.delete_connection("2A", "1A"))),
			Ok((None, false))
		);
	}

	#[test]
	fn changes_are_staged_and_failures_are_not() {
		let current = EditorState::new(sample_pipeline());
		let (next, id) = stage(&current, |s| Ok(s.model.add_group())).unwrap();
		assert_eq!(id, "group3");
		assert_eq!(next.map(|s| s.model.groups().len()), Some(3));

		let mut armed = current.clone();
		armed.start_adding_connection();
		let (next, selection) = stage(&armed, |s| s.select_node("2A")).unwrap();
		assert_eq!(selection, Selection::Pending("2A".to_string()));
		assert_eq!(next.map(|s| s.gesture.selected().to_vec()), Some(vec!["2A".to_string()]));

		assert_eq!(
			stage(&current, |s| s.model.add_layer("ghost")),
			Err(GraphError::group("ghost"))
		);
	}
}
