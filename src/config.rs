//! Tunables for the editor view.

/// Layout and interaction settings handed to the editor component.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorConfig {
	/// Assumed height of one group card when packing columns.
	pub group_height: f64,
	/// Vertical space reserved above the columns.
	pub header_offset: f64,
	/// Minimum time between two group reorders during one drag.
	pub reorder_debounce_ms: f64,
	/// Label given to nodes created with a layer's add button.
	pub new_node_label: String,
	/// Connector colour, also used for the arrowhead.
	pub connector_color: String,
}

impl Default for EditorConfig {
	fn default() -> Self {
		Self {
			group_height: 200.0,
			header_offset: 100.0,
			reorder_debounce_ms: 50.0,
			new_node_label: "New Node".to_string(),
			connector_color: "#007bff".to_string(),
		}
	}
}

impl EditorConfig {
	/// Height left for columns in a window `window_height` tall.
	pub fn available_height(&self, window_height: f64) -> f64 {
		window_height - self.header_offset
	}
}
