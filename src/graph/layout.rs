//! Presentation-only geometry derived from the model: column packing,
//! connector endpoints and group colours. Nothing here is stored.

use super::types::{Group, GroupId};

const GROUP_COLORS: &[(&str, &str)] = &[
	("group1", "#ffe4e1"),
	("group2", "#e6f7ff"),
	("group3", "#e8ffe6"),
	("group4", "#fffacd"),
	("group5", "#ffebcd"),
	("group6", "#d5e8d4"),
	("group7", "#fbe4c2"),
	("group8", "#f4d8e7"),
	("group9", "#f408e7"),
];

/// Background for groups outside the palette.
pub const DEFAULT_GROUP_COLOR: &str = "#ffffff";

/// Background colour of a group card.
pub fn group_color(group_id: &str) -> &'static str {
	GROUP_COLORS
		.iter()
		.find(|(id, _)| *id == group_id)
		.map_or(DEFAULT_GROUP_COLOR, |(_, color)| *color)
}

/// Split the group order into columns that fit `available_height`, assuming
/// every group card is `group_height` tall. At least one group goes in each
/// column however small the window is.
pub fn compute_columns(
	groups: &[Group],
	available_height: f64,
	group_height: f64,
) -> Vec<Vec<GroupId>> {
	let per_column = if group_height > 0.0 && available_height.is_finite() {
		((available_height / group_height).floor() as usize).max(1)
	} else {
		1
	};
	if groups.is_empty() {
		return vec![Vec::new()];
	}
	groups
		.chunks(per_column)
		.map(|chunk| chunk.iter().map(|g| g.id.clone()).collect())
		.collect()
}

/// An axis-aligned box in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
	/// Left edge.
	pub left: f64,
	/// Top edge.
	pub top: f64,
	/// Width.
	pub width: f64,
	/// Height.
	pub height: f64,
}

impl Rect {
	/// A box from its left/top corner and size.
	pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
		Self {
			left,
			top,
			width,
			height,
		}
	}

	/// Right edge.
	pub fn right(&self) -> f64 {
		self.left + self.width
	}

	/// Vertical centre.
	pub fn mid_y(&self) -> f64 {
		self.top + self.height / 2.0
	}
}

/// A measured connector, in overlay coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct ConnectorLine {
	/// Source node id.
	pub from: String,
	/// Target node id.
	pub to: String,
	/// Start x.
	pub x1: f64,
	/// Start y.
	pub y1: f64,
	/// End x.
	pub x2: f64,
	/// End y.
	pub y2: f64,
}

/// Line from the right edge of `from` to the left edge of `to`, both at
/// mid-height, relative to the overlay's top-left corner.
pub fn connector(from: Rect, to: Rect, overlay: Rect) -> (f64, f64, f64, f64) {
	(
		from.right() - overlay.left,
		from.mid_y() - overlay.top,
		to.left - overlay.left,
		to.mid_y() - overlay.top,
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn groups(n: usize) -> Vec<Group> {
		(1..=n)
			.map(|i| Group::new(format!("group{i}"), format!("G{i}")))
			.collect()
	}

	#[test]
	fn packs_in_order() {
		let cols = compute_columns(&groups(5), 450.0, 200.0);
		assert_eq!(
			cols,
			vec![
				vec!["group1".to_string(), "group2".to_string()],
				vec!["group3".to_string(), "group4".to_string()],
				vec!["group5".to_string()],
			]
		);
	}

	#[test]
	fn tiny_windows_still_get_one_group_per_column() {
		let cols = compute_columns(&groups(3), 50.0, 200.0);
		assert_eq!(cols.len(), 3);
		assert!(cols.iter().all(|c| c.len() == 1));
		assert_eq!(compute_columns(&groups(2), -10.0, 200.0).len(), 2);
	}

	#[test]
	fn no_groups_is_one_empty_column() {
		assert_eq!(compute_columns(&[], 800.0, 200.0), vec![Vec::<GroupId>::new()]);
	}

	#[test]
	fn recomputing_is_idempotent() {
		let gs = groups(7);
		assert_eq!(compute_columns(&gs, 900.0, 200.0), compute_columns(&gs, 900.0, 200.0));
	}

	#[test]
	fn connector_runs_edge_to_edge() {
		let from = Rect::new(110.0, 60.0, 100.0, 40.0);
		let to = Rect::new(400.0, 220.0, 100.0, 20.0);
		let overlay = Rect::new(10.0, 20.0, 1000.0, 800.0);
		assert_eq!(connector(from, to, overlay), (200.0, 60.0, 390.0, 210.0));
	}

	#[test]
	fn palette_falls_back_to_white() {
		assert_eq!(group_color("group2"), "#e6f7ff");
		assert_eq!(group_color("group10"), DEFAULT_GROUP_COLOR);
	}
}
