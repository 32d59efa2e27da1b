//! Rules for reordering groups while a group card is dragged over another.

use super::layout::Rect;

/// Whether hovering `hover_index` at `pointer_y` should move the dragged group
/// there. Moving down waits until the pointer is below the hovered card's
/// middle, moving up until it is above it, so a card doesn't flip back and
/// forth around the boundary.
pub fn crosses_midpoint(drag_index: usize, hover_index: usize, pointer_y: f64, hovered: Rect) -> bool {
	if drag_index == hover_index {
		return false;
	}
	let mid = hovered.mid_y();
	if drag_index < hover_index {
		pointer_y > mid
	} else {
		pointer_y < mid
	}
}

/// Lets an action through at most once per `interval_ms`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Debounce {
	interval_ms: f64,
	last_ms: Option<f64>,
}

impl Debounce {
	/// A debounce that lets the first call through.
	pub fn new(interval_ms: f64) -> Self {
		Self {
			interval_ms,
			last_ms: None,
		}
	}

	/// Returns true and records `now_ms` when enough time has passed.
	pub fn ready(&mut self, now_ms: f64) -> bool {
		match self.last_ms {
			Some(last) if now_ms - last < self.interval_ms => false,
			_ => {
				self.last_ms = Some(now_ms);
				true
			}
		}
	}

	/// Forget the last call, so the next one goes through.
	pub fn reset(&mut self) {
		self.last_ms = None;
	}
}
