use web_sys::{DomRect, Element};

use crate::graph::GraphModel;
use crate::graph::layout::{ConnectorLine, Rect, connector};

/// DOM id of a node card. Node ids are free-form, so they get a prefix.
pub fn node_element_id(node_id: &str) -> String {
	format!("node-{}", node_id)
}

fn to_rect(r: DomRect) -> Rect {
	Rect::new(r.left(), r.top(), r.width(), r.height())
}

fn element_rect(id: &str) -> Option<Rect> {
	web_sys::window()?
		.document()?
		.get_element_by_id(&node_element_id(id))
		.map(|el| to_rect(el.get_bounding_client_rect()))
}

/// Bounding box of any element, for hit tests during drags.
pub fn bounding_rect(el: &Element) -> Rect {
	to_rect(el.get_bounding_client_rect())
}

/// Measure the rendered node cards and lay a line over every connection
/// whose endpoints are both on screen.
pub fn measure_connectors(model: &GraphModel, overlay: &Element) -> Vec<ConnectorLine> {
	let origin = bounding_rect(overlay);
	model
		.connections()
		.iter()
		.filter_map(|c| {
			let (from, to) = (element_rect(&c.from)?, element_rect(&c.to)?);
			let (x1, y1, x2, y2) = connector(from, to, origin);
			Some(ConnectorLine {
				from: c.from.clone(),
				to: c.to.clone(),
				x1,
				y1,
				x2,
				y2,
			})
		})
		.collect()
}
