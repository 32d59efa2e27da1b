use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Element, MouseEvent};

use super::render::{bounding_rect, node_element_id};
use super::state::{DragItem, GraphStore};
use crate::config::EditorConfig;
use crate::graph::layout::group_color;
use crate::graph::reorder::crosses_midpoint;
use crate::graph::{Group, GroupId, Layer, Node};

/// Firefox refuses to start a drag without some payload.
fn mark_drag(ev: &DragEvent, payload: &str) {
	if let Some(dt) = ev.data_transfer() {
		let _ = dt.set_data("text/plain", payload);
	}
}

#[component]
pub fn GroupCard(group: Group, index: usize) -> impl IntoView {
	let store = expect_context::<GraphStore>();
	let Group { id, label, layers } = group;
	let style = format!("background-color: {}", group_color(&id));

	let on_dragstart = {
		let id = id.clone();
		move |ev: DragEvent| {
			mark_drag(&ev, &id);
			store.begin_drag(DragItem::Group(index));
		}
	};

	let on_dragover = move |ev: DragEvent| {
		let Some(DragItem::Group(from)) = store.dragging() else {
			return;
		};
		ev.prevent_default();
		if let Some(target) = ev
			.current_target()
			.and_then(|t| t.dyn_into::<Element>().ok())
		{
			let crossed = crosses_midpoint(from, index, ev.client_y() as f64, bounding_rect(&target));
			store.drag_group_over(index, crossed, js_sys::Date::now());
		}
	};

	let on_drop = move |ev: DragEvent| {
		if matches!(store.dragging(), Some(DragItem::Group(_))) {
			ev.prevent_default();
			store.end_drag();
		}
	};

	let add_layer = {
		let id = id.clone();
		move |_: MouseEvent| store.add_layer(&id)
	};
	let delete_group = {
		let id = id.clone();
		move |_: MouseEvent| store.delete_group(&id)
	};

	let layer_views = layers
		.into_iter()
		.enumerate()
		.map(|(layer_index, layer)| {
			view! { <LayerCard layer=layer group_id=id.clone() layer_index=layer_index /> }
		})
		.collect_view();

	view! {
		<div class="group" style=style on:dragover=on_dragover on:drop=on_drop>
			<div
				class="group-header"
				draggable="true"
				on:dragstart=on_dragstart
				on:dragend=move |_: DragEvent| store.end_drag()
			>
				<h3>{label}</h3>
				<button on:click=add_layer>"Add Layer"</button>
				<button class="delete-button" title="Delete Group" on:click=delete_group>
					"×"
				</button>
			</div>
			{layer_views}
		</div>
	}
}

#[component]
pub fn LayerCard(layer: Layer, group_id: GroupId, layer_index: usize) -> impl IntoView {
	let store = expect_context::<GraphStore>();
	let config = expect_context::<EditorConfig>();

	let on_dragover = move |ev: DragEvent| {
		if matches!(store.dragging(), Some(DragItem::Node(_))) {
			ev.prevent_default();
			ev.stop_propagation();
		}
	};

	let on_drop = {
		let group_id = group_id.clone();
		move |ev: DragEvent| {
			if let Some(DragItem::Node(node_id)) = store.dragging() {
				ev.prevent_default();
				ev.stop_propagation();
				store.move_node(&node_id, &group_id, layer_index);
				store.end_drag();
			}
		}
	};

	let add_node = {
		let group_id = group_id.clone();
		move |_: MouseEvent| store.add_node(&group_id, layer_index, &config.new_node_label)
	};
	let delete_layer = {
		let group_id = group_id.clone();
		move |_: MouseEvent| store.delete_layer(&group_id, layer_index)
	};

	let nodes = layer
		.into_iter()
		.map(|node| {
			view! { <NodeCard node=node group_id=group_id.clone() layer_index=layer_index /> }
		})
		.collect_view();

	view! {
		<div class="layer" on:dragover=on_dragover on:drop=on_drop>
			<div class="layer-content">{nodes}</div>
			<button class="add-node-button" title="Add Node" on:click=add_node>
				"+"
			</button>
			<button class="delete-button" title="Delete Layer" on:click=delete_layer>
				"×"
			</button>
		</div>
	}
}

#[component]
pub fn NodeCard(node: Node, group_id: GroupId, layer_index: usize) -> impl IntoView {
	let store = expect_context::<GraphStore>();
	let Node { id, label, .. } = node;
	let dom_id = node_element_id(&id);

	let on_click = {
		let id = id.clone();
		move |_: MouseEvent| store.select_node(&id)
	};
	let on_dragstart = {
		let id = id.clone();
		move |ev: DragEvent| {
			ev.stop_propagation();
			mark_drag(&ev, &id);
			store.begin_drag(DragItem::Node(id.clone()));
		}
	};
	let open_editor = {
		let id = id.clone();
		move |ev: MouseEvent| {
			ev.stop_propagation();
			store.open_editor(&id);
		}
	};
	let delete_node = {
		let id = id.clone();
		move |ev: MouseEvent| {
			ev.stop_propagation();
			store.delete_node(&id, &group_id, layer_index);
		}
	};
	let highlighted = {
		let id = id.clone();
		move || store.is_connecting() && store.is_selected(&id)
	};
	let opacity = move || {
		if store.is_dragging_node(&id) {
			"opacity: 0.5"
		} else {
			"opacity: 1"
		}
	};

	view! {
		<div
			id=dom_id
			class="node"
			class:highlight=highlighted
			style=opacity
			draggable="true"
			on:click=on_click
			on:dragstart=on_dragstart
			on:dragend=move |_: DragEvent| store.end_drag()
		>
			<p>{label}</p>
			<button class="edit-button" on:click=open_editor>
				"Edit"
			</button>
			<button class="delete-button" title="Delete Node" on:click=delete_node>
				"×"
			</button>
		</div>
	}
}
