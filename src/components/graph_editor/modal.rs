use leptos::prelude::*;
use web_sys::MouseEvent;

use super::state::GraphStore;
use crate::graph::Node;

/// Edit dialog for the node the store has open, if any.
#[component]
pub fn EditNodeModal() -> impl IntoView {
	let store = expect_context::<GraphStore>();
	move || store.editing().map(|node| view! { <EditNodeForm node=node /> })
}

/// The three fields are buffered locally and committed together on Save.
#[component]
fn EditNodeForm(node: Node) -> impl IntoView {
	let store = expect_context::<GraphStore>();
	let Node { id, label, link, data } = node;
	let label = RwSignal::new(label);
	let link = RwSignal::new(link);
	let data = RwSignal::new(data);

	let save = move |_: MouseEvent| {
		store.edit_node(&id, label.get_untracked(), link.get_untracked(), data.get_untracked());
		store.close_editor();
	};

	view! {
		<div class="modal">
			<div class="modal-content">
				<h3>"Edit Node"</h3>
				<label>
					"Name:"
					<input
						type="text"
						prop:value=move || label.get()
						on:input=move |ev| label.set(event_target_value(&ev))
					/>
				</label>
				<label>
					"Link:"
					<input
						type="text"
						prop:value=move || link.get()
						on:input=move |ev| link.set(event_target_value(&ev))
					/>
				</label>
				<label>
					"Data:"
					<input
						type="text"
						prop:value=move || data.get()
						on:input=move |ev| data.set(event_target_value(&ev))
					/>
				</label>
				<button on:click=save>"Save"</button>
				<button on:click=move |_: MouseEvent| store.close_editor()>"Cancel"</button>
			</div>
		</div>
	}
}
