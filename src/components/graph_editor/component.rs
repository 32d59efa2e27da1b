use leptos::ev;
use leptos::prelude::*;
use log::debug;
use web_sys::{Element, MouseEvent};

use super::cards::GroupCard;
use super::menu::FloatingMenu;
use super::modal::EditNodeModal;
use super::render;
use super::state::GraphStore;
use crate::config::EditorConfig;
use crate::graph::GraphModel;
use crate::graph::layout::ConnectorLine;

fn window_height() -> f64 {
	web_sys::window()
		.and_then(|w| w.inner_height().ok())
		.and_then(|h| h.as_f64())
		.unwrap_or(800.0)
}

fn log_state(store: &GraphStore) {
	store.with(|s| {
		let model = &s.model;
		for group in model.summary() {
			debug!(
				"Group {} '{}': {} layers, {} nodes",
				group.id, group.label, group.layer_count, group.node_count
			);
		}
		for c in model.connections() {
			debug!(
				"Connection: {} → {}",
				model.display_name(&c.from),
				model.display_name(&c.to)
			);
		}
	});
}

/// The whole editor: group columns, connectors, floating menu and edit
/// dialog, all driven by one [`GraphStore`] shared through context.
#[component]
pub fn GraphEditor(
	#[prop(optional)] model: GraphModel,
	#[prop(optional)] config: EditorConfig,
) -> impl IntoView {
	let store = GraphStore::new(model, config.reorder_debounce_ms);
	provide_context(store);
	provide_context(config.clone());

	let container_ref = NodeRef::<leptos::html::Div>::new();
	let height = RwSignal::new(window_height());
	let lines = RwSignal::new(Vec::<ConnectorLine>::new());

	let (group_height, available) = (config.group_height, config.clone());
	let columns = Memo::new(move |_| {
		store.columns(available.available_height(height.get()), group_height)
	});

	Effect::new(move |_| log_state(&store));

	Effect::new(move |_| {
		for (i, column) in columns.get().iter().enumerate() {
			debug!("Column {}: {:?}", i + 1, column);
		}
	});

	// Lines depend on where the cards ended up, so measure after the frame
	// that placed them.
	Effect::new(move |_| {
		store.with(|_| ());
		columns.track();
		height.track();
		request_animation_frame(move || {
			let Some(container) = container_ref.get_untracked() else {
				return;
			};
			let container: Element = container.into();
			let measured = store.with_untracked(|s| render::measure_connectors(&s.model, &container));
			lines.set(measured);
		});
	});

	let resize = window_event_listener(ev::resize, move |_| height.set(window_height()));
	let keydown = window_event_listener(ev::keydown, move |ev| {
		if ev.key() == "Escape" {
			store.cancel_connection();
			store.close_editor();
		}
	});
	on_cleanup(move || {
		resize.remove();
		keydown.remove();
	});

	let group_views = move || {
		let groups = store.with(|s| s.model.groups().to_vec());
		columns
			.get()
			.into_iter()
			.map(|column| {
				let cards = column
					.iter()
					.filter_map(|id| groups.iter().position(|g| &g.id == id))
					.map(|index| view! { <GroupCard group=groups[index].clone() index=index /> })
					.collect_view();
				view! { <div class="column">{cards}</div> }
			})
			.collect_view()
	};

	let (line_color, arrow_color) = (config.connector_color.clone(), config.connector_color.clone());
	let connector_views = move || {
		lines
			.get()
			.into_iter()
			.map(|line| {
				let ConnectorLine { from, to, x1, y1, x2, y2 } = line;
				view! {
					<line
						class="connector"
						x1=x1.to_string()
						y1=y1.to_string()
						x2=x2.to_string()
						y2=y2.to_string()
						stroke=line_color.clone()
						stroke-width="2"
						marker-end="url(#arrowhead)"
						on:click=move |_: MouseEvent| store.delete_connection(&from, &to)
					/>
				}
			})
			.collect_view()
	};

	view! {
		<div class="tree-container" class:connecting=move || store.is_connecting() node_ref=container_ref>
			<svg class="connections-svg">
				<defs>
					<marker
						id="arrowhead"
						markerWidth="10"
						markerHeight="7"
						refX="10"
						refY="3.5"
						orient="auto"
					>
						<polygon points="0 0, 10 3.5, 0 7" fill=arrow_color />
					</marker>
				</defs>
				{connector_views}
			</svg>

			<div class="columns-container">{group_views}</div>

			{move || {
				store
					.notice()
					.map(|message| {
						view! {
							<div class="notice" role="alert">
								<span>{message}</span>
								<button on:click=move |_: MouseEvent| store.dismiss_notice()>"×"</button>
							</div>
						}
					})
			}}

			<FloatingMenu />
			<EditNodeModal />
		</div>
	}
}
