use leptos::prelude::*;
use web_sys::MouseEvent;

use super::state::GraphStore;

/// Round button in the corner that unfolds the editor's global actions.
#[component]
pub fn FloatingMenu() -> impl IntoView {
	let store = expect_context::<GraphStore>();

	let add_group = move |_: MouseEvent| {
		store.add_group();
		store.close_menu();
	};
	let add_connection = move |_: MouseEvent| {
		store.start_adding_connection();
		store.close_menu();
	};

	view! {
		<div class="floating-menu-wrapper">
			<Show when=move || store.menu_open()>
				<div class="floating-menu-options">
					<button class="floating-menu-button" on:click=add_group>
						<span class="floating-menu-icon">"▦"</span>
						<span class="floating-menu-tooltip">"Add Group"</span>
					</button>
					<button
						class="floating-menu-button"
						class:active=move || store.is_connecting()
						on:click=add_connection
					>
						<span class="floating-menu-icon">"⛓"</span>
						<span class="floating-menu-tooltip">"Add Connection"</span>
					</button>
				</div>
			</Show>
			<button class="floating-menu-toggle" on:click=move |_: MouseEvent| store.toggle_menu()>
				{move || if store.menu_open() { "×" } else { "+" }}
			</button>
		</div>
	}
}
