use leptos::prelude::*;

use crate::components::graph_editor::GraphEditor;
use crate::graph::seed::sample_pipeline;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<GraphEditor model=sample_pipeline() />
		</ErrorBoundary>
	}
}
