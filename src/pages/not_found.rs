use leptos::prelude::*;

/// 404 Not Found Page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<main class="page">
			<h1>"Uh oh!"</h1>
			<p>"We couldn't find that page!"</p>
			<a href="/">"Back to the visualizer"</a>
		</main>
	}
}
