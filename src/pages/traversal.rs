use leptos::prelude::*;

use crate::components::traversal::TraversalCanvas;

/// Breadth-first traversal demo page.
#[component]
pub fn Traversal() -> impl IntoView {
	view! {
		<main class="page">
			<header class="page-header">
				<h1>"BFS Visualizer"</h1>
				<p class="subtitle">
					"Watch the frontier expand level by level from node A"
				</p>
				<nav>
					<a href="/">"Sorting"</a>
				</nav>
			</header>

			<TraversalCanvas />
		</main>
	}
}
