use leptos::prelude::*;

use crate::components::sorting::SortingVisualizer;

/// Default Home Page: the sorting and searching playground.
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<main class="page">
			<header class="page-header">
				<h1>"Algorithm Visualizer"</h1>
				<p class="subtitle">
					"Watch sorting algorithms come to life with smooth animations"
				</p>
				<nav>
					<a href="/traversal">"Graph traversal"</a>
				</nav>
			</header>

			<SortingVisualizer />
		</main>
	}
}
