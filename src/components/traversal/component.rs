use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::info;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::render;
use super::steps::breadth_first_order;
use super::types::TraversalGraph;
use crate::components::playback::{RunToken, sleep};

const CANVAS_WIDTH: f64 = 540.0;
const CANVAS_HEIGHT: f64 = 300.0;
const START_NODE: &str = "A";
/// Pause between marking a node visited and exploring its neighbors.
const VISIT_DELAY_MS: u32 = 1000;

/// Canvas-rendered breadth-first traversal animation over the fixed graph.
#[component]
pub fn TraversalCanvas() -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let graph = TraversalGraph::sample();
	let visited = RwSignal::new(Vec::<String>::new());
	let running = RwSignal::new(false);
	let token: Rc<RefCell<RunToken>> = Rc::new(RefCell::new(RunToken::new()));

	let graph_draw = graph.clone();
	Effect::new(move |_| {
		// Tracked read: every visit repaints the scene
		let order = visited.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		canvas.set_width(CANVAS_WIDTH as u32);
		canvas.set_height(CANVAS_HEIGHT as u32);
		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();
		render::render(&graph_draw, &order, &ctx, CANVAS_WIDTH, CANVAS_HEIGHT);
	});

	let token_start = token.clone();
	let on_start = move |_| {
		if running.get_untracked() {
			return;
		}
		let fresh = RunToken::new();
		*token_start.borrow_mut() = fresh.clone();
		running.set(true);
		visited.set(Vec::new());

		let order = breadth_first_order(&graph, START_NODE);
		info!("breadth-first run from {START_NODE}: {} reachable", order.len());
		spawn_local(async move {
			for id in order {
				if fresh.is_cancelled() {
					return;
				}
				visited.update(|seen| seen.push(id));
				sleep(VISIT_DELAY_MS).await;
			}
			running.set(false);
		});
	};

	// Reset stays enabled mid-run: it cancels the in-flight task first, so
	// a suspended step can never repaint stale state afterwards.
	let token_reset = token.clone();
	let on_reset = move |_| {
		token_reset.borrow().cancel();
		running.set(false);
		visited.set(Vec::new());
	};

	view! {
		<section class="panel">
			<div class="control-row">
				<button class="primary" on:click=on_start disabled=move || running.get()>
					"Start BFS from A"
				</button>
				<button on:click=on_reset>"Reset"</button>
			</div>

			<canvas node_ref=canvas_ref class="traversal-canvas" />

			<p class="visited-order">
				<strong>"Visited Order: "</strong>
				{move || visited.get().join(" → ")}
			</p>
		</section>
	}
}
