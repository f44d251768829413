use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen_futures::spawn_local;

use super::snippets;
use super::steps;
use super::types::{
	ALGORITHMS, Algorithm, MAX_LEN, MIN_LEN, RANDOM_LEN, parse_search_target, pop_last,
	push_random, random_array,
};
use crate::components::playback::{RunToken, sleep};

const MAX_BAR_HEIGHT: f64 = 250.0;
const MIN_BAR_HEIGHT: f64 = 30.0;

/// Highlight precedence per bar: found beats settled beats comparing beats
/// the cursor.
fn bar_state(
	index: usize,
	comparing: Option<(usize, usize)>,
	sorted: &[usize],
	cursor: Option<usize>,
	found: Option<usize>,
) -> &'static str {
	if found == Some(index) {
		"found"
	} else if sorted.contains(&index) {
		"settled"
	} else if comparing.is_some_and(|(a, b)| a == index || b == index) {
		"comparing"
	} else if cursor == Some(index) {
		"cursor"
	} else {
		"idle"
	}
}

fn bar_height(value: u32, max: u32) -> f64 {
	(f64::from(value) / f64::from(max) * MAX_BAR_HEIGHT).max(MIN_BAR_HEIGHT)
}

fn clock_seed() -> u64 {
	js_sys::Date::now() as u64
}

/// Interactive sorting/search animator: controls, bar chart, legend,
/// algorithm notes, and the read-only reference-code panel.
#[component]
pub fn SortingVisualizer() -> impl IntoView {
	let array = RwSignal::new(vec![64u32, 34, 25, 12, 22, 11, 90]);
	let playing = RwSignal::new(false);
	let algorithm = RwSignal::new(Algorithm::Bubble);
	let speed = RwSignal::new(300u32);
	let search_target = RwSignal::new(String::new());
	let comparing = RwSignal::new(None::<(usize, usize)>);
	let cursor = RwSignal::new(None::<usize>);
	let sorted = RwSignal::new(Vec::<usize>::new());
	let found = RwSignal::new(None::<usize>);
	let token: Rc<RefCell<RunToken>> = Rc::new(RefCell::new(RunToken::new()));

	let clear_animation = move || {
		comparing.set(None);
		cursor.set(None);
		sorted.set(Vec::new());
		found.set(None);
	};

	let token_toggle = token.clone();
	let on_toggle = move |_| {
		if playing.get_untracked() {
			// Pause: the run task sees the cancelled token at its next
			// suspend point and leaves the array as-is.
			token_toggle.borrow().cancel();
			playing.set(false);
			return;
		}

		let alg = algorithm.get_untracked();
		let target = if alg.is_search() {
			match parse_search_target(&search_target.get_untracked()) {
				Ok(target) => target,
				Err(err) => {
					warn!("binary search rejected: {err}");
					let _ = web_sys::window().unwrap().alert_with_message(&err.to_string());
					return;
				}
			}
		} else {
			0
		};

		clear_animation();
		let frames = steps::frames_for(alg, &array.get_untracked(), target);
		info!(
			"running {} over {} elements, {} frames",
			alg.label(),
			array.get_untracked().len(),
			frames.len()
		);

		let fresh = RunToken::new();
		*token_toggle.borrow_mut() = fresh.clone();
		playing.set(true);

		spawn_local(async move {
			for frame in frames {
				if fresh.is_cancelled() {
					return;
				}
				array.set(frame.array);
				comparing.set(frame.comparing);
				cursor.set(frame.cursor);
				sorted.set(frame.sorted);
				found.set(frame.found);

				let ms = frame.pace.delay_ms(speed.get_untracked());
				if ms > 0 {
					sleep(ms).await;
				}
			}
			playing.set(false);
		});
	};

	let token_reset = token.clone();
	let on_reset = move |_| {
		token_reset.borrow().cancel();
		playing.set(false);
		clear_animation();
	};

	let token_select = token.clone();
	let on_algorithm = move |ev| {
		if let Some(alg) = Algorithm::from_id(&event_target_value(&ev)) {
			token_select.borrow().cancel();
			algorithm.set(alg);
			clear_animation();
		}
	};

	let on_randomize = move |_| {
		array.set(random_array(clock_seed(), RANDOM_LEN));
		clear_animation();
	};

	let on_add = move |_| {
		array.update(|values| push_random(values, clock_seed()));
		clear_animation();
	};

	let on_remove = move |_| {
		array.update(pop_last);
		clear_animation();
	};

	view! {
		<section class="panel">
			<div class="control-row">
				<select
					prop:value=move || algorithm.get().id()
					on:change=on_algorithm
					disabled=move || playing.get()
				>
					{ALGORITHMS
						.iter()
						.map(|alg| view! { <option value=alg.id()>{alg.label()}</option> })
						.collect_view()}
				</select>

				<Show when=move || algorithm.get().is_search()>
					<input
						type="number"
						class="target-input"
						placeholder="Search value"
						prop:value=move || search_target.get()
						on:input=move |ev| search_target.set(event_target_value(&ev))
						disabled=move || playing.get()
					/>
				</Show>

				<button class="primary" on:click=on_toggle>
					{move || if playing.get() { "Pause" } else { "Start" }}
				</button>
				<button on:click=on_reset disabled=move || playing.get()>
					"Reset"
				</button>
			</div>

			<div class="control-row">
				<button on:click=on_randomize disabled=move || playing.get()>
					"Randomize"
				</button>
				<button
					on:click=on_add
					disabled=move || { playing.get() || array.get().len() >= MAX_LEN }
				>
					"Add"
				</button>
				<button
					on:click=on_remove
					disabled=move || playing.get() || array.get().len() <= MIN_LEN
				>
					"Remove"
				</button>

				<label class="speed-control">
					"Speed:"
					<input
						type="range"
						min="50"
						max="1000"
						prop:value=move || speed.get().to_string()
						on:input=move |ev| {
							if let Ok(ms) = event_target_value(&ev).parse::<u32>() {
								speed.set(ms);
							}
						}
						disabled=move || playing.get()
					/>
					<span class="speed-label">{move || format!("{} ms", speed.get())}</span>
				</label>
			</div>

			<div class="chart">
				{move || {
					let values = array.get();
					let max = values.iter().copied().max().unwrap_or(1).max(1);
					let compare_pair = comparing.get();
					let settled = sorted.get();
					let cur = cursor.get();
					let hit = found.get();
					values
						.into_iter()
						.enumerate()
						.map(|(index, value)| {
							let state = bar_state(index, compare_pair, &settled, cur, hit);
							view! {
								<div class="bar-cell">
									<div
										class=format!("bar {state}")
										style=format!("height: {}px", bar_height(value, max))
									></div>
									<span class="bar-value">{value}</span>
								</div>
							}
						})
						.collect_view()
				}}
			</div>

			<Show when=move || playing.get()>
				<p class="status">{move || format!("Running {}...", algorithm.get().label())}</p>
			</Show>

			<div class="legend">
				<span class="legend-item"><i class="swatch idle"></i>"Unsorted"</span>
				<span class="legend-item"><i class="swatch comparing"></i>"Comparing"</span>
				<span class="legend-item"><i class="swatch cursor"></i>"Current"</span>
				<span class="legend-item"><i class="swatch settled"></i>"Sorted"</span>
				<Show when=move || algorithm.get().is_search()>
					<span class="legend-item"><i class="swatch found"></i>"Found"</span>
				</Show>
			</div>

			<div class="algorithm-info">
				<h3>{move || algorithm.get().label()}</h3>
				<p>{move || algorithm.get().summary()}</p>
			</div>

			<div class="code-panel">
				<h3>"Code"</h3>
				<pre><code>{move || snippets::reference_source(algorithm.get())}</code></pre>
			</div>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::{bar_height, bar_state};

	#[test]
	fn found_outranks_every_other_highlight() {
		let sorted = vec![2];
		assert_eq!(bar_state(2, Some((2, 3)), &sorted, Some(2), Some(2)), "found");
		assert_eq!(bar_state(2, Some((2, 3)), &sorted, Some(2), None), "settled");
		assert_eq!(bar_state(2, Some((2, 3)), &[], Some(2), None), "comparing");
		assert_eq!(bar_state(2, None, &[], Some(2), None), "cursor");
		assert_eq!(bar_state(2, None, &[], None, None), "idle");
	}

	#[test]
	fn comparing_matches_either_side_of_the_pair() {
		assert_eq!(bar_state(4, Some((1, 4)), &[], None, None), "comparing");
		assert_eq!(bar_state(1, Some((1, 4)), &[], None, None), "comparing");
		assert_eq!(bar_state(3, Some((1, 4)), &[], None, None), "idle");
	}

	#[test]
	fn bar_heights_scale_with_a_floor() {
		assert_eq!(bar_height(104, 104), 250.0);
		assert_eq!(bar_height(52, 104), 125.0);
		// Tiny values stay visible
		assert_eq!(bar_height(1, 104), 30.0);
	}
}
