//! Instrumented executions of the four algorithms.
//!
//! Each algorithm is a pure function from an input array to the finite
//! sequence of [`Frame`]s the animation will show, one frame per suspend
//! point. The playback loop owns all timing and cancellation, so everything
//! here is testable without wall-clock delays.

use super::types::Algorithm;

/// How long playback pauses after showing a frame, scaled by the user's
/// speed setting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pace {
	/// Full speed delay, used for comparisons.
	Full,
	/// Half delay, used to let a mutation settle.
	Half,
	/// No pause; terminal frames render immediately.
	Immediate,
}

impl Pace {
	pub fn delay_ms(self, speed: u32) -> u32 {
		match self {
			Pace::Full => speed,
			Pace::Half => speed / 2,
			Pace::Immediate => 0,
		}
	}
}

/// One observable animation step: a snapshot of the array plus the indices
/// the chart highlights.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
	pub array: Vec<u32>,
	/// Pair highlighted as "comparing". Settle frames keep the last pair.
	pub comparing: Option<(usize, usize)>,
	/// The algorithm's current index.
	pub cursor: Option<usize>,
	/// Cumulative set of indices known to be in final position.
	pub sorted: Vec<usize>,
	/// Where binary search found its target, if anywhere.
	pub found: Option<usize>,
	pub pace: Pace,
}

/// Working state for a run; `emit` snapshots it into a frame.
struct Recorder {
	frames: Vec<Frame>,
	array: Vec<u32>,
	comparing: Option<(usize, usize)>,
	cursor: Option<usize>,
	sorted: Vec<usize>,
	found: Option<usize>,
}

impl Recorder {
	fn new(array: Vec<u32>) -> Self {
		Self {
			frames: Vec::new(),
			array,
			comparing: None,
			cursor: None,
			sorted: Vec::new(),
			found: None,
		}
	}

	fn emit(&mut self, pace: Pace) {
		self.frames.push(Frame {
			array: self.array.clone(),
			comparing: self.comparing,
			cursor: self.cursor,
			sorted: self.sorted.clone(),
			found: self.found,
			pace,
		});
	}

	fn finish(mut self) -> Vec<Frame> {
		self.comparing = None;
		self.cursor = None;
		self.emit(Pace::Immediate);
		self.frames
	}
}

/// Dispatches to the generator for `algorithm`. `target` is only read by
/// binary search and must already be validated.
pub fn frames_for(algorithm: Algorithm, input: &[u32], target: i64) -> Vec<Frame> {
	match algorithm {
		Algorithm::Bubble => bubble_sort_frames(input),
		Algorithm::Selection => selection_sort_frames(input),
		Algorithm::Insertion => insertion_sort_frames(input),
		Algorithm::BinarySearch => binary_search_frames(input, target),
	}
}

/// Adjacent-pair sweeps. After each pass the last settled index joins the
/// sorted set; index 0 is marked unconditionally at the end.
pub fn bubble_sort_frames(input: &[u32]) -> Vec<Frame> {
	let mut r = Recorder::new(input.to_vec());
	let n = r.array.len();
	if n == 0 {
		return r.finish();
	}

	for pass in 0..n - 1 {
		for j in 0..n - pass - 1 {
			r.comparing = Some((j, j + 1));
			r.cursor = Some(j);
			r.emit(Pace::Full);
			if r.array[j] > r.array[j + 1] {
				r.array.swap(j, j + 1);
				r.emit(Pace::Half);
			}
		}
		r.sorted.push(n - pass - 1);
	}
	r.sorted.push(0);
	r.finish()
}

/// Minimum-scan per position. The final index is marked sorted
/// unconditionally after the loop.
pub fn selection_sort_frames(input: &[u32]) -> Vec<Frame> {
	let mut r = Recorder::new(input.to_vec());
	let n = r.array.len();
	if n == 0 {
		return r.finish();
	}

	for i in 0..n - 1 {
		let mut min = i;
		r.cursor = Some(i);
		for j in i + 1..n {
			r.comparing = Some((min, j));
			r.emit(Pace::Full);
			if r.array[j] < r.array[min] {
				min = j;
			}
		}
		if min != i {
			r.array.swap(i, min);
			r.emit(Pace::Half);
		}
		r.sorted.push(i);
	}
	r.sorted.push(n - 1);
	r.finish()
}

/// Rightward shifts until each key's slot opens up. Index 0 counts as
/// sorted from the start.
pub fn insertion_sort_frames(input: &[u32]) -> Vec<Frame> {
	let mut r = Recorder::new(input.to_vec());
	let n = r.array.len();
	if n == 0 {
		return r.finish();
	}

	r.sorted.push(0);
	for i in 1..n {
		let key = r.array[i];
		let mut j = i;
		r.cursor = Some(i);
		while j > 0 && r.array[j - 1] > key {
			r.comparing = Some((j - 1, j));
			r.emit(Pace::Full);
			r.array[j] = r.array[j - 1];
			j -= 1;
		}
		r.array[j] = key;
		r.sorted.push(i);
		r.emit(Pace::Half);
	}
	r.finish()
}

/// Bisection over the array sorted ascending. The sort destructively
/// replaces the displayed array before the first probe.
pub fn binary_search_frames(input: &[u32], target: i64) -> Vec<Frame> {
	let mut r = Recorder::new(input.to_vec());
	r.array.sort_unstable();
	r.emit(Pace::Full);

	let mut left: isize = 0;
	let mut right: isize = r.array.len() as isize - 1;
	while left <= right {
		let mid = (left + right) / 2;
		r.cursor = Some(mid as usize);
		r.comparing = Some((left as usize, right as usize));
		r.emit(Pace::Full);

		let probed = i64::from(r.array[mid as usize]);
		if probed == target {
			r.found = Some(mid as usize);
			break;
		}
		if probed < target {
			left = mid + 1;
		} else {
			right = mid - 1;
		}
	}
	r.finish()
}

#[cfg(test)]
mod tests {
	use proptest::collection::vec;
	use proptest::prelude::*;

	use super::super::types::{ALGORITHMS, MAX_LEN, MIN_LEN};
	use super::*;

	fn final_frame(frames: &[Frame]) -> &Frame {
		frames.last().expect("every run emits a terminal frame")
	}

	fn is_sorted(values: &[u32]) -> bool {
		values.windows(2).all(|w| w[0] <= w[1])
	}

	fn same_elements(a: &[u32], b: &[u32]) -> bool {
		let mut a = a.to_vec();
		let mut b = b.to_vec();
		a.sort_unstable();
		b.sort_unstable();
		a == b
	}

	const SORTS: [Algorithm; 3] = [
		Algorithm::Bubble,
		Algorithm::Selection,
		Algorithm::Insertion,
	];

	#[test]
	fn bubble_sorts_the_reference_array() {
		let frames = bubble_sort_frames(&[64, 34, 25, 12, 22, 11, 90]);
		assert_eq!(final_frame(&frames).array, [11, 12, 22, 25, 34, 64, 90]);
	}

	#[test]
	fn bubble_marks_every_index_including_the_trailing_zero() {
		let frames = bubble_sort_frames(&[3, 1, 2]);
		let last = final_frame(&frames);
		// Pass order first, then the unconditional index-0 mark
		assert_eq!(last.sorted, [2, 1, 0]);
	}

	#[test]
	fn bubble_emits_no_settle_frames_on_sorted_input() {
		let frames = bubble_sort_frames(&[1, 2, 3, 4]);
		assert!(frames.iter().all(|f| f.pace != Pace::Half));
	}

	#[test]
	fn selection_marks_the_final_index_unconditionally() {
		let frames = selection_sort_frames(&[2, 1, 3]);
		let last = final_frame(&frames);
		assert_eq!(last.sorted, [0, 1, 2]);
	}

	#[test]
	fn selection_highlights_running_minimum_against_scan() {
		let frames = selection_sort_frames(&[5, 1, 4]);
		// First scan of i=0: (0,1) then, with the minimum moved to 1, (1,2)
		let compares: Vec<_> = frames
			.iter()
			.filter(|f| f.pace == Pace::Full)
			.map(|f| f.comparing)
			.collect();
		assert_eq!(compares[0], Some((0, 1)));
		assert_eq!(compares[1], Some((1, 2)));
	}

	#[test]
	fn insertion_seeds_the_sorted_set_with_index_zero() {
		let frames = insertion_sort_frames(&[9, 7, 8]);
		assert_eq!(frames[0].sorted, [0]);
		assert_eq!(final_frame(&frames).sorted, [0, 1, 2]);
	}

	#[test]
	fn terminal_frames_clear_highlights() {
		for alg in SORTS {
			let last_frames = frames_for(alg, &[4, 2, 7, 1], 0);
			let last = final_frame(&last_frames);
			assert_eq!(last.comparing, None);
			assert_eq!(last.cursor, None);
			assert_eq!(last.pace, Pace::Immediate);
		}
	}

	#[test]
	fn binary_search_finds_the_reference_target() {
		let frames = binary_search_frames(&[64, 34, 25, 12, 22, 11, 90], 25);
		let last = final_frame(&frames);
		assert_eq!(last.array, [11, 12, 22, 25, 34, 64, 90]);
		assert_eq!(last.found, Some(3));
	}

	#[test]
	fn binary_search_reports_absent_targets_as_not_found() {
		let frames = binary_search_frames(&[64, 34, 25, 12, 22, 11, 90], 99);
		assert_eq!(final_frame(&frames).found, None);
	}

	#[test]
	fn binary_search_sorts_before_the_first_probe() {
		let frames = binary_search_frames(&[3, 1, 2], 2);
		assert_eq!(frames[0].array, [1, 2, 3]);
		assert_eq!(frames[0].comparing, None);
		assert_eq!(frames[0].pace, Pace::Full);
	}

	#[test]
	fn binary_search_probes_shrink_the_interval() {
		let frames = binary_search_frames(&[10, 20, 30, 40, 50], 10);
		let probes: Vec<_> = frames
			.iter()
			.filter_map(|f| f.comparing.map(|bounds| (bounds, f.cursor)))
			.collect();
		assert_eq!(probes[0], ((0, 4), Some(2)));
		assert_eq!(probes[1], ((0, 1), Some(0)));
		assert_eq!(final_frame(&frames).found, Some(0));
	}

	#[test]
	fn binary_search_tolerates_negative_targets() {
		let frames = binary_search_frames(&[5, 6, 7], -4);
		assert_eq!(final_frame(&frames).found, None);
	}

	#[test]
	fn empty_and_single_inputs_terminate() {
		for alg in SORTS {
			assert_eq!(frames_for(alg, &[], 0).len(), 1);
			let single = frames_for(alg, &[9], 0);
			assert_eq!(final_frame(&single).array, [9]);
		}
		assert_eq!(final_frame(&binary_search_frames(&[], 1)).found, None);
	}

	proptest! {
		#![proptest_config(ProptestConfig::with_cases(128))]

		#[test]
		fn sorts_produce_a_sorted_permutation(
			input in vec(0u32..=1000, MIN_LEN..=MAX_LEN),
		) {
			for alg in SORTS {
				let frames = frames_for(alg, &input, 0);
				let last = final_frame(&frames);
				prop_assert!(is_sorted(&last.array), "{alg:?} left {:?}", last.array);
				prop_assert!(same_elements(&input, &last.array));
			}
		}

		#[test]
		fn sorts_are_idempotent_on_their_own_output(
			input in vec(0u32..=1000, MIN_LEN..=MAX_LEN),
		) {
			for alg in SORTS {
				let once = final_frame(&frames_for(alg, &input, 0)).array.clone();
				let twice = final_frame(&frames_for(alg, &once, 0)).array.clone();
				prop_assert_eq!(&once, &twice);
			}
		}

		#[test]
		fn sorts_mark_every_index_settled(
			input in vec(0u32..=1000, MIN_LEN..=MAX_LEN),
		) {
			for alg in SORTS {
				let frames = frames_for(alg, &input, 0);
				let mut sorted = final_frame(&frames).sorted.clone();
				sorted.sort_unstable();
				let expected: Vec<usize> = (0..input.len()).collect();
				prop_assert_eq!(sorted, expected);
			}
		}

		#[test]
		fn highlights_stay_in_bounds(
			input in vec(0u32..=1000, MIN_LEN..=MAX_LEN),
			target in 0i64..=1100,
		) {
			for alg in ALGORITHMS {
				for frame in frames_for(alg, &input, target) {
					let n = frame.array.len();
					prop_assert_eq!(n, input.len());
					if let Some((a, b)) = frame.comparing {
						prop_assert!(a < n && b < n);
					}
					if let Some(c) = frame.cursor {
						prop_assert!(c < n);
					}
					prop_assert!(frame.sorted.iter().all(|&s| s < n));
				}
			}
		}

		#[test]
		fn binary_search_found_index_holds_the_target(
			input in vec(0u32..=100, MIN_LEN..=MAX_LEN),
			target in 0u32..=110,
		) {
			let frames = binary_search_frames(&input, i64::from(target));
			let last = final_frame(&frames);
			match last.found {
				Some(idx) => prop_assert_eq!(last.array[idx], target),
				None => prop_assert!(!input.contains(&target)),
			}
		}
	}
}
