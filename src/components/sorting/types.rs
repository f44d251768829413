use thiserror::Error;

/// Fewest bars the chart will show; Remove refuses below this.
pub const MIN_LEN: usize = 3;
/// Most bars the chart will show; Add refuses past this.
pub const MAX_LEN: usize = 12;
/// Length of a freshly randomized array.
pub const RANDOM_LEN: usize = 8;

/// The four algorithms the visualizer can animate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
	Bubble,
	Selection,
	Insertion,
	BinarySearch,
}

/// Selector order, matching the dropdown.
pub const ALGORITHMS: [Algorithm; 4] = [
	Algorithm::Bubble,
	Algorithm::Selection,
	Algorithm::Insertion,
	Algorithm::BinarySearch,
];

impl Algorithm {
	pub fn id(self) -> &'static str {
		match self {
			Algorithm::Bubble => "bubble",
			Algorithm::Selection => "selection",
			Algorithm::Insertion => "insertion",
			Algorithm::BinarySearch => "binary",
		}
	}

	pub fn from_id(id: &str) -> Option<Self> {
		ALGORITHMS.into_iter().find(|alg| alg.id() == id)
	}

	pub fn label(self) -> &'static str {
		match self {
			Algorithm::Bubble => "Bubble Sort",
			Algorithm::Selection => "Selection Sort",
			Algorithm::Insertion => "Insertion Sort",
			Algorithm::BinarySearch => "Binary Search",
		}
	}

	pub fn summary(self) -> &'static str {
		match self {
			Algorithm::Bubble => {
				"Bubble Sort repeatedly steps through the list, compares adjacent \
				 elements and swaps them if they're in the wrong order. Time \
				 complexity: O(n²)"
			}
			Algorithm::Selection => {
				"Selection Sort finds the minimum element and places it at the \
				 beginning, then repeats for the remaining elements. Time \
				 complexity: O(n²)"
			}
			Algorithm::Insertion => {
				"Insertion Sort builds the sorted array one element at a time by \
				 inserting each element into its correct position. Time \
				 complexity: O(n²)"
			}
			Algorithm::BinarySearch => {
				"Binary Search efficiently finds a target value in a sorted array \
				 by repeatedly dividing the search interval in half. Time \
				 complexity: O(log n)"
			}
		}
	}

	/// Binary search needs a target and sorts the array before running.
	pub fn is_search(self) -> bool {
		self == Algorithm::BinarySearch
	}
}

/// Rejections for the binary-search target field, the one validated input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TargetError {
	#[error("Please enter a search value")]
	Missing,
	#[error("Search value must be a whole number")]
	NotANumber,
}

/// Parses the raw target field. Any integer is accepted; values outside the
/// array simply animate to "not found".
pub fn parse_search_target(raw: &str) -> Result<i64, TargetError> {
	let trimmed = raw.trim();
	if trimmed.is_empty() {
		return Err(TargetError::Missing);
	}
	trimmed.parse().map_err(|_| TargetError::NotANumber)
}

/// Linear congruential step, good enough for demo data.
fn lcg_next(state: u64) -> u64 {
	state.wrapping_mul(9301).wrapping_add(49297) % 233280
}

/// Bar value in `[5, 104]` derived from an LCG state.
fn bar_value(state: u64) -> u32 {
	(state % 100) as u32 + 5
}

pub fn random_element(seed: u64) -> u32 {
	bar_value(lcg_next(seed))
}

pub fn random_array(seed: u64, len: usize) -> Vec<u32> {
	let mut state = lcg_next(seed);
	(0..len)
		.map(|_| {
			let value = bar_value(state);
			state = lcg_next(state);
			value
		})
		.collect()
}

/// Appends a random element; no-op once the chart is full.
pub fn push_random(values: &mut Vec<u32>, seed: u64) {
	if values.len() < MAX_LEN {
		values.push(random_element(seed));
	}
}

/// Drops the last element; no-op at the minimum length.
pub fn pop_last(values: &mut Vec<u32>) {
	if values.len() > MIN_LEN {
		values.pop();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn algorithm_ids_round_trip() {
		for alg in ALGORITHMS {
			assert_eq!(Algorithm::from_id(alg.id()), Some(alg));
		}
		assert_eq!(Algorithm::from_id("quicksort"), None);
	}

	#[test]
	fn target_parsing_accepts_any_integer() {
		assert_eq!(parse_search_target("25"), Ok(25));
		assert_eq!(parse_search_target("  -3 "), Ok(-3));
		assert_eq!(parse_search_target(""), Err(TargetError::Missing));
		assert_eq!(parse_search_target("   "), Err(TargetError::Missing));
		assert_eq!(parse_search_target("25.5"), Err(TargetError::NotANumber));
		assert_eq!(parse_search_target("abc"), Err(TargetError::NotANumber));
	}

	#[test]
	fn random_values_stay_in_range() {
		for seed in 0..500 {
			let value = random_element(seed);
			assert!((5..=104).contains(&value), "out of range: {value}");
		}
		let values = random_array(42, RANDOM_LEN);
		assert_eq!(values.len(), RANDOM_LEN);
		assert!(values.iter().all(|v| (5..=104).contains(v)));
	}

	#[test]
	fn add_refuses_past_the_cap() {
		let mut values = vec![1; MAX_LEN];
		push_random(&mut values, 7);
		assert_eq!(values.len(), MAX_LEN);

		let mut room = vec![1; MAX_LEN - 1];
		push_random(&mut room, 7);
		assert_eq!(room.len(), MAX_LEN);
	}

	#[test]
	fn remove_refuses_below_the_floor() {
		let mut values = vec![1; MIN_LEN];
		pop_last(&mut values);
		assert_eq!(values.len(), MIN_LEN);

		let mut above = vec![1; MIN_LEN + 1];
		pop_last(&mut above);
		assert_eq!(above.len(), MIN_LEN);
	}
}
