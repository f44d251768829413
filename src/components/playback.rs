//! Run control shared by the animated visualizers: a cooperative
//! cancellation token and a non-blocking timed sleep.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen_futures::JsFuture;

/// Cancellation handle for an in-flight animation run.
///
/// A fresh token is handed to every run task; cancelling it only takes
/// effect at the task's next suspend-point check, so the array or graph is
/// left in whatever partial state the run reached.
#[derive(Clone, Debug, Default)]
pub struct RunToken(Rc<Cell<bool>>);

impl RunToken {
	pub fn new() -> Self {
		Self::default()
	}

	/// Asks the run task to stop at its next suspend point.
	pub fn cancel(&self) {
		self.0.set(true);
	}

	pub fn is_cancelled(&self) -> bool {
		self.0.get()
	}
}

/// Suspends the current task for `ms` milliseconds via `setTimeout`,
/// yielding to the browser event loop so every step gets painted.
pub async fn sleep(ms: u32) {
	let promise = js_sys::Promise::new(&mut |resolve, _reject| {
		let _ = web_sys::window()
			.unwrap()
			.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms as i32);
	});
	let _ = JsFuture::from(promise).await;
}
