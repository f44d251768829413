use algo_canvas::App;
use leptos::mount::mount_to_body;

fn main() {
	algo_canvas::init_logging();
	mount_to_body(App);
}
