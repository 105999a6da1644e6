use leptos::*;

/// A centered loading indicator.
#[component]
pub fn Spinner() -> impl IntoView {
	view! {
		<div class="spinner" role="status" aria-label="Loading"></div>
	}
}
