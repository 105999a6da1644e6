use leptos::*;

/// A centered dialog over a backdrop. Clicking the close button fires
/// `on_close`; the caller owns the open/closed state.
#[component]
pub fn Modal(
	/// Dialog heading
	#[prop(into)]
	title: String,
	/// Called when the user closes the dialog
	#[prop(into)]
	on_close: Callback<()>,
	children: Children,
) -> impl IntoView {
	view! {
		<div class="modal-backdrop">
			<div class="modal">
				<div class="modal-header">
					<h2>{title}</h2>
					<button class="btn btn-secondary btn-sm" on:click={move |_| on_close.call(())}>
						"✕"
					</button>
				</div>
				{children()}
			</div>
		</div>
	}
}

/// A yes/no dialog for destructive actions.
#[component]
pub fn ConfirmModal(
	/// Dialog heading
	#[prop(into)]
	title: String,
	/// What is about to happen
	#[prop(into)]
	message: String,
	/// Called when the user confirms
	#[prop(into)]
	on_confirm: Callback<()>,
	/// Called when the user backs out
	#[prop(into)]
	on_cancel: Callback<()>,
) -> impl IntoView {
	view! {
		<div class="modal-backdrop">
			<div class="modal">
				<div class="modal-header">
					<h2>{title}</h2>
				</div>
				<p>{message}</p>
				<div class="modal-actions">
					<button class="btn btn-secondary" on:click={move |_| on_cancel.call(())}>
						"Cancel"
					</button>
					<button class="btn btn-danger" on:click={move |_| on_confirm.call(())}>
						"Delete"
					</button>
				</div>
			</div>
		</div>
	}
}
