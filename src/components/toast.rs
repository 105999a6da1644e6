use std::time::Duration;

use leptos::*;

use crate::components::AlertType;

/// How long a toast stays up before it dismisses itself.
const TOAST_EXPIRY: Duration = Duration::from_millis(4_000);

/// All info regarding one toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastData {
	/// The ID of the toast
	pub id: u64,
	/// The alert level of the toast
	pub level: AlertType,
	/// The message to show in the toast
	pub message: String,
}

/// The transient-notification service. Provided once at the app root;
/// every call site that talks to the backend reports failures (and
/// successes worth mentioning) through it.
#[derive(Debug, Clone, Copy)]
pub struct Toaster {
	toasts: RwSignal<Vec<ToastData>>,
	next_id: RwSignal<u64>,
}

impl Toaster {
	/// Create the service and provide it to the component tree.
	pub fn provide() -> Self {
		let toaster = Self {
			toasts: create_rw_signal(Vec::new()),
			next_id: create_rw_signal(0),
		};
		provide_context(toaster);
		toaster
	}

	/// Show a success toast
	pub fn success(&self, message: impl Into<String>) {
		self.push(AlertType::Success, message.into());
	}

	/// Show an error toast
	pub fn error(&self, message: impl Into<String>) {
		self.push(AlertType::Error, message.into());
	}

	fn push(&self, level: AlertType, message: String) {
		let id = self.next_id.get_untracked();
		self.next_id.set(id + 1);

		self.toasts.update(|toasts| {
			toasts.push(ToastData { id, level, message });
		});

		let toasts = self.toasts;
		set_timeout(
			move || toasts.update(|toasts| toasts.retain(|toast| toast.id != id)),
			TOAST_EXPIRY,
		);
	}

	/// Remove one toast ahead of its expiry
	pub fn dismiss(&self, id: u64) {
		self.toasts
			.update(|toasts| toasts.retain(|toast| toast.id != id));
	}
}

/// Get the toaster from the context
pub fn expect_toaster() -> Toaster {
	expect_context::<Toaster>()
}

/// Renders the active toasts in a fixed corner stack. Clicking a toast
/// dismisses it.
#[component]
pub fn ToastHost() -> impl IntoView {
	let toaster = expect_toaster();

	view! {
		<div class="toast-host">
			<For
				each={move || toaster.toasts.get()}
				key={|toast| toast.id}
				children={move |toast: ToastData| {
					let id = toast.id;
					view! {
						<div
							class={format!("toast toast-{}", toast.level.as_css_name())}
							on:click={move |_| toaster.dismiss(id)}
						>
							{toast.message}
						</div>
					}
				}}
			/>
		</div>
	}
}
