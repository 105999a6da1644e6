use leptos::*;

use crate::models::MachineStatus;

fn badge_class(status: MachineStatus) -> &'static str {
	match status {
		MachineStatus::Pending => "badge badge-pending",
		MachineStatus::InProgress => "badge badge-in-progress",
		MachineStatus::Completed => "badge badge-completed",
		MachineStatus::Anomaly => "badge badge-anomaly",
	}
}

/// A colored pill showing where a repair ticket stands.
#[component]
pub fn StatusBadge(
	/// The status to display
	#[prop(into)]
	status: MaybeSignal<MachineStatus>,
) -> impl IntoView {
	view! {
		<span class={move || badge_class(status.get())}>
			{move || status.get().to_string()}
		</span>
	}
}
