use leptos::{ev::SubmitEvent, *};
use leptos_router::use_navigate;
use strum::IntoEnumIterator;

use crate::prelude::*;

/// Intake form for a new repair ticket. The signed-in staff member is
/// recorded as the receiving secretary; client and technician are picked
/// from the backend's lists.
#[component]
pub fn NewMachinePage() -> impl IntoView {
	let auth = expect_auth_state();
	let toaster = expect_toaster();
	let navigate = use_navigate();

	let brand = create_rw_signal(String::new());
	let model = create_rw_signal(String::new());
	let serial_number = create_rw_signal(String::new());
	let reported_issue = create_rw_signal(String::new());
	let photo_url = create_rw_signal(String::new());
	let appointment = create_rw_signal(String::new());
	let client_id = create_rw_signal(String::new());
	let technician_id = create_rw_signal(String::new());
	let status = create_rw_signal(MachineStatus::Pending);
	let error = create_rw_signal(String::new());
	let saving = create_rw_signal(false);

	let clients = create_resource(
		move || auth.token(),
		|token| async move { list_clients(token).await },
	);
	let technicians = create_resource(
		move || auth.token(),
		|token| async move { list_users_by_role(token, Role::Technician).await },
	);

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		error.set(String::new());

		let Some(secretary) = auth.user() else {
			// The gate keeps this page behind a session; nothing to do.
			return;
		};

		if brand.get_untracked().trim().is_empty()
			|| model.get_untracked().trim().is_empty()
			|| reported_issue.get_untracked().trim().is_empty()
			|| appointment.get_untracked().is_empty()
		{
			error.set("Brand, model, fault and appointment are required".to_owned());
			return;
		}
		let Ok(client_id) = client_id.get_untracked().parse::<i64>() else {
			error.set("Please pick a client".to_owned());
			return;
		};

		let request = MachineRequest {
			brand: brand.get_untracked(),
			model: model.get_untracked(),
			serial_number: serial_number.get_untracked().some_if_not_empty(),
			reported_issue: reported_issue.get_untracked(),
			photo_url: photo_url.get_untracked().some_if_not_empty(),
			appointment: appointment.get_untracked(),
			amount: None,
			paid: Some(false),
			technician_notes: None,
			client_id,
			secretary_id: secretary.id,
			technician_id: technician_id.get_untracked().parse::<i64>().ok(),
			status: Some(status.get_untracked()),
		};

		saving.set(true);
		let token = auth.token();
		let navigate = navigate.clone();
		spawn_local(async move {
			match create_machine(token, &request).await {
				Ok(machine) => {
					toaster.success("Machine registered");
					navigate(
						&LoggedInRoute::machine_details(machine.id),
						Default::default(),
					);
				}
				Err(err) => {
					log::error!("failed to register machine: {err}");
					error.set(err.to_string());
				}
			}
			saving.set(false);
		});
	};

	view! {
		<PageTitle title="New machine" subtitle="Register a machine at the front desk"/>

		<form class="card" style="max-width: 44rem;" on:submit={on_submit}>
			<div class="form-grid">
				<div>
					<label for="brand">"Brand *"</label>
					<input
						id="brand"
						prop:value={move || brand.get()}
						on:input={move |ev| brand.set(event_target_value(&ev))}
					/>
				</div>
				<div>
					<label for="model">"Model *"</label>
					<input
						id="model"
						prop:value={move || model.get()}
						on:input={move |ev| model.set(event_target_value(&ev))}
					/>
				</div>
				<div>
					<label for="serial">"Serial number"</label>
					<input
						id="serial"
						prop:value={move || serial_number.get()}
						on:input={move |ev| serial_number.set(event_target_value(&ev))}
					/>
				</div>
				<div>
					<label for="appointment">"Pickup appointment *"</label>
					<input
						id="appointment"
						type="date"
						prop:value={move || appointment.get()}
						on:input={move |ev| appointment.set(event_target_value(&ev))}
					/>
				</div>
			</div>

			<label for="issue">"Reported fault *"</label>
			<textarea
				id="issue"
				rows="3"
				prop:value={move || reported_issue.get()}
				on:input={move |ev| reported_issue.set(event_target_value(&ev))}
			></textarea>

			<label for="photo">"Photo URL"</label>
			<input
				id="photo"
				prop:value={move || photo_url.get()}
				on:input={move |ev| photo_url.set(event_target_value(&ev))}
			/>

			<label for="client">"Client *"</label>
			<select
				id="client"
				on:change={move |ev| client_id.set(event_target_value(&ev))}
			>
				<option value="">"Pick a client"</option>
				{move || match clients.get() {
					Some(Ok(clients)) => clients
						.into_iter()
						.map(|client| view! {
							<option value={client.id.to_string()}>{client.full_name()}</option>
						})
						.collect_view(),
					_ => ().into_view(),
				}}
			</select>

			<label for="technician">"Technician"</label>
			<select
				id="technician"
				on:change={move |ev| technician_id.set(event_target_value(&ev))}
			>
				<option value="">"Assign later"</option>
				{move || match technicians.get() {
					Some(Ok(technicians)) => technicians
						.into_iter()
						.map(|user| view! {
							<option value={user.id.to_string()}>{user.full_name()}</option>
						})
						.collect_view(),
					_ => ().into_view(),
				}}
			</select>

			<label for="status">"Initial status"</label>
			<select
				id="status"
				on:change={move |ev| {
					let value = event_target_value(&ev);
					if let Some(picked) =
						MachineStatus::iter().find(|status| status.as_wire() == value)
					{
						status.set(picked);
					}
				}}
			>
				{MachineStatus::iter()
					.map(|option| view! {
						<option
							value={option.as_wire()}
							selected={option == MachineStatus::Pending}
						>
							{option.to_string()}
						</option>
					})
					.collect_view()}
			</select>

			<Show when={move || !error.get().is_empty()}>
				<Alert r#type={AlertType::Error}>{move || error.get()}</Alert>
			</Show>

			<div class="modal-actions">
				<button class="btn" disabled={move || saving.get()}>
					{move || if saving.get() { "Saving..." } else { "Register machine" }}
				</button>
			</div>
		</form>
	}
}
