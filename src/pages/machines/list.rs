use leptos::*;
use leptos_router::A;
use strum::IntoEnumIterator;

use crate::prelude::*;

/// The repair-ticket list: substring search, status filter, links to the
/// detail pages and deletion behind a confirm dialog.
#[component]
pub fn MachinesPage() -> impl IntoView {
	let auth = expect_auth_state();
	let toaster = expect_toaster();

	let keyword = create_rw_signal(String::new());
	let status_filter = create_rw_signal(None::<MachineStatus>);
	let version = create_rw_signal(0u32);
	let delete_target = create_rw_signal(None::<(i64, String)>);

	let machines = create_resource(
		move || (auth.token(), keyword.get(), status_filter.get(), version.get()),
		|(token, keyword, status, _)| async move {
			let keyword = keyword.trim().to_owned();
			if !keyword.is_empty() {
				search_machines(token, &keyword).await
			} else if let Some(status) = status {
				list_machines_by_status(token, status).await
			} else {
				list_machines(token).await
			}
		},
	);

	let on_delete = move |id: i64| {
		let token = auth.token();
		delete_target.set(None);
		spawn_local(async move {
			match delete_machine(token, id).await {
				Ok(()) => {
					toaster.success("Machine deleted");
					version.update(|version| *version += 1);
				}
				Err(err) => {
					log::error!("failed to delete machine {id}: {err}");
					toaster.error(err.to_string());
				}
			}
		});
	};

	view! {
		<PageTitle title="Machines" subtitle="Every machine brought in for repair">
			<A class="btn" href={LoggedInRoute::NewMachine.to_string()}>"New machine"</A>
		</PageTitle>

		<div class="toolbar">
			<input
				type="search"
				style="max-width: 18rem;"
				placeholder="Search brand, model, serial or client"
				prop:value={move || keyword.get()}
				on:input={move |ev| keyword.set(event_target_value(&ev))}
			/>
			<select
				style="max-width: 12rem;"
				on:change={move |ev| {
					let value = event_target_value(&ev);
					status_filter.set(
						MachineStatus::iter().find(|status| status.as_wire() == value),
					);
				}}
			>
				<option value="">"All statuses"</option>
				{MachineStatus::iter()
					.map(|status| view! {
						<option value={status.as_wire()}>{status.to_string()}</option>
					})
					.collect_view()}
			</select>
		</div>

		{move || match machines.get() {
			None => view! { <Spinner/> }.into_view(),
			Some(Err(err)) => {
				view! { <Alert r#type={AlertType::Error}>{err.to_string()}</Alert> }.into_view()
			}
			Some(Ok(machines)) if machines.is_empty() => {
				view! { <div class="empty-state">"No machines match"</div> }.into_view()
			}
			Some(Ok(machines)) => view! {
				<table>
					<thead>
						<tr>
							<th>"Machine"</th>
							<th>"Serial"</th>
							<th>"Client"</th>
							<th>"Appointment"</th>
							<th>"Status"</th>
							<th>"Paid"</th>
							<th></th>
						</tr>
					</thead>
					<tbody>
						{machines
							.into_iter()
							.map(|machine| {
								let label = format!("{} {}", machine.brand, machine.model);
								let delete_label = label.clone();
								let id = machine.id;
								view! {
									<tr>
										<td>
											<A href={LoggedInRoute::machine_details(id)}>{label}</A>
										</td>
										<td>{machine.serial_number.clone().unwrap_or_default()}</td>
										<td>{machine.client.full_name()}</td>
										<td>{machine.appointment.clone()}</td>
										<td><StatusBadge status={machine.status}/></td>
										<td>{if machine.paid { "Yes" } else { "No" }}</td>
										<td>
											<button
												class="btn btn-danger btn-sm"
												on:click={move |_| {
													delete_target
														.set(Some((id, delete_label.clone())))
												}}
											>
												"Delete"
											</button>
										</td>
									</tr>
								}
							})
							.collect_view()}
					</tbody>
				</table>
			}
			.into_view(),
		}}

		{move || {
			delete_target
				.get()
				.map(|(id, label)| {
					view! {
						<ConfirmModal
							title="Delete machine"
							message={format!("Delete {label}? This cannot be undone.")}
							on_confirm={move |_: ()| on_delete(id)}
							on_cancel={move |_: ()| delete_target.set(None)}
						/>
					}
				})
		}}
	}
}
