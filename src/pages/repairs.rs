use leptos::*;
use leptos_router::A;
use strum::IntoEnumIterator;

use crate::prelude::*;

/// The workshop worklist: every machine that is not yet repaired, with
/// inline editing of status and notes so a technician can work straight
/// down the table.
#[component]
pub fn RepairsPage() -> impl IntoView {
	let auth = expect_auth_state();
	let toaster = expect_toaster();

	let version = create_rw_signal(0u32);
	let editing_id = create_rw_signal(None::<i64>);
	let edit_status = create_rw_signal(MachineStatus::InProgress);
	let edit_notes = create_rw_signal(String::new());

	let machines = create_resource(
		move || (auth.token(), version.get()),
		|(token, _)| async move {
			list_machines(token).await.map(|machines| {
				machines
					.into_iter()
					.filter(|machine| machine.status != MachineStatus::Completed)
					.collect::<Vec<_>>()
			})
		},
	);

	let start_editing = move |machine: &Machine| {
		edit_status.set(machine.status);
		edit_notes.set(machine.technician_notes.clone().unwrap_or_default());
		editing_id.set(Some(machine.id));
	};

	let save = move |machine: Machine| {
		let mut request = MachineRequest::from_machine(&machine);
		request.status = Some(edit_status.get_untracked());
		request.technician_notes = edit_notes.get_untracked().some_if_not_empty();

		let token = auth.token();
		spawn_local(async move {
			match update_machine(token, machine.id, &request).await {
				Ok(_) => {
					toaster.success("Repair updated");
					editing_id.set(None);
					version.update(|version| *version += 1);
				}
				Err(err) => {
					log::error!("failed to update repair {}: {err}", machine.id);
					toaster.error(err.to_string());
				}
			}
		});
	};

	view! {
		<PageTitle title="Repairs" subtitle="Machines still waiting on the bench"/>

		{move || match machines.get() {
			None => view! { <Spinner/> }.into_view(),
			Some(Err(err)) => {
				view! { <Alert r#type={AlertType::Error}>{err.to_string()}</Alert> }.into_view()
			}
			Some(Ok(machines)) if machines.is_empty() => {
				view! { <div class="empty-state">"Nothing left to repair"</div> }.into_view()
			}
			Some(Ok(machines)) => view! {
				<table>
					<thead>
						<tr>
							<th>"Machine"</th>
							<th>"Fault"</th>
							<th>"Appointment"</th>
							<th>"Status"</th>
							<th>"Notes"</th>
							<th></th>
						</tr>
					</thead>
					<tbody>
						{machines
							.into_iter()
							.map(|machine| {
								let id = machine.id;
								let edit_source = machine.clone();
								let save_source = machine.clone();
								let is_editing =
									create_memo(move |_| editing_id.get() == Some(id));
								view! {
									<tr>
										<td>
											<A href={LoggedInRoute::machine_details(id)}>
												{format!("{} {}", machine.brand, machine.model)}
											</A>
										</td>
										<td>{machine.reported_issue.clone()}</td>
										<td>{machine.appointment.clone()}</td>
										<td>
											<Show
												when={move || is_editing.get()}
												fallback={move || view! {
													<StatusBadge status={machine.status}/>
												}}
											>
												<select
													on:change={move |ev| {
														let value = event_target_value(&ev);
														if let Some(picked) = MachineStatus::iter()
															.find(|status| {
																status.as_wire() == value
															}) {
															edit_status.set(picked);
														}
													}}
												>
													{MachineStatus::iter()
														.map(|option| view! {
															<option
																value={option.as_wire()}
																selected={move || {
																	option == edit_status.get()
																}}
															>
																{option.to_string()}
															</option>
														})
														.collect_view()}
												</select>
											</Show>
										</td>
										<td>
											<Show
												when={move || is_editing.get()}
												fallback={{
													let notes = machine
														.technician_notes
														.clone()
														.unwrap_or_default();
													move || notes.clone()
												}}
											>
												<input
													prop:value={move || edit_notes.get()}
													on:input={move |ev| {
														edit_notes.set(event_target_value(&ev))
													}}
												/>
											</Show>
										</td>
										<td>
											<Show
												when={move || is_editing.get()}
												fallback={{
													let edit_source = edit_source.clone();
													move || {
														let edit_source = edit_source.clone();
														view! {
															<button
																class="btn btn-secondary btn-sm"
																on:click={move |_| {
																	start_editing(&edit_source)
																}}
															>
																"Update"
															</button>
														}
													}
												}}
											>
												{
													let save_source = save_source.clone();
													view! {
														<button
															class="btn btn-sm"
															on:click={move |_| {
																save(save_source.clone())
															}}
														>
															"Save"
														</button>
														<button
															class="btn btn-secondary btn-sm"
															on:click={move |_| {
																editing_id.set(None)
															}}
														>
															"Cancel"
														</button>
													}
												}
											</Show>
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
	}
}
