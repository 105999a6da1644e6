use leptos::*;
use leptos_router::use_params_map;
use strum::IntoEnumIterator;

use crate::prelude::*;

/// Detail view for one repair ticket, with inline editing of the fields
/// that change while a machine is on the bench: status, amount, payment
/// and the technician's notes.
#[component]
pub fn MachineDetailPage() -> impl IntoView {
	let auth = expect_auth_state();
	let toaster = expect_toaster();
	let params = use_params_map();

	let id = create_memo(move |_| {
		params.with(|params| params.get("id").and_then(|raw| raw.parse::<i64>().ok()))
	});
	let version = create_rw_signal(0u32);

	let machine = create_resource(
		move || (auth.token(), id.get(), version.get()),
		|(token, id, _)| async move {
			match id {
				Some(id) => get_machine(token, id).await.map(Some),
				None => Ok(None),
			}
		},
	);

	let editing = create_rw_signal(false);
	let edit_status = create_rw_signal(MachineStatus::Pending);
	let edit_amount = create_rw_signal(String::new());
	let edit_paid = create_rw_signal(false);
	let edit_notes = create_rw_signal(String::new());

	let start_editing = move |current: &Machine| {
		edit_status.set(current.status);
		edit_amount.set(
			current
				.amount
				.map(|amount| amount.to_string())
				.unwrap_or_default(),
		);
		edit_paid.set(current.paid);
		edit_notes.set(current.technician_notes.clone().unwrap_or_default());
		editing.set(true);
	};

	let save = move |current: Machine| {
		let mut request = MachineRequest::from_machine(&current);
		request.status = Some(edit_status.get_untracked());
		request.amount = edit_amount.get_untracked().trim().parse::<f64>().ok();
		request.paid = Some(edit_paid.get_untracked());
		request.technician_notes = edit_notes.get_untracked().some_if_not_empty();

		let token = auth.token();
		spawn_local(async move {
			match update_machine(token, current.id, &request).await {
				Ok(_) => {
					toaster.success("Machine updated");
					editing.set(false);
					version.update(|version| *version += 1);
				}
				Err(err) => {
					log::error!("failed to update machine {}: {err}", current.id);
					toaster.error(err.to_string());
				}
			}
		});
	};

	view! {
		{move || match machine.get() {
			None => view! { <Spinner/> }.into_view(),
			Some(Err(err)) => {
				view! { <Alert r#type={AlertType::Error}>{err.to_string()}</Alert> }.into_view()
			}
			Some(Ok(None)) => {
				view! { <div class="empty-state">"No such machine"</div> }.into_view()
			}
			Some(Ok(Some(current))) => {
				let title = format!("{} {}", current.brand, current.model);
				let edit_source = current.clone();
				let save_source = current.clone();
				view! {
					<PageTitle title={title} subtitle={format!("Ticket #{}", current.id)}>
						<Show when={move || !editing.get()}>
							{
								let edit_source = edit_source.clone();
								view! {
									<button
										class="btn"
										on:click={move |_| start_editing(&edit_source)}
									>
										"Edit"
									</button>
								}
							}
						</Show>
					</PageTitle>

					<div class="card">
						<dl class="detail-grid">
							<div>
								<dt>"Serial number"</dt>
								<dd>{current.serial_number.clone().unwrap_or_else(|| "—".into())}</dd>
								<dt>"Reported fault"</dt>
								<dd>{current.reported_issue.clone()}</dd>
								<dt>"Pickup appointment"</dt>
								<dd>{current.appointment.clone()}</dd>
							</div>
							<div>
								<dt>"Client"</dt>
								<dd>{current.client.full_name()}</dd>
								<dt>"Received by"</dt>
								<dd>{current.secretary.full_name()}</dd>
								<dt>"Technician"</dt>
								<dd>
									{current
										.technician
										.as_ref()
										.map(|user| user.full_name())
										.unwrap_or_else(|| "Unassigned".into())}
								</dd>
							</div>
							<div>
								<dt>"Status"</dt>
								<dd><StatusBadge status={current.status}/></dd>
								<dt>"Amount"</dt>
								<dd>
									{current
										.amount
										.map(|amount| format!("{amount:.2} €"))
										.unwrap_or_else(|| "—".into())}
								</dd>
								<dt>"Paid"</dt>
								<dd>{if current.paid { "Yes" } else { "No" }}</dd>
								<dt>"Technician notes"</dt>
								<dd>{current.technician_notes.clone().unwrap_or_else(|| "—".into())}</dd>
							</div>
						</dl>
					</div>

					<Show when={move || editing.get()}>
						{
							let save_source = save_source.clone();
							view! {
								<div class="card" style="margin-top: 1rem; max-width: 32rem;">
									<h2>"Update repair"</h2>

									<label for="edit-status">"Status"</label>
									<select
										id="edit-status"
										on:change={move |ev| {
											let value = event_target_value(&ev);
											if let Some(picked) = MachineStatus::iter()
												.find(|status| status.as_wire() == value)
											{
												edit_status.set(picked);
											}
										}}
									>
										{MachineStatus::iter()
											.map(|option| view! {
												<option
													value={option.as_wire()}
													selected={move || option == edit_status.get()}
												>
													{option.to_string()}
												</option>
											})
											.collect_view()}
									</select>

									<label for="edit-amount">"Amount (€)"</label>
									<input
										id="edit-amount"
										type="number"
										step="0.01"
										prop:value={move || edit_amount.get()}
										on:input={move |ev| edit_amount.set(event_target_value(&ev))}
									/>

									<label for="edit-paid">
										<input
											id="edit-paid"
											type="checkbox"
											style="width: auto; margin-right: 0.5rem;"
											prop:checked={move || edit_paid.get()}
											on:change={move |ev| edit_paid.set(event_target_checked(&ev))}
										/>
										"Paid"
									</label>

									<label for="edit-notes">"Technician notes"</label>
									<textarea
										id="edit-notes"
										rows="3"
										prop:value={move || edit_notes.get()}
										on:input={move |ev| edit_notes.set(event_target_value(&ev))}
									></textarea>

									<div class="modal-actions">
										<button
											class="btn btn-secondary"
											on:click={move |_| editing.set(false)}
										>
											"Cancel"
										</button>
										<button
											class="btn"
											on:click={move |_| save(save_source.clone())}
										>
											"Save"
										</button>
									</div>
								</div>
							}
						}
					</Show>
				}
				.into_view()
			}
		}}
	}
}
