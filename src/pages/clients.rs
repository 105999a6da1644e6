use leptos::{ev::SubmitEvent, *};

use crate::prelude::*;

/// The client register: keyword search plus create, edit and delete, all
/// through modal forms.
#[component]
pub fn ClientsPage() -> impl IntoView {
	let auth = expect_auth_state();
	let toaster = expect_toaster();

	let keyword = create_rw_signal(String::new());
	let version = create_rw_signal(0u32);
	let delete_target = create_rw_signal(None::<(i64, String)>);

	// None while the form is closed, Some(None) for a new client,
	// Some(Some(id)) while editing.
	let form_target = create_rw_signal(None::<Option<i64>>);
	let last_name = create_rw_signal(String::new());
	let first_name = create_rw_signal(String::new());
	let address = create_rw_signal(String::new());
	let phone = create_rw_signal(String::new());
	let email = create_rw_signal(String::new());
	let notes = create_rw_signal(String::new());
	let form_error = create_rw_signal(String::new());

	let clients = create_resource(
		move || (auth.token(), keyword.get(), version.get()),
		|(token, keyword, _)| async move {
			let keyword = keyword.trim().to_owned();
			if keyword.is_empty() {
				list_clients(token).await
			} else {
				search_clients(token, &keyword).await
			}
		},
	);

	let open_create = move |_| {
		last_name.set(String::new());
		first_name.set(String::new());
		address.set(String::new());
		phone.set(String::new());
		email.set(String::new());
		notes.set(String::new());
		form_error.set(String::new());
		form_target.set(Some(None));
	};

	let open_edit = move |client: &Client| {
		last_name.set(client.last_name.clone());
		first_name.set(client.first_name.clone());
		address.set(client.address.clone());
		phone.set(client.phone.clone());
		email.set(client.email.clone().unwrap_or_default());
		notes.set(client.notes.clone().unwrap_or_default());
		form_error.set(String::new());
		form_target.set(Some(Some(client.id)));
	};

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		form_error.set(String::new());

		if last_name.get_untracked().trim().is_empty()
			|| first_name.get_untracked().trim().is_empty()
			|| address.get_untracked().trim().is_empty()
			|| phone.get_untracked().trim().is_empty()
		{
			form_error.set("Name, address and phone number are required".to_owned());
			return;
		}

		let request = ClientRequest {
			last_name: last_name.get_untracked(),
			first_name: first_name.get_untracked(),
			address: address.get_untracked(),
			phone: phone.get_untracked(),
			email: email.get_untracked().some_if_not_empty(),
			notes: notes.get_untracked().some_if_not_empty(),
		};

		let token = auth.token();
		let target = form_target.get_untracked().flatten();
		spawn_local(async move {
			let result = match target {
				Some(id) => update_client(token, id, &request).await.map(drop),
				None => create_client(token, &request).await.map(drop),
			};
			match result {
				Ok(()) => {
					toaster.success(if target.is_some() {
						"Client updated"
					} else {
						"Client added"
					});
					form_target.set(None);
					version.update(|version| *version += 1);
				}
				Err(err) => {
					log::error!("failed to save client: {err}");
					form_error.set(err.to_string());
				}
			}
		});
	};

	let on_delete = move |id: i64| {
		let token = auth.token();
		delete_target.set(None);
		spawn_local(async move {
			match delete_client(token, id).await {
				Ok(()) => {
					toaster.success("Client deleted");
					version.update(|version| *version += 1);
				}
				Err(err) => {
					log::error!("failed to delete client {id}: {err}");
					toaster.error(err.to_string());
				}
			}
		});
	};

	view! {
		<PageTitle title="Clients" subtitle="Everyone who has brought a machine in">
			<button class="btn" on:click={open_create}>"New client"</button>
		</PageTitle>

		<div class="toolbar">
			<input
				type="search"
				style="max-width: 18rem;"
				placeholder="Search name or phone"
				prop:value={move || keyword.get()}
				on:input={move |ev| keyword.set(event_target_value(&ev))}
			/>
		</div>

		{move || match clients.get() {
			None => view! { <Spinner/> }.into_view(),
			Some(Err(err)) => {
				view! { <Alert r#type={AlertType::Error}>{err.to_string()}</Alert> }.into_view()
			}
			Some(Ok(clients)) if clients.is_empty() => {
				view! { <div class="empty-state">"No clients match"</div> }.into_view()
			}
			Some(Ok(clients)) => view! {
				<table>
					<thead>
						<tr>
							<th>"Name"</th>
							<th>"Phone"</th>
							<th>"Email"</th>
							<th>"Address"</th>
							<th></th>
						</tr>
					</thead>
					<tbody>
						{clients
							.into_iter()
							.map(|client| {
								let id = client.id;
								let name = client.full_name();
								let delete_label = name.clone();
								let edit_source = client.clone();
								view! {
									<tr>
										<td>{name}</td>
										<td>{client.phone.clone()}</td>
										<td>{client.email.clone().unwrap_or_default()}</td>
										<td>{client.address.clone()}</td>
										<td>
											<button
												class="btn btn-secondary btn-sm"
												on:click={move |_| open_edit(&edit_source)}
											>
												"Edit"
											</button>
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
			form_target.get().map(|target| {
				view! {
					<Modal
						title={if target.is_some() { "Edit client" } else { "New client" }}
						on_close={move |_: ()| form_target.set(None)}
					>
						<form on:submit={on_submit}>
							<div class="form-grid">
								<div>
									<label for="client-first-name">"First name *"</label>
									<input
										id="client-first-name"
										prop:value={move || first_name.get()}
										on:input={move |ev| first_name.set(event_target_value(&ev))}
									/>
								</div>
								<div>
									<label for="client-last-name">"Last name *"</label>
									<input
										id="client-last-name"
										prop:value={move || last_name.get()}
										on:input={move |ev| last_name.set(event_target_value(&ev))}
									/>
								</div>
							</div>

							<label for="client-address">"Address *"</label>
							<input
								id="client-address"
								prop:value={move || address.get()}
								on:input={move |ev| address.set(event_target_value(&ev))}
							/>

							<label for="client-phone">"Phone *"</label>
							<input
								id="client-phone"
								prop:value={move || phone.get()}
								on:input={move |ev| phone.set(event_target_value(&ev))}
							/>

							<label for="client-email">"Email"</label>
							<input
								id="client-email"
								type="email"
								prop:value={move || email.get()}
								on:input={move |ev| email.set(event_target_value(&ev))}
							/>

							<label for="client-notes">"Notes"</label>
							<textarea
								id="client-notes"
								rows="2"
								prop:value={move || notes.get()}
								on:input={move |ev| notes.set(event_target_value(&ev))}
							></textarea>

							<Show when={move || !form_error.get().is_empty()}>
								<Alert r#type={AlertType::Error}>{move || form_error.get()}</Alert>
							</Show>

							<div class="modal-actions">
								<button class="btn">"Save"</button>
							</div>
						</form>
					</Modal>
				}
			})
		}}

		{move || {
			delete_target.get().map(|(id, name)| {
				view! {
					<ConfirmModal
						title="Delete client"
						message={format!("Delete {name}? Their repair history goes with them.")}
						on_confirm={move |_: ()| on_delete(id)}
						on_cancel={move |_: ()| delete_target.set(None)}
					/>
				}
			})
		}}
	}
}
