use leptos::{ev::SubmitEvent, *};
use strum::IntoEnumIterator;

use crate::prelude::*;

/// Staff account management, admin only: list with a role filter, plus
/// create, edit and delete through modal forms. Passwords are only sent
/// when the field is filled in.
#[component]
pub fn UsersPage() -> impl IntoView {
	let auth = expect_auth_state();
	let toaster = expect_toaster();

	let role_filter = create_rw_signal(None::<Role>);
	let version = create_rw_signal(0u32);
	let delete_target = create_rw_signal(None::<(i64, String)>);

	// None while the form is closed, Some(None) for a new account,
	// Some(Some(id)) while editing.
	let form_target = create_rw_signal(None::<Option<i64>>);
	let last_name = create_rw_signal(String::new());
	let first_name = create_rw_signal(String::new());
	let address = create_rw_signal(String::new());
	let phone = create_rw_signal(String::new());
	let email = create_rw_signal(String::new());
	let password = create_rw_signal(String::new());
	let role = create_rw_signal(Role::Secretary);
	let form_error = create_rw_signal(String::new());

	let users = create_resource(
		move || (auth.token(), role_filter.get(), version.get()),
		|(token, role, _)| async move {
			match role {
				Some(role) => list_users_by_role(token, role).await,
				None => list_users(token).await,
			}
		},
	);

	let open_create = move |_| {
		last_name.set(String::new());
		first_name.set(String::new());
		address.set(String::new());
		phone.set(String::new());
		email.set(String::new());
		password.set(String::new());
		role.set(Role::Secretary);
		form_error.set(String::new());
		form_target.set(Some(None));
	};

	let open_edit = move |user: &User| {
		last_name.set(user.last_name.clone());
		first_name.set(user.first_name.clone());
		address.set(user.address.clone().unwrap_or_default());
		phone.set(user.phone.clone().unwrap_or_default());
		email.set(user.email.clone());
		password.set(String::new());
		role.set(user.role);
		form_error.set(String::new());
		form_target.set(Some(Some(user.id)));
	};

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		form_error.set(String::new());

		let target = form_target.get_untracked().flatten();
		if last_name.get_untracked().trim().is_empty()
			|| first_name.get_untracked().trim().is_empty()
			|| email.get_untracked().trim().is_empty()
		{
			form_error.set("Name and email are required".to_owned());
			return;
		}
		// A fresh account cannot exist without a password; on edit an empty
		// field means "keep the current one".
		if target.is_none() && password.get_untracked().is_empty() {
			form_error.set("A password is required for a new account".to_owned());
			return;
		}

		let request = UserRequest {
			last_name: last_name.get_untracked(),
			first_name: first_name.get_untracked(),
			address: address.get_untracked(),
			phone: phone.get_untracked(),
			email: email.get_untracked(),
			password: password.get_untracked().some_if_not_empty(),
			role: role.get_untracked(),
		};

		let token = auth.token();
		spawn_local(async move {
			let result = match target {
				Some(id) => update_user(token, id, &request).await.map(drop),
				None => create_user(token, &request).await.map(drop),
			};
			match result {
				Ok(()) => {
					toaster.success(if target.is_some() {
						"Account updated"
					} else {
						"Account created"
					});
					form_target.set(None);
					version.update(|version| *version += 1);
				}
				Err(err) => {
					log::error!("failed to save account: {err}");
					form_error.set(err.to_string());
				}
			}
		});
	};

	let on_delete = move |id: i64| {
		let token = auth.token();
		delete_target.set(None);
		spawn_local(async move {
			match delete_user(token, id).await {
				Ok(()) => {
					toaster.success("Account deleted");
					version.update(|version| *version += 1);
				}
				Err(err) => {
					log::error!("failed to delete account {id}: {err}");
					toaster.error(err.to_string());
				}
			}
		});
	};

	view! {
		<PageTitle title="Staff" subtitle="Accounts that can sign in here">
			<button class="btn" on:click={open_create}>"New account"</button>
		</PageTitle>

		<div class="toolbar">
			<select
				style="max-width: 12rem;"
				on:change={move |ev| {
					let value = event_target_value(&ev);
					role_filter.set(Role::iter().find(|role| role.as_wire() == value));
				}}
			>
				<option value="">"All roles"</option>
				{Role::iter()
					.map(|role| view! {
						<option value={role.as_wire()}>{role.to_string()}</option>
					})
					.collect_view()}
			</select>
		</div>

		{move || match users.get() {
			None => view! { <Spinner/> }.into_view(),
			Some(Err(err)) => {
				view! { <Alert r#type={AlertType::Error}>{err.to_string()}</Alert> }.into_view()
			}
			Some(Ok(users)) if users.is_empty() => {
				view! { <div class="empty-state">"No accounts match"</div> }.into_view()
			}
			Some(Ok(users)) => view! {
				<table>
					<thead>
						<tr>
							<th>"Name"</th>
							<th>"Email"</th>
							<th>"Phone"</th>
							<th>"Role"</th>
							<th></th>
						</tr>
					</thead>
					<tbody>
						{users
							.into_iter()
							.map(|user| {
								let id = user.id;
								let name = user.full_name();
								let delete_label = name.clone();
								let edit_source = user.clone();
								view! {
									<tr>
										<td>{name}</td>
										<td>{user.email.clone()}</td>
										<td>{user.phone.clone().unwrap_or_default()}</td>
										<td>
											<span class="badge badge-role">
												{user.role.to_string()}
											</span>
										</td>
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
						title={if target.is_some() { "Edit account" } else { "New account" }}
						on_close={move |_: ()| form_target.set(None)}
					>
						<form on:submit={on_submit}>
							<div class="form-grid">
								<div>
									<label for="user-first-name">"First name *"</label>
									<input
										id="user-first-name"
										prop:value={move || first_name.get()}
										on:input={move |ev| first_name.set(event_target_value(&ev))}
									/>
								</div>
								<div>
									<label for="user-last-name">"Last name *"</label>
									<input
										id="user-last-name"
										prop:value={move || last_name.get()}
										on:input={move |ev| last_name.set(event_target_value(&ev))}
									/>
								</div>
							</div>

							<label for="user-email">"Email *"</label>
							<input
								id="user-email"
								type="email"
								prop:value={move || email.get()}
								on:input={move |ev| email.set(event_target_value(&ev))}
							/>

							<label for="user-password">
								{if target.is_some() {
									"Password (leave empty to keep)"
								} else {
									"Password *"
								}}
							</label>
							<input
								id="user-password"
								type="password"
								prop:value={move || password.get()}
								on:input={move |ev| password.set(event_target_value(&ev))}
							/>

							<label for="user-address">"Address"</label>
							<input
								id="user-address"
								prop:value={move || address.get()}
								on:input={move |ev| address.set(event_target_value(&ev))}
							/>

							<label for="user-phone">"Phone"</label>
							<input
								id="user-phone"
								prop:value={move || phone.get()}
								on:input={move |ev| phone.set(event_target_value(&ev))}
							/>

							<label for="user-role">"Role"</label>
							<select
								id="user-role"
								on:change={move |ev| {
									let value = event_target_value(&ev);
									if let Some(picked) =
										Role::iter().find(|role| role.as_wire() == value)
									{
										role.set(picked);
									}
								}}
							>
								{Role::iter()
									.map(|option| view! {
										<option
											value={option.as_wire()}
											selected={move || option == role.get()}
										>
											{option.to_string()}
										</option>
									})
									.collect_view()}
							</select>

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
						title="Delete account"
						message={format!("Delete the account of {name}?")}
						on_confirm={move |_: ()| on_delete(id)}
						on_cancel={move |_: ()| delete_target.set(None)}
					/>
				}
			})
		}}
	}
}
