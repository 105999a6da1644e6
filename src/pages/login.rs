use leptos::{ev::SubmitEvent, *};
use leptos_router::use_navigate;

use crate::prelude::*;

/// The login form. On success the session is populated and the app moves
/// to the dashboard; on failure the backend's message is shown inline and
/// no session is established.
#[component]
pub fn LoginPage() -> impl IntoView {
	let auth = expect_auth_state();
	let navigate = use_navigate();

	let email = create_rw_signal(String::new());
	let password = create_rw_signal(String::new());
	let error = create_rw_signal(String::new());
	let loading = create_rw_signal(false);

	// An existing session skips the form entirely.
	{
		let navigate = navigate.clone();
		create_effect(move |_| {
			if auth.is_logged_in() {
				navigate(&LoggedInRoute::Home.to_string(), Default::default());
			}
		});
	}

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		error.set(String::new());

		if email.get_untracked().trim().is_empty() {
			error.set("Please provide an email".to_owned());
			return;
		}
		if password.get_untracked().is_empty() {
			error.set("Please provide a password".to_owned());
			return;
		}

		loading.set(true);
		let navigate = navigate.clone();
		spawn_local(async move {
			let request = LoginRequest {
				email: email.get_untracked(),
				password: password.get_untracked(),
			};

			match login(&request).await {
				Ok(response) => match response.into_session() {
					Some((token, user)) => {
						auth.log_in(token, user);
						navigate(&LoggedInRoute::Home.to_string(), Default::default());
					}
					None => {
						error.set("The server response carried no token".to_owned());
					}
				},
				Err(err) => {
					log::error!("login failed: {err}");
					error.set(err.to_string());
				}
			}
			loading.set(false);
		});
	};

	view! {
		<div class="login-screen">
			<div class="login-card">
				<h1>"RepairDesk"</h1>
				<p class="stat-label">"Sign in to manage the workshop"</p>

				<form on:submit={on_submit}>
					<label for="email">"Email"</label>
					<input
						id="email"
						type="email"
						placeholder="you@repair.shop"
						prop:value={move || email.get()}
						on:input={move |ev| email.set(event_target_value(&ev))}
						disabled={move || loading.get()}
					/>

					<label for="password">"Password"</label>
					<input
						id="password"
						type="password"
						placeholder="••••••••"
						prop:value={move || password.get()}
						on:input={move |ev| password.set(event_target_value(&ev))}
						disabled={move || loading.get()}
					/>

					<Show when={move || !error.get().is_empty()}>
						<Alert r#type={AlertType::Error}>{move || error.get()}</Alert>
					</Show>

					<button class="btn" style="width: 100%; margin-top: 1rem;" disabled={move || loading.get()}>
						{move || if loading.get() { "Signing in..." } else { "Sign in" }}
					</button>
				</form>
			</div>
		</div>
	}
}
