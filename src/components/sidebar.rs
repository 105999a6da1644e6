use leptos::*;
use leptos_router::{use_location, use_navigate, A};

use crate::{models::Role, prelude::*, utils::ALL_STAFF};

struct NavEntry {
	title: &'static str,
	route: LoggedInRoute,
	allowed: &'static [Role],
}

/// Entries mirror the permission table: an entry is hidden from roles the
/// page-level gate would redirect anyway.
const NAV_ENTRIES: &[NavEntry] = &[
	NavEntry {
		title: "Dashboard",
		route: LoggedInRoute::Home,
		allowed: ALL_STAFF,
	},
	NavEntry {
		title: "Machines",
		route: LoggedInRoute::Machines,
		allowed: ALL_STAFF,
	},
	NavEntry {
		title: "Clients",
		route: LoggedInRoute::Clients,
		allowed: &[Role::Admin, Role::Secretary],
	},
	NavEntry {
		title: "Users",
		route: LoggedInRoute::Users,
		allowed: &[Role::Admin],
	},
	NavEntry {
		title: "Repairs",
		route: LoggedInRoute::Repairs,
		allowed: &[Role::Admin, Role::Technician],
	},
];

/// The dashboard navigation rail: brand header, role-filtered nav entries,
/// the signed-in profile card and the logout button.
#[component]
pub fn Sidebar() -> impl IntoView {
	let auth = expect_auth_state();
	let pathname = use_location().pathname;
	let navigate = use_navigate();

	let on_logout = move |_| {
		auth.log_out();
		navigate(&LoggedOutRoute::Login.to_string(), Default::default());
	};

	view! {
		<aside class="sidebar">
			<div class="sidebar-header">
				<h2>"RepairDesk"</h2>
				<p class="stat-label">"Repair shop administration"</p>
			</div>

			<nav>
				<ul>
					{NAV_ENTRIES
						.iter()
						.map(|entry| {
							let path = entry.route.to_string();
							let active_path = path.clone();
							view! {
								<RoleGate allowed_roles={entry.allowed}>
									<li class={
										let active_path = active_path.clone();
										move || {
											if pathname.get() == active_path {
												"nav-item active"
											} else {
												"nav-item"
											}
										}
									}>
										<A href={path.clone()}>{entry.title}</A>
									</li>
								</RoleGate>
							}
						})
						.collect_view()}
				</ul>
			</nav>

			<div class="sidebar-footer">
				{move || {
					auth.user()
						.map(|user| {
							view! {
								<div class="user-card">
									<div class="avatar">{user.initials()}</div>
									<div>
										<div>{user.full_name()}</div>
										<div class="stat-label">{user.role.to_string()}</div>
									</div>
								</div>
							}
						})
				}}
				<button class="btn btn-secondary" on:click={on_logout}>
					"Log out"
				</button>
			</div>
		</aside>
	}
}
