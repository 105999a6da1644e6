use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{Outlet, Route, Router, Routes};

use crate::{pages::*, prelude::*};

/// Shell around every dashboard page: the access gate wraps the sidebar
/// and the routed content, so one mounted gate covers the whole subtree
/// across navigations.
#[component]
fn DashboardShell() -> impl IntoView {
	view! {
		<AccessGate>
			<div class="dashboard-shell">
				<Sidebar/>
				<main class="dashboard-content">
					<Outlet/>
				</main>
			</div>
		</AccessGate>
	}
}

/// The main application component: provides the session and toast
/// services, then mounts the router.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();
	AuthStateContext::provide();
	Toaster::provide();

	view! {
		<Title text="RepairDesk"/>
		<ToastHost/>
		<Router>
			<Routes>
				<Route path="/" view={LoginPage}/>
				<Route path="/dashboard" view={DashboardShell}>
					<Route path="" view={DashboardPage}/>
					<Route path="machines" view={MachinesPage}/>
					<Route path="machines/new" view={NewMachinePage}/>
					<Route path="machines/:id" view={MachineDetailPage}/>
					<Route path="clients" view={ClientsPage}/>
					<Route path="users" view={UsersPage}/>
					<Route path="repairs" view={RepairsPage}/>
				</Route>
			</Routes>
		</Router>
	}
}
