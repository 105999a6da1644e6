use leptos::*;
use leptos_router::A;

use crate::prelude::*;

#[component]
fn StatCard(
	/// Counter label
	label: &'static str,
	/// Counter value
	value: u64,
) -> impl IntoView {
	view! {
		<div class="card">
			<div class="stat-value">{value}</div>
			<div class="stat-label">{label}</div>
		</div>
	}
}

/// The landing page: aggregate counters plus the most recent tickets.
#[component]
pub fn DashboardPage() -> impl IntoView {
	let auth = expect_auth_state();

	let stats = create_resource(
		move || auth.token(),
		|token| async move { get_dashboard_stats(token).await },
	);
	let machines = create_resource(
		move || auth.token(),
		|token| async move { list_machines(token).await },
	);

	view! {
		<PageTitle
			title="Dashboard"
			subtitle="What is happening in the workshop"
		/>

		{move || match stats.get() {
			None => view! { <Spinner/> }.into_view(),
			Some(Err(err)) => {
				view! { <Alert r#type={AlertType::Error}>{err.to_string()}</Alert> }.into_view()
			}
			Some(Ok(stats)) => view! {
				<div class="stats-grid">
					<StatCard label="Machines" value={stats.total_machines}/>
					<StatCard label="Clients" value={stats.total_clients}/>
					<StatCard label="Staff accounts" value={stats.total_users}/>
					<StatCard label="Pending" value={stats.pending}/>
					<StatCard label="In progress" value={stats.in_progress}/>
					<StatCard label="Completed" value={stats.completed}/>
					<StatCard label="Anomalies" value={stats.anomaly}/>
				</div>
			}
			.into_view(),
		}}

		<div class="card">
			<h2>"Recent machines"</h2>
			{move || match machines.get() {
				None => view! { <Spinner/> }.into_view(),
				Some(Err(err)) => {
					view! { <Alert r#type={AlertType::Error}>{err.to_string()}</Alert> }.into_view()
				}
				Some(Ok(machines)) if machines.is_empty() => {
					view! { <div class="empty-state">"No machines yet"</div> }.into_view()
				}
				Some(Ok(machines)) => view! {
					<table>
						<thead>
							<tr>
								<th>"Machine"</th>
								<th>"Client"</th>
								<th>"Appointment"</th>
								<th>"Status"</th>
							</tr>
						</thead>
						<tbody>
							{machines
								.into_iter()
								.take(5)
								.map(|machine| view! {
									<tr>
										<td>
											<A href={LoggedInRoute::machine_details(machine.id)}>
												{format!("{} {}", machine.brand, machine.model)}
											</A>
										</td>
										<td>{machine.client.full_name()}</td>
										<td>{machine.appointment.clone()}</td>
										<td><StatusBadge status={machine.status}/></td>
									</tr>
								})
								.collect_view()}
						</tbody>
					</table>
				}
				.into_view(),
			}}
		</div>
	}
}
