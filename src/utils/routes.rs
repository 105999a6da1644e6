use std::fmt::Display;

use strum::EnumIter;

/// The routes that can be reached without a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, Default)]
pub enum LoggedOutRoute {
	/// The login page, which is also the application entry point
	#[default]
	Login,
}

/// The routes that can be reached with a session, subject to the page
/// policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, Default)]
pub enum LoggedInRoute {
	/// The landing dashboard with the aggregate counters
	#[default]
	Home,
	/// The repair-ticket list
	Machines,
	/// The intake form for a new repair ticket
	NewMachine,
	/// The client register
	Clients,
	/// Staff account management
	Users,
	/// The technician worklist
	Repairs,
}

impl LoggedInRoute {
	/// Path of the detail page for one repair ticket
	pub fn machine_details(id: i64) -> String {
		format!("/dashboard/machines/{id}")
	}
}

impl Display for LoggedOutRoute {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{}",
			match self {
				Self::Login => "/",
			}
		)
	}
}

impl Display for LoggedInRoute {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{}",
			match self {
				Self::Home => "/dashboard",
				Self::Machines => "/dashboard/machines",
				Self::NewMachine => "/dashboard/machines/new",
				Self::Clients => "/dashboard/clients",
				Self::Users => "/dashboard/users",
				Self::Repairs => "/dashboard/repairs",
			}
		)
	}
}

#[cfg(test)]
mod tests {
	use strum::IntoEnumIterator;

	use super::*;
	use crate::utils::{normalize_path, PAGE_PERMISSIONS};

	#[test]
	fn every_logged_in_route_has_a_policy_entry() {
		for route in LoggedInRoute::iter() {
			let path = route.to_string();
			assert!(
				PAGE_PERMISSIONS
					.iter()
					.any(|(pattern, _)| *pattern == path),
				"missing policy entry for {path}"
			);
		}
	}

	#[test]
	fn detail_paths_normalize_to_a_policy_entry() {
		let path = LoggedInRoute::machine_details(42);
		let pattern = normalize_path(&path);
		assert!(PAGE_PERMISSIONS.iter().any(|(p, _)| *p == pattern));
	}
}
