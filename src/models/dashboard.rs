use serde::{Deserialize, Serialize};

/// Aggregate counters for the landing dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
	#[serde(rename = "totalMachines")]
	pub total_machines: u64,
	#[serde(rename = "totalClients")]
	pub total_clients: u64,
	#[serde(rename = "totalUsers")]
	pub total_users: u64,
	#[serde(rename = "enCours")]
	pub in_progress: u64,
	#[serde(rename = "termine")]
	pub completed: u64,
	#[serde(rename = "anomalie")]
	pub anomaly: u64,
	#[serde(rename = "enAttente")]
	pub pending: u64,
}
