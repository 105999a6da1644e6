use std::fmt::Display;

use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::models::{Client, User};

/// Where a repair ticket currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, Default)]
pub enum MachineStatus {
	/// Waiting for a technician to pick it up
	#[serde(rename = "EN_ATTENTE")]
	#[default]
	Pending,
	/// On the bench
	#[serde(rename = "EN_COURS")]
	InProgress,
	/// Repair finished
	#[serde(rename = "TERMINE")]
	Completed,
	/// Something unexpected was found; needs a decision
	#[serde(rename = "ANOMALIE")]
	Anomaly,
}

impl MachineStatus {
	/// The value the backend uses in path segments
	pub fn as_wire(&self) -> &'static str {
		match self {
			Self::Pending => "EN_ATTENTE",
			Self::InProgress => "EN_COURS",
			Self::Completed => "TERMINE",
			Self::Anomaly => "ANOMALIE",
		}
	}
}

impl Display for MachineStatus {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{}",
			match self {
				Self::Pending => "Pending",
				Self::InProgress => "In progress",
				Self::Completed => "Completed",
				Self::Anomaly => "Anomaly",
			}
		)
	}
}

/// A machine brought in for repair, with its embedded client and staff
/// records, as the backend returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Machine {
	pub id: i64,
	#[serde(rename = "marque")]
	pub brand: String,
	#[serde(rename = "modele")]
	pub model: String,
	#[serde(rename = "numeroSerie", default)]
	pub serial_number: Option<String>,
	/// The fault the client reported at intake
	#[serde(rename = "defaut")]
	pub reported_issue: String,
	#[serde(rename = "photoUrl", default)]
	pub photo_url: Option<String>,
	/// Pickup appointment, ISO date
	#[serde(rename = "rendezVous")]
	pub appointment: String,
	#[serde(rename = "statut")]
	pub status: MachineStatus,
	#[serde(rename = "montant", default)]
	pub amount: Option<f64>,
	#[serde(rename = "paye", default)]
	pub paid: bool,
	#[serde(rename = "remarqueTechnicien", default)]
	pub technician_notes: Option<String>,
	pub client: Client,
	#[serde(rename = "secretaire")]
	pub secretary: User,
	#[serde(rename = "technicien", default)]
	pub technician: Option<User>,
	#[serde(rename = "createdAt", default)]
	pub created_at: Option<String>,
	#[serde(rename = "updatedAt", default)]
	pub updated_at: Option<String>,
}

/// Payload for creating or updating a repair ticket. Related records go by
/// id.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MachineRequest {
	#[serde(rename = "marque")]
	pub brand: String,
	#[serde(rename = "modele")]
	pub model: String,
	#[serde(rename = "numeroSerie", skip_serializing_if = "Option::is_none")]
	pub serial_number: Option<String>,
	#[serde(rename = "defaut")]
	pub reported_issue: String,
	#[serde(rename = "photoUrl", skip_serializing_if = "Option::is_none")]
	pub photo_url: Option<String>,
	#[serde(rename = "rendezVous")]
	pub appointment: String,
	#[serde(rename = "montant", skip_serializing_if = "Option::is_none")]
	pub amount: Option<f64>,
	#[serde(rename = "paye", skip_serializing_if = "Option::is_none")]
	pub paid: Option<bool>,
	#[serde(rename = "remarqueTechnicien", skip_serializing_if = "Option::is_none")]
	pub technician_notes: Option<String>,
	#[serde(rename = "clientId")]
	pub client_id: i64,
	#[serde(rename = "secretaireId")]
	pub secretary_id: i64,
	#[serde(rename = "technicienId", skip_serializing_if = "Option::is_none")]
	pub technician_id: Option<i64>,
	#[serde(rename = "statut", skip_serializing_if = "Option::is_none")]
	pub status: Option<MachineStatus>,
}

impl MachineRequest {
	/// Start an update payload from an existing ticket; the caller then
	/// overrides the fields being edited.
	pub fn from_machine(machine: &Machine) -> Self {
		Self {
			brand: machine.brand.clone(),
			model: machine.model.clone(),
			serial_number: machine.serial_number.clone(),
			reported_issue: machine.reported_issue.clone(),
			photo_url: machine.photo_url.clone(),
			appointment: machine.appointment.clone(),
			amount: machine.amount,
			paid: Some(machine.paid),
			technician_notes: machine.technician_notes.clone(),
			client_id: machine.client.id,
			secretary_id: machine.secretary.id,
			technician_id: machine.technician.as_ref().map(|user| user.id),
			status: Some(machine.status),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn status_round_trips_through_wire_values() {
		for (status, wire) in [
			(MachineStatus::Pending, "\"EN_ATTENTE\""),
			(MachineStatus::InProgress, "\"EN_COURS\""),
			(MachineStatus::Completed, "\"TERMINE\""),
			(MachineStatus::Anomaly, "\"ANOMALIE\""),
		] {
			assert_eq!(serde_json::to_string(&status).unwrap(), wire);
			assert_eq!(serde_json::from_str::<MachineStatus>(wire).unwrap(), status);
		}
	}

	#[test]
	fn machine_deserializes_from_backend_shape() {
		let machine: Machine = serde_json::from_str(
			r#"{
				"id": 12,
				"marque": "Lenovo",
				"modele": "ThinkPad T14",
				"numeroSerie": "SN-998",
				"defaut": "Does not boot",
				"rendezVous": "2026-09-01",
				"statut": "EN_COURS",
				"montant": 80.0,
				"paye": false,
				"client": {
					"id": 4, "nom": "Haddad", "prenom": "Lina",
					"adresse": "3 rue Neuve", "numero": "0708091011"
				},
				"secretaire": {
					"id": 2, "nom": "Benali", "prenom": "Karim",
					"email": "karim@repair.shop", "role": "SECRETAIRE", "active": true
				},
				"technicien": null,
				"createdAt": "2026-08-20T09:30:00"
			}"#,
		)
		.unwrap();

		assert_eq!(machine.status, MachineStatus::InProgress);
		assert_eq!(machine.client.full_name(), "Lina Haddad");
		assert!(machine.technician.is_none());

		let request = MachineRequest::from_machine(&machine);
		assert_eq!(request.client_id, 4);
		assert_eq!(request.secretary_id, 2);
		assert_eq!(request.status, Some(MachineStatus::InProgress));

		let value = serde_json::to_value(&request).unwrap();
		assert_eq!(value["marque"], "Lenovo");
		assert_eq!(value["clientId"], 4);
		assert_eq!(value["statut"], "EN_COURS");
		assert!(value.get("technicienId").is_none());
	}
}
