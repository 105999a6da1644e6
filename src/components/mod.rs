mod access_gate;
mod alert;
mod modal;
mod page_title;
mod role_gate;
mod sidebar;
mod spinner;
mod status_badge;
mod toast;

pub use self::{
	access_gate::*, alert::*, modal::*, page_title::*, role_gate::*, sidebar::*, spinner::*,
	status_badge::*, toast::*,
};
