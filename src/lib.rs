//! Administrative dashboard for a computer-repair shop.
//!
//! The application is a client-side rendered single page app. It talks to
//! the shop's REST backend over JSON, keeps the signed-in session in
//! browser storage and gates every dashboard page on the staff member's
//! role.

/// Prelude module. Used to re-export commonly used items.
pub mod prelude {
	pub use leptos::*;
	pub use leptos_router::*;

	pub use crate::{api::*, components::*, models::*, utils::*};
}

/// The API module. One submodule per backend resource, one async fn per
/// endpoint.
pub mod api;
/// The application logic code. This contains the router and the page shell.
pub mod app;
/// Reusable view components: the access gate, sidebar, toasts and the other
/// small building blocks the pages share.
pub mod components;
/// Wire types for the backend's JSON payloads.
pub mod models;
/// The pages module. Pages are the main views that are rendered when a
/// route is matched.
pub mod pages;
/// Session state, permissions, typed routes and the HTTP client.
pub mod utils;
