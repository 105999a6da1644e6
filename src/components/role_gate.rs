use leptos::*;

use crate::{models::Role, prelude::*, utils::has_role};

/// Inline conditional rendering keyed on the session role. Hides
/// affordances (nav entries, buttons) that the page-level gate would block
/// anyway; purely cosmetic, the policy itself lives in the permission
/// table.
#[component]
pub fn RoleGate(
	/// Roles allowed to see the children
	allowed_roles: &'static [Role],
	/// Rendered when the session role is not allowed
	#[prop(optional, into)]
	fallback: ViewFn,
	children: ChildrenFn,
) -> impl IntoView {
	let auth = expect_auth_state();

	view! {
		<Show
			when={move || auth.with(|state| has_role(state, allowed_roles))}
			fallback={fallback}
		>
			{children()}
		</Show>
	}
}
