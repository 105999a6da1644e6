use leptos::*;
use leptos_router::{use_location, use_navigate};

use crate::{
	prelude::*,
	utils::{gate_outcome, GateOutcome},
};

/// Wraps the dashboard subtree and enforces the page policy. The decision
/// re-runs on every path change, since the same mounted instance stays
/// alive across client-side navigations.
///
/// The check is synchronous against the already-loaded session, so denied
/// content never flashes: children only render once both the auth check and
/// the role check have passed in the same evaluation.
#[component]
pub fn AccessGate(children: ChildrenFn) -> impl IntoView {
	let auth = expect_auth_state();
	let location = use_location();
	let navigate = use_navigate();

	let outcome = create_memo(move |_| {
		let path = location.pathname.get();
		auth.with(|state| gate_outcome(state, &path))
	});

	create_effect(move |_| match outcome.get() {
		GateOutcome::RedirectLogin => {
			navigate(&LoggedOutRoute::Login.to_string(), Default::default());
		}
		GateOutcome::RedirectHome => {
			navigate(&LoggedInRoute::Home.to_string(), Default::default());
		}
		GateOutcome::Render => {}
	});

	view! {
		<Show when={move || outcome.get() == GateOutcome::Render}>
			{children()}
		</Show>
	}
}
