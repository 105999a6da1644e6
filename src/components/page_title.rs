use leptos::*;

/// Heading row at the top of every dashboard page, with a slot on the
/// right for action buttons.
#[component]
pub fn PageTitle(
	/// The page heading
	#[prop(into)]
	title: String,
	/// A short description under the heading
	#[prop(into, optional)]
	subtitle: Option<String>,
	/// Action buttons, rendered on the right
	#[prop(optional)]
	children: Option<Children>,
) -> impl IntoView {
	view! {
		<div class="page-title">
			<div>
				<h1>{title}</h1>
				{subtitle.map(|subtitle| view! { <p>{subtitle}</p> })}
			</div>
			<div>{children.map(|children| children())}</div>
		</div>
	}
}
