use leptos::*;

/// Severity of an [`Alert`] or a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertType {
	/// Something worked
	Success,
	/// Something failed
	Error,
	/// Worth a look
	#[default]
	Warning,
}

impl AlertType {
	/// Class suffix shared by alerts and toasts
	pub fn as_css_name(&self) -> &'static str {
		match self {
			Self::Success => "success",
			Self::Error => "error",
			Self::Warning => "warning",
		}
	}
}

/// An inline message block, used for form errors and load failures.
#[component]
pub fn Alert(
	/// Severity, picks the color
	r#type: AlertType,
	/// Additional classes if necessary
	#[prop(into, optional)]
	class: String,
	children: Children,
) -> impl IntoView {
	view! {
		<div class={format!("alert alert-{} {}", r#type.as_css_name(), class)}>
			{children()}
		</div>
	}
}
