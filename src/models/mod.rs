mod auth;
mod client;
mod dashboard;
mod machine;
mod user;

pub use self::{auth::*, client::*, dashboard::*, machine::*, user::*};
