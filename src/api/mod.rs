mod auth;
mod clients;
mod dashboard;
mod machines;
mod users;

pub use self::{auth::*, clients::*, dashboard::*, machines::*, users::*};
