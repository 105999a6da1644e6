mod clients;
mod dashboard;
mod login;
mod machines;
mod repairs;
mod users;

pub use self::{clients::*, dashboard::*, login::*, machines::*, repairs::*, users::*};
