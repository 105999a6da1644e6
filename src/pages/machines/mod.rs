mod detail;
mod list;
mod new_machine;

pub use self::{detail::*, list::*, new_machine::*};
