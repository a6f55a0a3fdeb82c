//! Application state module

mod app_state;
mod confirmation;
mod forms;

pub use app_state::*;
pub use confirmation::*;
pub use forms::*;
