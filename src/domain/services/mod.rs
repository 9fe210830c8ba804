pub mod actions;
mod app_state;
mod bubble;
mod bubble_list;
mod controller;
pub mod events;
mod history;
mod presenter;
mod scroll;
mod validation;

pub use app_state::*;
pub use bubble::*;
pub use bubble_list::*;
pub use controller::*;
pub use history::*;
pub use presenter::*;
pub use scroll::*;
pub use validation::*;
