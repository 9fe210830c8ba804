mod action;
mod author;
mod event;
mod history;
mod loading;
mod message;
mod phase;
mod question;
mod remote;
mod result;
mod session;
mod slash_commands;
mod textarea;

pub use action::*;
pub use author::*;
pub use event::*;
pub use history::*;
pub use loading::*;
pub use message::*;
pub use phase::*;
pub use question::*;
pub use remote::*;
pub use result::*;
pub use session::*;
pub use slash_commands::*;
pub use textarea::*;
