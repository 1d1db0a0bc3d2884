//! Console front end for the Saving Money Cat
//!
//! The menu and the interactive session that drives a `BudgetTracker`.

pub mod menu;
pub mod session;

pub use menu::{format_menu, MenuChoice};
pub use session::{run_session, Session};
