//! Console command handlers (menu boundary).

pub mod menu;
pub mod student;

pub use menu::{run_menu, MenuChoice};
