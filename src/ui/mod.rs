//! Presentation glue: fixed-width tables and the interactive menu.

pub mod menu;
pub mod table;
