pub mod config;
pub mod logging;

pub mod cell;
pub mod csv_sheet;
pub mod host;
pub mod link;
pub mod local_store;
pub mod registry;
pub mod rename;
