//! Library surface of the sysdash dashboard, used by the binary and integration tests.

pub mod app;
pub mod config;
pub mod dashboard;
pub mod history;
pub mod input;
pub mod layout;
pub mod logging;
pub mod shutdown;
pub mod terminal;
pub mod ui;
