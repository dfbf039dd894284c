#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

#[macro_use]
mod utils;

pub mod config;
pub mod emu;
pub mod logging;
pub mod panel;
pub mod ui;

pub use utils::{base_dirs, host_environment, BaseDirs};
