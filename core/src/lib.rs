#![warn(clippy::pedantic)]
#![allow(
    clippy::cast_lossless,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::cast_possible_truncation,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
)]

pub mod gs;
pub mod host;
pub mod setting;
pub mod store;

pub use setting::{Key, Origin, Value};
pub use store::{Layer, Store};
