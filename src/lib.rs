pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod hanja;

pub use core::converter::{convert, convert_with};
pub use core::{InputContext, KeyboardLayout, OptionSet};
pub use engine::HangulEngine;
pub use error::ImeError;
pub use hanja::{HanjaDictionary, HanjaEntry, HanjaError, HanjaMap, HanjaTable};
