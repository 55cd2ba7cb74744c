//! anxlog - Terminal anxiety journal
//!
//! Records self-reported anxiety levels with an optional trigger category and
//! notes, keeps them in a local entry store and summarises recent trends.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::AnxlogError;
