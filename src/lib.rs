pub mod che;
pub mod common;
pub mod config;
pub mod service;

pub use self::config::*;
