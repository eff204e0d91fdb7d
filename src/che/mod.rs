mod client;
mod endpoints;
mod models;

pub use client::*;
pub use endpoints::*;
pub use models::*;
