mod lister;

pub use lister::*;
