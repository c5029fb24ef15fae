pub mod cli;
pub mod config;
pub mod error;
pub mod forge;
pub mod mirror;
mod result;

pub use error::MirrorError;
pub use result::Result;

#[cfg(test)]
pub mod test_helpers;
