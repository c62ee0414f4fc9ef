#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

mod component;
pub use component::*;

mod config;
pub use config::*;

mod error;
pub use error::*;

mod replies;
pub use replies::*;

mod source;
pub use source::*;

mod store;
pub use store::*;
