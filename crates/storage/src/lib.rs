#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod codec;
mod details;
mod memory;
mod prune;
mod record;
mod settings;

pub use codec::*;
pub use details::*;
pub use memory::*;
pub use prune::*;
pub use record::*;
pub use settings::*;
