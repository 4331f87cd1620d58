#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod common;
mod compass;
mod config;
mod fleet;
mod game;
#[cfg(feature = "std")]
mod logging;
mod position;
pub mod prelude;
mod ship;

pub use common::*;
pub use compass::*;
pub use config::*;
pub use fleet::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use position::*;
pub use ship::*;
