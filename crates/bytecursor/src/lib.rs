#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]
#![warn(clippy::std_instead_of_alloc)]
#![warn(clippy::std_instead_of_core)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod macros;

mod byte_order;
mod cursor;
mod error;
mod exploration;
mod writer;

// Flat API hierarchy of common traits and types

pub use self::byte_order::*;
pub use self::cursor::*;
pub use self::error::*;
pub use self::exploration::*;
pub use self::writer::*;
