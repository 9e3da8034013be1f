//! Zero-default conversions between optional references, owned pointers and
//! nullable database columns.
//!
//! # Intention
//!
//! - Turn an absent value into the zero value of its type, never an error.
//! - Build owned, never-absent pointers for call sites and tests.
//! - Read nullable SQLite columns without sprinkling `unwrap_or_default` around.
//!
//! # Architectural Boundaries
//!
//! - Every conversion is total, synchronous and leaves its input untouched.
//! - No business logic or unrelated utilities.

mod deref;
mod error;
mod null;
mod pointer;

#[cfg(feature = "rusqlite")]
pub mod sqlite;

pub use deref::*;
pub use error::{Error, Result};
pub use null::*;
pub use pointer::*;
