pub mod convert;
pub mod dedup;
pub mod enrich;
pub mod error;
pub mod extract;
pub mod io;
pub mod layout;
pub mod model;
pub mod phonetic;

pub use error::{GuestError, Result};
