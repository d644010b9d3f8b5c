//! Error handling for the application.
//!
//! All typed errors live here; operation entry points attach context with
//! `anyhow` and bubble these up to the CLI.

mod types;

pub use types::{
    CoordinateError, DatabaseError, InitializationError, LocateError, RegistryError,
};
