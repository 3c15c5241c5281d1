//! Domain layer for the character browser.
//!
//! Holds the records returned by the remote API and the crate-wide error type.
//! Nothing in here talks to Zellij; the types are plain data that the
//! application layer moves around.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`character`]: Character records and the paged response envelope

pub mod character;
pub mod error;

pub use character::{Character, CharacterPage, LocationRef, PageInfo};
pub use error::{BrowserError, Result};
