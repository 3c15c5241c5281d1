//! Remote data client for the character API.
//!
//! The host performs the actual HTTP call, so this layer is split in two
//! halves that meet at the plugin shim:
//!
//! - [`request`]: turns a page number and search text into an [`ApiRequest`]
//!   with an encoded URL and a request id carried in the host context.
//! - [`response`]: classifies the status and body the host hands back into a
//!   [`CharacterPage`](crate::domain::CharacterPage) or a [`FetchError`].

pub mod request;
pub mod response;

pub use request::{ApiRequest, CharacterClient, CharacterQuery, REQUEST_ID_KEY};
pub use response::{parse_response, FetchError};
