//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the api/domain
//! layers. It never calls the host directly.
//!
//! # Architecture
//!
//! ```text
//! Key / Timer / WebRequestResult → Event → handle_event → PageState → Actions
//!                                    ↑                                   ↓
//!                                    └──── web_request / set_timeout ────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`debounce`]: Timer-driven trailing debounce for the search text
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Input mode, render state and web access types
//! - [`pagination`]: Current page and portion windowing
//! - [`state`]: Central page state container and view model computation

pub mod actions;
pub mod debounce;
pub mod handler;
pub mod modes;
pub mod pagination;
pub mod state;

pub use actions::Action;
pub use debounce::Debouncer;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, RenderState, WebAccess};
pub use pagination::{Pager, DEFAULT_PORTION_SIZE};
pub use state::PageState;
