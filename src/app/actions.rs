//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never talks to the host. It returns a `Vec<Action>` and
//! the runtime in `main.rs` performs them in order: HTTP requests, timers and
//! hiding the plugin pane.
//!
//! # Example
//!
//! ```rust
//! use character_browser::app::Action;
//! use std::time::Duration;
//!
//! let actions = vec![Action::ScheduleTimer(Duration::from_millis(500))];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::api::ApiRequest;
use std::time::Duration;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Performs an HTTP GET for the character list.
    ///
    /// The request id travels in the host context and comes back with the
    /// result, so late answers to superseded requests can be recognised.
    Fetch(ApiRequest),

    /// Asks the host for a timer event after the given delay.
    ///
    /// Used by the search debounce; every keystroke schedules one.
    ScheduleTimer(Duration),

    /// Hides the plugin pane.
    CloseFocus,
}
