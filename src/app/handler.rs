//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place page state changes. It takes an
//! [`Event`] from the plugin runtime, mutates [`PageState`] and returns
//! whether a re-render is needed together with the [`Action`]s to perform.
//!
//! # Event Types
//!
//! - **Lifecycle**: `Mount`, `PermissionsDenied`, `Reload`
//! - **Search**: `SearchMode`, `ExitSearch`, `Char`, `Backspace`, `DebounceElapsed`
//! - **Grid**: `MoveLeft`, `MoveRight`, `MoveUp`, `MoveDown`, `OpenSelected`, `CloseModal`
//! - **Paging**: `NextPage`, `PrevPage`, `GoToVisiblePage`, `NextPortion`, `PrevPortion`
//! - **Network**: `CharactersFetched`
//!
//! # Example
//!
//! ```rust
//! use character_browser::app::{handle_event, Action, Event, PageState};
//! use character_browser::api::CharacterClient;
//! use character_browser::Theme;
//! use std::time::Duration;
//!
//! let mut state = PageState::new(
//!     CharacterClient::new("https://rickandmortyapi.com/api"),
//!     Theme::default(),
//!     Duration::from_millis(500),
//!     10,
//! );
//! let (render, actions) = handle_event(&mut state, &Event::Mount)?;
//! assert!(render);
//! assert!(matches!(actions[0], Action::Fetch(_)));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use super::modes::{InputMode, RenderState, WebAccess};
use crate::api::FetchError;
use crate::app::{Action, PageState};
use crate::domain::error::Result;
use crate::domain::CharacterPage;

/// Message shown when the host refuses web access.
pub const PERMISSION_DENIED_MESSAGE: &str = "Web access permission was denied";

/// Events triggered by user input, host timers or finished requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Permissions were granted; loads the first page.
    Mount,
    /// The host refused web access. Nothing can be loaded.
    PermissionsDenied,
    /// Re-issues the current query.
    Reload,

    /// Gives the search input focus.
    SearchMode,
    /// Returns focus to the grid, keeping the query.
    ExitSearch,
    /// Appends a character to the search text.
    Char(char),
    /// Removes the last character from the search text.
    Backspace,
    /// A debounce timer fired.
    DebounceElapsed,

    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    /// Opens the detail modal for the card under the cursor.
    OpenSelected,
    /// Closes the detail modal and clears the selection.
    CloseModal,

    NextPage,
    PrevPage,
    /// Jumps to the n-th (0-based) page button of the visible portion.
    GoToVisiblePage(u32),
    NextPortion,
    PrevPortion,

    /// Hides the plugin pane.
    CloseFocus,

    /// The host answered a character request.
    CharactersFetched {
        /// Id echoed back from the request context.
        request_id: u64,
        result: std::result::Result<CharacterPage, FetchError>,
    },
}

/// Processes an event, mutates page state, and returns actions to execute.
///
/// The boolean is `true` when the state changed in a way that needs a
/// re-render.
///
/// # Errors
///
/// Currently infallible; the `Result` keeps the runtime's error path in place
/// for handlers that can fail.
pub fn handle_event(state: &mut PageState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Mount => {
            state.web_access = WebAccess::Granted;
            Ok((true, fetch(state)))
        }
        Event::Reload => Ok((true, fetch(state))),
        Event::PermissionsDenied => {
            tracing::warn!("web access denied, nothing to load");
            state.web_access = WebAccess::Denied;
            Ok((true, fetch(state)))
        }

        Event::SearchMode => {
            state.input_mode = InputMode::Search;
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            state.input_mode = InputMode::Browse;
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            let mut text = state.search_input.clone();
            text.push(*c);
            Ok((true, change_search(state, text)))
        }
        Event::Backspace => {
            let mut text = state.search_input.clone();
            if text.pop().is_none() {
                return Ok((false, vec![]));
            }
            Ok((true, change_search(state, text)))
        }
        Event::DebounceElapsed => {
            let actions = if state.settle_search() {
                fetch(state)
            } else {
                vec![]
            };
            // the pending indicator may have cleared either way
            Ok((true, actions))
        }

        Event::MoveLeft => {
            state.move_left();
            Ok((true, vec![]))
        }
        Event::MoveRight => {
            state.move_right();
            Ok((true, vec![]))
        }
        Event::MoveUp => {
            state.move_up();
            Ok((true, vec![]))
        }
        Event::MoveDown => {
            state.move_down();
            Ok((true, vec![]))
        }
        Event::OpenSelected => {
            let Some(character) = state.character_at_cursor().cloned() else {
                tracing::debug!("no character under cursor");
                return Ok((false, vec![]));
            };
            tracing::debug!(id = character.id, name = %character.name, "opening details");
            state.select_character(Some(character));
            Ok((true, vec![]))
        }
        Event::CloseModal => {
            state.select_character(None);
            Ok((true, vec![]))
        }

        Event::NextPage | Event::PrevPage | Event::GoToVisiblePage(_) => {
            if state.render_state() != RenderState::List {
                return Ok((false, vec![]));
            }
            let changed = match event {
                Event::NextPage => state.pager.next_page(),
                Event::PrevPage => state.pager.prev_page(),
                Event::GoToVisiblePage(index) => state.pager.go_to_visible(*index),
                _ => false,
            };
            if !changed {
                return Ok((false, vec![]));
            }
            tracing::debug!(page = state.pager.current_page(), "page changed");
            Ok((true, fetch(state)))
        }
        Event::NextPortion => Ok((state.pager.next_portion(), vec![])),
        Event::PrevPortion => Ok((state.pager.prev_portion(), vec![])),

        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),

        Event::CharactersFetched { request_id, result } => {
            let applied = state.apply_fetch_result(*request_id, result.clone());
            Ok((applied, vec![]))
        }
    }
}

/// Starts a fetch, yielding the action for it when the request could be built.
///
/// Without granted web access the host would never answer, so nothing is
/// issued. A denial keeps its message on screen instead.
fn fetch(state: &mut PageState) -> Vec<Action> {
    match state.web_access {
        WebAccess::Granted => state.begin_fetch().map(Action::Fetch).into_iter().collect(),
        WebAccess::Pending => {
            tracing::debug!("web access not granted yet, deferring fetch");
            vec![]
        }
        WebAccess::Denied => {
            state.is_loading = false;
            state.in_flight = None;
            state.error = Some(PERMISSION_DENIED_MESSAGE.to_string());
            vec![]
        }
    }
}

/// Applies new raw search text: page 1, immediate fetch if the page moved,
/// and a debounce timer for the text itself.
fn change_search(state: &mut PageState, text: String) -> Vec<Action> {
    let (page_changed, delay) = state.set_search_text(text);

    let mut actions = if page_changed { fetch(state) } else { vec![] };
    actions.push(Action::ScheduleTimer(delay));
    actions
}
