//! Zellij plugin wrapper and entry point.
//!
//! The thin layer between the `character_browser` library and the Zellij
//! plugin API: it translates host events into library [`Event`]s and carries
//! out the [`Action`]s the library returns.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `PageState`
//! 2. **Subscribe**: Key, Timer, `WebRequestResult`, `PermissionRequestResult`
//! 3. **Permissions**: On grant, mount the page (first fetch); on denial show an error
//! 4. **Update**: Map events, delegate to `handle_event`, execute actions
//! 5. **Render**: Record the pane width, call the library renderer
//!
//! # Event Mapping
//!
//! - `Key` → depends on modal state and input mode, see [`State::map_key_event`]
//! - `Timer` → `Event::DebounceElapsed`
//! - `WebRequestResult` → `Event::CharactersFetched` with the request id from the context
//!
//! # Keybindings
//!
//! Modal open:
//! - `Esc`/`Enter`/`q`: Close details
//!
//! Browsing:
//! - arrows or `h`/`j`/`k`/`l`: Move between cards
//! - `Enter`: Show details
//! - `/`: Focus search
//! - `n`/`p` (or `PageDown`/`PageUp`): Next/previous page
//! - `]`/`[`: Next/previous portion of page buttons
//! - `1`-`9`, `0`: Jump to that page button of the portion
//! - `r`: Reload
//! - `q`: Hide plugin
//!
//! Searching:
//! - printable keys: Edit query
//! - `Backspace`: Delete
//! - `Enter`/`Esc`/`Tab`/`Down`: Back to the grid

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use character_browser::{
    handle_event, parse_response, Action, ApiRequest, Config, Event, FetchError, InputMode,
};

register_plugin!(State);

/// Plugin state wrapper around the library's `PageState`.
struct State {
    app: character_browser::PageState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: character_browser::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, initializes tracing and state, requests web
    /// access and subscribes to events. Nothing is fetched until permission
    /// is granted.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        character_browser::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(api_url = %config.api_url, "parsed configuration");
        self.app = character_browser::initialize(&config);

        request_permission(&[PermissionType::WebAccess]);

        subscribe(&[
            EventType::Key,
            EventType::Timer,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Translates a host event, runs it through the library and executes
    /// the resulting actions. Returns whether to re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", otel.name = %format!("plugin_update::{event_name}"), event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::DebounceElapsed,
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_result(status, &body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(PermissionStatus::Granted) => {
                tracing::debug!("web access granted - mounting page");
                Event::Mount
            }
            zellij_tile::prelude::Event::PermissionRequestResult(PermissionStatus::Denied) => {
                Event::PermissionsDenied
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    Self::execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        self.app.set_viewport(cols);
        character_browser::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    ///
    /// The open modal captures every key; otherwise the input mode decides
    /// whether characters edit the search or act as commands.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.key_modifiers.contains(&KeyModifier::Ctrl) {
            return None;
        }

        if self.app.is_modal_open {
            return match key.bare_key {
                BareKey::Esc | BareKey::Enter | BareKey::Char('q') => Some(Event::CloseModal),
                _ => None,
            };
        }

        if self.app.input_mode == InputMode::Search {
            return Some(match key.bare_key {
                BareKey::Enter | BareKey::Esc | BareKey::Tab | BareKey::Down => Event::ExitSearch,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            });
        }

        Some(match key.bare_key {
            BareKey::Left | BareKey::Char('h') => Event::MoveLeft,
            BareKey::Right | BareKey::Char('l') => Event::MoveRight,
            BareKey::Up | BareKey::Char('k') => Event::MoveUp,
            BareKey::Down | BareKey::Char('j') => Event::MoveDown,
            BareKey::Enter => Event::OpenSelected,
            BareKey::Char('/') => Event::SearchMode,
            BareKey::PageDown | BareKey::Char('n') => Event::NextPage,
            BareKey::PageUp | BareKey::Char('p') => Event::PrevPage,
            BareKey::Char(']') => Event::NextPortion,
            BareKey::Char('[') => Event::PrevPortion,
            BareKey::Char('0') => Event::GoToVisiblePage(9),
            BareKey::Char(c @ '1'..='9') => Event::GoToVisiblePage(c.to_digit(10)? - 1),
            BareKey::Char('r') => Event::Reload,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    /// Maps a finished web request to a fetch result event.
    ///
    /// Results without a request id did not come from this plugin's fetches.
    fn map_web_result(
        status: u16,
        body: &[u8],
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        let Some(request_id) = ApiRequest::id_from_context(context) else {
            tracing::debug!(status = status, "web result without request id - ignoring");
            return None;
        };

        let result: Result<_, FetchError> = parse_response(status, body);
        Some(Event::CharactersFetched { request_id, result })
    }

    /// Executes an action returned from event handling.
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::Fetch(request) => {
                tracing::debug!(request_id = request.id, url = %request.url, "issuing web request");
                web_request(
                    &request.url,
                    HttpVerb::Get,
                    BTreeMap::new(),
                    Vec::new(),
                    request.context(),
                );
            }
            Action::ScheduleTimer(delay) => {
                set_timeout(delay.as_secs_f64());
            }
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
        }
    }
}
