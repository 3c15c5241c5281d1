//! Page state and view model computation.
//!
//! [`PageState`] is the single source of truth for the page: the last fetched
//! characters, paging, the loading/error flags, search text (raw and
//! debounced), the grid cursor and the modal. The event handler mutates it;
//! the renderer only ever sees a [`UIViewModel`] computed from it.
//!
//! # Fetch lifecycle
//!
//! [`PageState::begin_fetch`] marks the page as loading, clears the error and
//! hands back an [`ApiRequest`] tagged with a fresh id. When the host answers,
//! [`PageState::apply_fetch_result`] drops anything that is not the latest
//! request, then either stores the page or turns the failure into a message.
//!
//! # Example
//!
//! ```rust
//! use character_browser::app::PageState;
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
//! let request = state.begin_fetch().unwrap();
//! assert!(state.is_loading);
//! assert_eq!(request.query.page, 1);
//! ```

use super::debounce::Debouncer;
use super::modes::{InputMode, RenderState, WebAccess};
use super::pagination::Pager;
use crate::api::{ApiRequest, CharacterClient, CharacterQuery, FetchError};
use crate::domain::{Character, CharacterPage};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    grid_columns, grid_rows, BodyView, DisplayCard, FooterInfo, GridInfo, HeaderInfo, ModalInfo,
    PageButton, PaginationInfo, SearchBarInfo, StatusInfo, UIViewModel, CARD_WIDTH,
};
use fuzzy_matcher::skim::SkimMatcherV2;
use std::time::Duration;

/// Central page state container.
#[derive(Debug, Clone)]
pub struct PageState {
    /// Characters from the most recent successful fetch.
    pub characters: Vec<Character>,

    /// Current page, page count and visible portion.
    pub pager: Pager,

    /// Set between issuing a request and receiving its result.
    pub is_loading: bool,

    /// User-facing message from the last failed request.
    pub error: Option<String>,

    /// Character shown in the detail modal.
    ///
    /// Always one of `characters`; cleared when a fetch drops it.
    pub selected_character: Option<Character>,

    /// Whether the detail modal is visible.
    pub is_modal_open: bool,

    /// Raw search text, updated on every keystroke.
    pub search_input: String,

    /// Debounced copy of `search_input` that drives requests.
    pub search: Debouncer<String>,

    /// Whether keys edit the search text or navigate.
    pub input_mode: InputMode,

    /// Index of the highlighted card within `characters`.
    pub cursor: usize,

    /// Card columns in the last rendered layout; drives vertical movement.
    pub grid_columns: usize,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Id of the request whose result the page is waiting for.
    pub in_flight: Option<u64>,

    /// Answer to the web access prompt. Fetches only go out once granted.
    pub web_access: WebAccess,

    client: CharacterClient,
    next_request_id: u64,
}

impl PageState {
    /// Creates the state for a freshly mounted page.
    #[must_use]
    pub fn new(
        client: CharacterClient,
        theme: Theme,
        debounce: Duration,
        portion_size: u32,
    ) -> Self {
        Self {
            characters: Vec::new(),
            pager: Pager::new(portion_size),
            is_loading: false,
            error: None,
            selected_character: None,
            is_modal_open: false,
            search_input: String::new(),
            search: Debouncer::new(String::new(), debounce),
            input_mode: InputMode::Browse,
            cursor: 0,
            grid_columns: 1,
            theme,
            in_flight: None,
            web_access: WebAccess::Pending,
            client,
            next_request_id: 1,
        }
    }

    /// The settled search text requests are made with.
    #[must_use]
    pub fn debounced_search(&self) -> &str {
        self.search.settled()
    }

    /// Derives what the body shows. Loading wins over error, error over list.
    #[must_use]
    pub fn render_state(&self) -> RenderState {
        if self.is_loading {
            RenderState::Loading
        } else if let Some(message) = &self.error {
            RenderState::Error(message.clone())
        } else {
            RenderState::List
        }
    }

    /// Starts a fetch for the current page and debounced search.
    ///
    /// Sets loading and clears the error. Returns `None` (and records an
    /// error instead) if the request cannot be built.
    pub fn begin_fetch(&mut self) -> Option<ApiRequest> {
        let id = self.next_request_id;
        self.next_request_id += 1;

        let query = CharacterQuery::new(self.pager.current_page(), self.debounced_search());

        self.is_loading = true;
        self.error = None;
        self.in_flight = Some(id);

        match self.client.request(id, &query) {
            Ok(request) => {
                tracing::debug!(
                    request_id = id,
                    page = query.page,
                    search = ?query.name,
                    "fetch started"
                );
                Some(request)
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to build character request");
                self.apply_fetch_result(id, Err(FetchError::from(e)));
                None
            }
        }
    }

    /// Applies the result of request `request_id`.
    ///
    /// Returns `false` without touching anything if the result belongs to a
    /// superseded request.
    pub fn apply_fetch_result(
        &mut self,
        request_id: u64,
        result: Result<CharacterPage, FetchError>,
    ) -> bool {
        if self.in_flight != Some(request_id) {
            tracing::debug!(
                request_id = request_id,
                in_flight = ?self.in_flight,
                "discarding stale fetch result"
            );
            return false;
        }

        self.in_flight = None;
        self.is_loading = false;

        match result {
            Ok(page) => {
                self.characters = page.results;
                self.pager.set_page_count(page.info.pages);
                self.clamp_cursor();
                self.drop_stale_selection();
                tracing::debug!(
                    results = self.characters.len(),
                    pages = self.pager.page_count(),
                    "fetch succeeded"
                );
            }
            Err(e) => {
                let message = e.user_message(self.debounced_search());
                tracing::debug!(error = %e, message = %message, "fetch failed");
                self.error = Some(message);
            }
        }

        true
    }

    /// Stores new raw search text and returns to page 1.
    ///
    /// Returns whether the current page changed (which alone warrants a
    /// fetch) and the debounce delay to schedule.
    pub fn set_search_text(&mut self, text: String) -> (bool, Duration) {
        let page_changed = self.pager.reset();
        self.search_input.clone_from(&text);
        let delay = self.search.push(text);
        tracing::trace!(query = %self.search_input, page_changed = page_changed, "search text updated");
        (page_changed, delay)
    }

    /// Handles a fired debounce timer. Returns `true` if the debounced search
    /// text changed.
    pub fn settle_search(&mut self) -> bool {
        self.search.on_timer().is_some_and(|settled| {
            tracing::debug!(query = %settled, "search text settled");
            true
        })
    }

    /// Opens the modal for `character`, or closes it for `None`.
    pub fn select_character(&mut self, character: Option<Character>) {
        self.is_modal_open = character.is_some();
        self.selected_character = character;
    }

    /// Character under the grid cursor, if the grid is showing.
    #[must_use]
    pub fn character_at_cursor(&self) -> Option<&Character> {
        if self.render_state() != RenderState::List {
            return None;
        }
        self.characters.get(self.cursor)
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor + 1 < self.characters.len() {
            self.cursor += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.grid_columns.max(1));
    }

    pub fn move_down(&mut self) {
        let next = self.cursor + self.grid_columns.max(1);
        if next < self.characters.len() {
            self.cursor = next;
        }
    }

    /// Records the terminal width so cursor movement matches the layout.
    pub fn set_viewport(&mut self, cols: usize) {
        self.grid_columns = grid_columns(cols);
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.characters.len().saturating_sub(1));
    }

    fn drop_stale_selection(&mut self) {
        let still_listed = self
            .selected_character
            .as_ref()
            .is_some_and(|selected| self.characters.iter().any(|c| c.id == selected.id));

        if self.selected_character.is_some() && !still_listed {
            tracing::debug!("selected character left the list, closing modal");
            self.select_character(None);
        }
    }

    /// Computes a renderable view model for a `rows` x `cols` pane.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let body = match self.render_state() {
            RenderState::Loading => BodyView::Loading(StatusInfo {
                message: "Loading...".to_string(),
                subtitle: self.loading_subtitle(),
            }),
            RenderState::Error(message) => BodyView::Error(StatusInfo {
                message,
                subtitle: "Edit the search or press r to retry".to_string(),
            }),
            RenderState::List => BodyView::Grid(self.compute_grid(rows, cols)),
        };

        let pagination = matches!(body, BodyView::Grid(_)).then(|| self.compute_pagination());

        UIViewModel {
            header: HeaderInfo {
                title: "Characters".to_string(),
            },
            search_bar: self.compute_search_bar(),
            body,
            pagination,
            modal: self.compute_modal(),
            footer: self.compute_footer(),
        }
    }

    fn loading_subtitle(&self) -> String {
        let search = self.debounced_search();
        if search.is_empty() {
            format!("page {}", self.pager.current_page())
        } else {
            format!("\"{search}\", page {}", self.pager.current_page())
        }
    }

    /// Windows the grid around the cursor row.
    fn compute_grid(&self, rows: usize, cols: usize) -> GridInfo {
        let columns = grid_columns(cols);

        if self.characters.is_empty() {
            return GridInfo {
                cards: vec![],
                columns,
                empty_message: Some("No characters on this page".to_string()),
            };
        }

        let total_rows = self.characters.len().div_ceil(columns);
        let visible_rows = grid_rows(rows).min(total_rows);
        let cursor_row = self.cursor / columns;

        let mut first_row = cursor_row.saturating_sub(visible_rows / 2);
        if first_row + visible_rows > total_rows {
            first_row = total_rows - visible_rows;
        }

        let start = first_row * columns;
        let end = ((first_row + visible_rows) * columns).min(self.characters.len());

        let matcher = (!self.debounced_search().is_empty()).then(SkimMatcherV2::default);

        let cards = self.characters[start..end]
            .iter()
            .enumerate()
            .map(|(offset, character)| {
                self.compute_card(character, start + offset == self.cursor, matcher.as_ref())
            })
            .collect();

        GridInfo {
            cards,
            columns,
            empty_message: None,
        }
    }

    fn compute_card(
        &self,
        character: &Character,
        is_selected: bool,
        matcher: Option<&SkimMatcherV2>,
    ) -> DisplayCard {
        let width = CARD_WIDTH - 2;
        let name = crate::ui::helpers::truncate(&character.name, width);
        let mut highlight_ranges = matcher
            .map(|m| self.compute_highlight_ranges(&character.name, m))
            .unwrap_or_default();
        if name != character.name {
            // the last visible column holds the ellipsis
            let visible = width.saturating_sub(1);
            highlight_ranges.retain(|&(start, _)| start < visible);
            for (_, end) in &mut highlight_ranges {
                *end = (*end).min(visible);
            }
        }

        DisplayCard {
            name,
            tagline: crate::ui::helpers::truncate(&character.tagline(), width),
            is_selected,
            highlight_ranges,
        }
    }

    /// Collapses matched character indices into contiguous `(start, end)` runs.
    fn compute_highlight_ranges(&self, text: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
        use fuzzy_matcher::FuzzyMatcher;

        let Some((_score, indices)) = matcher.fuzzy_indices(text, self.debounced_search()) else {
            return vec![];
        };

        let mut ranges: Vec<(usize, usize)> = Vec::new();
        for idx in indices {
            match ranges.last_mut() {
                Some((_, end)) if *end == idx => *end = idx + 1,
                _ => ranges.push((idx, idx + 1)),
            }
        }
        ranges
    }

    fn compute_pagination(&self) -> PaginationInfo {
        let current = self.pager.current_page();
        let buttons = self
            .pager
            .visible_pages()
            .map(|number| PageButton {
                number,
                is_current: number == current,
            })
            .collect();

        PaginationInfo {
            buttons,
            has_prev_portion: self.pager.has_prev_portion(),
            has_next_portion: self.pager.has_next_portion(),
            summary: format!("Page {current} of {}", self.pager.page_count()),
        }
    }

    fn compute_modal(&self) -> Option<ModalInfo> {
        if !self.is_modal_open {
            return None;
        }
        let character = self.selected_character.as_ref()?;

        let mut fields = vec![
            ("Status".to_string(), character.status.clone()),
            ("Species".to_string(), character.species.clone()),
        ];
        if !character.kind.is_empty() {
            fields.push(("Type".to_string(), character.kind.clone()));
        }
        fields.extend([
            ("Gender".to_string(), character.gender.clone()),
            ("Origin".to_string(), character.origin.name.clone()),
            ("Location".to_string(), character.location.name.clone()),
            ("Episodes".to_string(), character.episode_count().to_string()),
        ]);
        if let Some(date) = character.created_date() {
            fields.push(("Created".to_string(), date));
        }
        fields.push(("Image".to_string(), character.image.clone()));

        Some(ModalInfo {
            title: format!("#{} {}", character.id, character.name),
            fields,
            hint: "Esc: close".to_string(),
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.is_modal_open {
            "Esc/Enter: close"
        } else {
            match self.input_mode {
                InputMode::Search => "Type to search  Backspace: delete  Enter/Esc: back to grid",
                InputMode::Browse => {
                    "arrows/hjkl: move  Enter: details  /: search  n/p: page  [/]: portion  1-0: jump  r: reload  q: quit"
                }
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_search_bar(&self) -> SearchBarInfo {
        SearchBarInfo {
            label: "Search by name:".to_string(),
            query: self.search_input.clone(),
            is_focused: self.input_mode == InputMode::Search,
            is_pending: self.search.is_pending(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PageInfo;

    fn state() -> PageState {
        PageState::new(
            CharacterClient::new("https://rickandmortyapi.com/api"),
            Theme::default(),
            Duration::from_millis(500),
            10,
        )
    }

    fn page_of(names: &[&str], pages: u32) -> CharacterPage {
        CharacterPage {
            info: PageInfo {
                count: u32::try_from(names.len()).unwrap(),
                pages,
                next: None,
                prev: None,
            },
            results: names
                .iter()
                .enumerate()
                .map(|(i, name)| Character::summary(i as u64 + 1, *name, ""))
                .collect(),
        }
    }

    #[test]
    fn loading_excludes_error_and_list() {
        let mut state = state();
        state.error = Some("old".to_string());
        state.begin_fetch().unwrap();
        assert_eq!(state.render_state(), RenderState::Loading);
        assert!(state.error.is_none());

        let vm = state.compute_viewmodel(40, 120);
        assert!(matches!(vm.body, BodyView::Loading(_)));
        assert!(vm.pagination.is_none());
    }

    #[test]
    fn success_stores_results_and_pages() {
        let mut state = state();
        let request = state.begin_fetch().unwrap();
        assert!(state.apply_fetch_result(request.id, Ok(page_of(&["Rick", "Morty"], 42))));

        assert_eq!(state.render_state(), RenderState::List);
        assert_eq!(state.characters.len(), 2);
        assert_eq!(state.pager.page_count(), 42);
        assert!(state.in_flight.is_none());
    }

    #[test]
    fn stale_results_are_discarded() {
        let mut state = state();
        let first = state.begin_fetch().unwrap();
        let second = state.begin_fetch().unwrap();

        assert!(!state.apply_fetch_result(first.id, Ok(page_of(&["Stale"], 1))));
        assert!(state.is_loading);
        assert!(state.characters.is_empty());

        assert!(state.apply_fetch_result(second.id, Ok(page_of(&["Fresh"], 1))));
        assert_eq!(state.characters[0].name, "Fresh");
    }

    #[test]
    fn bad_base_url_surfaces_unexpected_error() {
        let mut state = PageState::new(
            CharacterClient::new("::nope::"),
            Theme::default(),
            Duration::from_millis(500),
            10,
        );
        assert!(state.begin_fetch().is_none());
        assert!(!state.is_loading);
        assert_eq!(
            state.render_state(),
            RenderState::Error("An unexpected error occurred".to_string())
        );
    }

    #[test]
    fn selection_dropped_when_missing_from_new_page() {
        let mut state = state();
        let request = state.begin_fetch().unwrap();
        state.apply_fetch_result(request.id, Ok(page_of(&["Rick", "Morty"], 1)));
        state.select_character(state.characters.get(1).cloned());
        assert!(state.is_modal_open);

        let request = state.begin_fetch().unwrap();
        let mut other = page_of(&["Summer"], 1);
        other.results[0].id = 99;
        state.apply_fetch_result(request.id, Ok(other));

        assert!(state.selected_character.is_none());
        assert!(!state.is_modal_open);
    }

    #[test]
    fn cursor_moves_within_grid_bounds() {
        let mut state = state();
        let request = state.begin_fetch().unwrap();
        state.apply_fetch_result(request.id, Ok(page_of(&["a", "b", "c", "d", "e"], 1)));
        state.set_viewport(CARD_WIDTH * 2);

        state.move_down();
        assert_eq!(state.cursor, 2);
        state.move_down();
        assert_eq!(state.cursor, 4);
        state.move_down();
        assert_eq!(state.cursor, 4);
        state.move_right();
        assert_eq!(state.cursor, 4);
        state.move_up();
        assert_eq!(state.cursor, 2);
        state.move_left();
        state.move_left();
        state.move_left();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn grid_window_follows_cursor() {
        let mut state = state();
        let request = state.begin_fetch().unwrap();
        let names: Vec<String> = (0..20).map(|i| format!("c{i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        state.apply_fetch_result(request.id, Ok(page_of(&refs, 1)));
        state.cursor = 19;

        // one column, CHROME_ROWS + 2 card rows
        let vm = state.compute_viewmodel(16, CARD_WIDTH);
        let BodyView::Grid(grid) = vm.body else {
            panic!("expected grid");
        };
        assert_eq!(grid.cards.len(), 2);
        assert_eq!(grid.cards[1].name, "c19");
        assert!(grid.cards[1].is_selected);
    }

    #[test]
    fn search_matches_are_highlighted() {
        let mut state = state();
        state.set_search_text("ric".to_string());
        state.settle_search();
        let request = state.begin_fetch().unwrap();
        state.apply_fetch_result(request.id, Ok(page_of(&["Rick Sanchez"], 1)));

        let vm = state.compute_viewmodel(40, 120);
        let BodyView::Grid(grid) = vm.body else {
            panic!("expected grid");
        };
        assert_eq!(grid.cards[0].highlight_ranges, vec![(0, 3)]);
    }

    #[test]
    fn highlights_stop_before_ellipsis_of_long_names() {
        let long_name = "Abradolf Lincler Frankenstein Jr";
        let visible = CARD_WIDTH - 3;

        for (search, expected) in [("kenstein", vec![(21, visible)]), ("jr", vec![])] {
            let mut state = state();
            state.set_search_text(search.to_string());
            state.settle_search();
            let request = state.begin_fetch().unwrap();
            state.apply_fetch_result(request.id, Ok(page_of(&[long_name], 1)));

            let BodyView::Grid(grid) = state.compute_viewmodel(40, 120).body else {
                panic!("expected grid");
            };
            let card = &grid.cards[0];
            assert!(card.name.ends_with('…'));
            assert_eq!(card.highlight_ranges, expected, "search {search:?}");
        }
    }

    #[test]
    fn modal_lists_detail_fields() {
        let mut state = state();
        let mut rick = Character::summary(1, "Rick Sanchez", "https://example.com/1.jpeg");
        rick.status = "Alive".to_string();
        rick.created = "2017-11-04T18:48:46.250Z".to_string();
        state.select_character(Some(rick));

        let modal = state.compute_viewmodel(40, 120).modal.unwrap();
        assert_eq!(modal.title, "#1 Rick Sanchez");
        assert!(modal.fields.contains(&("Status".to_string(), "Alive".to_string())));
        assert!(modal.fields.contains(&("Created".to_string(), "2017-11-04".to_string())));
        assert!(!modal.fields.iter().any(|(label, _)| label == "Type"));
    }

    #[test]
    fn empty_page_shows_placeholder() {
        let mut state = state();
        let request = state.begin_fetch().unwrap();
        state.apply_fetch_result(request.id, Ok(page_of(&[], 1)));

        let BodyView::Grid(grid) = state.compute_viewmodel(40, 120).body else {
            panic!("expected grid");
        };
        assert!(grid.cards.is_empty());
        assert!(grid.empty_message.is_some());
    }
}
