//! End-to-end page scenarios driven through `handle_event`, with the host
//! replaced by canned API responses.

use character_browser::api::ApiRequest;
use character_browser::ui::BodyView;
use character_browser::{
    handle_event, initialize, parse_response, Action, Config, Event, PageState, RenderState,
};

const RICKS: &str = r#"{
    "info": { "count": 2, "pages": 1, "next": null, "prev": null },
    "results": [
        { "id": 1, "name": "Rick Sanchez", "status": "Alive", "species": "Human",
          "image": "https://rickandmortyapi.com/api/character/avatar/1.jpeg",
          "created": "2017-11-04T18:48:46.250Z" },
        { "id": 8, "name": "Adjudicator Rick", "status": "Dead", "species": "Human",
          "image": "https://rickandmortyapi.com/api/character/avatar/8.jpeg" }
    ]
}"#;

const NOT_FOUND: &str = r#"{ "error": "There is nothing here" }"#;

fn page_json(first_id: u64, count: u64, pages: u32) -> String {
    let results: Vec<String> = (first_id..first_id + count)
        .map(|id| format!(r#"{{ "id": {id}, "name": "Character {id}", "image": "" }}"#))
        .collect();
    format!(
        r#"{{ "info": {{ "count": {}, "pages": {pages} }}, "results": [{}] }}"#,
        count * u64::from(pages),
        results.join(",")
    )
}

fn send(state: &mut PageState, event: Event) -> Vec<Action> {
    handle_event(state, &event).expect("handler is infallible").1
}

fn only_fetch(actions: &[Action]) -> ApiRequest {
    let fetches: Vec<&ApiRequest> = actions
        .iter()
        .filter_map(|a| match a {
            Action::Fetch(r) => Some(r),
            _ => None,
        })
        .collect();
    assert_eq!(fetches.len(), 1, "expected exactly one fetch in {actions:?}");
    fetches[0].clone()
}

fn respond(state: &mut PageState, request: &ApiRequest, status: u16, body: &str) {
    let result = parse_response(status, body.as_bytes());
    send(
        state,
        Event::CharactersFetched {
            request_id: request.id,
            result,
        },
    );
}

/// Types `text`, lets every debounce timer fire and returns the actions of
/// the last one.
fn type_and_settle(state: &mut PageState, text: &str) -> Vec<Action> {
    send(state, Event::SearchMode);
    let mut timers = 0;
    for c in text.chars() {
        timers += send(state, Event::Char(c))
            .iter()
            .filter(|a| matches!(a, Action::ScheduleTimer(_)))
            .count();
    }
    let mut last = vec![];
    for _ in 0..timers {
        last = send(state, Event::DebounceElapsed);
    }
    last
}

fn mounted(pages: u32) -> PageState {
    let mut state = initialize(&Config::default());
    let request = only_fetch(&send(&mut state, Event::Mount));
    respond(&mut state, &request, 200, &page_json(1, 20, pages));
    state
}

#[test]
fn searching_rick_lists_two_characters() {
    let mut state = mounted(42);

    let request = only_fetch(&type_and_settle(&mut state, "Rick"));
    assert_eq!(
        request.url,
        "https://rickandmortyapi.com/api/character?page=1&name=Rick"
    );
    assert!(state.is_loading);

    respond(&mut state, &request, 200, RICKS);

    assert_eq!(state.characters.len(), 2);
    assert!(state.error.is_none());
    assert!(!state.is_loading);
    assert_eq!(state.render_state(), RenderState::List);
}

#[test]
fn searching_unknown_name_shows_not_found_message() {
    let mut state = mounted(42);

    let request = only_fetch(&type_and_settle(&mut state, "zzzznotfound"));
    respond(&mut state, &request, 404, NOT_FOUND);

    assert_eq!(
        state.render_state(),
        RenderState::Error("No characters found for \"zzzznotfound\"".to_string())
    );
    let vm = state.compute_viewmodel(40, 120);
    assert!(matches!(vm.body, BodyView::Error(ref s) if s.message == "No characters found for \"zzzznotfound\""));
    assert!(vm.pagination.is_none());
}

#[test]
fn not_found_without_search_is_a_generic_failure() {
    let mut state = initialize(&Config::default());
    let request = only_fetch(&send(&mut state, Event::Mount));
    respond(&mut state, &request, 404, NOT_FOUND);

    assert_eq!(
        state.render_state(),
        RenderState::Error("Failed to load characters.".to_string())
    );
}

#[test]
fn server_error_and_bad_body_messages() {
    let mut state = initialize(&Config::default());
    let request = only_fetch(&send(&mut state, Event::Mount));
    respond(&mut state, &request, 500, "oops");
    assert_eq!(state.error.as_deref(), Some("Failed to load characters."));

    let request = only_fetch(&send(&mut state, Event::Reload));
    assert!(state.error.is_none());
    respond(&mut state, &request, 200, "not json");
    assert_eq!(state.error.as_deref(), Some("An unexpected error occurred"));
}

#[test]
fn search_resets_to_first_page() {
    let mut state = mounted(42);
    let request = only_fetch(&send(&mut state, Event::GoToVisiblePage(6)));
    assert_eq!(request.query.page, 7);
    respond(&mut state, &request, 200, &page_json(121, 20, 42));

    send(&mut state, Event::SearchMode);
    let actions = send(&mut state, Event::Char('M'));
    assert_eq!(state.pager.current_page(), 1);
    assert_eq!(state.pager.portion(), 1);

    // the page change fetches at once, still with the old (empty) search
    let request = only_fetch(&actions);
    assert_eq!(request.query.page, 1);
    assert_eq!(request.query.name, None);
}

#[test]
fn selecting_then_clearing_closes_modal() {
    let mut state = mounted(1);
    send(&mut state, Event::MoveRight);
    send(&mut state, Event::OpenSelected);
    assert!(state.is_modal_open);
    assert_eq!(state.selected_character.as_ref().map(|c| c.id), Some(2));
    assert!(state.compute_viewmodel(40, 120).modal.is_some());

    send(&mut state, Event::CloseModal);
    assert!(!state.is_modal_open);
    assert!(state.selected_character.is_none());
    assert!(state.compute_viewmodel(40, 120).modal.is_none());
}

#[test]
fn render_states_are_exclusive_through_a_fetch() {
    let mut state = mounted(3);
    assert_eq!(state.render_state(), RenderState::List);

    let request = only_fetch(&send(&mut state, Event::NextPage));
    assert!(state.is_loading);
    assert!(state.error.is_none());
    assert!(matches!(
        state.compute_viewmodel(40, 120).body,
        BodyView::Loading(_)
    ));

    respond(&mut state, &request, 503, "");
    assert!(!state.is_loading);
    assert!(matches!(
        state.compute_viewmodel(40, 120).body,
        BodyView::Error(_)
    ));
}

#[test]
fn late_response_to_superseded_request_is_dropped() {
    let mut state = mounted(42);

    let slow = only_fetch(&type_and_settle(&mut state, "Rick"));
    send(&mut state, Event::Backspace);
    let fast = only_fetch(&send(&mut state, Event::DebounceElapsed));
    assert_eq!(fast.query.name.as_deref(), Some("Ric"));

    respond(&mut state, &fast, 200, RICKS);
    respond(&mut state, &slow, 404, NOT_FOUND);

    assert_eq!(state.render_state(), RenderState::List);
    assert_eq!(state.characters.len(), 2);
}

#[test]
fn portion_arrows_move_page_buttons_without_fetching() {
    let mut state = mounted(42);
    let pagination = state.compute_viewmodel(40, 120).pagination.unwrap();
    assert_eq!(pagination.buttons.len(), 10);
    assert!(!pagination.has_prev_portion);
    assert!(pagination.has_next_portion);
    assert_eq!(pagination.summary, "Page 1 of 42");

    for _ in 0..4 {
        assert!(send(&mut state, Event::NextPortion).is_empty());
    }
    let pagination = state.compute_viewmodel(40, 120).pagination.unwrap();
    let numbers: Vec<u32> = pagination.buttons.iter().map(|b| b.number).collect();
    assert_eq!(numbers, vec![41, 42]);
    assert!(!pagination.has_next_portion);

    let request = only_fetch(&send(&mut state, Event::GoToVisiblePage(1)));
    assert_eq!(request.query.page, 42);
}

#[test]
fn refreshed_page_without_selected_character_closes_modal() {
    let mut state = mounted(2);
    send(&mut state, Event::OpenSelected);
    assert!(state.is_modal_open);

    send(&mut state, Event::CloseModal);
    send(&mut state, Event::OpenSelected);
    let request = only_fetch(&send(&mut state, Event::Reload));
    respond(&mut state, &request, 200, &page_json(500, 3, 2));

    assert!(!state.is_modal_open);
    assert!(state.selected_character.is_none());
}
