//! Shell tests against the ratatui TestBackend.

use super::*;
use crate::modal::{CLOSE_ACTION, CONFIRM_ACTION};
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::backend::TestBackend;
use serde_json::json;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn create_test_app(confirm_quit: bool) -> TuiApp<TestBackend> {
    let terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    TuiApp::with_terminal(
        terminal,
        Rc::new(BuiltinTemplates::new()),
        ViewerStyles::default(),
        confirm_quit,
    )
}

fn search_results() -> Value {
    json!({
        "id": "search_results",
        "query": "med",
        "results": [
            { "id": "item_medikit", "name": "Medikit", "weight": 3 },
            { "id": "perk_medic", "name": "Medic" },
        ]
    })
}

/// Let spawned dialog flows run.
async fn settle() {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
}

fn screen_text(app: &TuiApp<TestBackend>) -> String {
    let buffer = app.terminal().backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn tui_error_from_io_error() {
    let io_err = io::Error::other("test error");
    let tui_err: TuiError = io_err.into();
    assert!(matches!(tui_err, TuiError::Io(_)));
}

#[tokio::test]
async fn show_renders_grouped_results() {
    let mut app = create_test_app(true);
    app.show(&search_results()).await.unwrap();
    app.draw().unwrap();

    let text = screen_text(&app);
    assert!(text.contains("Search Results"));
    assert!(text.contains("Results for \"med\" (2)"));
    assert!(text.contains("Item: Medikit"));
    assert!(text.contains("Perk: Medic"));
    assert_eq!(app.state().page().unwrap().links.len(), 2);
}

#[tokio::test]
async fn show_rejects_unowned_data() {
    let mut app = create_test_app(true);
    let err = app.show(&json!({ "id": "something_else" })).await.unwrap_err();
    assert!(matches!(err, TuiError::Page(PageError::NoOwner { .. })));
    assert!(app.state().page().is_none());
}

#[tokio::test]
async fn showing_a_second_page_records_history() {
    let mut app = create_test_app(true);
    app.show(&search_results()).await.unwrap();
    assert!(app.state().history().is_empty());

    app.show(&search_results()).await.unwrap();
    assert_eq!(app.state().history().len(), 1);
    assert_eq!(app.state().history()[0].page, "search-results-page");
}

#[tokio::test]
async fn ctrl_c_quits_immediately() {
    let local = LocalSet::new();
    local
        .run_until(async {
            let mut app = create_test_app(true);
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
            assert!(app.should_quit());
        })
        .await;
}

#[tokio::test]
async fn q_without_confirmation_quits() {
    let local = LocalSet::new();
    local
        .run_until(async {
            let mut app = create_test_app(false);
            app.handle_key(key(KeyCode::Char('q')));
            assert!(app.should_quit());
            assert!(!app.modal().is_any_modal_open());
        })
        .await;
}

#[tokio::test]
async fn q_asks_before_quitting() {
    let local = LocalSet::new();
    local
        .run_until(async {
            let mut app = create_test_app(true);
            app.show(&search_results()).await.unwrap();

            app.handle_key(key(KeyCode::Char('q')));
            settle().await;
            assert!(!app.should_quit());
            assert!(app.modal().is_any_modal_open());

            app.draw().unwrap();
            let text = screen_text(&app);
            assert!(text.contains(QUIT_PROMPT));
            assert!(text.contains("[ Quit ]"));
            assert!(text.contains("[ Stay ]"));

            // Focus starts on the affirmative button.
            app.handle_key(key(KeyCode::Enter));
            settle().await;
            assert!(app.should_quit());
            assert!(!app.modal().is_any_modal_open());
        })
        .await;
}

#[tokio::test]
async fn declining_quit_keeps_running() {
    let local = LocalSet::new();
    local
        .run_until(async {
            let mut app = create_test_app(true);
            app.handle_key(key(KeyCode::Esc));
            settle().await;

            app.handle_key(key(KeyCode::Tab));
            app.handle_key(key(KeyCode::Enter));
            settle().await;

            assert!(!app.should_quit());
            assert!(!app.modal().is_any_modal_open());
        })
        .await;
}

#[tokio::test]
async fn keys_do_not_reach_page_while_dialog_open() {
    let local = LocalSet::new();
    local
        .run_until(async {
            let mut app = create_test_app(true);
            app.show(&search_results()).await.unwrap();
            app.handle_key(key(KeyCode::Char('q')));
            settle().await;

            app.handle_key(key(KeyCode::Char('j')));
            assert_eq!(app.state().selected_link_index(), 0);
        })
        .await;
}

#[tokio::test]
async fn enter_opens_record_details() {
    let local = LocalSet::new();
    local
        .run_until(async {
            let mut app = create_test_app(true);
            app.show(&search_results()).await.unwrap();

            app.handle_key(key(KeyCode::Enter));
            settle().await;

            assert!(app.modal().is_any_modal_open());
            app.draw().unwrap();
            let text = screen_text(&app);
            assert!(text.contains("id: item_medikit"));
            assert!(text.contains("weight: 3"));
            assert!(text.contains("[ Close ]"));

            app.handle_key(key(KeyCode::Enter));
            assert!(!app.modal().is_any_modal_open());
        })
        .await;
}

#[tokio::test]
async fn backdrop_click_dismisses_details_only() {
    let local = LocalSet::new();
    local
        .run_until(async {
            let mut app = create_test_app(true);
            app.show(&search_results()).await.unwrap();

            app.handle_key(key(KeyCode::Enter));
            settle().await;
            app.draw().unwrap();
            app.handle_mouse(click(0, 0));
            assert!(!app.modal().is_any_modal_open());

            app.handle_key(key(KeyCode::Char('q')));
            settle().await;
            app.draw().unwrap();
            app.handle_mouse(click(0, 0));
            assert!(app.modal().is_any_modal_open());
        })
        .await;
}

#[tokio::test]
async fn clicking_a_button_activates_it() {
    let local = LocalSet::new();
    local
        .run_until(async {
            let mut app = create_test_app(true);
            app.show(&search_results()).await.unwrap();
            app.handle_key(key(KeyCode::Enter));
            settle().await;
            app.draw().unwrap();

            let (id, rect) = app.last_dialog.as_ref().unwrap().buttons[0].clone();
            assert_eq!(id, CLOSE_ACTION);
            app.handle_mouse(click(rect.x, rect.y));
            assert!(!app.modal().is_any_modal_open());
        })
        .await;
}

#[tokio::test]
async fn clicking_confirm_button_quits() {
    let local = LocalSet::new();
    local
        .run_until(async {
            let mut app = create_test_app(true);
            app.handle_key(key(KeyCode::Char('q')));
            settle().await;
            app.draw().unwrap();

            let (id, rect) = app.last_dialog.as_ref().unwrap().buttons[0].clone();
            assert_eq!(id, CONFIRM_ACTION);
            app.handle_mouse(click(rect.x + 1, rect.y));
            settle().await;
            assert!(app.should_quit());
        })
        .await;
}

#[tokio::test]
async fn clicking_a_link_selects_and_opens_it() {
    let local = LocalSet::new();
    local
        .run_until(async {
            let mut app = create_test_app(true);
            app.show(&search_results()).await.unwrap();
            let second = app.state().page().unwrap().links[1].line;
            app.draw().unwrap();

            // Body starts below the one-row title bar.
            app.handle_mouse(click(10, 1 + second as u16));
            settle().await;

            assert_eq!(app.state().selected_link_index(), 1);
            assert!(app.modal().is_any_modal_open());
        })
        .await;
}

#[tokio::test]
async fn scroll_wheel_moves_selection() {
    let local = LocalSet::new();
    local
        .run_until(async {
            let mut app = create_test_app(true);
            app.show(&search_results()).await.unwrap();
            let wheel = |kind| MouseEvent {
                kind,
                column: 0,
                row: 5,
                modifiers: KeyModifiers::NONE,
            };

            app.handle_mouse(wheel(MouseEventKind::ScrollDown));
            assert_eq!(app.state().selected_link_index(), 1);
            app.handle_mouse(wheel(MouseEventKind::ScrollUp));
            assert_eq!(app.state().selected_link_index(), 0);
        })
        .await;
}

#[tokio::test]
async fn handled_event_lets_dialog_flow_open() {
    let local = LocalSet::new();
    local
        .run_until(async {
            let mut app = create_test_app(true);
            app.show(&search_results()).await.unwrap();

            app.handle_event(Event::Key(key(KeyCode::Char('q')))).await;
            assert!(app.modal().is_any_modal_open());

            // Back-to-back events still let the answer reach the flow.
            app.handle_event(Event::Key(key(KeyCode::Enter))).await;
            app.handle_event(Event::Key(key(KeyCode::Char('x')))).await;
            assert!(app.should_quit());
        })
        .await;
}

#[tokio::test]
async fn released_keys_are_ignored() {
    let local = LocalSet::new();
    local
        .run_until(async {
            let mut app = create_test_app(false);
            let mut release = key(KeyCode::Char('q'));
            release.kind = KeyEventKind::Release;

            app.handle_event(Event::Key(release)).await;
            assert!(!app.should_quit());
        })
        .await;
}
