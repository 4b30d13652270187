//! Tests for the drink review application model.

use std::sync::Arc;

use bubbletea_rs::{Cmd, Model};
use crossterm::event::{KeyCode, KeyModifiers};
use rstest::{fixture, rstest};

use super::*;
use crate::api::gateway::MockDrinkReviewGateway;
use crate::api::{DrinkBundle, DrinkId, ReviewError};
use crate::telemetry::TelemetryEvent;
use crate::telemetry::test_support::RecordingTelemetrySink;
use crate::tui::messages::ReviewOperation;

fn comment(id: &str, text: &str) -> Comment {
    Comment::new(CommentId::new(id), text)
}

#[fixture]
fn bundle() -> DrinkBundle {
    DrinkBundle {
        drink: Drink {
            id: Some("11007".to_owned()),
            name: Some("Margarita".to_owned()),
            category: Some("Ordinary Drink".to_owned()),
            glass: Some("Cocktail glass".to_owned()),
            ingredients: vec!["Tequila".to_owned(), "Lime juice".to_owned()],
            thumbnail_url: None,
        },
        comments: vec![comment("1", "first"), comment("2", "second"), comment("3", "third")],
        average_rating: AverageRating::new(3.5),
    }
}

fn context_for(gateway: MockDrinkReviewGateway) -> ReviewContext {
    let drink_id = DrinkId::new("11007").expect("drink id should be valid");
    ReviewContext::new(drink_id, Arc::new(gateway))
}

fn api_error() -> ReviewError {
    ReviewError::Api {
        message: "server exploded".to_owned(),
    }
}

/// Runs `cmd` and every follow-up command, feeding each result back into the
/// app.
fn settle(app: &mut DrinkReviewApp, cmd: Option<Cmd>) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("runtime should build");
    let mut pending = cmd;
    while let Some(next) = pending.take() {
        let Some(msg) = runtime.block_on(next) else {
            break;
        };
        let app_msg = msg
            .downcast::<AppMsg>()
            .expect("command should resolve to an AppMsg");
        pending = app.handle_message(&app_msg);
    }
}

fn send(app: &mut DrinkReviewApp, msg: &AppMsg) {
    let cmd = app.handle_message(msg);
    settle(app, cmd);
}

/// Mounts an app whose initial load returns `bundle`.
fn loaded_app(mut gateway: MockDrinkReviewGateway, bundle: DrinkBundle) -> DrinkReviewApp {
    gateway
        .expect_drink_bundle()
        .times(1)
        .returning(move |_| Ok(bundle.clone()));
    let (mut app, cmd) = DrinkReviewApp::mount(context_for(gateway));
    settle(&mut app, cmd);
    app
}

fn comment_ids(app: &DrinkReviewApp) -> Vec<&str> {
    app.comments().iter().map(|c| c.id.as_str()).collect()
}

fn assert_error_only_view(app: &DrinkReviewApp, expected: &str) {
    let view = app.view();
    assert_eq!(app.error(), Some(expected));
    assert!(view.contains(expected), "error missing from view:\n{view}");
    assert!(
        !view.contains("Average Rating"),
        "populated view should be hidden:\n{view}"
    );
}

#[test]
fn new_app_starts_loading() {
    let app = DrinkReviewApp::new(context_for(MockDrinkReviewGateway::new()));

    assert!(app.is_loading());
    assert!(app.view().contains("Loading..."));
    assert_eq!(app.selected_rating_value(), 0);
}

#[rstest]
fn initial_load_renders_average_to_one_decimal(bundle: DrinkBundle) {
    let app = loaded_app(MockDrinkReviewGateway::new(), bundle);

    let view = app.view();
    assert!(!app.is_loading());
    assert!(view.contains("Average Rating: 3.5"), "view was:\n{view}");
    assert!(view.contains("Margarita"));
    assert!(view.contains("first"));
    assert!(view.contains("Add a comment..."));
    assert_eq!(comment_ids(&app), vec!["1", "2", "3"]);
}

#[test]
fn initial_load_without_comments_shows_empty_notice() {
    let app = loaded_app(MockDrinkReviewGateway::new(), DrinkBundle::default());

    assert!(app.view().contains("No comments yet."));
}

#[test]
fn initial_load_failure_shows_only_the_error() {
    let mut gateway = MockDrinkReviewGateway::new();
    gateway
        .expect_drink_bundle()
        .times(1)
        .returning(|_| Err(api_error()));

    let (mut app, cmd) = DrinkReviewApp::mount(context_for(gateway));
    settle(&mut app, cmd);

    assert!(!app.is_loading());
    assert_error_only_view(&app, "Failed to fetch drink data");
    assert!(!app.view().contains("Loading..."));
}

#[rstest]
fn submitting_a_comment_appends_it_and_clears_input(bundle: DrinkBundle) {
    let mut gateway = MockDrinkReviewGateway::new();
    gateway
        .expect_add_comment()
        .withf(|drink_id, text| drink_id.as_str() == "11007" && text == "Great")
        .times(1)
        .returning(|_, text| Ok(comment("4", text)));
    let mut app = loaded_app(gateway, bundle);

    send(&mut app, &AppMsg::StartComposing);
    "Great"
        .chars()
        .for_each(|c| send(&mut app, &AppMsg::ComposeInsertChar(c)));
    send(&mut app, &AppMsg::SubmitComment);

    assert_eq!(comment_ids(&app), vec!["1", "2", "3", "4"]);
    assert_eq!(app.comments().last().map(|c| c.text.as_str()), Some("Great"));
    assert_eq!(app.new_comment_text(), "");
    assert!(app.error().is_none());
}

#[rstest]
#[case::empty("")]
#[case::whitespace("   ")]
fn blank_comment_makes_no_request(bundle: DrinkBundle, #[case] text: &str) {
    let mut gateway = MockDrinkReviewGateway::new();
    gateway.expect_add_comment().never();
    let mut app = loaded_app(gateway, bundle);

    text.chars()
        .for_each(|c| send(&mut app, &AppMsg::ComposeInsertChar(c)));
    let cmd = app.handle_message(&AppMsg::SubmitComment);

    assert!(cmd.is_none());
    assert_eq!(app.comments().len(), 3);
}

#[rstest]
fn failed_comment_keeps_input_text(bundle: DrinkBundle) {
    let mut gateway = MockDrinkReviewGateway::new();
    gateway
        .expect_add_comment()
        .times(1)
        .returning(|_, _| Err(api_error()));
    let mut app = loaded_app(gateway, bundle);

    "Nice"
        .chars()
        .for_each(|c| send(&mut app, &AppMsg::ComposeInsertChar(c)));
    send(&mut app, &AppMsg::SubmitComment);

    assert_eq!(app.new_comment_text(), "Nice");
    assert_eq!(app.comments().len(), 3);
    assert_error_only_view(&app, "Failed to add comment");
}

#[rstest]
fn deleting_removes_exactly_that_comment(bundle: DrinkBundle) {
    let mut gateway = MockDrinkReviewGateway::new();
    gateway
        .expect_delete_comment()
        .withf(|_, comment_id| comment_id.as_str() == "2")
        .times(1)
        .returning(|_, _| Ok(()));
    let mut app = loaded_app(gateway, bundle);

    send(&mut app, &AppMsg::CursorDown);
    send(&mut app, &AppMsg::DeleteSelected);

    assert_eq!(comment_ids(&app), vec!["1", "3"]);
    assert_eq!(app.cursor_position(), 1);
}

#[rstest]
fn deleting_the_last_comment_moves_cursor_up(bundle: DrinkBundle) {
    let mut gateway = MockDrinkReviewGateway::new();
    gateway
        .expect_delete_comment()
        .times(1)
        .returning(|_, _| Ok(()));
    let mut app = loaded_app(gateway, bundle);

    assert!(app.select_by_id(&CommentId::new("3")));
    send(&mut app, &AppMsg::DeleteSelected);

    assert_eq!(comment_ids(&app), vec!["1", "2"]);
    assert_eq!(app.cursor_position(), 1);
}

#[rstest]
fn failed_delete_leaves_comments_unchanged(bundle: DrinkBundle) {
    let mut gateway = MockDrinkReviewGateway::new();
    gateway
        .expect_delete_comment()
        .times(1)
        .returning(|_, _| Err(api_error()));
    let mut app = loaded_app(gateway, bundle);

    send(&mut app, &AppMsg::DeleteSelected);

    assert_eq!(comment_ids(&app), vec!["1", "2", "3"]);
    assert_error_only_view(&app, "Failed to delete comment");
}

#[rstest]
fn editing_replaces_text_in_place(bundle: DrinkBundle) {
    let mut gateway = MockDrinkReviewGateway::new();
    gateway
        .expect_edit_comment()
        .withf(|_, comment_id, text| comment_id.as_str() == "2" && text == "second!")
        .times(1)
        .returning(|_, comment_id, text| Ok(Comment::new(comment_id.clone(), text)));
    let mut app = loaded_app(gateway, bundle);

    send(&mut app, &AppMsg::CursorDown);
    send(&mut app, &AppMsg::EditSelected);
    assert_eq!(app.edit_text(), Some("second"));
    assert_eq!(app.input_context(), InputContext::Editing);

    send(&mut app, &AppMsg::EditInsertChar('!'));
    send(&mut app, &AppMsg::CommitEdit);

    assert_eq!(comment_ids(&app), vec!["1", "2", "3"]);
    assert_eq!(
        app.comments().get(1).map(|c| c.text.as_str()),
        Some("second!")
    );
    assert!(app.editing_comment_id().is_none());
}

#[rstest]
fn failed_edit_stays_in_edit_mode(bundle: DrinkBundle) {
    let mut gateway = MockDrinkReviewGateway::new();
    gateway
        .expect_edit_comment()
        .times(1)
        .returning(|_, _, _| Err(api_error()));
    let mut app = loaded_app(gateway, bundle);

    send(&mut app, &AppMsg::EditSelected);
    send(&mut app, &AppMsg::EditBackspace);
    send(&mut app, &AppMsg::CommitEdit);

    assert_eq!(app.editing_comment_id().map(CommentId::as_str), Some("1"));
    assert_eq!(app.edit_text(), Some("firs"));
    assert_eq!(app.comments().first().map(|c| c.text.as_str()), Some("first"));
    assert_error_only_view(&app, "Failed to update comment");
}

#[rstest]
fn unchanged_edit_sends_multi_line_text_back_verbatim(mut bundle: DrinkBundle) {
    const ORIGINAL: &str = "Line one\nLine two\twith tab";
    bundle.comments = vec![comment("1", ORIGINAL)];
    let mut gateway = MockDrinkReviewGateway::new();
    gateway
        .expect_edit_comment()
        .withf(|_, comment_id, text| comment_id.as_str() == "1" && text == ORIGINAL)
        .times(1)
        .returning(|_, comment_id, text| Ok(Comment::new(comment_id.clone(), text)));
    let mut app = loaded_app(gateway, bundle);

    send(&mut app, &AppMsg::EditSelected);
    assert_eq!(app.edit_text(), Some(ORIGINAL));
    send(&mut app, &AppMsg::CommitEdit);

    assert_eq!(app.comments().first().map(|c| c.text.as_str()), Some(ORIGINAL));
    assert!(app.editing_comment_id().is_none());
}

#[rstest]
fn edit_response_replaces_the_requested_comment(bundle: DrinkBundle) {
    let mut gateway = MockDrinkReviewGateway::new();
    gateway
        .expect_edit_comment()
        .times(1)
        .returning(|_, _, text| Ok(Comment::new(CommentId::new("02"), text)));
    let mut app = loaded_app(gateway, bundle);

    send(&mut app, &AppMsg::CursorDown);
    send(&mut app, &AppMsg::EditSelected);
    send(&mut app, &AppMsg::EditInsertChar('!'));
    send(&mut app, &AppMsg::CommitEdit);

    assert_eq!(comment_ids(&app), vec!["1", "02", "3"]);
    assert_eq!(
        app.comments().get(1).map(|c| c.text.as_str()),
        Some("second!")
    );
    assert!(app.editing_comment_id().is_none());
}

#[rstest]
fn cancelling_an_edit_discards_the_buffer(bundle: DrinkBundle) {
    let mut gateway = MockDrinkReviewGateway::new();
    gateway.expect_edit_comment().never();
    let mut app = loaded_app(gateway, bundle);

    send(&mut app, &AppMsg::EditSelected);
    send(&mut app, &AppMsg::EditInsertChar('?'));
    send(&mut app, &AppMsg::CancelEdit);

    assert!(app.editing_comment_id().is_none());
    assert_eq!(app.comments().first().map(|c| c.text.as_str()), Some("first"));
}

#[rstest]
fn commit_without_active_edit_is_a_no_op(bundle: DrinkBundle) {
    let mut gateway = MockDrinkReviewGateway::new();
    gateway.expect_edit_comment().never();
    let mut app = loaded_app(gateway, bundle);

    assert!(app.handle_message(&AppMsg::CommitEdit).is_none());
}

#[rstest]
fn deleting_the_comment_under_edit_leaves_edit_mode(bundle: DrinkBundle) {
    let mut app = loaded_app(MockDrinkReviewGateway::new(), bundle);
    app.begin_edit(CommentEdit::begin(CommentId::new("2"), "second"));

    send(&mut app, &AppMsg::CommentDeleted(CommentId::new("2")));

    assert!(app.editing_comment_id().is_none());
    assert_eq!(comment_ids(&app), vec!["1", "3"]);
}

#[rstest]
fn submitting_without_selection_makes_no_call(bundle: DrinkBundle) {
    let mut gateway = MockDrinkReviewGateway::new();
    gateway.expect_submit_rating().never();
    let mut app = loaded_app(gateway, bundle);

    let cmd = app.handle_message(&AppMsg::SubmitRating);

    assert!(cmd.is_none());
    assert_eq!(app.average_rating().to_string(), "3.5");
}

#[rstest]
fn submitted_rating_halves_the_sum(mut bundle: DrinkBundle) {
    bundle.average_rating = AverageRating::new(3.6);
    let mut gateway = MockDrinkReviewGateway::new();
    gateway
        .expect_submit_rating()
        .withf(|_, rating| rating.get() == 4)
        .times(1)
        .returning(|_, _| Ok(()));
    let mut app = loaded_app(gateway, bundle);

    send(&mut app, &AppMsg::SelectRating(4));
    assert_eq!(app.selected_rating_value(), 4);
    send(&mut app, &AppMsg::SubmitRating);

    assert_eq!(app.average_rating().to_string(), "3.8");
    assert_eq!(app.selected_rating_value(), 0);
    assert!(app.view().contains("Average Rating: 3.8"));
}

#[rstest]
fn failed_rating_keeps_selection(bundle: DrinkBundle) {
    let mut gateway = MockDrinkReviewGateway::new();
    gateway
        .expect_submit_rating()
        .times(1)
        .returning(|_, _| Err(api_error()));
    let mut app = loaded_app(gateway, bundle);

    send(&mut app, &AppMsg::SelectRating(2));
    send(&mut app, &AppMsg::SubmitRating);

    assert_eq!(app.selected_rating_value(), 2);
    assert_eq!(app.average_rating().to_string(), "3.5");
    assert_error_only_view(&app, "Failed to add rating");
}

#[rstest]
#[case::clear(0, 0)]
#[case::out_of_range(9, 3)]
fn rating_selection_ignores_invalid_values(
    bundle: DrinkBundle,
    #[case] value: u8,
    #[case] expected: u8,
) {
    let mut app = loaded_app(MockDrinkReviewGateway::new(), bundle);
    send(&mut app, &AppMsg::SelectRating(3));

    send(&mut app, &AppMsg::SelectRating(value));

    assert_eq!(app.selected_rating_value(), expected);
}

#[rstest]
#[case::load(ReviewOperation::LoadDrink)]
#[case::add(ReviewOperation::AddComment)]
#[case::delete(ReviewOperation::DeleteComment)]
#[case::edit(ReviewOperation::EditComment)]
#[case::rating(ReviewOperation::SubmitRating)]
fn any_failure_hides_the_populated_view_for_good(
    bundle: DrinkBundle,
    #[case] operation: ReviewOperation,
) {
    let mut app = loaded_app(MockDrinkReviewGateway::new(), bundle);

    send(
        &mut app,
        &AppMsg::RequestFailed {
            operation,
            detail: "boom".to_owned(),
        },
    );
    send(&mut app, &AppMsg::CommentAdded(comment("9", "late arrival")));

    assert_error_only_view(&app, operation.failure_message());
    assert!(!app.view().contains("late arrival"));
}

#[test]
fn loading_view_takes_precedence_over_errors() {
    let mut app = DrinkReviewApp::new(context_for(MockDrinkReviewGateway::new()));

    send(
        &mut app,
        &AppMsg::RequestFailed {
            operation: ReviewOperation::AddComment,
            detail: "boom".to_owned(),
        },
    );

    let view = app.view();
    assert_eq!(app.error(), Some(ReviewOperation::AddComment.failure_message()));
    assert!(view.contains("Loading..."), "view was:\n{view}");
    assert!(!view.contains(ReviewOperation::AddComment.failure_message()));
}

#[rstest]
fn reload_leaves_the_error_view(bundle: DrinkBundle) {
    let mut gateway = MockDrinkReviewGateway::new();
    let mut attempts = 0_u8;
    let loaded = bundle.clone();
    gateway.expect_drink_bundle().times(2).returning(move |_| {
        attempts = attempts.saturating_add(1);
        if attempts == 1 {
            Err(api_error())
        } else {
            Ok(loaded.clone())
        }
    });
    let (mut app, cmd) = DrinkReviewApp::mount(context_for(gateway));
    settle(&mut app, cmd);
    assert!(app.error().is_some());

    send(&mut app, &AppMsg::ReloadRequested);

    assert!(app.error().is_none());
    assert!(app.view().contains("Average Rating: 3.5"));
    assert_eq!(app.comments(), bundle.comments.as_slice());
}

#[rstest]
fn requests_record_telemetry(bundle: DrinkBundle) {
    let mut gateway = MockDrinkReviewGateway::new();
    gateway
        .expect_drink_bundle()
        .times(1)
        .returning(move |_| Ok(bundle.clone()));
    gateway
        .expect_submit_rating()
        .times(1)
        .returning(|_, _| Err(api_error()));
    let sink = Arc::new(RecordingTelemetrySink::default());
    let context = context_for(gateway).with_telemetry(sink.clone());

    let (mut app, cmd) = DrinkReviewApp::mount(context);
    settle(&mut app, cmd);
    send(&mut app, &AppMsg::SelectRating(5));
    send(&mut app, &AppMsg::SubmitRating);

    let outcomes: Vec<(String, bool)> = sink
        .events()
        .into_iter()
        .map(|event| match event {
            TelemetryEvent::RequestCompleted {
                operation, success, ..
            } => (operation, success),
        })
        .collect();
    assert_eq!(
        outcomes,
        vec![
            ("load_drink".to_owned(), true),
            ("submit_rating".to_owned(), false),
        ]
    );
}

#[test]
fn unconfigured_app_reports_load_failure() {
    let mut app = DrinkReviewApp::unconfigured();

    let cmd = app.load_command();

    assert!(cmd.is_none());
    assert_error_only_view(&app, "Failed to fetch drink data");
}

#[rstest]
fn cursor_stays_within_comments(bundle: DrinkBundle) {
    let mut app = loaded_app(MockDrinkReviewGateway::new(), bundle);

    send(&mut app, &AppMsg::CursorUp);
    assert_eq!(app.cursor_position(), 0);

    for _ in 0..5 {
        send(&mut app, &AppMsg::CursorDown);
    }
    assert_eq!(app.cursor_position(), 2);
}

#[rstest]
fn key_presses_drive_the_rating_widget(bundle: DrinkBundle) {
    let mut app = loaded_app(MockDrinkReviewGateway::new(), bundle);

    let cmd = app.update(Box::new(bubbletea_rs::event::KeyMsg {
        key: KeyCode::Char('4'),
        modifiers: KeyModifiers::empty(),
    }));

    assert!(cmd.is_none());
    assert_eq!(app.selected_rating_value(), 4);
    assert!(app.view().contains("★★★★☆ (4/5)"));
}

#[rstest]
fn help_overlay_closes_on_any_key(bundle: DrinkBundle) {
    let mut app = loaded_app(MockDrinkReviewGateway::new(), bundle);
    send(&mut app, &AppMsg::ToggleHelp);
    assert!(app.view().contains("Keyboard Shortcuts"));

    let _ = app.update(Box::new(bubbletea_rs::event::KeyMsg {
        key: KeyCode::Char('4'),
        modifiers: KeyModifiers::empty(),
    }));

    assert!(!app.view().contains("Keyboard Shortcuts"));
    assert_eq!(app.selected_rating_value(), 0);
}

#[rstest]
fn view_fills_the_terminal(bundle: DrinkBundle) {
    let mut app = loaded_app(MockDrinkReviewGateway::new(), bundle);
    send(
        &mut app,
        &AppMsg::WindowResized {
            width: 40,
            height: 10,
        },
    );

    let view = app.view();

    assert_eq!(view.lines().count(), 10);
    assert!(
        view.lines()
            .all(|line| unicode_width::UnicodeWidthStr::width(line) == 39)
    );
}

#[rstest]
fn typing_in_the_form_does_not_trigger_browse_keys(bundle: DrinkBundle) {
    let mut gateway = MockDrinkReviewGateway::new();
    gateway.expect_delete_comment().never();
    let mut app = loaded_app(gateway, bundle);

    send(&mut app, &AppMsg::StartComposing);
    for code in [KeyCode::Char('d'), KeyCode::Char('q')] {
        let cmd = app.update(Box::new(bubbletea_rs::event::KeyMsg {
            key: code,
            modifiers: KeyModifiers::empty(),
        }));
        assert!(cmd.is_none());
    }

    assert_eq!(app.new_comment_text(), "dq");
    assert_eq!(app.comments().len(), 3);
}
