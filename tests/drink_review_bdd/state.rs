//! Scenario state for drink review BDD tests.

use std::sync::Arc;

use bubbletea_rs::{Cmd, Model};
use drink_reviews::telemetry::test_support::RecordingTelemetrySink;
use drink_reviews::tui::DrinkReviewApp;
use drink_reviews::tui::messages::AppMsg;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

use crate::support::review_server::ReviewServer;

/// State shared across steps in a drink review scenario.
#[derive(ScenarioState, Default)]
pub(crate) struct ReviewState {
    /// Mock review API and its runtime.
    pub(crate) server: Slot<ReviewServer>,
    /// The TUI application model under test.
    pub(crate) app: Slot<DrinkReviewApp>,
    /// Recording telemetry sink wired into the app.
    pub(crate) telemetry_sink: Slot<Arc<RecordingTelemetrySink>>,
}

impl ReviewState {
    /// Returns the mock API, starting it on first use.
    #[expect(clippy::expect_used, reason = "test helper; panics acceptable")]
    pub(crate) fn server(&self) -> ReviewServer {
        if self.server.with_ref(|_| ()).is_none() {
            self.server
                .set(ReviewServer::start().expect("review server should start"));
        }
        self.server.get().expect("review server not initialised")
    }

    /// Sends one message to the app and runs every command it triggers.
    #[expect(clippy::expect_used, reason = "test helper; panics acceptable")]
    pub(crate) fn dispatch(&self, msg: &AppMsg) {
        let server = self.server();
        self.app
            .with_mut(|app| {
                let cmd = app.handle_message(msg);
                settle(&server, app, cmd);
            })
            .expect("app not initialised");
    }

    /// Sends each message in turn.
    pub(crate) fn dispatch_all(&self, msgs: impl IntoIterator<Item = AppMsg>) {
        for msg in msgs {
            self.dispatch(&msg);
        }
    }

    /// Reads from the app.
    #[expect(clippy::expect_used, reason = "test helper; panics acceptable")]
    pub(crate) fn with_app<R>(&self, read: impl FnOnce(&DrinkReviewApp) -> R) -> R {
        self.app.with_ref(read).expect("app not initialised")
    }

    /// Renders the current frame.
    pub(crate) fn rendered_view(&self) -> String {
        self.with_app(DrinkReviewApp::view)
    }
}

/// Runs `cmd` and its follow-ups on the server's runtime, feeding each
/// resulting message back into `app`.
pub(crate) fn settle(server: &ReviewServer, app: &mut DrinkReviewApp, cmd: Option<Cmd>) {
    let mut pending = cmd;
    while let Some(next) = pending.take() {
        let Some(msg) = server.block_on(next) else {
            break;
        };
        let Ok(app_msg) = msg.downcast::<AppMsg>() else {
            break;
        };
        pending = app.handle_message(&app_msg);
    }
}
