//! Start-up context storage for the review TUI.
//!
//! bubbletea-rs calls `Model::init()` as a static function, so the CLI
//! hands the drink identifier and gateway over through a `OnceLock` before
//! the program starts. Everything the view mutates lives on the model itself.

use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::api::{DrinkId, DrinkReviewGateway};
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};

/// Global storage for the start-up context.
///
/// This is set before the TUI program starts and read by
/// `DrinkReviewApp::init()`.
static REVIEW_CONTEXT: OnceLock<ReviewContext> = OnceLock::new();

/// Collaborators a mounted review view talks to.
#[derive(Clone)]
pub struct ReviewContext {
    drink_id: DrinkId,
    gateway: Arc<dyn DrinkReviewGateway>,
    telemetry: Arc<dyn TelemetrySink>,
}

impl ReviewContext {
    /// Creates a context that discards telemetry.
    #[must_use]
    pub fn new(drink_id: DrinkId, gateway: Arc<dyn DrinkReviewGateway>) -> Self {
        Self {
            drink_id,
            gateway,
            telemetry: Arc::new(NoopTelemetrySink),
        }
    }

    /// Replaces the telemetry sink.
    #[must_use]
    pub fn with_telemetry(mut self, telemetry: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Returns the drink under review.
    #[must_use]
    pub const fn drink_id(&self) -> &DrinkId {
        &self.drink_id
    }

    pub(crate) fn gateway(&self) -> Arc<dyn DrinkReviewGateway> {
        Arc::clone(&self.gateway)
    }

    pub(crate) fn telemetry(&self) -> Arc<dyn TelemetrySink> {
        Arc::clone(&self.telemetry)
    }
}

impl fmt::Debug for ReviewContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReviewContext")
            .field("drink_id", &self.drink_id)
            .finish_non_exhaustive()
    }
}

/// Sets the start-up context for the TUI application.
///
/// This must be called before starting the bubbletea-rs program.
///
/// # Returns
///
/// `true` if the context was set, `false` if it was already set.
pub fn set_review_context(context: ReviewContext) -> bool {
    REVIEW_CONTEXT.set(context).is_ok()
}

/// Gets a clone of the start-up context, if one was set.
pub(crate) fn review_context() -> Option<ReviewContext> {
    REVIEW_CONTEXT.get().cloned()
}
