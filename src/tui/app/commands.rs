//! Request commands for the review TUI.
//!
//! Each user action that needs the server becomes one asynchronous command.
//! The command times the request, records a telemetry event, and resolves to
//! the success or failure message for the update loop.

use std::any::Any;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use bubbletea_rs::Cmd;

use super::DrinkReviewApp;
use crate::api::{DrinkId, DrinkReviewGateway, ReviewError};
use crate::telemetry::TelemetryEvent;
use crate::tui::messages::{AppMsg, ReviewOperation};

impl DrinkReviewApp {
    /// Builds the command performing `operation` against the gateway.
    ///
    /// `call` receives the gateway and drink identifier and returns the
    /// request future; `on_success` turns its value into the outcome message.
    /// Without a review context no request can be made and the failure is
    /// recorded immediately.
    pub(super) fn request<T, F, Fut, S>(
        &mut self,
        operation: ReviewOperation,
        call: F,
        on_success: S,
    ) -> Option<Cmd>
    where
        T: Send + 'static,
        F: FnOnce(Arc<dyn DrinkReviewGateway>, DrinkId) -> Fut,
        Fut: Future<Output = Result<T, ReviewError>> + Send + 'static,
        S: FnOnce(T) -> AppMsg + Send + 'static,
    {
        let Some(context) = self.context.clone() else {
            self.record_failure(operation, "no review context configured");
            return None;
        };

        tracing::debug!(
            operation = operation.label(),
            drink_id = %context.drink_id(),
            "issuing review request"
        );
        let telemetry = context.telemetry();
        let request = call(context.gateway(), context.drink_id().clone());

        Some(Box::pin(async move {
            let started = Instant::now();
            let result = request.await;
            let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
            telemetry.record(TelemetryEvent::RequestCompleted {
                operation: operation.label().to_owned(),
                latency_ms,
                success: result.is_ok(),
            });

            let msg = match result {
                Ok(value) => on_success(value),
                Err(error) => AppMsg::RequestFailed {
                    operation,
                    detail: error.to_string(),
                },
            };
            Some(Box::new(msg) as Box<dyn Any + Send>)
        }))
    }

    /// Returns the command fetching the drink bundle.
    ///
    /// Used on mount and after a reload.
    pub fn load_command(&mut self) -> Option<Cmd> {
        self.request(
            ReviewOperation::LoadDrink,
            |gateway, drink_id| async move { gateway.drink_bundle(&drink_id).await },
            AppMsg::DrinkLoaded,
        )
    }

    /// Logs a failed operation and switches to the error view.
    pub(super) fn record_failure(&mut self, operation: ReviewOperation, detail: &str) {
        tracing::warn!(
            operation = operation.label(),
            detail,
            "review request failed"
        );
        if operation == ReviewOperation::LoadDrink {
            self.loading = false;
        }
        self.error = Some(operation.failure_message().to_owned());
    }
}
