//! Wiremock stand-in for the drink review API, paired with the Tokio runtime
//! that drives it.

use std::future::Future;
use std::io;
use std::rc::Rc;

use tokio::runtime::Runtime;
use wiremock::{Mock, MockServer};

/// A running mock review API that can be stored in an `rstest-bdd` Slot.
#[derive(Clone)]
pub struct ReviewServer {
    runtime: Rc<Runtime>,
    server: Rc<MockServer>,
}

impl ReviewServer {
    /// Starts a runtime and a mock server on it.
    ///
    /// # Errors
    ///
    /// Returns an error if the Tokio runtime cannot be created.
    pub fn start() -> Result<Self, io::Error> {
        let runtime = Runtime::new()?;
        let server = runtime.block_on(MockServer::start());
        Ok(Self {
            runtime: Rc::new(runtime),
            server: Rc::new(server),
        })
    }

    /// Base URL to point the gateway at.
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Registers a mocked endpoint.
    pub fn mount(&self, mock: Mock) {
        self.runtime.block_on(mock.mount(&self.server));
    }

    /// Drives `future` to completion on the shared runtime.
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    /// Counts received requests matching `method` and `path`.
    pub fn request_count(&self, method: &str, path: &str) -> usize {
        self.runtime
            .block_on(self.server.received_requests())
            .unwrap_or_default()
            .iter()
            .filter(|request| request.method.as_str() == method && request.url.path() == path)
            .count()
    }
}
