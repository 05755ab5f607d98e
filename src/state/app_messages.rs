//! Async message processing.
//!
//! Applies background-task results to the application state. Every result
//! carries the generation of the query that started it; results from
//! superseded queries are dropped so an out-of-order completion can never
//! overwrite newer state.

use tracing::debug;

use super::App;
use crate::event::AppMessage;

impl App {
    /// Processes one message from a background task.
    pub(crate) fn process_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::OperationsFetched { generation, result } => {
                if !self.query.is_current(generation) {
                    debug!(generation, "dropping stale operations response");
                    return;
                }
                match result {
                    Ok(response) => {
                        self.data.set_response(response);
                        self.nav.sync_after_update(self.data.len());
                        self.query.succeed();
                    }
                    Err(message) => {
                        self.data.clear();
                        self.nav.reset();
                        self.query.fail(message);
                    }
                }
            }
        }
    }
}
