//! Custom form lifecycle: send a payload, receive one response, complete.

use std::fmt;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::ValidationResult;

use super::builder::FormBuilder;
use super::response::FormResponse;

/// Callback invoked once with the processed response.
pub type CompletionCallback = Box<dyn FnOnce(FormResponse) + Send>;

/// A custom form paired with the callback that consumes its response.
///
/// The form is built through [`builder_mut`](Self::builder_mut) during setup,
/// serialized with [`payload`](Self::payload), and completed by
/// [`respond`](Self::respond) when the client answers.
pub struct CustomForm {
    builder: FormBuilder,
    callback: Option<CompletionCallback>,
}

impl CustomForm {
    /// Create an empty form that reports its response to `callback`.
    pub fn new(
        title: impl Into<String>,
        callback: impl FnOnce(FormResponse) + Send + 'static,
    ) -> Self {
        Self::from_builder(FormBuilder::new(title), callback)
    }

    /// Wrap an already populated builder.
    pub fn from_builder(
        builder: FormBuilder,
        callback: impl FnOnce(FormResponse) + Send + 'static,
    ) -> Self {
        Self {
            builder,
            callback: Some(Box::new(callback)),
        }
    }

    pub fn builder(&self) -> &FormBuilder {
        &self.builder
    }

    pub fn builder_mut(&mut self) -> &mut FormBuilder {
        &mut self.builder
    }

    /// The JSON payload to send to the client.
    pub fn payload(&self) -> Value {
        self.builder.to_payload()
    }

    /// Whether the callback has already run.
    pub fn is_completed(&self) -> bool {
        self.callback.is_none()
    }

    /// Process a raw client response and hand the result to the callback.
    ///
    /// The callback runs at most once. An invalid response is returned to the
    /// caller and leaves the form waiting for another response.
    pub fn respond(&mut self, raw: Value) -> ValidationResult<()> {
        let response = match self.builder.process_data(raw) {
            Ok(response) => response,
            Err(e) => {
                warn!(form = %self.builder.title(), error = %e, "rejected form response");
                return Err(e);
            }
        };

        match self.callback.take() {
            Some(callback) => callback(response),
            None => debug!(
                form = %self.builder.title(),
                "form already completed; response ignored"
            ),
        }
        Ok(())
    }
}

impl fmt::Debug for CustomForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomForm")
            .field("builder", &self.builder)
            .field("completed", &self.is_completed())
            .finish()
    }
}
