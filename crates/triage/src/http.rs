//! HTTP model client.

use serde_json::Value as JsonValue;
use tracing::warn;

use crate::gateway::ModelClient;
use crate::report::TriageError;

/// Where and how to reach the structured-output model provider.
#[derive(Debug, Clone)]
pub struct ModelEndpoint {
    /// Full URL of the provider's generate endpoint.
    pub url: String,
    /// Bearer token for the provider.
    pub api_key: String,
    /// Provider-side model name.
    pub model: String,
}

/// Blocking HTTP implementation of [`ModelClient`].
///
/// Sends the prompt and declared output schema in one POST and expects the
/// structured output under `output` in the response body. Timeouts and
/// retries are the provider's concern; a transport failure is surfaced as
/// [`TriageError::Provider`] for the single call that hit it.
#[derive(Debug)]
pub struct HttpModelClient {
    endpoint: ModelEndpoint,
    http: reqwest::blocking::Client,
}

impl HttpModelClient {
    pub fn new(endpoint: ModelEndpoint) -> Self {
        Self {
            endpoint,
            http: reqwest::blocking::Client::new(),
        }
    }
}

impl ModelClient for HttpModelClient {
    fn generate(
        &self,
        prompt: &str,
        output_schema: &JsonValue,
    ) -> Result<JsonValue, TriageError> {
        let body = serde_json::json!({
            "model": self.endpoint.model,
            "prompt": prompt,
            "outputSchema": output_schema,
        });

        let response = self
            .http
            .post(&self.endpoint.url)
            .bearer_auth(&self.endpoint.api_key)
            .json(&body)
            .send()
            .map_err(|e| {
                warn!(error = %e, "model request failed to send");
                TriageError::Provider(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "model provider returned an error status");
            return Err(TriageError::Provider(format!(
                "provider returned status {status}"
            )));
        }

        let mut payload: JsonValue = response
            .json()
            .map_err(|e| TriageError::MalformedOutput(e.to_string()))?;

        match payload.get_mut("output") {
            Some(output) => Ok(output.take()),
            None => Err(TriageError::MalformedOutput(
                "response body has no 'output' field".to_string(),
            )),
        }
    }
}
