//! The triage gateway: one structured-output model call per request.

use serde_json::{Value as JsonValue, json};
use tracing::{debug, warn};

use crate::report::{TriageError, TriageOutcome, TriageReport};
use crate::request::TriageRequest;

/// A structured-output model collaborator.
///
/// One request, one response: implementations send `prompt` with
/// `output_schema` declared and return the model's JSON output. No retries
/// and no streaming belong behind this trait.
pub trait ModelClient: Send + Sync {
    fn generate(&self, prompt: &str, output_schema: &JsonValue)
    -> Result<JsonValue, TriageError>;
}

impl<C> ModelClient for std::sync::Arc<C>
where
    C: ModelClient + ?Sized,
{
    fn generate(
        &self,
        prompt: &str,
        output_schema: &JsonValue,
    ) -> Result<JsonValue, TriageError> {
        (**self).generate(prompt, output_schema)
    }
}

/// The declared output shape forwarded to the model with every call.
pub fn output_schema() -> JsonValue {
    json!({
        "type": "object",
        "properties": {
            "likelyCondition": {
                "type": "string",
                "description": "The likely condition of the animal based on the medical history."
            },
            "triageQuestions": {
                "type": "array",
                "items": { "type": "string" },
                "description": "A list of suggested triage questions to ask the vet."
            },
            "suggestedTreatments": {
                "type": "array",
                "items": { "type": "string" },
                "description": "A list of suggested treatments based on the likely condition."
            }
        },
        "required": ["likelyCondition", "triageQuestions", "suggestedTreatments"]
    })
}

fn build_prompt(medical_history: &str) -> String {
    format!(
        "You are an AI assistant that helps vets with the triage process.\n\
         \n\
         Based on the provided medical history, you will determine the likely \
         condition of the animal, suggest triage questions to ask, and suggest \
         possible treatments.\n\
         \n\
         IMPORTANT: You must detect the language of the input 'medicalHistory'. \
         Your entire response, including all fields in the output, must be in \
         the same language as the input. For example, if the input is in Roman \
         Urdu, your output must also be in Roman Urdu.\n\
         \n\
         Medical History: {medical_history}\n\
         \n\
         Consider all possible conditions, and provide a broad list of possible \
         triage questions and treatments.\n\
         \n\
         Ensure the output is well-formatted and easy to read.\n"
    )
}

/// Forwards validated triage requests to the model and parses the result.
///
/// The call either returns a fully populated [`TriageReport`] or fails
/// atomically with one typed error. Concurrent submissions are fine; each
/// outcome carries its request id so callers can drop stale answers.
#[derive(Debug)]
pub struct TriageGateway<C: ModelClient> {
    client: C,
}

impl<C: ModelClient> TriageGateway<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn triage(&self, request: &TriageRequest) -> Result<TriageOutcome, TriageError> {
        let prompt = build_prompt(request.medical_history());
        debug!(request_id = %request.id(), "dispatching triage request");

        let output = self.client.generate(&prompt, &output_schema())?;
        let report: TriageReport = serde_json::from_value(output).map_err(|e| {
            warn!(request_id = %request.id(), error = %e, "triage output rejected");
            TriageError::MalformedOutput(e.to_string())
        })?;

        Ok(TriageOutcome {
            request_id: request.id(),
            report,
        })
    }
}
