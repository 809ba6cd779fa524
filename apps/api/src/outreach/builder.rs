//! Request Builder: turns a `ContactRequest` into the prompt, system
//! instruction and response schema for one generation call.
//!
//! Pure: no I/O, no validation. Callers check the submission precondition first.

use crate::llm_client::schema::Schema;
use crate::llm_client::GenerateContentRequest;
use crate::outreach::models::ContactRequest;
use crate::outreach::prompts::{
    render_user_prompt, scenario_label, CONNECTION_POINT_DESCRIPTION,
    CUSTOMER_ANALYSIS_DESCRIPTION, EMPTY_FIELD_PLACEHOLDER, SCRIPT_DESCRIPTION,
    SYSTEM_INSTRUCTION, VALUE_PROP_DESCRIPTION,
};

/// Fixed sampling temperature; trades determinism for phrasing variety.
pub const TEMPERATURE: f32 = 0.7;

/// Everything needed for one provider call.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltRequest {
    pub system_instruction: &'static str,
    pub prompt: String,
    pub schema: Schema,
    pub temperature: f32,
}

impl BuiltRequest {
    pub fn to_provider_request(&self) -> GenerateContentRequest<'_> {
        GenerateContentRequest::json(
            self.system_instruction,
            &self.prompt,
            &self.schema,
            self.temperature,
        )
    }
}

pub fn build_request(request: &ContactRequest) -> BuiltRequest {
    BuiltRequest {
        system_instruction: SYSTEM_INSTRUCTION,
        prompt: build_prompt(request),
        schema: response_schema(),
        temperature: TEMPERATURE,
    }
}

pub fn build_prompt(request: &ContactRequest) -> String {
    render_user_prompt(
        scenario_label(request.scenario),
        &request.company_name,
        &request.contact_name,
        or_placeholder(&request.position),
        or_placeholder(&request.additional_info),
    )
}

/// `{script: string, analysis: {customerAnalysis, connectionPoint, valueProp}}`, all required.
pub fn response_schema() -> Schema {
    Schema::object()
        .required_property(
            "script",
            Schema::string().with_description(SCRIPT_DESCRIPTION),
        )
        .required_property(
            "analysis",
            Schema::object()
                .required_property(
                    "customerAnalysis",
                    Schema::string().with_description(CUSTOMER_ANALYSIS_DESCRIPTION),
                )
                .required_property(
                    "connectionPoint",
                    Schema::string().with_description(CONNECTION_POINT_DESCRIPTION),
                )
                .required_property(
                    "valueProp",
                    Schema::string().with_description(VALUE_PROP_DESCRIPTION),
                ),
        )
}

fn or_placeholder(value: &str) -> &str {
    if value.trim().is_empty() {
        EMPTY_FIELD_PLACEHOLDER
    } else {
        value
    }
}
