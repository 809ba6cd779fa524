//! Input and output shapes of a single generation cycle.

use serde::{Deserialize, Serialize};

/// Advisory upper bound on script length, counted in characters including punctuation.
pub const SCRIPT_CHAR_LIMIT: usize = 50;

/// The communication context the script is written for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Scenario {
    #[default]
    ColdCall,
    OfflineEvent,
    Referral,
    FollowUp,
    Partnership,
}

impl Scenario {
    pub const ALL: [Scenario; 5] = [
        Scenario::ColdCall,
        Scenario::OfflineEvent,
        Scenario::Referral,
        Scenario::FollowUp,
        Scenario::Partnership,
    ];

    /// Short label shown on the form's scenario picker.
    pub fn form_label(self) -> &'static str {
        match self {
            Scenario::ColdCall => "首次陌生拜访",
            Scenario::OfflineEvent => "展会/活动",
            Scenario::Referral => "熟人/客户介绍",
            Scenario::FollowUp => "再次跟进",
            Scenario::Partnership => "商务合作",
        }
    }
}

/// Everything the form collects about a prospective contact.
///
/// `position` and `additional_info` are optional; an empty string means "not given".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub company_name: String,
    pub contact_name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub additional_info: String,
    #[serde(default)]
    pub scenario: Scenario,
}

/// The model's reasoning behind the script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub customer_analysis: String,
    pub connection_point: String,
    pub value_prop: String,
}

/// A well-formed generation: all four leaf strings present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub script: String,
    pub analysis: Analysis,
}

/// Length indicator for a script. Over-limit scripts are flagged, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptLength {
    pub chars: usize,
    pub limit: usize,
    pub over_limit: bool,
}

impl GenerationResult {
    pub fn script_length(&self) -> ScriptLength {
        let chars = self.script.chars().count();
        ScriptLength {
            chars,
            limit: SCRIPT_CHAR_LIMIT,
            over_limit: chars > SCRIPT_CHAR_LIMIT,
        }
    }
}
