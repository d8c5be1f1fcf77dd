use serde::{Deserialize, Serialize};

use post_pulse::{AlgorithmScore, FactorSet};

#[derive(Debug, Deserialize)]
pub struct ApiScoreRequest {
    pub text: Option<String>,
}

impl ApiScoreRequest {
    // Missing field is a caller mistake; an empty string is still scorable.
    pub fn into_text(self) -> Result<String, String> {
        self.text.ok_or_else(|| "text is required".to_string())
    }
}

#[derive(Debug, Serialize)]
pub struct ApiScoreResponse {
    pub overall: i32,
    pub factors: FactorSet,
    pub tips: Vec<String>,
}

impl ApiScoreResponse {
    pub fn from_score(score: AlgorithmScore) -> Self {
        Self {
            overall: score.overall,
            factors: score.factors,
            tips: score.tips,
        }
    }
}
