use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::application::services::QUESTION_PROMPT_HEADER;
use crate::domain::{
    Difficulty, Matching, Mcq, OPTIONS_PER_MCQ, QUESTIONS_PER_TIER, QuestionSet, TierQuestions,
};

const SCAFFOLD_SUMMARY: &str = "# Scaffold Summary

This summary was produced without contacting a generation service.

## Key Concepts
- The upload was received and its text extracted.
- Question generation returns a fixed, well-formed sample set.
";

/// Offline [`LlmClient`] returning canned, schema-valid responses.
pub struct ScaffoldLlmClient {
    delay: Duration,
}

impl ScaffoldLlmClient {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn sample_question_set() -> QuestionSet {
        QuestionSet {
            easy: sample_tier(Difficulty::Easy),
            medium: sample_tier(Difficulty::Medium),
            hard: sample_tier(Difficulty::Hard),
        }
    }
}

fn sample_tier(difficulty: Difficulty) -> TierQuestions {
    let mcqs = (1..=QUESTIONS_PER_TIER)
        .map(|n| {
            let options: Vec<String> = (1..=OPTIONS_PER_MCQ)
                .map(|o| format!("{difficulty} option {n}.{o}"))
                .collect();
            Mcq {
                question: format!("{difficulty} question {n}?"),
                answer: options[0].clone(),
                options,
            }
        })
        .collect();

    let prompts: Vec<String> = (1..=QUESTIONS_PER_TIER)
        .map(|n| format!("{difficulty} term {n}"))
        .collect();
    let answers: Vec<String> = (1..=QUESTIONS_PER_TIER)
        .rev()
        .map(|n| format!("{difficulty} definition {n}"))
        .collect();
    let solution: BTreeMap<String, String> = (1..=QUESTIONS_PER_TIER)
        .map(|n| {
            (
                format!("{difficulty} term {n}"),
                format!("{difficulty} definition {n}"),
            )
        })
        .collect();

    TierQuestions {
        mcqs,
        matching: Matching {
            prompts,
            answers,
            solution,
        },
    }
}

#[async_trait]
impl LlmClient for ScaffoldLlmClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmClientError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if prompt.starts_with(QUESTION_PROMPT_HEADER) {
            serde_json::to_string_pretty(&Self::sample_question_set())
                .map(|json| format!("```json\n{json}\n```"))
                .map_err(|e| LlmClientError::InvalidResponse(e.to_string()))
        } else {
            Ok(SCAFFOLD_SUMMARY.to_string())
        }
    }
}
