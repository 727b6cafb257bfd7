use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;

pub const QUESTIONS_PER_TIER: usize = 5;
pub const OPTIONS_PER_MCQ: usize = 4;

/// Typed view of the quiz payload the model is asked to produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionSet {
    pub easy: TierQuestions,
    pub medium: TierQuestions,
    pub hard: TierQuestions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierQuestions {
    pub mcqs: Vec<Mcq>,
    pub matching: Matching,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mcq {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matching {
    pub prompts: Vec<String>,
    pub answers: Vec<String>,
    pub solution: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaViolation {
    #[error("{tier}: expected {QUESTIONS_PER_TIER} mcqs, found {found}")]
    McqCount { tier: Difficulty, found: usize },
    #[error("{tier}: mcq {index} expected {OPTIONS_PER_MCQ} options, found {found}")]
    OptionCount {
        tier: Difficulty,
        index: usize,
        found: usize,
    },
    #[error("{tier}: mcq {index} answer is not one of its options")]
    AnswerNotAnOption { tier: Difficulty, index: usize },
    #[error("{tier}: expected {QUESTIONS_PER_TIER} matching {field}, found {found}")]
    MatchingCount {
        tier: Difficulty,
        field: &'static str,
        found: usize,
    },
    #[error("{tier}: matching solution does not pair every prompt with one of the answers")]
    SolutionMismatch { tier: Difficulty },
}

impl QuestionSet {
    pub fn tier(&self, difficulty: Difficulty) -> &TierQuestions {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    /// Checks counts and answer consistency for every tier, stopping at the
    /// first violation.
    pub fn validate(&self) -> Result<(), SchemaViolation> {
        for difficulty in Difficulty::ALL {
            self.tier(difficulty).validate(difficulty)?;
        }
        Ok(())
    }
}

impl TierQuestions {
    fn validate(&self, tier: Difficulty) -> Result<(), SchemaViolation> {
        if self.mcqs.len() != QUESTIONS_PER_TIER {
            return Err(SchemaViolation::McqCount {
                tier,
                found: self.mcqs.len(),
            });
        }

        for (index, mcq) in self.mcqs.iter().enumerate() {
            if mcq.options.len() != OPTIONS_PER_MCQ {
                return Err(SchemaViolation::OptionCount {
                    tier,
                    index,
                    found: mcq.options.len(),
                });
            }
            if !mcq.options.contains(&mcq.answer) {
                return Err(SchemaViolation::AnswerNotAnOption { tier, index });
            }
        }

        self.matching.validate(tier)
    }
}

impl Matching {
    fn validate(&self, tier: Difficulty) -> Result<(), SchemaViolation> {
        for (field, found) in [("prompts", self.prompts.len()), ("answers", self.answers.len())] {
            if found != QUESTIONS_PER_TIER {
                return Err(SchemaViolation::MatchingCount { tier, field, found });
            }
        }

        let prompts: BTreeSet<&str> = self.prompts.iter().map(String::as_str).collect();
        let keys: BTreeSet<&str> = self.solution.keys().map(String::as_str).collect();

        let mut expected_answers: Vec<&str> = self.answers.iter().map(String::as_str).collect();
        let mut paired_answers: Vec<&str> = self.solution.values().map(String::as_str).collect();
        expected_answers.sort_unstable();
        paired_answers.sort_unstable();

        if prompts != keys || expected_answers != paired_answers {
            return Err(SchemaViolation::SolutionMismatch { tier });
        }

        Ok(())
    }
}
