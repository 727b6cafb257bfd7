mod difficulty;
mod question_set;
mod study_material;
mod upload;

pub use difficulty::Difficulty;
pub use question_set::{
    Matching, Mcq, OPTIONS_PER_MCQ, QUESTIONS_PER_TIER, QuestionSet, SchemaViolation,
    TierQuestions,
};
pub use study_material::StudyMaterial;
pub use upload::{DocumentKind, UploadedFile, ValidationError};
