mod prompt_builder;
mod response_parser;
mod study_service;

pub use prompt_builder::{
    QUESTION_PROMPT_HEADER, SUMMARY_PROMPT_HEADER, question_prompt, summary_prompt,
};
pub use response_parser::{FormatError, parse_question_set, strip_code_fences};
pub use study_service::{ProcessingError, StudyService};
