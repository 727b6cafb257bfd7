/// Opening line of every summary prompt.
pub const SUMMARY_PROMPT_HEADER: &str =
    "Analyze the following text in detail and provide a comprehensive summary.";

/// Opening line of every question prompt. Offline clients key on it to tell
/// the two requests apart.
pub const QUESTION_PROMPT_HEADER: &str = "Based on the following text, generate question sets for Easy, Medium, and Hard difficulty levels.";

pub fn summary_prompt(text: &str) -> String {
    format!(
        "{SUMMARY_PROMPT_HEADER}
Break down the key concepts, explain important definitions, and cover all major topics presented.
The summary should be thorough enough for someone to get a deep understanding of the material without reading the original document.
Use markdown for headings and lists to structure the summary clearly.

Text:
{text}
"
    )
}

pub fn question_prompt(text: &str) -> String {
    format!(
        r#"{QUESTION_PROMPT_HEADER}

For each difficulty level ('easy', 'medium', 'hard'), provide:
1. 5 Multiple Choice Questions (MCQs).
2. 5 "Match the Following" questions.

For MCQs, provide 4 options and the correct answer.
For "Match the Following", provide 5 "prompts", 5 corresponding "answers" (shuffled), and a 'solution' object mapping prompts to correct answers.

Format the output strictly as a single JSON object with three main keys: 'easy', 'medium', and 'hard'.
Each of these keys should contain an object with 'mcqs' and 'matching' keys, following the structure described above.
Each MCQ is an object with 'question', 'options' and 'answer' keys; 'answer' must be one of the 'options'.

Example for 'easy': {{ "mcqs": [{{ "question": "...", "options": ["...", "...", "...", "..."], "answer": "..." }}], "matching": {{ "prompts": [...], "answers": [...], "solution": {{ "<prompt>": "<answer>" }} }} }}

Text:
{text}
"#
    )
}
