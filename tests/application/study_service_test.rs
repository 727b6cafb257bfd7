use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::json;

use docquiz::application::ports::{FileLoader, FileLoaderError, LlmClientError};
use docquiz::application::services::{
    FormatError, ProcessingError, QUESTION_PROMPT_HEADER, SUMMARY_PROMPT_HEADER, StudyService,
};
use docquiz::domain::UploadedFile;
use docquiz::infrastructure::llm::MockLlmClient;
use docquiz::infrastructure::text_processing::DocumentLoader;

use crate::helpers::docx_with_paragraphs;

struct StaticFileLoader(&'static str);

#[async_trait]
impl FileLoader for StaticFileLoader {
    async fn extract_text(&self, _file: &UploadedFile) -> Result<String, FileLoaderError> {
        Ok(self.0.to_string())
    }
}

fn upload(filename: &str, data: Vec<u8>) -> UploadedFile {
    UploadedFile::new(filename.to_string(), Bytes::from(data)).unwrap()
}

#[tokio::test]
async fn given_docx_and_mock_client_when_processing_then_returns_material() {
    let llm_client = Arc::new(
        MockLlmClient::new()
            .respond_to(SUMMARY_PROMPT_HEADER, "## Summary")
            .respond_to(QUESTION_PROMPT_HEADER, "```json\n{\"easy\": {}}\n```"),
    );
    let service = StudyService::new(Arc::new(DocumentLoader::new()), llm_client.clone(), false);

    let file = upload("notes.docx", docx_with_paragraphs(&["Cells divide."]));
    let material = service.process(&file).await.unwrap();

    assert_eq!(material.summary, "## Summary");
    assert_eq!(material.questions, json!({ "easy": {} }));
    assert_eq!(llm_client.call_count(), 2);
}

#[tokio::test]
async fn given_whitespace_only_text_when_processing_then_fails_without_calling_llm() {
    let llm_client = Arc::new(MockLlmClient::new());
    let service = StudyService::new(
        Arc::new(StaticFileLoader(" \n\t \n")),
        llm_client.clone(),
        false,
    );

    let result = service.process(&upload("empty.pdf", Vec::new())).await;

    assert!(matches!(
        result,
        Err(ProcessingError::Extraction(FileLoaderError::NoTextFound(ref name))) if name == "empty.pdf"
    ));
    assert_eq!(
        result.unwrap_err().to_string(),
        "Could not extract text from the document."
    );
    assert_eq!(llm_client.call_count(), 0);
}

#[tokio::test]
async fn given_summary_failure_when_processing_then_skips_question_generation() {
    let llm_client = Arc::new(MockLlmClient::new().fail_on(SUMMARY_PROMPT_HEADER, "503"));
    let service = StudyService::new(
        Arc::new(StaticFileLoader("Some text")),
        llm_client.clone(),
        false,
    );

    let result = service.process(&upload("notes.pdf", Vec::new())).await;

    assert!(matches!(
        result,
        Err(ProcessingError::Upstream(LlmClientError::ApiRequestFailed(_)))
    ));
    assert_eq!(llm_client.call_count(), 1);
}

#[tokio::test]
async fn given_malformed_question_json_when_processing_then_returns_format_error() {
    let llm_client = Arc::new(
        MockLlmClient::new()
            .respond_to(SUMMARY_PROMPT_HEADER, "summary")
            .respond_to(QUESTION_PROMPT_HEADER, "{\"easy\": "),
    );
    let service = StudyService::new(Arc::new(StaticFileLoader("Some text")), llm_client, false);

    let result = service.process(&upload("notes.pdf", Vec::new())).await;

    assert!(matches!(
        result,
        Err(ProcessingError::Format(FormatError::InvalidJson(_)))
    ));
}

#[tokio::test]
async fn given_extracted_text_when_processing_then_both_prompts_carry_it() {
    struct RecordingClient(std::sync::Mutex<Vec<String>>);

    #[async_trait]
    impl docquiz::application::ports::LlmClient for RecordingClient {
        async fn complete(&self, prompt: &str) -> Result<String, LlmClientError> {
            self.0.lock().unwrap().push(prompt.to_string());
            Ok("{}".to_string())
        }
    }

    let recorder = Arc::new(RecordingClient(std::sync::Mutex::new(Vec::new())));
    let service = StudyService::new(
        Arc::new(StaticFileLoader("The Krebs cycle")),
        recorder.clone(),
        false,
    );

    service
        .process(&upload("notes.pdf", Vec::new()))
        .await
        .unwrap();

    let prompts = recorder.0.lock().unwrap();
    assert_eq!(prompts.len(), 2);
    assert!(prompts[0].starts_with(SUMMARY_PROMPT_HEADER));
    assert!(prompts[1].starts_with(QUESTION_PROMPT_HEADER));
    assert!(prompts.iter().all(|p| p.contains("The Krebs cycle")));
}
