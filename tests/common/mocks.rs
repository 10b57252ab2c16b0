use async_trait::async_trait;
use gemini_ask::{
    Error, Result,
    llm::{Candidate, Content, GenerateContentResponse, GenerationClient, Part},
};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
enum MockOutcome {
    Response(GenerateContentResponse),
    ProviderError(String),
    FormatError(String),
}

/// Mock generation client that records every prompt it receives
#[derive(Debug, Clone)]
pub struct MockGenerationClient {
    outcome: MockOutcome,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockGenerationClient {
    pub fn with_response(response: GenerateContentResponse) -> Self {
        Self {
            outcome: MockOutcome::Response(response),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_error(message: &str) -> Self {
        Self {
            outcome: MockOutcome::ProviderError(message.to_string()),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_format_error(message: &str) -> Self {
        Self {
            outcome: MockOutcome::FormatError(message.to_string()),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl GenerationClient for MockGenerationClient {
    async fn generate_content(&self, prompt: &str) -> Result<GenerateContentResponse> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        match &self.outcome {
            MockOutcome::Response(response) => Ok(response.clone()),
            MockOutcome::ProviderError(message) => Err(Error::llm(message.clone())),
            MockOutcome::FormatError(message) => Err(Error::response_format(message.clone())),
        }
    }
}

/// Build a provider response with one candidate per entry; `None` is a candidate without content
pub fn create_mock_response(candidates: Vec<Option<Vec<&str>>>) -> GenerateContentResponse {
    GenerateContentResponse {
        candidates: candidates
            .into_iter()
            .map(|parts| Candidate {
                content: parts.map(|parts| Content {
                    role: Some("model".to_string()),
                    parts: parts.into_iter().map(Part::text).collect(),
                }),
                finish_reason: Some("STOP".to_string()),
            })
            .collect(),
        ..Default::default()
    }
}
