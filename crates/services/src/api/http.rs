use async_trait::async_trait;
use quiz_core::{QuestionDetail, QuestionId, QuestionStatus, StatusCounts, Verdict};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use url::Url;

use super::QuizApi;
use super::wire::{AnswerBody, AnswerRequest, ErrorBody, QuestionBody, QuestionsBody, StatusBody};
use crate::config::ClientConfig;
use crate::error::QuizApiError;

const STATUS_PATH: &str = "api/status";
const ALL_QUESTIONS_PATH: &str = "api/status/all_questions";
const ANSWER_PATH: &str = "api/answer";

/// `QuizApi` over HTTP/JSON.
#[derive(Clone)]
pub struct HttpQuizApi {
    client: Client,
    base_url: Url,
    asset_root: Url,
}

impl HttpQuizApi {
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    #[must_use]
    pub fn with_client(client: Client, config: &ClientConfig) -> Self {
        Self {
            client,
            base_url: config.base_url().clone(),
            asset_root: config.asset_root(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, QuizApiError> {
        let url = self.base_url.join(path)?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(QuizApiError::transport)?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, QuizApiError> {
    let status = response.status();
    let body = response.text().await.map_err(QuizApiError::transport)?;

    if !status.is_success() {
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|body| body.error)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });
        return Err(QuizApiError::Server { status, message });
    }

    serde_json::from_str(&body).map_err(|err| QuizApiError::Decode(err.to_string()))
}

#[async_trait]
impl QuizApi for HttpQuizApi {
    async fn status(&self) -> Result<StatusCounts, QuizApiError> {
        let body: StatusBody = self.get_json(STATUS_PATH).await?;
        Ok(body.into())
    }

    async fn all_questions(&self) -> Result<Vec<QuestionStatus>, QuizApiError> {
        let body: QuestionsBody = self.get_json(ALL_QUESTIONS_PATH).await?;
        Ok(body.questions)
    }

    async fn question(&self, id: QuestionId) -> Result<QuestionDetail, QuizApiError> {
        let body: QuestionBody = self.get_json(&format!("api/question/{id}")).await?;
        body.into_detail(id, &self.asset_root)
    }

    async fn submit_answer(&self, id: QuestionId, answer: &str) -> Result<Verdict, QuizApiError> {
        let url = self.base_url.join(ANSWER_PATH)?;
        let response = self
            .client
            .post(url)
            .json(&AnswerRequest { q_id: id, answer })
            .send()
            .await
            .map_err(QuizApiError::transport)?;
        let body: AnswerBody = decode(response).await?;
        Ok(body.into())
    }
}
