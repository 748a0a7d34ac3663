//! # Customer Q&A Endpoints

use super::client::ApiClient;
use super::error::ApiError;
use shared::{Question, QuestionCreate, QuestionReply};

#[tracing::instrument(skip(client, question), fields(department = %question.department))]
pub async fn ask_question(client: &ApiClient, question: &QuestionCreate) -> Result<Question, ApiError> {
    client.send(client.post("/questions").json(question)).await
}

/// Admin: every question, answered or not.
pub async fn all_questions(client: &ApiClient) -> Result<Vec<Question>, ApiError> {
    client.send(client.get("/questions")).await
}

#[tracing::instrument(skip(client, answer))]
pub async fn reply_question(client: &ApiClient, question_id: &str, answer: String) -> Result<Question, ApiError> {
    client
        .send(
            client
                .post(&format!("/questions/{}/reply", question_id))
                .json(&QuestionReply { answer }),
        )
        .await
}

pub async fn my_questions(client: &ApiClient) -> Result<Vec<Question>, ApiError> {
    client.send(client.get("/questions/me")).await
}
