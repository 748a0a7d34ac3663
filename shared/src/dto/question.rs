use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Departments a customer question can be routed to.
pub const DEPARTMENTS: [&str; 4] = [
    "Business Department",
    "Customer Service",
    "Technical Support",
    "Catering & Events",
];

/// Body of `POST /api/questions`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestionCreate {
    pub subject: String,
    pub department: String,
    pub question: String,
}

/// A customer question and its answer, if any
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    pub user_id: String,
    pub subject: String,
    pub department: String,
    pub question: String,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub answered: bool,
    #[serde(with = "crate::dto::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "crate::dto::timestamp")]
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /api/questions/{id}/reply`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestionReply {
    pub answer: String,
}
