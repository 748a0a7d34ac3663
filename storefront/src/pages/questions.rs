//! # Questions Pages
//!
//! Customers send questions from the contact page and read the answers on
//! their notifications page; administrators reply from the back-office.

use crate::app::auth::AuthContext;
use crate::app::guards;
use crate::app::toast::ToastContext;
use crate::core::error::{AppError, Result};
use crate::core::service::SupportApi;
use crate::utils::validation::{self, ValidationResult};
use shared::{Question, QuestionCreate, DEPARTMENTS};
use std::sync::Arc;

/// Status line of a question card.
pub fn answer_label(question: &Question) -> &'static str {
    if question.answered {
        "✓ Answered"
    } else {
        "⏳ Pending"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub subject: String,
    pub department: String,
    pub question: String,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            subject: String::new(),
            department: DEPARTMENTS[0].to_string(),
            question: String::new(),
        }
    }
}

impl ContactForm {
    pub fn validate(&self) -> ValidationResult {
        validation::first_failure([
            validation::validate_required(&self.subject, "Subject"),
            if DEPARTMENTS.contains(&self.department.as_str()) {
                ValidationResult::ok()
            } else {
                ValidationResult::err("Please choose a department")
            },
            validation::validate_min_length(&self.question, "Question", 10),
        ])
    }

    fn to_request(&self) -> QuestionCreate {
        QuestionCreate {
            subject: self.subject.trim().to_string(),
            department: self.department.clone(),
            question: self.question.trim().to_string(),
        }
    }
}

pub struct ContactPage {
    support: Arc<dyn SupportApi>,
    auth: AuthContext,
    toasts: ToastContext,
    pub form: ContactForm,
}

impl ContactPage {
    pub fn new(support: Arc<dyn SupportApi>, auth: AuthContext, toasts: ToastContext) -> Self {
        Self {
            support,
            auth,
            toasts,
            form: ContactForm::default(),
        }
    }

    pub fn departments(&self) -> &'static [&'static str] {
        &DEPARTMENTS
    }

    /// Send the form; it is reset once the question is stored.
    pub async fn submit(&mut self) -> Result<Question> {
        guards::require_auth(&self.auth)?;
        self.form.validate().into_result()?;

        let question = self
            .support
            .ask_question(self.form.to_request())
            .await
            .map_err(|e| AppError::from_api(e, "Failed to send question"))?;

        tracing::info!(question_id = %question.id, department = %question.department, "Question sent");
        self.toasts.success("Thank you! Your question has been sent.");
        self.form = ContactForm::default();
        Ok(question)
    }
}

/// The customer's own questions and their answers.
pub struct NotificationsPage {
    support: Arc<dyn SupportApi>,
    auth: AuthContext,
    pub questions: Vec<Question>,
}

impl NotificationsPage {
    pub fn new(support: Arc<dyn SupportApi>, auth: AuthContext) -> Self {
        Self {
            support,
            auth,
            questions: Vec::new(),
        }
    }

    pub async fn load(&mut self) -> Result<&[Question]> {
        guards::require_auth(&self.auth)?;
        self.questions = self
            .support
            .my_questions()
            .await
            .map_err(|e| AppError::from_api(e, "Failed to load notifications"))?;
        Ok(self.questions.as_slice())
    }

    pub fn unanswered(&self) -> usize {
        self.questions.iter().filter(|q| !q.answered).count()
    }
}

pub struct AdminQuestionsPage {
    support: Arc<dyn SupportApi>,
    auth: AuthContext,
    toasts: ToastContext,
    pub questions: Vec<Question>,
}

impl AdminQuestionsPage {
    pub fn new(support: Arc<dyn SupportApi>, auth: AuthContext, toasts: ToastContext) -> Self {
        Self {
            support,
            auth,
            toasts,
            questions: Vec::new(),
        }
    }

    pub async fn load(&mut self) -> Result<&[Question]> {
        guards::require_admin(&self.auth)?;
        self.questions = self
            .support
            .all_questions()
            .await
            .map_err(|e| AppError::from_api(e, "Failed to load questions"))?;
        Ok(self.questions.as_slice())
    }

    /// Answer a question. A blank answer is ignored and yields `Ok(false)`.
    pub async fn reply(&mut self, question_id: &str, answer: &str) -> Result<bool> {
        guards::require_admin(&self.auth)?;
        let answer = answer.trim();
        if answer.is_empty() {
            return Ok(false);
        }

        self.support
            .reply_question(question_id, answer.to_string())
            .await
            .map_err(|e| AppError::from_api(e, "Failed to send reply"))?;
        self.toasts.success("Reply sent");
        self.load().await?;
        Ok(true)
    }
}
