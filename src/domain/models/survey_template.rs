//! Survey Template Domain Model
//!
//! User-authored survey forms sent to influencers.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::SurveyTemplateId;
use crate::shared::errors::DomainError;

pub const DEFAULT_MAX_RATING: u8 = 5;
const MAX_RATING_RANGE: std::ops::RangeInclusive<u8> = 2..=10;

/// Supported question kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    ShortText,
    LongText,
    SingleChoice,
    MultipleChoice,
    Rating,
}

impl QuestionKind {
    #[must_use]
    pub fn is_choice(self) -> bool {
        matches!(self, Self::SingleChoice | Self::MultipleChoice)
    }

    #[must_use]
    pub fn is_text(self) -> bool {
        matches!(self, Self::ShortText | Self::LongText)
    }
}

/// A single question within a survey
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyQuestion {
    pub id: String,
    pub label: String,
    pub kind: QuestionKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_rating: Option<u8>,
}

impl SurveyQuestion {
    #[must_use]
    pub fn max_rating(&self) -> u8 {
        self.max_rating.unwrap_or(DEFAULT_MAX_RATING)
    }
}

/// Validate a question list
///
/// # Errors
///
/// Returns `DomainError::InvalidField` naming the offending question.
pub fn validate_questions(questions: &[SurveyQuestion]) -> Result<(), DomainError> {
    if questions.is_empty() {
        return Err(DomainError::invalid("questions", "at least one question is required"));
    }

    let mut ids = HashSet::new();
    for (index, question) in questions.iter().enumerate() {
        let field = format!("questions[{index}]");
        if question.id.trim().is_empty() {
            return Err(DomainError::invalid(field, "id must not be empty"));
        }
        if !ids.insert(question.id.as_str()) {
            return Err(DomainError::invalid(field, format!("duplicate question id '{}'", question.id)));
        }
        if question.label.trim().is_empty() {
            return Err(DomainError::invalid(field, "label must not be empty"));
        }
        if question.kind.is_choice() {
            let unique: HashSet<&str> = question.options.iter().map(|o| o.trim()).collect();
            if question.options.len() < 2 || unique.len() != question.options.len() || unique.contains("") {
                return Err(DomainError::invalid(
                    field,
                    "choice questions need at least two unique, non-empty options",
                ));
            }
        }
        if question.kind == QuestionKind::Rating && !MAX_RATING_RANGE.contains(&question.max_rating()) {
            return Err(DomainError::invalid(field, "maxRating must be between 2 and 10"));
        }
    }
    Ok(())
}

/// Data required to create a survey template
#[derive(Debug, Clone)]
pub struct CreateSurveyTemplateData {
    pub name: String,
    pub description: Option<String>,
    pub questions: Vec<SurveyQuestion>,
}

/// Partial update data for a survey template
#[derive(Debug, Clone, Default)]
pub struct UpdateSurveyTemplateData {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub questions: Option<Vec<SurveyQuestion>>,
}

/// Survey template entity
#[derive(Debug, Clone)]
pub struct SurveyTemplate {
    id: SurveyTemplateId,
    user_id: String,
    name: String,
    description: Option<String>,
    questions: Vec<SurveyQuestion>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl SurveyTemplate {
    /// # Errors
    ///
    /// Returns `DomainError` if the questions are invalid.
    pub fn new(user_id: &str, data: CreateSurveyTemplateData) -> Result<Self, DomainError> {
        validate_questions(&data.questions)?;
        let now = Utc::now();
        Ok(Self {
            id: SurveyTemplateId::new(),
            user_id: user_id.to_string(),
            name: data.name,
            description: data.description,
            questions: data.questions,
            created_at: now,
            updated_at: now,
        })
    }

    #[must_use]
    pub fn restore(
        id: SurveyTemplateId,
        user_id: String,
        name: String,
        description: Option<String>,
        questions: Vec<SurveyQuestion>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            name,
            description,
            questions,
            created_at,
            updated_at,
        }
    }

    /// # Errors
    ///
    /// Returns `DomainError` if replacement questions are invalid.
    pub fn with_updates(self, data: UpdateSurveyTemplateData) -> Result<Self, DomainError> {
        if let Some(questions) = &data.questions {
            validate_questions(questions)?;
        }
        Ok(Self {
            name: data.name.unwrap_or(self.name),
            description: data.description.unwrap_or(self.description),
            questions: data.questions.unwrap_or(self.questions),
            updated_at: Utc::now(),
            ..self
        })
    }

    #[must_use]
    pub fn question(&self, id: &str) -> Option<&SurveyQuestion> {
        self.questions.iter().find(|q| q.id == id)
    }

    #[must_use]
    pub fn id(&self) -> &SurveyTemplateId {
        &self.id
    }

    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn questions(&self) -> &[SurveyQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_questions() -> Vec<SurveyQuestion> {
        vec![
            SurveyQuestion {
                id: "niche".to_string(),
                label: "What is your niche?".to_string(),
                kind: QuestionKind::SingleChoice,
                required: true,
                options: vec!["beauty".to_string(), "fitness".to_string(), "travel".to_string()],
                max_rating: None,
            },
            SurveyQuestion {
                id: "formats".to_string(),
                label: "Which formats do you produce?".to_string(),
                kind: QuestionKind::MultipleChoice,
                required: false,
                options: vec!["reels".to_string(), "stories".to_string(), "posts".to_string()],
                max_rating: None,
            },
            SurveyQuestion {
                id: "interest".to_string(),
                label: "How interested are you?".to_string(),
                kind: QuestionKind::Rating,
                required: true,
                options: vec![],
                max_rating: None,
            },
            SurveyQuestion {
                id: "notes".to_string(),
                label: "Anything else?".to_string(),
                kind: QuestionKind::LongText,
                required: false,
                options: vec![],
                max_rating: None,
            },
        ]
    }

    #[test]
    fn accepts_valid_questions() {
        assert!(validate_questions(&sample_questions()).is_ok());
    }

    #[test]
    fn rejects_empty_question_list() {
        assert!(validate_questions(&[]).is_err());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut questions = sample_questions();
        questions[1].id = "niche".to_string();
        let err = validate_questions(&questions).unwrap_err();
        assert!(err.to_string().contains("duplicate question id"));
    }

    #[test]
    fn rejects_choice_without_enough_options() {
        let mut questions = sample_questions();
        questions[0].options = vec!["only".to_string()];
        assert!(validate_questions(&questions).is_err());

        questions[0].options = vec!["same".to_string(), "same".to_string()];
        assert!(validate_questions(&questions).is_err());
    }

    #[test]
    fn rejects_out_of_range_rating_scale() {
        let mut questions = sample_questions();
        questions[2].max_rating = Some(11);
        assert!(validate_questions(&questions).is_err());
        questions[2].max_rating = Some(10);
        assert!(validate_questions(&questions).is_ok());
    }

    #[test]
    fn question_kind_uses_snake_case_on_the_wire() {
        let json = serde_json::to_string(&QuestionKind::MultipleChoice).unwrap();
        assert_eq!(json, "\"multiple_choice\"");
    }

    #[test]
    fn update_rejects_invalid_questions() {
        let template = SurveyTemplate::new(
            "user-1",
            CreateSurveyTemplateData {
                name: "Onboarding".to_string(),
                description: None,
                questions: sample_questions(),
            },
        )
        .unwrap();
        let result = template.with_updates(UpdateSurveyTemplateData {
            questions: Some(vec![]),
            ..Default::default()
        });
        assert!(result.is_err());
    }
}
