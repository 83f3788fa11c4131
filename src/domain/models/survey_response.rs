//! Survey Response Domain Model
//!
//! Submitted answers and their aggregation per question.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use super::ids::{ConnectionId, InfluencerId, SurveyResponseId, SurveyTemplateId};
use super::survey_template::{QuestionKind, SurveyQuestion, SurveyTemplate};

/// Answers keyed by question id
pub type Answers = Map<String, Value>;

/// A submitted survey response
#[derive(Debug, Clone)]
pub struct SurveyResponse {
    pub id: SurveyResponseId,
    pub survey_template_id: SurveyTemplateId,
    pub influencer_id: Option<InfluencerId>,
    pub connection_id: Option<ConnectionId>,
    pub answers: Answers,
    pub submitted_at: DateTime<Utc>,
}

impl SurveyResponse {
    #[must_use]
    pub fn new(
        survey_template_id: SurveyTemplateId,
        influencer_id: Option<InfluencerId>,
        connection_id: Option<ConnectionId>,
        answers: Answers,
    ) -> Self {
        Self {
            id: SurveyResponseId::new(),
            survey_template_id,
            influencer_id,
            connection_id,
            answers,
            submitted_at: Utc::now(),
        }
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

fn check_answer(question: &SurveyQuestion, value: &Value) -> Result<(), String> {
    match question.kind {
        QuestionKind::ShortText | QuestionKind::LongText => {
            if value.is_string() {
                Ok(())
            } else {
                Err("must be text".to_string())
            }
        }
        QuestionKind::SingleChoice => match value.as_str() {
            Some(choice) if question.options.iter().any(|o| o == choice) => Ok(()),
            _ => Err("must be one of the listed options".to_string()),
        },
        QuestionKind::MultipleChoice => {
            let Some(items) = value.as_array() else {
                return Err("must be a list of options".to_string());
            };
            let all_known = items
                .iter()
                .all(|item| item.as_str().is_some_and(|s| question.options.iter().any(|o| o == s)));
            if !all_known {
                return Err("contains an unknown option".to_string());
            }
            let distinct: BTreeSet<&str> = items.iter().filter_map(Value::as_str).collect();
            if distinct.len() == items.len() {
                Ok(())
            } else {
                Err("must not repeat an option".to_string())
            }
        }
        QuestionKind::Rating => match value.as_u64() {
            Some(score) if (1..=u64::from(question.max_rating())).contains(&score) => Ok(()),
            _ => Err(format!("must be a whole number from 1 to {}", question.max_rating())),
        },
    }
}

/// Check submitted answers against the template's questions.
///
/// Returns every problem found, formatted as `questionId: message`.
///
/// # Errors
///
/// Returns the list of problems when any answer is unknown, missing or malformed.
pub fn validate_answers(template: &SurveyTemplate, answers: &Answers) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for key in answers.keys() {
        if template.question(key).is_none() {
            errors.push(format!("{key}: unknown question"));
        }
    }

    for question in template.questions() {
        match answers.get(&question.id) {
            Some(value) if !is_blank(value) => {
                if let Err(message) = check_answer(question, value) {
                    errors.push(format!("{}: {message}", question.id));
                }
            }
            _ if question.required => errors.push(format!("{}: answer is required", question.id)),
            _ => {}
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Count for a single choice option
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionCount {
    pub option: String,
    pub count: u64,
}

/// Aggregated answers for one question
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSummary {
    pub question_id: String,
    pub label: String,
    pub kind: QuestionKind,
    pub answered: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_counts: Option<Vec<OptionCount>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribution: Option<BTreeMap<u64, u64>>,
}

/// Aggregated answers for a whole survey
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveySummary {
    pub total_responses: u64,
    pub questions: Vec<QuestionSummary>,
}

fn summarize_question(question: &SurveyQuestion, responses: &[SurveyResponse]) -> QuestionSummary {
    let values: Vec<&Value> = responses
        .iter()
        .filter_map(|r| r.answers.get(&question.id))
        .filter(|v| !is_blank(v))
        .collect();

    let mut summary = QuestionSummary {
        question_id: question.id.clone(),
        label: question.label.clone(),
        kind: question.kind,
        answered: values.len() as u64,
        option_counts: None,
        average: None,
        distribution: None,
    };

    match question.kind {
        QuestionKind::SingleChoice | QuestionKind::MultipleChoice => {
            let mut counts: BTreeMap<&str, u64> = question.options.iter().map(|o| (o.as_str(), 0)).collect();
            for value in &values {
                // One count per respondent and option
                let picked: BTreeSet<&str> = match value {
                    Value::String(s) => BTreeSet::from([s.as_str()]),
                    Value::Array(items) => items.iter().filter_map(Value::as_str).collect(),
                    _ => BTreeSet::new(),
                };
                for choice in picked {
                    if let Some(count) = counts.get_mut(choice) {
                        *count += 1;
                    }
                }
            }
            summary.option_counts = Some(
                question
                    .options
                    .iter()
                    .map(|o| OptionCount {
                        option: o.clone(),
                        count: counts.get(o.as_str()).copied().unwrap_or(0),
                    })
                    .collect(),
            );
        }
        QuestionKind::Rating => {
            let mut distribution: BTreeMap<u64, u64> =
                (1..=u64::from(question.max_rating())).map(|score| (score, 0)).collect();
            let scores: Vec<u64> = values.iter().filter_map(|v| v.as_u64()).collect();
            for score in &scores {
                if let Some(count) = distribution.get_mut(score) {
                    *count += 1;
                }
            }
            if !scores.is_empty() {
                #[allow(clippy::cast_precision_loss)]
                let average = scores.iter().sum::<u64>() as f64 / scores.len() as f64;
                summary.average = Some((average * 100.0).round() / 100.0);
            }
            summary.distribution = Some(distribution);
        }
        QuestionKind::ShortText | QuestionKind::LongText => {}
    }

    summary
}

/// Group every response's answers by question
#[must_use]
pub fn summarize(template: &SurveyTemplate, responses: &[SurveyResponse]) -> SurveySummary {
    SurveySummary {
        total_responses: responses.len() as u64,
        questions: template
            .questions()
            .iter()
            .map(|q| summarize_question(q, responses))
            .collect(),
    }
}
