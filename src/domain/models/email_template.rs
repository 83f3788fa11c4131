//! Email Template Domain Model
//!
//! User-authored outreach emails with `{{ variable }}` placeholders.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::ids::{EmailTemplateId, SurveyTemplateId};

lazy_static! {
    /// Matches `{{ name }}` placeholders, whitespace inside the braces is optional
    static ref VARIABLE_REGEX: Regex =
        Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").expect("valid regex");
}

/// Extract placeholder names in order of first appearance, without duplicates
#[must_use]
pub fn extract_variables(text: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for caps in VARIABLE_REGEX.captures_iter(text) {
        let name = &caps[1];
        if !seen.iter().any(|v: &String| v == name) {
            seen.push(name.to_string());
        }
    }
    seen
}

/// Replace every placeholder with its value. Unknown placeholders render empty.
#[must_use]
pub fn render(text: &str, values: &HashMap<String, String>) -> String {
    VARIABLE_REGEX
        .replace_all(text, |caps: &Captures<'_>| {
            values.get(&caps[1]).cloned().unwrap_or_default()
        })
        .into_owned()
}

/// Data required to create a template
#[derive(Debug, Clone)]
pub struct CreateEmailTemplateData {
    pub name: String,
    pub subject: String,
    pub body: String,
    pub survey_template_id: Option<SurveyTemplateId>,
}

/// Partial update data for a template
#[derive(Debug, Clone, Default)]
pub struct UpdateEmailTemplateData {
    pub name: Option<String>,
    pub subject: Option<String>,
    pub body: Option<String>,
    /// `Some(None)` detaches the survey
    pub survey_template_id: Option<Option<SurveyTemplateId>>,
}

/// A subject/body pair after substitution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub subject: String,
    pub body: String,
}

/// Email template entity
#[derive(Debug, Clone)]
pub struct EmailTemplate {
    id: EmailTemplateId,
    user_id: String,
    name: String,
    subject: String,
    body: String,
    variables: Vec<String>,
    survey_template_id: Option<SurveyTemplateId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

fn collect_variables(subject: &str, body: &str) -> Vec<String> {
    let mut variables = extract_variables(subject);
    for var in extract_variables(body) {
        if !variables.contains(&var) {
            variables.push(var);
        }
    }
    variables
}

impl EmailTemplate {
    #[must_use]
    pub fn new(user_id: &str, data: CreateEmailTemplateData) -> Self {
        let now = Utc::now();
        Self {
            id: EmailTemplateId::new(),
            user_id: user_id.to_string(),
            variables: collect_variables(&data.subject, &data.body),
            name: data.name,
            subject: data.subject,
            body: data.body,
            survey_template_id: data.survey_template_id,
            created_at: now,
            updated_at: now,
        }
    }

    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: EmailTemplateId,
        user_id: String,
        name: String,
        subject: String,
        body: String,
        variables: Vec<String>,
        survey_template_id: Option<SurveyTemplateId>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            name,
            subject,
            body,
            variables,
            survey_template_id,
            created_at,
            updated_at,
        }
    }

    /// Apply updates and re-extract the variable list
    #[must_use]
    pub fn with_updates(self, data: UpdateEmailTemplateData) -> Self {
        let subject = data.subject.unwrap_or(self.subject);
        let body = data.body.unwrap_or(self.body);
        Self {
            variables: collect_variables(&subject, &body),
            name: data.name.unwrap_or(self.name),
            survey_template_id: data.survey_template_id.unwrap_or(self.survey_template_id),
            subject,
            body,
            updated_at: Utc::now(),
            ..self
        }
    }

    #[must_use]
    pub fn render(&self, values: &HashMap<String, String>) -> RenderedEmail {
        RenderedEmail {
            subject: render(&self.subject, values),
            body: render(&self.body, values),
        }
    }

    #[must_use]
    pub fn id(&self) -> &EmailTemplateId {
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
    pub fn subject(&self) -> &str {
        &self.subject
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    #[must_use]
    pub fn survey_template_id(&self) -> Option<&SurveyTemplateId> {
        self.survey_template_id.as_ref()
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
