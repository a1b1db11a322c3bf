//! Wire types exchanged with the planner backend.
//!
//! Responses come in two mutually exclusive shapes: a semester curriculum
//! (`semesters`) and a personal roadmap (`roadmap`).  [`Plan`] is the tagged
//! union over both; [`StoredPlan`] pairs it with the untouched JSON so exports
//! and refine requests send back exactly what the backend produced.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Display scalars
// ---------------------------------------------------------------------------

/// A display value the backend sends either as a string or a number
/// (`"Weeks 1-4"`, `24`, `"12"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Number(serde_json::Number),
    Text(String),
    Flag(bool),
}

impl Label {
    /// Empty strings, zero and `false` count as absent.
    pub fn is_present(&self) -> bool {
        match self {
            Label::Number(n) => n.as_f64().map_or(true, |v| v != 0.0),
            Label::Text(s) => !s.is_empty(),
            Label::Flag(b) => *b,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Number(n) => write!(f, "{}", n),
            Label::Text(s) => f.write_str(s),
            Label::Flag(b) => write!(f, "{}", b),
        }
    }
}

/// Display text for any JSON value: strings as-is, `null` as empty, anything
/// else in its compact JSON form.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// The backend fills most fields from model output, so leaf values are read
// leniently: a stray number or object never rejects the whole plan.

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_text(&Value::deserialize(deserializer)?))
}

fn lenient_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        other => Some(value_text(&other)),
    })
}

fn lenient_label<'de, D>(deserializer: D) -> Result<Option<Label>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::Number(n) => Some(Label::Number(n)),
        Value::String(s) => Some(Label::Text(s)),
        Value::Bool(b) => Some(Label::Flag(b)),
        other => Some(Label::Text(other.to_string())),
    })
}

/// JS truthiness.
fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().map_or(true, |v| v != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

/// `null` lists behave like missing ones; a lone scalar is a one-item list.
fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => Vec::new(),
        Value::Array(items) => items.iter().map(value_text).collect(),
        other => vec![value_text(&other)],
    })
}

fn topic_list<'de, D>(deserializer: D) -> Result<Vec<Topic>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => Vec::new(),
        Value::Array(items) => items.into_iter().map(Topic::from_value).collect(),
        other => vec![Topic::from_value(other)],
    })
}

/// `null` lists of nested records behave like missing ones.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Filter an optional label down to one worth displaying.
pub fn present(label: &Option<Label>) -> Option<&Label> {
    label.as_ref().filter(|l| l.is_present())
}

/// Same truthiness rule for optional free text.
pub fn present_text(text: &Option<String>) -> Option<&str> {
    text.as_deref().filter(|s| !s.is_empty())
}

// ---------------------------------------------------------------------------
// Shared pieces
// ---------------------------------------------------------------------------

/// Topics are plain strings in older responses and objects in newer ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Topic {
    Name(String),
    Detailed(TopicDetail),
}

impl Topic {
    /// Objects become detailed topics, anything else is shown as text.
    pub fn from_value(value: Value) -> Topic {
        if value.is_object() {
            if let Ok(detail) = TopicDetail::deserialize(&value) {
                return Topic::Detailed(detail);
            }
        }
        Topic::Name(value_text(&value))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicDetail {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_label")]
    pub estimated_hours: Option<Label>,
    #[serde(default, deserialize_with = "lenient_label")]
    pub weeks: Option<Label>,
}

/// Program-level metadata that may appear on either response shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgramMeta {
    #[serde(default, deserialize_with = "lenient_label")]
    pub total_weeks: Option<Label>,
    #[serde(default, deserialize_with = "lenient_label")]
    pub weekly_hours: Option<Label>,
    #[serde(default, deserialize_with = "lenient_opt_text")]
    pub difficulty: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_text")]
    pub focus: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_text")]
    pub level: Option<String>,
}

/// Validation metadata merged into the plan by the backend formatter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    #[serde(default, deserialize_with = "lenient_opt_text")]
    pub validation_status: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub validation_issues: Vec<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub validation_suggestions: Vec<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub validation_metadata_warnings: Vec<String>,
}

impl ValidationReport {
    pub fn status(&self) -> Option<&str> {
        present_text(&self.validation_status)
    }

    pub fn is_approved(&self) -> bool {
        self.status()
            .map_or(false, |s| s.eq_ignore_ascii_case("approved"))
    }
}

// ---------------------------------------------------------------------------
// Semester curriculum
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurriculumResponse {
    #[serde(default, deserialize_with = "lenient_opt_text")]
    pub program_title: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_text")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub semesters: Vec<Semester>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub include_capstone: bool,
    #[serde(flatten)]
    pub meta: ProgramMeta,
    #[serde(flatten)]
    pub validation: ValidationReport,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Semester {
    #[serde(default, deserialize_with = "lenient_label")]
    pub semester: Option<Label>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub courses: Vec<Course>,
}

impl Semester {
    /// Semester number for headings as sent, falling back to the 1-based
    /// position when the field is missing or null.
    pub fn number(&self, index: usize) -> String {
        self.semester
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| (index + 1).to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_opt_text")]
    pub difficulty: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "topic_list")]
    pub topics: Vec<Topic>,
    #[serde(default, deserialize_with = "lenient_opt_text")]
    pub outcome_project: Option<String>,
}

// ---------------------------------------------------------------------------
// Personal roadmap
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapResponse {
    #[serde(default, deserialize_with = "lenient_opt_text")]
    pub program_title: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_text")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub roadmap: Vec<Phase>,
    #[serde(flatten)]
    pub meta: ProgramMeta,
    #[serde(flatten)]
    pub validation: ValidationReport,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    #[serde(default, deserialize_with = "lenient_text")]
    pub phase: String,
    #[serde(default, deserialize_with = "lenient_label")]
    pub duration_weeks: Option<Label>,
    #[serde(default, deserialize_with = "lenient_label")]
    pub weeks: Option<Label>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub milestones: Vec<Milestone>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_label")]
    pub timeline_weeks: Option<Label>,
    #[serde(default, deserialize_with = "lenient_label")]
    pub estimated_total_hours: Option<Label>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub skills: Vec<String>,
    #[serde(default)]
    pub certification: Option<Value>,
    #[serde(default, deserialize_with = "topic_list")]
    pub topics: Vec<Topic>,
}

impl Milestone {
    /// Certification details, only when the backend sent a non-empty object.
    pub fn certification_entries(&self) -> Option<&serde_json::Map<String, Value>> {
        self.certification
            .as_ref()
            .and_then(Value::as_object)
            .filter(|m| !m.is_empty())
    }
}

// ---------------------------------------------------------------------------
// Tagged union
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("response has neither `roadmap` nor `semesters`")]
    UnknownShape,
    #[error("malformed plan: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Plan {
    Roadmap(RoadmapResponse),
    Semesters(CurriculumResponse),
}

fn has_key(obj: &serde_json::Map<String, Value>, key: &str) -> bool {
    obj.get(key).map_or(false, |v| !v.is_null())
}

impl Plan {
    /// Discriminate on the response shape.  `roadmap` wins when both keys
    /// are present.
    pub fn from_value(value: &Value) -> Result<Plan, PlanError> {
        let obj = value.as_object().ok_or(PlanError::UnknownShape)?;
        if has_key(obj, "roadmap") {
            Ok(Plan::Roadmap(RoadmapResponse::deserialize(value)?))
        } else if has_key(obj, "semesters") {
            Ok(Plan::Semesters(CurriculumResponse::deserialize(value)?))
        } else {
            Err(PlanError::UnknownShape)
        }
    }

    pub fn program_title(&self) -> Option<&str> {
        match self {
            Plan::Roadmap(r) => present_text(&r.program_title),
            Plan::Semesters(c) => present_text(&c.program_title),
        }
    }

    pub fn summary(&self) -> Option<&str> {
        match self {
            Plan::Roadmap(r) => present_text(&r.summary),
            Plan::Semesters(c) => present_text(&c.summary),
        }
    }

    pub fn meta(&self) -> &ProgramMeta {
        match self {
            Plan::Roadmap(r) => &r.meta,
            Plan::Semesters(c) => &c.meta,
        }
    }

    pub fn validation(&self) -> &ValidationReport {
        match self {
            Plan::Roadmap(r) => &r.validation,
            Plan::Semesters(c) => &c.validation,
        }
    }
}

/// The most recently rendered plan: raw backend JSON plus its typed view.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredPlan {
    pub raw: Value,
    pub plan: Plan,
}

impl StoredPlan {
    pub fn from_value(raw: Value) -> Result<Self, PlanError> {
        let plan = Plan::from_value(&raw)?;
        Ok(Self { raw, plan })
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Body of `POST /generate`, tagged by the selected planner type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "planner_type", rename_all = "lowercase")]
pub enum PlanRequest {
    Semester(SemesterRequest),
    Personal(PersonalRequest),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SemesterRequest {
    pub skill: String,
    pub level: String,
    pub semesters: String,
    pub weekly_hours: String,
    pub focus: String,
    pub include_capstone: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PersonalRequest {
    pub study_domain: String,
    pub career_path: String,
    pub experience: String,
    pub pace: String,
    pub weekly_hours: String,
    pub duration: String,
}

/// Body of `POST /refine-plan`.
#[derive(Debug, Serialize)]
pub struct RefineRequest<'a> {
    pub instruction: &'a str,
    pub current_plan: &'a Value,
}

/// Body of `POST /export-pdf`.
#[derive(Debug, Serialize)]
pub struct PdfExportRequest<'a> {
    pub curriculum: &'a Value,
}
