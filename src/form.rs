//! Planner form capture.
//!
//! Reads the planner-type selector and the mode-specific fields into a
//! [`PlanRequest`].  Field contents are not validated; a missing element just
//! contributes an empty string.

use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::constants::*;
use crate::models::{PersonalRequest, PlanRequest, SemesterRequest};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// The selector itself is absent from the markup.
    #[error("plannerType not found in DOM")]
    MissingSelector,
    /// Nothing (or something unknown) selected.
    #[error("Please select Planner Type")]
    NoPlannerType,
}

/// Read access to form controls by element id.
pub trait FormSource {
    /// Current value, `None` when the element does not exist.
    fn value(&self, id: &str) -> Option<String>;

    /// Checkbox state, `false` when missing.
    fn checked(&self, id: &str) -> bool;

    fn text(&self, id: &str) -> String {
        self.value(id).unwrap_or_default()
    }
}

/// [`FormSource`] backed by the live document.
pub struct DomForm<'a> {
    document: &'a Document,
}

impl<'a> DomForm<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self { document }
    }
}

impl FormSource for DomForm<'_> {
    fn value(&self, id: &str) -> Option<String> {
        let el = self.document.get_element_by_id(id)?;
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            Some(input.value())
        } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
            Some(select.value())
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            Some(area.value())
        } else {
            Some(String::new())
        }
    }

    fn checked(&self, id: &str) -> bool {
        self.document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map_or(false, |input| input.checked())
    }
}

pub fn build_request(form: &impl FormSource) -> Result<PlanRequest, FormError> {
    let planner_type = form.value(PLANNER_TYPE_ID).ok_or(FormError::MissingSelector)?;

    match planner_type.as_str() {
        "semester" => Ok(PlanRequest::Semester(SemesterRequest {
            skill: form.text(SKILL_ID),
            level: form.text(LEVEL_ID),
            semesters: form.text(SEMESTERS_ID),
            weekly_hours: form.text(HOURS_ID),
            focus: form.text(FOCUS_ID),
            include_capstone: form.checked(INCLUDE_CAPSTONE_ID),
        })),
        "personal" => Ok(PlanRequest::Personal(PersonalRequest {
            study_domain: form.text(STUDY_DOMAIN_ID),
            career_path: form.text(CAREER_PATH_ID),
            experience: form.text(EXPERIENCE_ID),
            pace: form.text(PACE_ID),
            weekly_hours: form.text(WEEKLY_HOURS_ID),
            duration: form.text(DURATION_ID),
        })),
        _ => Err(FormError::NoPlannerType),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MapForm {
        values: HashMap<&'static str, &'static str>,
        checked: Vec<&'static str>,
    }

    impl MapForm {
        fn with(mut self, id: &'static str, value: &'static str) -> Self {
            self.values.insert(id, value);
            self
        }
    }

    impl FormSource for MapForm {
        fn value(&self, id: &str) -> Option<String> {
            self.values.get(id).map(|v| v.to_string())
        }

        fn checked(&self, id: &str) -> bool {
            self.checked.iter().any(|c| *c == id)
        }
    }

    #[test]
    fn missing_selector_is_reported() {
        let form = MapForm::default().with(SKILL_ID, "Rust");
        assert_eq!(build_request(&form), Err(FormError::MissingSelector));
    }

    #[test]
    fn empty_or_unknown_planner_type_asks_user() {
        let empty = MapForm::default().with(PLANNER_TYPE_ID, "");
        assert_eq!(build_request(&empty), Err(FormError::NoPlannerType));
        let odd = MapForm::default().with(PLANNER_TYPE_ID, "quarterly");
        assert_eq!(build_request(&odd), Err(FormError::NoPlannerType));
        assert_eq!(FormError::NoPlannerType.to_string(), MSG_SELECT_PLANNER);
    }

    #[test]
    fn semester_payload_reads_its_fields() {
        let mut form = MapForm::default()
            .with(PLANNER_TYPE_ID, "semester")
            .with(SKILL_ID, "Machine Learning")
            .with(LEVEL_ID, "Beginner")
            .with(SEMESTERS_ID, "4")
            .with(HOURS_ID, "12")
            .with(STUDY_DOMAIN_ID, "ignored");
        form.checked.push(INCLUDE_CAPSTONE_ID);

        let req = build_request(&form).unwrap();
        assert_eq!(
            req,
            PlanRequest::Semester(SemesterRequest {
                skill: "Machine Learning".into(),
                level: "Beginner".into(),
                semesters: "4".into(),
                weekly_hours: "12".into(),
                focus: String::new(),
                include_capstone: true,
            })
        );
    }

    #[test]
    fn personal_payload_falls_back_to_empty_strings() {
        let form = MapForm::default()
            .with(PLANNER_TYPE_ID, "personal")
            .with(CAREER_PATH_ID, "Data Engineer")
            .with(WEEKLY_HOURS_ID, "8");

        let PlanRequest::Personal(p) = build_request(&form).unwrap() else {
            panic!("expected personal request");
        };
        assert_eq!(p.career_path, "Data Engineer");
        assert_eq!(p.weekly_hours, "8");
        assert_eq!(p.study_domain, "");
        assert_eq!(p.duration, "");
    }
}
