//! Renders the stored plan into `#result`.
//!
//! The HTML builders are pure functions over [`Plan`] so the rendering rules
//! (optional sections, capstone badge, escaping) are testable natively.
//! `mount` does the DOM work: clears the container, adds the download bar and
//! injects the generated markup.

use web_sys::Document;

use crate::constants::{
    DEFAULT_CURRICULUM_TITLE, DEFAULT_ROADMAP_TITLE, MSG_GENERATE_FAILED, MSG_LOADING,
    MSG_UNKNOWN_FORMAT, RESULT_ID,
};
use crate::dom_utils;
use crate::error::ClientError;
use crate::models::{
    present, present_text, Course, CurriculumResponse, Milestone, Phase, Plan, RoadmapResponse,
    Topic, ValidationReport,
};
use crate::state::{AppState, ResultView};
use crate::utils::{difficulty_color, html_escape};

use super::download_bar;

/// Plain status card used for loading and error states.
pub fn status_card(text: &str) -> String {
    format!("<div class=\"semester-card\">{}</div>", html_escape(text))
}

pub fn render_plan_html(plan: &Plan) -> String {
    match plan {
        Plan::Roadmap(roadmap) => render_roadmap(roadmap),
        Plan::Semesters(curriculum) => render_semesters(curriculum),
    }
}

fn heading(title: Option<&str>, fallback: &str, summary: Option<&str>) -> String {
    format!(
        "<h2>{}</h2><p>{}</p>",
        html_escape(title.unwrap_or(fallback)),
        html_escape(summary.unwrap_or_default())
    )
}

fn list_section(html: &mut String, label: &str, items: impl Iterator<Item = String>) {
    html.push_str(&format!("<b>{}</b><ul>", label));
    for item in items {
        html.push_str(&format!("<li>{}</li>", item));
    }
    html.push_str("</ul>");
}

fn topic_item(topic: &Topic) -> String {
    match topic {
        Topic::Name(name) => html_escape(name),
        Topic::Detailed(detail) => {
            let mut item = html_escape(&detail.name);
            if let Some(hours) = present(&detail.estimated_hours) {
                item.push_str(&format!(
                    " <span class=\"topic-hours\">({}h)</span>",
                    html_escape(&hours.to_string())
                ));
            }
            if let Some(weeks) = present(&detail.weeks) {
                item.push_str(&format!(
                    " <span class=\"topic-weeks\">{}</span>",
                    html_escape(&weeks.to_string())
                ));
            }
            item
        }
    }
}

// ---------------------------------------------------------------------------
// Semester mode
// ---------------------------------------------------------------------------

pub fn render_semesters(curriculum: &CurriculumResponse) -> String {
    let mut html = heading(
        present_text(&curriculum.program_title),
        DEFAULT_CURRICULUM_TITLE,
        present_text(&curriculum.summary),
    );

    let last = curriculum.semesters.len().saturating_sub(1);
    for (idx, semester) in curriculum.semesters.iter().enumerate() {
        let capstone = curriculum.include_capstone && idx == last;
        html.push_str("<div class=\"semester-card\">");
        html.push_str(&format!(
            "<h3>Semester {}{}</h3>",
            html_escape(&semester.number(idx)),
            if capstone { " <span class=\"capstone-badge\">🎓 CAPSTONE</span>" } else { "" }
        ));
        for course in &semester.courses {
            html.push_str(&render_course(course));
        }
        html.push_str("</div>");
    }

    html.push_str(&render_validation(&curriculum.validation));
    html
}

fn render_course(course: &Course) -> String {
    let mut html = String::from("<div class=\"course-card\">");
    html.push_str(&format!("<b class=\"course-title\">{}</b>", html_escape(&course.title)));

    if let Some(difficulty) = present_text(&course.difficulty) {
        html.push_str(&format!(
            "<span class=\"difficulty-badge\" style=\"background:{}\">{}</span>",
            difficulty_color(difficulty),
            html_escape(difficulty)
        ));
    }
    if let Some(description) = present_text(&course.description) {
        html.push_str(&format!("<p class=\"course-description\">{}</p>", html_escape(description)));
    }
    if !course.skills.is_empty() {
        html.push_str("<div class=\"skills-section\">");
        list_section(&mut html, "🎯 Skills:", course.skills.iter().map(|s| html_escape(s)));
        html.push_str("</div>");
    }
    if !course.topics.is_empty() {
        html.push_str("<div class=\"topics-section\">");
        list_section(&mut html, "📚 Topics:", course.topics.iter().map(topic_item));
        html.push_str("</div>");
    }
    if let Some(project) = present_text(&course.outcome_project) {
        html.push_str(&format!(
            "<p class=\"deliverable\"><strong>💡 Deliverable:</strong> {}</p>",
            html_escape(project)
        ));
    }

    html.push_str("</div>");
    html
}

// ---------------------------------------------------------------------------
// Roadmap mode
// ---------------------------------------------------------------------------

pub fn render_roadmap(roadmap: &RoadmapResponse) -> String {
    let mut html = heading(
        present_text(&roadmap.program_title),
        DEFAULT_ROADMAP_TITLE,
        present_text(&roadmap.summary),
    );

    let total_weeks = present(&roadmap.meta.total_weeks);
    let weekly_hours = present(&roadmap.meta.weekly_hours);
    if total_weeks.is_some() || weekly_hours.is_some() {
        html.push_str("<div class=\"program-meta\">");
        if let Some(weeks) = total_weeks {
            html.push_str(&format!(
                "<span><b>Duration:</b> {} weeks</span>",
                html_escape(&weeks.to_string())
            ));
        }
        if let Some(hours) = weekly_hours {
            html.push_str(&format!(
                "<span><b>Weekly Commitment:</b> {} hours</span>",
                html_escape(&hours.to_string())
            ));
        }
        html.push_str("</div>");
    }

    for phase in &roadmap.roadmap {
        html.push_str(&render_phase(phase));
    }

    html.push_str(&render_validation(&roadmap.validation));
    html
}

fn render_phase(phase: &Phase) -> String {
    let mut html = String::from("<div class=\"phase-card\">");
    html.push_str(&format!("<h3>{}</h3>", html_escape(&phase.phase)));

    let weeks = present(&phase.weeks);
    let duration = present(&phase.duration_weeks);
    if weeks.is_some() || duration.is_some() {
        html.push_str("<div class=\"phase-timeline\">");
        if let Some(weeks) = weeks {
            html.push_str(&format!("<span>{}</span>", html_escape(&weeks.to_string())));
        }
        if let Some(duration) = duration {
            html.push_str(&format!("<span>({} weeks)</span>", html_escape(&duration.to_string())));
        }
        html.push_str("</div>");
    }

    for milestone in &phase.milestones {
        html.push_str(&render_milestone(milestone));
    }

    html.push_str("</div>");
    html
}

fn render_milestone(milestone: &Milestone) -> String {
    let mut html = String::from("<div class=\"milestone-card\">");
    html.push_str(&format!("<h4>{}</h4>", html_escape(&milestone.title)));

    let timeline = present(&milestone.timeline_weeks);
    let hours = present(&milestone.estimated_total_hours);
    if timeline.is_some() || hours.is_some() {
        html.push_str("<div class=\"milestone-meta\">");
        if let Some(timeline) = timeline {
            html.push_str(&format!("<span>📅 {}</span>", html_escape(&timeline.to_string())));
        }
        if let Some(hours) = hours {
            html.push_str(&format!("<span>⏱️ {} hours</span>", html_escape(&hours.to_string())));
        }
        html.push_str("</div>");
    }

    if !milestone.skills.is_empty() {
        html.push_str("<div class=\"skills-section\">");
        list_section(&mut html, "🎯 Skills:", milestone.skills.iter().map(|s| html_escape(s)));
        html.push_str("</div>");
    }

    if let Some(entries) = milestone.certification_entries() {
        html.push_str("<div class=\"cert-section\">");
        list_section(
            &mut html,
            "🏅 Certification:",
            entries.iter().map(|(key, value)| {
                let shown = match value.as_str() {
                    Some(s) => s.to_string(),
                    None => value.to_string(),
                };
                format!("<b>{}:</b> {}", html_escape(key), html_escape(&shown))
            }),
        );
        html.push_str("</div>");
    }

    if !milestone.topics.is_empty() {
        html.push_str("<div class=\"topics-section\">");
        list_section(&mut html, "📚 Topics:", milestone.topics.iter().map(topic_item));
        html.push_str("</div>");
    }

    html.push_str("</div>");
    html
}

// ---------------------------------------------------------------------------
// Validation review
// ---------------------------------------------------------------------------

fn render_validation(report: &ValidationReport) -> String {
    let Some(status) = report.status() else {
        return String::new();
    };
    let status_class = if report.is_approved() { "approved" } else { "needs-review" };

    let mut html = String::from("<div class=\"validation-card\">");
    html.push_str("<h3>Curriculum Quality Review</h3>");
    html.push_str(&format!(
        "<p class=\"validation-status {}\"><b>Status:</b> {}</p>",
        status_class,
        html_escape(status)
    ));
    if !report.validation_issues.is_empty() {
        list_section(&mut html, "Issues:", report.validation_issues.iter().map(|s| html_escape(s)));
    }
    if !report.validation_suggestions.is_empty() {
        list_section(
            &mut html,
            "Suggestions:",
            report.validation_suggestions.iter().map(|s| html_escape(s)),
        );
    }
    html.push_str("</div>");
    html
}

// ---------------------------------------------------------------------------
// DOM
// ---------------------------------------------------------------------------

/// Redraw `#result` from the current state.
pub fn mount(document: &Document, state: &AppState) -> Result<(), ClientError> {
    let result = dom_utils::require(document, RESULT_ID)?;

    match (&state.result, &state.current_plan) {
        (ResultView::Empty, _) => result.set_inner_html(""),
        (ResultView::Loading, _) => result.set_inner_html(&status_card(MSG_LOADING)),
        (ResultView::Failed(_), _) => result.set_inner_html(&status_card(MSG_GENERATE_FAILED)),
        (ResultView::UnknownFormat, _) | (ResultView::Plan, None) => {
            result.set_inner_html(&status_card(MSG_UNKNOWN_FORMAT))
        }
        (ResultView::Plan, Some(stored)) => {
            result.set_inner_html("");
            let bar = download_bar::build(document, state.exporting_pdf)?;
            result.append_child(&bar)?;

            let content = document.create_element("div")?;
            content.set_class_name("plan-content");
            content.set_inner_html(&render_plan_html(&stored.plan));
            result.append_child(&content)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::{json, Value};

    fn render(value: Value) -> String {
        render_plan_html(&Plan::from_value(&value).unwrap())
    }

    #[test]
    fn minimal_semester_renders_title_only() {
        let html = render(json!({"semesters": [{"semester": 1, "courses": [{"title": "Intro"}]}]}));

        assert_eq!(html.matches("class=\"semester-card\"").count(), 1);
        assert_eq!(html.matches("class=\"course-card\"").count(), 1);
        assert!(html.contains("<h3>Semester 1</h3>"));
        assert!(html.contains("Intro"));
        assert!(html.contains("<h2>Curriculum Plan</h2>"));
        assert!(!html.contains("<ul>"));
        assert!(!html.contains("Skills"));
        assert!(!html.contains("Topics"));
        assert!(!html.contains("Deliverable"));
        assert!(!html.contains("difficulty-badge"));
    }

    #[test]
    fn capstone_badge_only_on_last_semester() {
        let html = render(json!({
            "include_capstone": true,
            "semesters": [
                {"semester": 1, "courses": []},
                {"semester": 2, "courses": []},
                {"semester": 3, "courses": []}
            ]
        }));
        assert_eq!(html.matches("CAPSTONE").count(), 1);
        let badge = html.find("CAPSTONE").unwrap();
        assert!(badge > html.find("Semester 3").unwrap());

        let without = render(json!({
            "include_capstone": false,
            "semesters": [{"semester": 1, "courses": []}]
        }));
        assert!(!without.contains("CAPSTONE"));
    }

    #[test]
    fn roadmap_response_never_uses_semester_renderer() {
        let html = render(json!({
            "semesters": [{"semester": 1, "courses": [{"title": "Hidden"}]}],
            "roadmap": [{"phase": "Phase 1", "weeks": "Weeks 1-4", "duration_weeks": 4,
                         "milestones": [{"title": "Shell", "timeline_weeks": "Week 1"}]}],
            "total_weeks": 12,
            "weekly_hours": "10"
        }));
        assert!(html.contains("class=\"phase-card\""));
        assert!(html.contains("<h2>Learning Path Roadmap</h2>"));
        assert!(!html.contains("semester-card"));
        assert!(!html.contains("Hidden"));
        assert!(html.contains("<span><b>Duration:</b> 12 weeks</span>"));
        assert!(html.contains("<span><b>Weekly Commitment:</b> 10 hours</span>"));
        assert!(html.contains("<span>Weeks 1-4</span><span>(4 weeks)</span>"));
        assert!(html.contains("<span>📅 Week 1</span>"));
    }

    #[test]
    fn milestone_sections_render_when_present() {
        let html = render(json!({
            "roadmap": [{"phase": "Cloud", "milestones": [{
                "title": "AWS",
                "estimated_total_hours": 40,
                "skills": ["IAM"],
                "certification": {"name": "SAA-C03", "cost": 150},
                "topics": ["VPC", {"name": "EC2", "estimated_hours": 5, "weeks": "Week 2"}]
            }]}]
        }));
        assert!(html.contains("<span>⏱️ 40 hours</span>"));
        assert!(html.contains("<li>IAM</li>"));
        assert!(html.contains("<li><b>name:</b> SAA-C03</li>"));
        assert!(html.contains("<li><b>cost:</b> 150</li>"));
        assert!(html.contains("<li>VPC</li>"));
        assert!(html.contains(
            "<li>EC2 <span class=\"topic-hours\">(5h)</span> <span class=\"topic-weeks\">Week 2</span></li>"
        ));
    }

    #[test]
    fn course_details_and_difficulty_colour() {
        let html = render(json!({"semesters": [{"semester": 2, "courses": [{
            "title": "Networks",
            "difficulty": "Intermediate",
            "skills": ["TCP"],
            "topics": ["Routing"],
            "outcome_project": "Build a proxy"
        }]}]}));
        assert!(html.contains("background:#FF9800"));
        assert!(html.contains("<li>TCP</li>"));
        assert!(html.contains("<li>Routing</li>"));
        assert!(html.contains("💡 Deliverable:</strong> Build a proxy"));
    }

    #[test]
    fn validation_card_follows_status() {
        let html = render(json!({
            "semesters": [],
            "validation_status": "approved",
            "validation_suggestions": ["Add a lab"]
        }));
        assert!(html.contains("validation-status approved"));
        assert!(html.contains("<li>Add a lab</li>"));
        assert!(!html.contains("Issues:"));

        let plain = render(json!({"semesters": []}));
        assert!(!plain.contains("validation-card"));
    }

    #[test]
    fn text_is_escaped() {
        let html = render(json!({
            "program_title": "<script>alert(1)</script>",
            "semesters": [{"semester": 1, "courses": [{"title": "C & C++"}]}]
        }));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("C &amp; C++"));
    }

    #[test]
    fn status_cards() {
        assert_eq!(
            status_card(MSG_GENERATE_FAILED),
            "<div class=\"semester-card\">Error generating curriculum</div>"
        );
    }

    fn optional_list() -> impl Strategy<Value = Option<Value>> {
        prop_oneof![
            Just(None),
            Just(Some(Value::Null)),
            Just(Some(json!([]))),
        ]
    }

    proptest! {
        #[test]
        fn shape_decides_renderer(
            semesters in 0usize..5,
            phases in 0usize..4,
            with_roadmap in any::<bool>(),
            capstone in any::<bool>(),
        ) {
            let mut value = json!({
                "include_capstone": capstone,
                "semesters": (1..=semesters)
                    .map(|n| json!({"semester": n, "courses": [{"title": "C"}]}))
                    .collect::<Vec<_>>(),
            });
            if with_roadmap {
                value["roadmap"] = (0..phases)
                    .map(|n| json!({"phase": format!("Phase {}", n + 1), "milestones": []}))
                    .collect::<Vec<_>>()
                    .into();
            }

            let html = render(value);
            if with_roadmap {
                prop_assert_eq!(html.matches("class=\"phase-card\"").count(), phases);
                prop_assert!(!html.contains("semester-card"));
                prop_assert!(!html.contains("CAPSTONE"));
            } else {
                prop_assert_eq!(html.matches("class=\"semester-card\"").count(), semesters);
                prop_assert_eq!(
                    html.matches("CAPSTONE").count(),
                    usize::from(capstone && semesters > 0)
                );
            }
        }
    }

    proptest! {
        #[test]
        fn missing_optional_fields_produce_no_sections(
            skills in optional_list(),
            topics in optional_list(),
            certification in prop_oneof![Just(None), Just(Some(Value::Null)), Just(Some(json!({})))],
            title in "[A-Za-z ]{1,20}",
        ) {
            let mut course = json!({"title": title.clone()});
            let mut milestone = json!({"title": title});
            if let Some(s) = &skills {
                course["skills"] = s.clone();
                milestone["skills"] = s.clone();
            }
            if let Some(t) = &topics {
                course["topics"] = t.clone();
                milestone["topics"] = t.clone();
            }
            if let Some(c) = certification {
                milestone["certification"] = c;
            }

            let semester_html = render(json!({"semesters": [{"semester": 1, "courses": [course]}]}));
            let roadmap_html = render(json!({"roadmap": [{"phase": "P", "milestones": [milestone]}]}));
            for html in [semester_html, roadmap_html] {
                prop_assert!(!html.contains("skills-section"));
                prop_assert!(!html.contains("topics-section"));
                prop_assert!(!html.contains("cert-section"));
            }
        }
    }
}
