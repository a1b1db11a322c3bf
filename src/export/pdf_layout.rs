//! Page layout for the in-browser PDF export.
//!
//! The layout walks the plan and emits a flat list of [`PdfOp`]s, tracking a
//! vertical cursor against the page height and inserting a page break before
//! any line that would cross the bottom margin.  Drawing is left to the
//! backend in `jspdf.rs`, so everything here is plain data and testable
//! without a browser.

use unicode_segmentation::UnicodeSegmentation;

use crate::constants::PDF_FOOTER_BRAND;
use crate::models::{present, present_text, CurriculumResponse, Plan, RoadmapResponse, Topic};

/// Points to millimetres.
const PT_TO_MM: f64 = 0.3528;
/// Line pitch relative to font size.
const LINE_FACTOR: f64 = 1.4;
/// Average glyph advance for Helvetica, as a share of the font size.
const AVG_GLYPH_EM: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl Default for PageGeometry {
    /// A4 portrait in millimetres (jsPDF's default unit).
    fn default() -> Self {
        Self {
            width: 210.0,
            height: 297.0,
            margin: 15.0,
        }
    }
}

impl PageGeometry {
    pub fn bottom(&self) -> f64 {
        self.height - self.margin
    }

    pub fn usable_width(&self) -> f64 {
        self.width - 2.0 * self.margin
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f64,
    pub bold: bool,
    pub color: (u8, u8, u8),
}

impl TextStyle {
    pub const TITLE: TextStyle = TextStyle { size: 20.0, bold: true, color: (15, 23, 36) };
    pub const HEADING: TextStyle = TextStyle { size: 14.0, bold: true, color: (15, 23, 36) };
    pub const SUBHEADING: TextStyle = TextStyle { size: 11.0, bold: true, color: (51, 51, 51) };
    pub const BODY: TextStyle = TextStyle { size: 9.0, bold: false, color: (80, 80, 80) };
    pub const META: TextStyle = TextStyle { size: 9.0, bold: false, color: (25, 50, 168) };
    pub const FOOTER: TextStyle = TextStyle { size: 7.0, bold: false, color: (153, 153, 153) };

    fn line_height(&self) -> f64 {
        self.size * PT_TO_MM * LINE_FACTOR
    }

    fn with_color(self, color: (u8, u8, u8)) -> TextStyle {
        TextStyle { color, ..self }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PdfOp {
    /// One already-wrapped line; `y` is the baseline.
    Text { text: String, x: f64, y: f64, style: TextStyle },
    NewPage,
}

/// Number of characters that fit on a line at `size` points.
pub fn max_columns(width_mm: f64, size_pt: f64) -> usize {
    let glyph = size_pt * PT_TO_MM * AVG_GLYPH_EM;
    ((width_mm / glyph).floor() as usize).max(1)
}

/// Greedy word wrap, measuring in grapheme clusters.  Words longer than a
/// line are split.
pub fn wrap_text(text: &str, columns: usize) -> Vec<String> {
    let columns = columns.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let graphemes: Vec<&str> = word.graphemes(true).collect();
        let len = graphemes.len();

        if current_len > 0 && current_len + 1 + len <= columns {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + len;
            continue;
        }
        if current_len > 0 {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if len <= columns {
            current.push_str(word);
            current_len = len;
        } else {
            let mut chunks = graphemes.chunks(columns).peekable();
            while let Some(chunk) = chunks.next() {
                if chunks.peek().is_some() {
                    lines.push(chunk.concat());
                } else {
                    current = chunk.concat();
                    current_len = chunk.len();
                }
            }
        }
    }
    if current_len > 0 {
        lines.push(current);
    }
    lines
}

pub struct PdfLayout {
    geometry: PageGeometry,
    cursor_y: f64,
    ops: Vec<PdfOp>,
}

impl PdfLayout {
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            cursor_y: geometry.margin,
            ops: Vec::new(),
        }
    }

    fn at_page_top(&self) -> bool {
        self.cursor_y <= self.geometry.margin
    }

    fn new_page(&mut self) {
        self.ops.push(PdfOp::NewPage);
        self.cursor_y = self.geometry.margin;
    }

    /// Start a new page unless the current one is still empty.
    pub fn page_break(&mut self) {
        if !self.at_page_top() {
            self.new_page();
        }
    }

    /// Vertical gap; never carries over to the next page.
    pub fn spacer(&mut self, mm: f64) {
        self.cursor_y = (self.cursor_y + mm).min(self.geometry.bottom());
    }

    pub fn paragraph(&mut self, text: &str, style: TextStyle, indent: f64) {
        let width = self.geometry.usable_width() - indent;
        let line_height = style.line_height();
        for line in wrap_text(text, max_columns(width, style.size)) {
            if self.cursor_y + line_height > self.geometry.bottom() && !self.at_page_top() {
                self.new_page();
            }
            self.cursor_y += line_height;
            self.ops.push(PdfOp::Text {
                text: line,
                x: self.geometry.margin + indent,
                y: self.cursor_y,
                style,
            });
        }
    }

    pub fn finish(self) -> Vec<PdfOp> {
        self.ops
    }
}

const INDENT: f64 = 4.0;

fn topic_line(topic: &Topic, with_weeks: bool) -> String {
    match topic {
        Topic::Name(name) => format!("- {}", name),
        Topic::Detailed(d) => {
            let mut line = format!("- {}", d.name);
            if let Some(hours) = present(&d.estimated_hours) {
                line.push_str(&format!(" ({} hrs)", hours));
            }
            if with_weeks {
                if let Some(weeks) = present(&d.weeks) {
                    line.push_str(&format!(" / {}", weeks));
                }
            }
            line
        }
    }
}

fn layout_semesters(layout: &mut PdfLayout, curriculum: &CurriculumResponse) {
    for (idx, semester) in curriculum.semesters.iter().enumerate() {
        if idx > 0 && idx % 2 == 0 {
            layout.page_break();
        }
        layout.paragraph(&format!("Semester {}", semester.number(idx)), TextStyle::HEADING, 0.0);
        layout.spacer(2.0);

        for (course_idx, course) in semester.courses.iter().enumerate() {
            let title = if course.title.is_empty() { "Untitled Course" } else { &course.title };
            layout.paragraph(&format!("{}. {}", course_idx + 1, title), TextStyle::SUBHEADING, 0.0);

            if let Some(difficulty) = present_text(&course.difficulty) {
                layout.paragraph(&format!("[{}]", difficulty.to_uppercase()), TextStyle::META, INDENT);
            }
            if let Some(description) = present_text(&course.description) {
                layout.paragraph(description, TextStyle::BODY, INDENT);
            }
            if !course.skills.is_empty() {
                layout.paragraph(&format!("Skills: {}", course.skills.join(", ")), TextStyle::META, INDENT);
            }
            if !course.topics.is_empty() {
                layout.paragraph("Topics:", TextStyle::META, INDENT);
                for topic in &course.topics {
                    layout.paragraph(&topic_line(topic, true), TextStyle::BODY, 2.0 * INDENT);
                }
            }
            if let Some(project) = present_text(&course.outcome_project) {
                layout.paragraph(&format!("Deliverable: {}", project), TextStyle::META, INDENT);
            }
            layout.spacer(2.0);
        }
        layout.spacer(4.0);
    }
}

fn layout_roadmap(layout: &mut PdfLayout, roadmap: &RoadmapResponse) {
    for (idx, phase) in roadmap.roadmap.iter().enumerate() {
        if idx > 0 {
            layout.page_break();
        }
        let heading = if phase.phase.is_empty() { format!("Phase {}", idx + 1) } else { phase.phase.clone() };
        layout.paragraph(&heading, TextStyle::HEADING, 0.0);
        layout.spacer(2.0);

        for milestone in &phase.milestones {
            let title = if milestone.title.is_empty() { "Milestone" } else { &milestone.title };
            layout.paragraph(&format!("- {}", title), TextStyle::SUBHEADING, 0.0);

            if let Some(hours) = present(&milestone.estimated_total_hours) {
                layout.paragraph(&format!("Time: {} hrs", hours), TextStyle::META, INDENT);
            }
            if !milestone.skills.is_empty() {
                layout.paragraph(&format!("Skills: {}", milestone.skills.join(", ")), TextStyle::META, INDENT);
            }
            if !milestone.topics.is_empty() {
                layout.paragraph("Topics:", TextStyle::META, INDENT);
                for topic in &milestone.topics {
                    layout.paragraph(&topic_line(topic, false), TextStyle::BODY, 2.0 * INDENT);
                }
            }
            layout.spacer(2.0);
        }
        layout.spacer(4.0);
    }
}

/// Lay out the whole document.  `generated_at` goes into the footer.
pub fn layout_plan(plan: &Plan, generated_at: &str, geometry: PageGeometry) -> Vec<PdfOp> {
    let mut layout = PdfLayout::new(geometry);

    let default_title = match plan {
        Plan::Roadmap(_) => crate::constants::DEFAULT_ROADMAP_TITLE,
        Plan::Semesters(_) => crate::constants::DEFAULT_CURRICULUM_TITLE,
    };
    layout.paragraph(plan.program_title().unwrap_or(default_title), TextStyle::TITLE, 0.0);
    layout.spacer(3.0);
    if let Some(summary) = plan.summary() {
        layout.paragraph(summary, TextStyle::BODY, 0.0);
        layout.spacer(4.0);
    }

    let meta = plan.meta();
    if let Some(weeks) = present(&meta.total_weeks) {
        layout.paragraph(&format!("Duration: {} weeks", weeks), TextStyle::META, 0.0);
    }
    if let Some(hours) = present(&meta.weekly_hours) {
        layout.paragraph(&format!("Weekly Hours: {}", hours), TextStyle::META, 0.0);
    }
    if let Some(difficulty) = present_text(&meta.difficulty) {
        layout.paragraph(&format!("Difficulty: {}", difficulty), TextStyle::META, 0.0);
    }
    if let Some(focus) = present_text(&meta.focus) {
        layout.paragraph(&format!("Focus: {}", focus), TextStyle::META, 0.0);
    } else if let Some(level) = present_text(&meta.level) {
        layout.paragraph(&format!("Level: {}", level), TextStyle::META, 0.0);
    }
    layout.spacer(4.0);

    match plan {
        Plan::Semesters(curriculum) => layout_semesters(&mut layout, curriculum),
        Plan::Roadmap(roadmap) => layout_roadmap(&mut layout, roadmap),
    }

    let validation = plan.validation();
    if let Some(status) = validation.status() {
        layout.page_break();
        layout.paragraph("Curriculum Quality Review", TextStyle::HEADING, 0.0);
        let status_color = if validation.is_approved() { (0, 128, 0) } else { (255, 107, 107) };
        layout.paragraph(&format!("Status: {}", status), TextStyle::META.with_color(status_color), 0.0);
        for item in validation.validation_issues.iter().chain(&validation.validation_suggestions) {
            layout.paragraph(&format!("- {}", item), TextStyle::BODY, INDENT);
        }
    }

    layout.spacer(6.0);
    layout.paragraph(&format!("{} • {}", PDF_FOOTER_BRAND, generated_at), TextStyle::FOOTER, 0.0);

    layout.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn texts(ops: &[PdfOp]) -> Vec<&str> {
        ops.iter()
            .filter_map(|op| match op {
                PdfOp::Text { text, .. } => Some(text.as_str()),
                PdfOp::NewPage => None,
            })
            .collect()
    }

    fn pages(ops: &[PdfOp]) -> usize {
        1 + ops.iter().filter(|op| matches!(op, PdfOp::NewPage)).count()
    }

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(wrap_text("alpha beta gamma", 10), vec!["alpha beta", "gamma"]);
        assert_eq!(wrap_text("  spaced   out  ", 20), vec!["spaced out"]);
        assert!(wrap_text("", 10).is_empty());
    }

    #[test]
    fn splits_words_longer_than_a_line() {
        assert_eq!(wrap_text("abcdefghij xy", 4), vec!["abcd", "efgh", "ij", "xy"]);
    }

    #[test]
    fn counts_graphemes_not_bytes() {
        // Each "é" is two bytes; the line still fits in five columns.
        assert_eq!(wrap_text("ééééé", 5), vec!["ééééé"]);
    }

    #[test]
    fn roadmap_phases_start_on_new_pages() {
        let plan = Plan::from_value(&json!({
            "program_title": "Cloud",
            "roadmap": [
                {"phase": "Basics", "milestones": [{"title": "Linux", "estimated_total_hours": 20}]},
                {"phase": "Advanced", "milestones": [{"title": "K8s", "topics": [{"name": "Pods", "estimated_hours": 3}]}]}
            ]
        }))
        .unwrap();
        let ops = layout_plan(&plan, "2024-05-01 10:00:00", PageGeometry::default());

        assert_eq!(pages(&ops), 2);
        let lines = texts(&ops);
        assert_eq!(lines[0], "Cloud");
        assert!(lines.contains(&"Time: 20 hrs"));
        assert!(lines.contains(&"- Pods (3 hrs)"));
        assert_eq!(*lines.last().unwrap(), "Generated by CurricuForge AI • 2024-05-01 10:00:00");
    }

    #[test]
    fn semester_layout_with_review_page() {
        let plan = Plan::from_value(&json!({
            "semesters": [{"semester": 1, "courses": [
                {"title": "Intro", "difficulty": "Beginner", "skills": ["git", "bash"]}
            ]}],
            "validation_status": "Needs Revision",
            "validation_issues": ["Too short"]
        }))
        .unwrap();
        let ops = layout_plan(&plan, "now", PageGeometry::default());
        let lines = texts(&ops);

        assert_eq!(lines[0], "Curriculum Plan");
        assert!(lines.contains(&"Semester 1"));
        assert!(lines.contains(&"1. Intro"));
        assert!(lines.contains(&"[BEGINNER]"));
        assert!(lines.contains(&"Skills: git, bash"));
        assert!(lines.contains(&"Status: Needs Revision"));
        assert!(lines.contains(&"- Too short"));
        assert_eq!(pages(&ops), 2);
    }

    #[test]
    fn page_break_on_empty_page_is_a_no_op() {
        let mut layout = PdfLayout::new(PageGeometry::default());
        layout.page_break();
        assert!(layout.finish().is_empty());
    }

    proptest! {
        #[test]
        fn lines_never_cross_the_bottom_margin(
            paragraphs in prop::collection::vec("[a-z]{1,15}( [a-z]{1,15}){0,30}", 1..60),
            height in 60.0f64..300.0,
        ) {
            let geometry = PageGeometry { width: 120.0, height, margin: 10.0 };
            let mut layout = PdfLayout::new(geometry);
            for (i, p) in paragraphs.iter().enumerate() {
                let style = if i % 5 == 0 { TextStyle::HEADING } else { TextStyle::BODY };
                layout.paragraph(p, style, 0.0);
                layout.spacer(1.5);
            }
            for op in layout.finish() {
                if let PdfOp::Text { y, .. } = op {
                    prop_assert!(y <= geometry.bottom() + 1e-9);
                    prop_assert!(y > geometry.margin);
                }
            }
        }
    }
}
