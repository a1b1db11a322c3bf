// DOM ids shared with the page markup. The markup owns these elements; the
// script only looks them up.
pub const PLANNER_TYPE_ID: &str = "plannerType";
pub const RESULT_ID: &str = "result";
pub const GENERATE_BUTTON_ID: &str = "generateBtn";
pub const REFINE_CONTAINER_ID: &str = "refineContainer";
pub const REFINE_TEXT_ID: &str = "refineText";
pub const REFINE_BUTTON_ID: &str = "refineBtn";

// Semester planner fields
pub const SKILL_ID: &str = "skill";
pub const LEVEL_ID: &str = "level";
pub const SEMESTERS_ID: &str = "semesters";
pub const HOURS_ID: &str = "hours";
pub const FOCUS_ID: &str = "focus";
pub const INCLUDE_CAPSTONE_ID: &str = "includeCapstone";

// Personal planner fields
pub const STUDY_DOMAIN_ID: &str = "studyDomain";
pub const CAREER_PATH_ID: &str = "careerPath";
pub const EXPERIENCE_ID: &str = "experience";
pub const PACE_ID: &str = "pace";
pub const WEEKLY_HOURS_ID: &str = "weeklyHours";
pub const DURATION_ID: &str = "duration";

// Backend routes
pub const GENERATE_PATH: &str = "/generate";
pub const REFINE_PATH: &str = "/refine-plan";
pub const EXPORT_PDF_PATH: &str = "/export-pdf";

// Pipeline animation delays (milliseconds)
pub const PLANNER_DELAY_MS: u32 = 700;
pub const VALIDATOR_DELAY_MS: u32 = 600;

// Downloads
pub const JSON_FILENAME: &str = "curriculum.json";
pub const PDF_FILENAME: &str = "curriculum.pdf";

// Default headings when the backend omits `program_title`
pub const DEFAULT_CURRICULUM_TITLE: &str = "Curriculum Plan";
pub const DEFAULT_ROADMAP_TITLE: &str = "Learning Path Roadmap";

// Button labels
pub const REFINE_BUTTON_LABEL: &str = "Refine Curriculum";
pub const REFINE_BUTTON_BUSY_LABEL: &str = "Refining...";
pub const JSON_BUTTON_LABEL: &str = "📥 JSON";
pub const PDF_BUTTON_LABEL: &str = "📄 PDF";
pub const PDF_BUTTON_BUSY_LABEL: &str = "Generating PDF...";

// User-facing messages
pub const MSG_SELECT_PLANNER: &str = "Please select Planner Type";
pub const MSG_LOADING: &str = "AI Agents Designing Curriculum...";
pub const MSG_GENERATE_FAILED: &str = "Error generating curriculum";
pub const MSG_UNKNOWN_FORMAT: &str = "⚠ Unknown data format received from agents.";
pub const MSG_NO_PLAN_FOR_EXPORT: &str =
    "No curriculum data available. Please generate a curriculum first.";
pub const MSG_REFINE_UI_MISSING: &str = "Refine UI not available";
pub const MSG_EMPTY_INSTRUCTION: &str = "Please enter a refinement instruction.";
pub const MSG_NO_PLAN_FOR_REFINE: &str = "No generated curriculum found. Generate one first.";
pub const MSG_REFINE_FALLBACK: &str = "Refinement failed";

// Difficulty badge colours
pub const DIFFICULTY_BEGINNER_COLOR: &str = "#4CAF50";
pub const DIFFICULTY_INTERMEDIATE_COLOR: &str = "#FF9800";
pub const DIFFICULTY_ADVANCED_COLOR: &str = "#f44336";

pub const PDF_FOOTER_BRAND: &str = "Generated by CurricuForge AI";
