//! Constants used throughout the war-room core crate.
//!
//! This module contains the fixed document names the campaign server reads,
//! to ensure consistency across the codebase and make maintenance easier.

/// Directory name searched for when resolving the docs directory.
pub const DOCS_DIR_NAME: &str = "docs";

/// The daily task checklist for all three team members.
pub const DAILY_TASKS_FILE: &str = "DAILY-TASK-SYSTEM.md";

/// High-level project dashboard sections.
pub const PROJECT_DASHBOARD_FILE: &str = "PROJECT-DASHBOARD.md";

/// Performance metrics and analysis sections.
pub const PERFORMANCE_DASHBOARD_FILE: &str = "PERFORMANCE-DASHBOARD.md";

/// Team communication framework, schedule and meeting templates.
pub const TEAM_COORDINATION_FILE: &str = "TEAM-COORDINATION.md";

/// Role descriptions and per-person daily task guides.
pub const TEAM_ROLES_FILE: &str = "O-team-roles-guide.md";

/// Marketing-content template documents, keyed by their filename prefix.
pub const TEMPLATE_FILES: &[&str] = &[
    "J-templates-examples.md",
    "K-newsletter-templates.md",
    "L-press-release-template.md",
    "M-content-strategy.md",
];

/// Every document the services read, used for startup validation.
pub const KNOWN_DOCUMENTS: &[&str] = &[
    DAILY_TASKS_FILE,
    PROJECT_DASHBOARD_FILE,
    PERFORMANCE_DASHBOARD_FILE,
    TEAM_COORDINATION_FILE,
    TEAM_ROLES_FILE,
    "J-templates-examples.md",
    "K-newsletter-templates.md",
    "L-press-release-template.md",
    "M-content-strategy.md",
];
