//! Checklist task extraction.
//!
//! Scans a person's section for unchecked checklist lines (`- [ ] ...`) and
//! builds one enriched [`Task`] record per match, in document order.
//! Enrichment is purely textual: an estimated time parsed from a trailing
//! `- N mins` fragment, a day tag from the nearest preceding `#### <Day> -`
//! heading, a description collected from the plain bullet lines that follow,
//! and a keyword-derived category/priority context.

use regex::Regex;
use std::sync::LazyLock;
use warroom_types::{Category, Priority};

static TASK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^- \[ \] (.+)$").unwrap());
static TIME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"- (\d+) mins").unwrap());
static DAY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"####\s+(\w+)\s+-").unwrap());
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// A single actionable item extracted from a checklist section.
///
/// `completed` is always initialised to `false`: completion state lives on
/// the client and is never persisted server-side.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub completed: bool,
    pub estimated_time: Option<u32>,
    pub day: String,
    pub context: TaskContext,
}

/// Keyword-derived context for a task.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskContext {
    pub category: Category,
    pub related_docs: Vec<String>,
    pub priority: Priority,
}

impl TaskContext {
    /// Classify a task by keyword matching against its text.
    ///
    /// Category checks run in a fixed precedence order and the first match
    /// wins, so a task mentioning both "social" and "email" is social.
    /// Priority is high for urgent/critical/launch keywords or for the long
    /// time estimates `120 mins` / `150 mins` (matched against the raw text).
    pub fn classify(text: &str) -> Self {
        let lower = text.to_lowercase();

        let (category, related_docs): (Category, &[&str]) = if contains_any(
            &lower,
            &["analytics", "metrics", "performance"],
        ) {
            (
                Category::Analytics,
                &["PERFORMANCE-DASHBOARD.md", "I-performance-tracking-templates.md"],
            )
        } else if contains_any(&lower, &["social", "instagram", "twitter", "tiktok"]) {
            (
                Category::Social,
                &["J-templates-examples.md", "M-content-strategy.md"],
            )
        } else if contains_any(&lower, &["email", "newsletter"]) {
            (Category::Email, &["K-newsletter-templates.md"])
        } else if contains_any(&lower, &["website", "content"]) {
            (
                Category::Content,
                &["N-homepage-content.md", "M-content-strategy.md"],
            )
        } else if contains_any(&lower, &["team", "coordination", "meeting"]) {
            (
                Category::Coordination,
                &["TEAM-COORDINATION.md", "O-team-roles-guide.md"],
            )
        } else if contains_any(&lower, &["advertising", "amazon", "budget"]) {
            (Category::Advertising, &["CAMPAIGN-EXECUTION-GUIDE.md"])
        } else {
            (Category::General, &[])
        };

        let priority = if contains_any(&lower, &["urgent", "critical", "launch"])
            || text.contains("120 mins")
            || text.contains("150 mins")
        {
            Priority::High
        } else {
            Priority::Normal
        };

        Self {
            category,
            related_docs: related_docs.iter().map(|s| s.to_string()).collect(),
            priority,
        }
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Extract all unchecked checklist tasks from a section, in document order.
///
/// Duplicate task texts are not deduplicated and the resulting ids are not
/// guaranteed unique; tasks are only ever addressed within one person's list.
pub fn extract_tasks(section: &str) -> Vec<Task> {
    TASK_RE
        .captures_iter(section)
        .map(|cap| {
            let whole = cap.get(0).unwrap();
            let text = cap[1].to_string();

            let estimated_time = TIME_RE
                .captures(&text)
                .and_then(|c| c[1].parse::<u32>().ok());

            Task {
                id: task_id(&text),
                description: description_after(section, whole.end()),
                completed: false,
                estimated_time,
                day: day_before(section, whole.start()),
                context: TaskContext::classify(&text),
                text,
            }
        })
        .collect()
}

/// Derive a deterministic identifier from task text.
///
/// Lower-cased, non-alphanumerics stripped (whitespace kept), whitespace runs
/// collapsed to single hyphens, truncated to 50 characters. Identifiers are
/// display handles, not unique keys.
pub fn task_id(text: &str) -> String {
    let lower = text.to_lowercase();
    let stripped: String = lower
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect();

    WHITESPACE_RE
        .replace_all(&stripped, "-")
        .chars()
        .take(50)
        .collect()
}

/// Day tag from the nearest `#### <Day> -` heading before `task_start`.
fn day_before(section: &str, task_start: usize) -> String {
    DAY_RE
        .captures_iter(&section[..task_start])
        .last()
        .map(|cap| cap[1].to_lowercase())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Collect the plain bullet lines following a task as its description.
///
/// Scanning stops at the first blank line, checklist item or heading; bullet
/// prefixes are stripped and lines joined with newlines. Non-bullet prose
/// lines are skipped without ending the scan.
fn description_after(section: &str, task_line_end: usize) -> Option<String> {
    let rest = &section[task_line_end..];

    let mut collected: Vec<&str> = Vec::new();
    // The first item of `lines()` is the tail of the task line itself.
    for line in rest.lines().skip(1) {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("- [ ]") || trimmed.starts_with('#') {
            break;
        }
        if let Some(bullet) = trimmed.strip_prefix("- ") {
            collected.push(bullet);
        }
    }

    if collected.is_empty() {
        None
    } else {
        Some(collected.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_tasks_in_document_order() {
        let section = "\
## 👤 PERSON 1: Content Creator
#### Monday - Focus
- [ ] First task - 30 mins
- [ ] Second task
";
        let tasks = extract_tasks(section);
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].text, "First task - 30 mins");
        assert_eq!(tasks[1].text, "Second task");
        assert!(!tasks[0].completed);
    }

    #[test]
    fn test_estimated_time_parsed_and_text_kept() {
        let tasks = extract_tasks("- [ ] Design Instagram post - 30 mins\n");
        assert_eq!(tasks[0].estimated_time, Some(30));
        assert!(tasks[0].text.ends_with("- 30 mins"));
    }

    #[test]
    fn test_missing_time_is_none() {
        let tasks = extract_tasks("- [ ] Task without estimate\n");
        assert_eq!(tasks[0].estimated_time, None);
    }

    #[test]
    fn test_checked_items_are_ignored() {
        let tasks = extract_tasks("- [x] Done task\n- [ ] Open task\n");
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "Open task");
    }

    #[test]
    fn test_task_id_normalization() {
        assert_eq!(
            task_id("Design Instagram post - 30 mins"),
            "design-instagram-post-30-mins"
        );
        assert_eq!(task_id("Check e-mail & DMs!"), "check-email-dms");
    }

    #[test]
    fn test_task_id_deterministic_and_bounded() {
        let text = "A very long task description that keeps going and going well past fifty characters";
        let id = task_id(text);
        assert_eq!(id, task_id(text));
        assert!(id.chars().count() <= 50);
        assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
    }

    #[test]
    fn test_duplicate_texts_yield_duplicate_ids() {
        let tasks = extract_tasks("- [ ] Same task\n\n- [ ] Same task\n");
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id, tasks[1].id);
    }

    #[test]
    fn test_day_from_nearest_preceding_heading() {
        let section = "\
#### Monday - Focus
- [ ] Task one
#### Tuesday - Push
- [ ] Task two
";
        let tasks = extract_tasks(section);
        assert_eq!(tasks[0].day, "monday");
        assert_eq!(tasks[1].day, "tuesday");
    }

    #[test]
    fn test_day_defaults_to_unknown() {
        let tasks = extract_tasks("- [ ] Task with no day context\n");
        assert_eq!(tasks[0].day, "unknown");
    }

    #[test]
    fn test_description_collects_plain_bullets() {
        let section = "\
- [ ] Write newsletter draft
- focus on the launch announcement
- keep it under 500 words

- [ ] Next task
";
        let tasks = extract_tasks(section);
        assert_eq!(
            tasks[0].description.as_deref(),
            Some("focus on the launch announcement\nkeep it under 500 words")
        );
        assert_eq!(tasks[1].description, None);
    }

    #[test]
    fn test_description_stops_at_heading_and_checklist() {
        let section = "\
- [ ] Task A
- detail for A
#### Tuesday - Push
- [ ] Task B
- detail for B
- [ ] Task C
";
        let tasks = extract_tasks(section);
        assert_eq!(tasks[0].description.as_deref(), Some("detail for A"));
        assert_eq!(tasks[1].description.as_deref(), Some("detail for B"));
        assert_eq!(tasks[2].description, None);
    }

    #[test]
    fn test_description_skips_indented_sub_bullets_after_trim() {
        let section = "- [ ] Task A\n  - indented detail\n- plain detail\n";
        let tasks = extract_tasks(section);
        assert_eq!(
            tasks[0].description.as_deref(),
            Some("indented detail\nplain detail")
        );
    }

    #[test]
    fn test_category_precedence_social_before_email() {
        let context = TaskContext::classify("Draft social email blast");
        assert_eq!(context.category, Category::Social);
        assert_eq!(
            context.related_docs,
            vec!["J-templates-examples.md", "M-content-strategy.md"]
        );
    }

    #[test]
    fn test_category_analytics_first_in_precedence() {
        let context = TaskContext::classify("Review social analytics dashboard");
        assert_eq!(context.category, Category::Analytics);
    }

    #[test]
    fn test_category_general_when_no_keyword_matches() {
        let context = TaskContext::classify("Tidy the desk");
        assert_eq!(context.category, Category::General);
        assert!(context.related_docs.is_empty());
        assert_eq!(context.priority, Priority::Normal);
    }

    #[test]
    fn test_priority_high_for_launch_keyword() {
        let context = TaskContext::classify("Prepare launch checklist");
        assert_eq!(context.priority, Priority::High);
    }

    #[test]
    fn test_priority_high_for_long_estimates() {
        assert_eq!(
            TaskContext::classify("Deep work block - 120 mins").priority,
            Priority::High
        );
        assert_eq!(
            TaskContext::classify("Deep work block - 90 mins").priority,
            Priority::Normal
        );
    }

    #[test]
    fn test_task_serializes_camel_case() {
        let tasks = extract_tasks("- [ ] Design Instagram post - 30 mins\n");
        let json = serde_json::to_value(&tasks[0]).unwrap();
        assert_eq!(json["id"], "design-instagram-post-30-mins");
        assert_eq!(json["estimatedTime"], 30);
        assert_eq!(json["context"]["category"], "social");
        assert_eq!(json["context"]["priority"], "normal");
        assert!(json["context"]["relatedDocs"].is_array());
    }
}
