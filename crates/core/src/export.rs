//! Export formatters.
//!
//! Pure string templating over already-derived records. CSV fields are
//! double-quoted with embedded quotes doubled; markdown exports are plain
//! checklists and concatenated template bodies. JSON export is handled by
//! serde at the call site.

use crate::services::{DailyTasks, DashboardOverview, PerformanceReport, Template};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use warroom_types::{ExternalService, PersonId};

/// Dashboard snapshot bundled for export.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardExport {
    pub dashboard: DashboardOverview,
    pub metrics: PerformanceReport,
    pub export_date: DateTime<Utc>,
}

/// Acknowledgement for a stubbed external-service hand-off.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ExternalAck {
    pub message: String,
    pub instructions: String,
}

/// Quote a CSV field, doubling embedded quotes.
fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Tasks as CSV with one row per task.
pub fn tasks_to_csv(tasks: &DailyTasks) -> String {
    let mut csv = String::from("Person,Day,Task,Estimated Time,Completed\n");

    for person in PersonId::ALL {
        for task in tasks.for_person(person) {
            let estimated = task
                .estimated_time
                .map(|m| m.to_string())
                .unwrap_or_default();
            csv.push_str(&format!(
                "{},{},{},{},{}\n",
                csv_field(person.as_str()),
                csv_field(&task.day),
                csv_field(&task.text),
                csv_field(&estimated),
                csv_field(&task.completed.to_string()),
            ));
        }
    }

    csv
}

/// Tasks as a markdown checklist grouped per person.
pub fn tasks_to_markdown(tasks: &DailyTasks) -> String {
    let mut md = String::from("# Campaign Daily Tasks Export\n\n");
    md.push_str(&format!("Exported on: {}\n\n", Utc::now().to_rfc3339()));

    for (index, person) in PersonId::ALL.iter().enumerate() {
        md.push_str(&format!("## Person {}\n\n", index + 1));
        for task in tasks.for_person(*person) {
            let status = if task.completed { "[x]" } else { "[ ]" };
            md.push_str(&format!("- {} {}\n", status, task.text));
        }
        md.push('\n');
    }

    md
}

/// Templates as CSV with one row per template section.
///
/// Section content has newlines flattened to spaces so each record stays on
/// one line.
pub fn templates_to_csv(templates: &BTreeMap<String, Template>) -> String {
    let mut csv = String::from("Type,Title,Section,Content\n");

    for (key, template) in templates {
        if template.sections.is_empty() {
            let content = template.content.replace('\n', " ");
            csv.push_str(&format!(
                "{},{},{},{}\n",
                csv_field(key),
                csv_field(&template.title),
                csv_field(""),
                csv_field(&content),
            ));
            continue;
        }

        for section in &template.sections {
            let content = section.content.replace('\n', " ");
            csv.push_str(&format!(
                "{},{},{},{}\n",
                csv_field(key),
                csv_field(&template.title),
                csv_field(&section.title),
                csv_field(&content),
            ));
        }
    }

    csv
}

/// Templates as one concatenated markdown document.
pub fn templates_to_markdown(templates: &BTreeMap<String, Template>) -> String {
    let mut md = String::from("# Campaign Marketing Templates Export\n\n");
    md.push_str(&format!("Exported on: {}\n\n", Utc::now().to_rfc3339()));

    for template in templates.values() {
        md.push_str(&format!("## {}\n\n", template.title));
        md.push_str(&template.content);
        md.push_str("\n\n---\n\n");
    }

    md
}

/// Dashboard snapshot as Section,Key,Value rows.
pub fn dashboard_to_csv(export: &DashboardExport) -> String {
    let mut csv = String::from("Section,Key,Value\n");

    let mut row = |section: &str, key: &str, value: &str| {
        csv.push_str(&format!(
            "{},{},{}\n",
            csv_field(section),
            csv_field(key),
            csv_field(&value.replace('\n', " ")),
        ));
    };

    row("Export", "Date", &export.export_date.to_rfc3339());
    row("Dashboard", "Overview", &export.dashboard.overview);
    row("Dashboard", "Status", &export.dashboard.status);
    row("Dashboard", "Team", &export.dashboard.team);
    row("Dashboard", "Metrics", &export.dashboard.metrics);
    row("Dashboard", "Week Plan", &export.dashboard.week_plan);
    row("Metrics", "Summary", &export.metrics.summary);
    row("Metrics", "KPIs", &export.metrics.kpis);
    row("Metrics", "Analysis", &export.metrics.analysis);

    csv
}

/// Stub acknowledgement for an external-service hand-off.
///
/// No external call is made; the instructions tell the user how to finish
/// the hand-off manually.
pub fn external_ack(service: ExternalService) -> ExternalAck {
    let (message, instructions) = match service {
        ExternalService::GoogleWorkspace => (
            "Google Workspace export prepared",
            "Download the JSON file and import to Google Sheets/Docs",
        ),
        ExternalService::Asana => (
            "Asana export prepared",
            "Use CSV format to import tasks to Asana",
        ),
        ExternalService::Slack => (
            "Slack integration prepared",
            "Set up Slack webhook for notifications",
        ),
    };

    ExternalAck {
        message: message.to_string(),
        instructions: instructions.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::extract_tasks;
    use crate::services::{DashboardOverview, PerformanceReport};

    fn sample_tasks() -> DailyTasks {
        let section1 = "\
#### Monday - Focus
- [ ] Design Instagram post - 30 mins
- [ ] Draft \"launch\" newsletter
";
        let section2 = "#### Tuesday - Push\n- [ ] Reply to comments - 20 mins\n";

        DailyTasks {
            person1: extract_tasks(section1),
            person2: extract_tasks(section2),
            person3: vec![],
            metadata: Default::default(),
        }
    }

    /// Minimal CSV line splitter for quoted fields, for round-trip checks.
    fn parse_csv_line(line: &str) -> Vec<String> {
        let mut fields = Vec::new();
        let mut current = String::new();
        let mut in_quotes = false;
        let mut chars = line.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '"' if in_quotes && chars.peek() == Some(&'"') => {
                    current.push('"');
                    chars.next();
                }
                '"' => in_quotes = !in_quotes,
                ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
                _ => current.push(c),
            }
        }
        fields.push(current);
        fields
    }

    #[test]
    fn test_tasks_csv_header_and_rows() {
        let csv = tasks_to_csv(&sample_tasks());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Person,Day,Task,Estimated Time,Completed");
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("\"person1\",\"monday\""));
        assert!(lines[3].starts_with("\"person2\",\"tuesday\""));
    }

    #[test]
    fn test_tasks_csv_round_trip() {
        let tasks = sample_tasks();
        let csv = tasks_to_csv(&tasks);

        let all_tasks: Vec<(PersonId, &crate::parser::Task)> = PersonId::ALL
            .iter()
            .flat_map(|p| tasks.for_person(*p).iter().map(move |t| (*p, t)))
            .collect();

        for (line, (person, task)) in csv.lines().skip(1).zip(&all_tasks) {
            let fields = parse_csv_line(line);
            assert_eq!(fields[0], person.as_str());
            assert_eq!(fields[1], task.day);
            assert_eq!(fields[2], task.text);
            assert_eq!(
                fields[3],
                task.estimated_time.map(|m| m.to_string()).unwrap_or_default()
            );
            assert_eq!(fields[4], task.completed.to_string());
        }
        assert_eq!(csv.lines().count() - 1, all_tasks.len());
    }

    #[test]
    fn test_tasks_csv_doubles_quotes() {
        let csv = tasks_to_csv(&sample_tasks());
        assert!(csv.contains("Draft \"\"launch\"\" newsletter"));
    }

    #[test]
    fn test_tasks_markdown_checklist() {
        let md = tasks_to_markdown(&sample_tasks());
        assert!(md.starts_with("# Campaign Daily Tasks Export"));
        assert!(md.contains("## Person 1"));
        assert!(md.contains("- [ ] Design Instagram post - 30 mins"));
        assert!(md.contains("## Person 3"));
    }

    #[test]
    fn test_templates_csv_flattens_newlines() {
        let mut templates = BTreeMap::new();
        templates.insert(
            "J".to_string(),
            Template {
                title: "Social Media Templates".into(),
                content: "# Social Media Templates\n\n## Instagram\nline one\nline two\n".into(),
                html: String::new(),
                sections: crate::parser::extract_template_sections(
                    "# Social Media Templates\n\n## Instagram\nline one\nline two\n",
                ),
            },
        );

        let csv = templates_to_csv(&templates);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Type,Title,Section,Content");
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("\"Instagram\""));
        assert!(lines[1].contains("line one line two"));
    }

    #[test]
    fn test_templates_csv_without_sections_emits_one_row() {
        let mut templates = BTreeMap::new();
        templates.insert(
            "M".to_string(),
            Template {
                title: "Untitled".into(),
                content: "plain body".into(),
                html: String::new(),
                sections: vec![],
            },
        );

        let csv = templates_to_csv(&templates);
        assert_eq!(csv.lines().count(), 2);
        assert!(csv.contains("\"M\",\"Untitled\",\"\",\"plain body\""));
    }

    #[test]
    fn test_dashboard_csv_rows() {
        let export = DashboardExport {
            dashboard: DashboardOverview {
                overview: "multi\nline".into(),
                status: String::new(),
                team: String::new(),
                metrics: String::new(),
                week_plan: String::new(),
            },
            metrics: PerformanceReport {
                summary: "s".into(),
                kpis: "k".into(),
                analysis: "a".into(),
            },
            export_date: Utc::now(),
        };

        let csv = dashboard_to_csv(&export);
        assert!(csv.starts_with("Section,Key,Value\n"));
        assert!(csv.contains("\"Dashboard\",\"Overview\",\"multi line\""));
        assert!(csv.contains("\"Metrics\",\"KPIs\",\"k\""));
    }

    #[test]
    fn test_external_ack_per_service() {
        let ack = external_ack(ExternalService::Asana);
        assert_eq!(ack.message, "Asana export prepared");
        assert!(ack.instructions.contains("CSV"));

        let ack = external_ack(ExternalService::Slack);
        assert!(ack.instructions.contains("webhook"));
    }
}
