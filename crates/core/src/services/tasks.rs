//! Daily task derivation from the task system document.

use crate::constants::DAILY_TASKS_FILE;
use crate::document::{DocumentStore, FrontMatter};
use crate::parser::{extract_tasks, DocumentOutline, Task};
use crate::{CampaignError, CampaignResult, CoreConfig};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use warroom_types::PersonId;

/// Heading markers for the three person sections of the daily task document.
const PERSON_MARKERS: [&str; 3] = ["👤 PERSON 1", "👤 PERSON 2", "👤 PERSON 3"];

/// All extracted tasks, grouped per person, plus the document's front matter.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DailyTasks {
    pub person1: Vec<Task>,
    pub person2: Vec<Task>,
    pub person3: Vec<Task>,
    pub metadata: FrontMatter,
}

impl DailyTasks {
    pub fn for_person(&self, person: PersonId) -> &[Task] {
        match person {
            PersonId::Person1 => &self.person1,
            PersonId::Person2 => &self.person2,
            PersonId::Person3 => &self.person3,
        }
    }

    /// Keep only tasks tagged with the given day (case-insensitive).
    pub fn filter_day(&self, day: &str) -> DailyTasks {
        let day = day.to_lowercase();
        let keep = |tasks: &[Task]| -> Vec<Task> {
            tasks.iter().filter(|t| t.day == day).cloned().collect()
        };

        DailyTasks {
            person1: keep(&self.person1),
            person2: keep(&self.person2),
            person3: keep(&self.person3),
            metadata: self.metadata.clone(),
        }
    }
}

/// Request body for marking a task complete.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteTaskRequest {
    #[serde(default)]
    pub task_id: String,
    #[serde(default)]
    pub person_id: String,
    #[serde(default)]
    pub completed: Option<bool>,
}

/// Synthetic acknowledgement for a completion request.
///
/// Nothing is persisted: the state is client-side only and this record is
/// lost the moment it is serialized.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionReceipt {
    pub task_id: String,
    pub person_id: String,
    pub completed: bool,
    pub updated_at: DateTime<Utc>,
}

/// Completion counts for one person or the whole team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProgressStat {
    pub total: usize,
    pub completed: usize,
    pub percentage: u32,
}

impl ProgressStat {
    fn from_tasks(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|t| t.completed).count();
        Self {
            total: tasks.len(),
            completed,
            percentage: percentage(completed, tasks.len()),
        }
    }
}

/// Per-person and overall completion progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProgressReport {
    pub person1: ProgressStat,
    pub person2: ProgressStat,
    pub person3: ProgressStat,
    pub overall: ProgressStat,
}

/// Rounded completion percentage. A zero total yields 0, never NaN.
fn percentage(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u32
}

/// Derives task records from the daily task document.
#[derive(Debug, Clone)]
pub struct TaskService {
    store: DocumentStore,
}

impl TaskService {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self {
            store: DocumentStore::new(cfg),
        }
    }

    /// Extract all tasks for the three team members.
    ///
    /// The document is re-read and re-parsed on every call. Person sections
    /// are located by heading lookup on the document outline; a missing
    /// section yields an empty task list, not an error.
    pub fn daily_tasks(&self) -> CampaignResult<DailyTasks> {
        let doc = self.store.read(DAILY_TASKS_FILE)?;
        let outline = DocumentOutline::parse(doc.body());

        let mut per_person = PERSON_MARKERS
            .iter()
            .map(|marker| extract_tasks(outline.named_section(doc.body(), marker)));

        Ok(DailyTasks {
            person1: per_person.next().unwrap_or_default(),
            person2: per_person.next().unwrap_or_default(),
            person3: per_person.next().unwrap_or_default(),
            metadata: doc.front_matter().clone(),
        })
    }

    /// Tasks for one person.
    pub fn person_tasks(&self, person: PersonId) -> CampaignResult<Vec<Task>> {
        Ok(self.daily_tasks()?.for_person(person).to_vec())
    }

    /// Tasks for all people, filtered to one day.
    pub fn day_tasks(&self, day: &str) -> CampaignResult<DailyTasks> {
        Ok(self.daily_tasks()?.filter_day(day))
    }

    /// Validate a completion request and echo a synthetic receipt.
    ///
    /// Completion state is never written back to the documents; the receipt
    /// exists so the client can update its local view.
    pub fn complete_task(&self, req: CompleteTaskRequest) -> CampaignResult<CompletionReceipt> {
        if req.task_id.trim().is_empty() || req.person_id.trim().is_empty() {
            return Err(CampaignError::InvalidInput(
                "Task ID and Person ID required".into(),
            ));
        }

        Ok(CompletionReceipt {
            task_id: req.task_id,
            person_id: req.person_id,
            completed: req.completed.unwrap_or(true),
            updated_at: Utc::now(),
        })
    }

    /// Completion progress per person and overall.
    pub fn progress(&self) -> CampaignResult<ProgressReport> {
        let tasks = self.daily_tasks()?;

        let person1 = ProgressStat::from_tasks(&tasks.person1);
        let person2 = ProgressStat::from_tasks(&tasks.person2);
        let person3 = ProgressStat::from_tasks(&tasks.person3);

        let total = person1.total + person2.total + person3.total;
        let completed = person1.completed + person2.completed + person3.completed;

        Ok(ProgressReport {
            person1,
            person2,
            person3,
            overall: ProgressStat {
                total,
                completed,
                percentage: percentage(completed, total),
            },
        })
    }
}
