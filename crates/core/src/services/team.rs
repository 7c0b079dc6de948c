//! Team coordination, roles and activity.
//!
//! Role and coordination records are derived from the team documents on
//! every call. Status and meeting records combine a fixed stub baseline with
//! whatever has been logged into the team store since startup.

use crate::constants::{TEAM_COORDINATION_FILE, TEAM_ROLES_FILE};
use crate::document::DocumentStore;
use crate::parser::{extract_section, DocumentOutline};
use crate::store::{InMemoryTeamStore, Meeting, StatusUpdate, TeamStore};
use crate::{CampaignError, CampaignResult, CoreConfig};
use chrono::Utc;
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;
use warroom_types::PersonId;

/// Role title for each team member, also used as the status baseline name.
pub fn role_title(person: PersonId) -> &'static str {
    match person {
        PersonId::Person1 => "Content Creator & Visual Designer",
        PersonId::Person2 => "Social Engagement & Community Manager",
        PersonId::Person3 => "Analytics, Advertising & Strategic Coordination",
    }
}

/// Communication framework and schedule plus meeting agenda templates.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TeamCoordination {
    pub framework: String,
    pub schedule: String,
    pub meetings: MeetingTemplates,
}

/// Named meeting agenda templates found in the coordination document.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MeetingTemplates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily: Option<String>,
}

/// One person's role description.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleProfile {
    pub title: String,
    pub responsibilities: String,
    pub daily_tasks: String,
}

/// Role descriptions for the whole team.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TeamRoles {
    pub person1: RoleProfile,
    pub person2: RoleProfile,
    pub person3: RoleProfile,
}

/// Current status of one team member.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberStatus {
    pub name: String,
    pub status: String,
    pub current_task: String,
    pub last_update: chrono::DateTime<Utc>,
    pub progress: u32,
}

/// Status of the whole team.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TeamStatus {
    pub person1: MemberStatus,
    pub person2: MemberStatus,
    pub person3: MemberStatus,
}

/// Request body for logging a meeting.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogMeetingRequest {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub attendees: Vec<String>,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub action_items: Option<Vec<String>>,
}

/// Request body for updating a member's status.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    #[serde(default)]
    pub person_id: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub current_task: Option<String>,
    #[serde(default)]
    pub progress: Option<u32>,
}

/// Derives team records and holds the activity store.
#[derive(Clone)]
pub struct TeamService {
    store: DocumentStore,
    team: Arc<dyn TeamStore>,
}

impl TeamService {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self::with_store(cfg, Arc::new(InMemoryTeamStore::new()))
    }

    pub fn with_store(cfg: Arc<CoreConfig>, team: Arc<dyn TeamStore>) -> Self {
        Self {
            store: DocumentStore::new(cfg),
            team,
        }
    }

    /// Communication framework, schedule and the daily check-in template.
    pub fn coordination(&self) -> CampaignResult<TeamCoordination> {
        let doc = self.store.read(TEAM_COORDINATION_FILE)?;
        let body = doc.body();
        let outline = DocumentOutline::parse(body);

        // The agenda template is bounded by a marker inside the same level-4
        // block, so marker-based extraction is used here instead of the
        // outline.
        let daily = extract_section(
            body,
            "#### Daily Check-In Agenda Template",
            Some("#### Round 1:"),
        );

        Ok(TeamCoordination {
            framework: outline
                .named_section(body, "🎯 Communication Framework")
                .to_string(),
            schedule: outline
                .named_section(body, "📞 Daily Communication Schedule")
                .to_string(),
            meetings: MeetingTemplates {
                daily: (!daily.is_empty()).then_some(daily),
            },
        })
    }

    /// Role descriptions for the three team members.
    pub fn roles(&self) -> CampaignResult<TeamRoles> {
        let doc = self.store.read(TEAM_ROLES_FILE)?;
        let body = doc.body();
        let outline = DocumentOutline::parse(body);

        // The daily-tasks guide shares one section for the whole team; only
        // the Monday block (up to the bold Tuesday label) is surfaced.
        let daily_tasks = extract_section(body, "### Daily Tasks", Some("**Tuesday"));

        let profile = |person: PersonId| -> RoleProfile {
            let title = role_title(person);
            let marker = format!(
                "Person {}: {}",
                match person {
                    PersonId::Person1 => 1,
                    PersonId::Person2 => 2,
                    PersonId::Person3 => 3,
                },
                title
            );
            RoleProfile {
                title: title.to_string(),
                responsibilities: outline.named_section(body, &marker).to_string(),
                daily_tasks: daily_tasks.clone(),
            }
        };

        Ok(TeamRoles {
            person1: profile(PersonId::Person1),
            person2: profile(PersonId::Person2),
            person3: profile(PersonId::Person3),
        })
    }

    /// Team status: stub baseline overlaid with logged updates.
    pub fn status(&self) -> TeamStatus {
        let member = |person: PersonId, task: &str, progress: u32| -> MemberStatus {
            match self.team.status(person) {
                Some(update) => MemberStatus {
                    name: role_title(person).to_string(),
                    status: update.status,
                    current_task: update.current_task,
                    last_update: update.last_update,
                    progress: update.progress,
                },
                None => MemberStatus {
                    name: role_title(person).to_string(),
                    status: "on-track".to_string(),
                    current_task: task.to_string(),
                    last_update: Utc::now(),
                    progress,
                },
            }
        };

        TeamStatus {
            person1: member(PersonId::Person1, "Creating social media graphics", 85),
            person2: member(PersonId::Person2, "Influencer outreach", 92),
            person3: member(PersonId::Person3, "Performance analysis", 78),
        }
    }

    /// Validate and store a meeting record.
    pub fn log_meeting(&self, req: LogMeetingRequest) -> CampaignResult<Meeting> {
        if req.kind.trim().is_empty() || req.attendees.is_empty() {
            return Err(CampaignError::InvalidInput(
                "Meeting type and attendees required".into(),
            ));
        }

        let now = Utc::now();
        let meeting = Meeting {
            id: Uuid::new_v4(),
            kind: req.kind,
            attendees: req.attendees,
            duration: req.duration.unwrap_or(0),
            notes: req.notes.unwrap_or_default(),
            action_items: req.action_items.unwrap_or_default(),
            date: now,
            created_at: now,
        };

        self.team.log_meeting(meeting.clone());
        Ok(meeting)
    }

    /// All meetings logged since startup.
    pub fn meetings(&self) -> Vec<Meeting> {
        self.team.meetings()
    }

    /// Validate and store a status update.
    pub fn update_status(&self, req: UpdateStatusRequest) -> CampaignResult<StatusUpdate> {
        if req.person_id.trim().is_empty() {
            return Err(CampaignError::InvalidInput("Person ID required".into()));
        }
        let person = PersonId::from_str(&req.person_id)?;

        let update = StatusUpdate {
            person_id: person,
            status: req.status.unwrap_or_else(|| "on-track".to_string()),
            current_task: req.current_task.unwrap_or_default(),
            progress: req.progress.unwrap_or(0),
            last_update: Utc::now(),
        };

        self.team.set_status(update.clone());
        Ok(update)
    }
}
