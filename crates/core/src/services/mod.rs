//! Derived-record services.
//!
//! Each service wraps the document store and turns one or more markdown
//! documents into the JSON records the API serves. Services are stateless
//! (apart from the team store) and re-read their source documents on every
//! call, so there is no cache invalidation and no write-back.

pub mod dashboard;
pub mod tasks;
pub mod team;
pub mod templates;

pub use dashboard::{DashboardOverview, DashboardService, PerformanceReport};
pub use tasks::{
    CompleteTaskRequest, CompletionReceipt, DailyTasks, ProgressReport, ProgressStat, TaskService,
};
pub use team::{
    LogMeetingRequest, MemberStatus, RoleProfile, TeamCoordination, TeamRoles, TeamService,
    TeamStatus, UpdateStatusRequest,
};
pub use templates::{CategorizedTemplates, KeyedTemplate, Template, TemplateGroup, TemplateService};
