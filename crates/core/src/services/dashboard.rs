//! Dashboard section derivation.
//!
//! The project and performance dashboards are served as named sections of
//! their source documents. A section that is missing from the document comes
//! back as an empty string, indistinguishable from a genuinely empty section.

use crate::constants::{PERFORMANCE_DASHBOARD_FILE, PROJECT_DASHBOARD_FILE};
use crate::document::DocumentStore;
use crate::parser::DocumentOutline;
use crate::{CampaignResult, CoreConfig};
use std::sync::Arc;

/// Named sections of the project dashboard document.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub overview: String,
    pub status: String,
    pub team: String,
    pub metrics: String,
    pub week_plan: String,
}

/// Named sections of the performance dashboard document.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PerformanceReport {
    pub summary: String,
    pub kpis: String,
    pub analysis: String,
}

/// Derives dashboard records from the dashboard documents.
#[derive(Debug, Clone)]
pub struct DashboardService {
    store: DocumentStore,
}

impl DashboardService {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self {
            store: DocumentStore::new(cfg),
        }
    }

    pub fn overview(&self) -> CampaignResult<DashboardOverview> {
        let doc = self.store.read(PROJECT_DASHBOARD_FILE)?;
        let body = doc.body();
        let outline = DocumentOutline::parse(body);

        Ok(DashboardOverview {
            overview: outline.named_section(body, "🎯 Project Overview").to_string(),
            status: outline.named_section(body, "📊 Live Project Status").to_string(),
            team: outline.named_section(body, "👥 Team Assignments").to_string(),
            metrics: outline
                .named_section(body, "📈 Key Performance Metrics")
                .to_string(),
            week_plan: outline
                .named_section(body, "📅 This Week's Execution Plan")
                .to_string(),
        })
    }

    pub fn performance(&self) -> CampaignResult<PerformanceReport> {
        let doc = self.store.read(PERFORMANCE_DASHBOARD_FILE)?;
        let body = doc.body();
        let outline = DocumentOutline::parse(body);

        Ok(PerformanceReport {
            summary: outline.named_section(body, "📊 Executive Summary").to_string(),
            kpis: outline
                .named_section(body, "🎯 Key Performance Indicators")
                .to_string(),
            analysis: outline
                .named_section(body, "📈 Performance Analysis")
                .to_string(),
        })
    }
}
