//! Marketing template derivation.
//!
//! Each template document is reduced to a title, its raw content, rendered
//! HTML and a flat list of sub-sections. Templates are keyed by the filename
//! prefix before the first hyphen (`J`, `K`, `L`, `M`).

use crate::constants::TEMPLATE_FILES;
use crate::document::DocumentStore;
use crate::parser::{extract_template_sections, extract_title, TemplateSection};
use crate::{CampaignResult, CoreConfig};
use std::collections::BTreeMap;
use std::sync::Arc;

/// One marketing-content document in reduced form.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Template {
    pub title: String,
    pub content: String,
    pub html: String,
    pub sections: Vec<TemplateSection>,
}

/// A template paired with its map key, used in categorized listings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct KeyedTemplate {
    pub key: String,
    #[serde(flatten)]
    pub template: Template,
}

/// One category bucket of templates.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TemplateGroup {
    pub title: String,
    pub templates: Vec<KeyedTemplate>,
}

/// Templates grouped into fixed category buckets.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CategorizedTemplates {
    pub social: TemplateGroup,
    pub email: TemplateGroup,
    pub press: TemplateGroup,
    pub content: TemplateGroup,
}

/// Derives template records from the template documents.
#[derive(Debug, Clone)]
pub struct TemplateService {
    store: DocumentStore,
}

impl TemplateService {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self {
            store: DocumentStore::new(cfg),
        }
    }

    /// All template documents, keyed by filename prefix.
    ///
    /// A template file that cannot be read is logged and skipped rather than
    /// failing the whole listing.
    pub fn templates(&self) -> CampaignResult<BTreeMap<String, Template>> {
        let mut templates = BTreeMap::new();

        for file in TEMPLATE_FILES {
            let doc = match self.store.read(file) {
                Ok(doc) => doc,
                Err(err) => {
                    tracing::warn!("skipping template {}: {}", file, err);
                    continue;
                }
            };

            let key = file.split('-').next().unwrap_or(file).to_string();
            templates.insert(
                key,
                Template {
                    title: extract_title(doc.body()),
                    content: doc.body().to_string(),
                    html: doc.html(),
                    sections: extract_template_sections(doc.body()),
                },
            );
        }

        Ok(templates)
    }

    /// Templates grouped into social/email/press/content buckets.
    ///
    /// Grouping is by map key letter first, then by title keywords; anything
    /// unmatched lands in the content bucket.
    pub fn categorized(&self) -> CampaignResult<CategorizedTemplates> {
        let mut categorized = CategorizedTemplates {
            social: TemplateGroup {
                title: "Social Media Templates".into(),
                templates: vec![],
            },
            email: TemplateGroup {
                title: "Email & Newsletter Templates".into(),
                templates: vec![],
            },
            press: TemplateGroup {
                title: "Press & Media Templates".into(),
                templates: vec![],
            },
            content: TemplateGroup {
                title: "Content Strategy Templates".into(),
                templates: vec![],
            },
        };

        for (key, template) in self.templates()? {
            let title = template.title.to_lowercase();
            let entry = KeyedTemplate {
                key: key.clone(),
                template,
            };

            if key.contains('J') || title.contains("social") {
                categorized.social.templates.push(entry);
            } else if key.contains('K') || title.contains("newsletter") || title.contains("email") {
                categorized.email.templates.push(entry);
            } else if key.contains('L') || title.contains("press") || title.contains("release") {
                categorized.press.templates.push(entry);
            } else {
                categorized.content.templates.push(entry);
            }
        }

        Ok(categorized)
    }
}
