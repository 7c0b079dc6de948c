//! The markdown extraction core.
//!
//! Everything the services serve is derived from raw document text by the
//! functions in this module tree:
//!
//! - [`section`]: substring extraction between two heading markers
//! - [`outline`]: a per-document heading index with named-section lookup
//! - [`tasks`]: checklist scanning into enriched task records
//! - [`template`]: flat heading-level splitting of template documents

pub mod outline;
pub mod section;
pub mod tasks;
pub mod template;

pub use outline::DocumentOutline;
pub use section::extract_section;
pub use tasks::{extract_tasks, task_id, Task, TaskContext};
pub use template::{extract_template_sections, extract_title, TemplateSection};
