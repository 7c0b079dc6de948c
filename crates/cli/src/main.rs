use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use warroom_core::services::{DashboardService, TaskService, TemplateService};
use warroom_core::{export, resolve_docs_dir, validate_docs_dir, CoreConfig};
use warroom_types::{ExportFormat, PersonId};

#[derive(Parser)]
#[command(name = "warroom")]
#[command(about = "Campaign war-room dashboard CLI")]
struct Cli {
    /// Override the campaign docs directory
    #[arg(long, global = true)]
    docs_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List daily tasks
    Tasks {
        /// Only one person's tasks (person1, person2 or person3)
        #[arg(long)]
        person: Option<String>,
        /// Only one day's tasks
        #[arg(long)]
        day: Option<String>,
    },
    /// Show completion progress
    Progress,
    /// Validate the docs directory and parse every known document
    Check,
    /// Export tasks, templates or the dashboard
    Export {
        /// What to export: tasks, templates or dashboard
        target: String,
        /// Output format: json, csv or markdown
        format: String,
        /// Write to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let docs_dir = resolve_docs_dir(cli.docs_dir)?;
    let cfg = Arc::new(CoreConfig::new(docs_dir)?);

    match cli.command {
        Some(Commands::Tasks { person, day }) => {
            let service = TaskService::new(cfg);
            let tasks = match day {
                Some(day) => service.day_tasks(&day)?,
                None => service.daily_tasks()?,
            };
            match person {
                Some(person) => {
                    let person = PersonId::from_str(&person)?;
                    print_person_tasks(person, tasks.for_person(person));
                }
                None => {
                    for person in PersonId::ALL {
                        print_person_tasks(person, tasks.for_person(person));
                    }
                }
            }
        }
        Some(Commands::Progress) => {
            let service = TaskService::new(cfg);
            let progress = service.progress()?;
            for (person, stat) in [
                ("person1", progress.person1),
                ("person2", progress.person2),
                ("person3", progress.person3),
            ] {
                println!(
                    "{}: {}/{} ({}%)",
                    person, stat.completed, stat.total, stat.percentage
                );
            }
            println!(
                "overall: {}/{} ({}%)",
                progress.overall.completed, progress.overall.total, progress.overall.percentage
            );
        }
        Some(Commands::Check) => {
            validate_docs_dir(cfg.docs_dir())?;

            let tasks = TaskService::new(cfg.clone()).daily_tasks()?;
            let total: usize = PersonId::ALL.iter().map(|p| tasks.for_person(*p).len()).sum();
            println!("tasks: {} across 3 people", total);

            let dashboard = DashboardService::new(cfg.clone());
            dashboard.overview()?;
            dashboard.performance()?;
            println!("dashboards: ok");

            let templates = TemplateService::new(cfg).templates()?;
            println!("templates: {}", templates.len());
            println!("All documents parsed.");
        }
        Some(Commands::Export {
            target,
            format,
            output,
        }) => {
            let format = ExportFormat::from_str(&format)?;
            let body = export_body(cfg, &target, format)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, body)?;
                    println!("Wrote {}", path.display());
                }
                None => println!("{}", body),
            }
        }
        None => {
            println!("Use 'warroom --help' for commands");
        }
    }

    Ok(())
}

fn print_person_tasks(person: PersonId, tasks: &[warroom_core::parser::Task]) {
    if tasks.is_empty() {
        println!("{}: no tasks", person);
        return;
    }
    println!("{}:", person);
    for task in tasks {
        let time = task
            .estimated_time
            .map(|m| format!(" ({} mins)", m))
            .unwrap_or_default();
        println!("  [{}] {}{}", task.day, task.text, time);
    }
}

fn export_body(
    cfg: Arc<CoreConfig>,
    target: &str,
    format: ExportFormat,
) -> Result<String, Box<dyn std::error::Error>> {
    let body = match target {
        "tasks" => {
            let tasks = TaskService::new(cfg).daily_tasks()?;
            match format {
                ExportFormat::Json => serde_json::to_string_pretty(&tasks)?,
                ExportFormat::Csv => export::tasks_to_csv(&tasks),
                ExportFormat::Markdown => export::tasks_to_markdown(&tasks),
            }
        }
        "templates" => {
            let templates = TemplateService::new(cfg).templates()?;
            match format {
                ExportFormat::Json => serde_json::to_string_pretty(&templates)?,
                ExportFormat::Csv => export::templates_to_csv(&templates),
                ExportFormat::Markdown => export::templates_to_markdown(&templates),
            }
        }
        "dashboard" => {
            let service = DashboardService::new(cfg);
            let snapshot = export::DashboardExport {
                dashboard: service.overview()?,
                metrics: service.performance()?,
                export_date: chrono::Utc::now(),
            };
            match format {
                ExportFormat::Json => serde_json::to_string_pretty(&snapshot)?,
                ExportFormat::Csv => export::dashboard_to_csv(&snapshot),
                ExportFormat::Markdown => {
                    return Err("dashboard export supports json and csv only".into())
                }
            }
        }
        other => return Err(format!("unknown export target: {}", other).into()),
    };

    Ok(body)
}
