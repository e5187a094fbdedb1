//! folio projects - list the featured-project catalog

use clap::Args;
use colored::Colorize;
use itertools::Itertools;

use crate::catalog::{ALL_CATEGORY, category_labels, filter_by_category};
use crate::cli::OutputFormat;
use crate::content::PROJECTS;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ProjectsArgs {
    /// Show only projects in this category (e.g. "Branding"); default is all
    #[arg(long)]
    pub category: Option<String>,

    /// List the available category labels and exit
    #[arg(long)]
    pub categories: bool,
}

pub fn run(format: OutputFormat, args: &ProjectsArgs) -> Result<()> {
    if args.categories {
        if format.is_machine_readable() {
            println!("{}", serde_json::to_string_pretty(&category_labels())?);
        } else {
            for label in category_labels() {
                println!("{label}");
            }
        }
        return Ok(());
    }

    let selected = args.category.as_deref().unwrap_or(ALL_CATEGORY);
    let projects = filter_by_category(PROJECTS, selected);

    if format.is_machine_readable() {
        println!("{}", serde_json::to_string_pretty(&projects)?);
        return Ok(());
    }

    println!(
        "{}",
        format.heading(&format!("Featured Projects - {selected} ({})", projects.len()))
    );
    println!();

    for project in projects {
        if format.use_colors() {
            println!(
                "{} {} {}",
                format!("#{}", project.id).dimmed(),
                project.title.bold(),
                format!("[{}]", project.category).cyan()
            );
        } else {
            println!("#{} {} [{}]", project.id, project.title, project.category);
        }
        println!("   {}", project.description);
        println!("   {}", format.dim(&format!("tags: {}", project.tags.iter().join(", "))));
        println!(
            "   {}",
            format.dim(&format!("live: {}  code: {}", project.live_url, project.github_url))
        );
        println!();
    }

    Ok(())
}
