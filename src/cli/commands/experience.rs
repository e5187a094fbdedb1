//! folio experience - the work-history timeline

use colored::Colorize;
use itertools::Itertools;

use crate::cli::OutputFormat;
use crate::content::EXPERIENCES;
use crate::error::Result;

pub fn run(format: OutputFormat) -> Result<()> {
    if format.is_machine_readable() {
        let body: Vec<_> = EXPERIENCES
            .iter()
            .map(|e| {
                serde_json::json!({
                    "id": e.id,
                    "company": e.company,
                    "position": e.position,
                    "location": e.location,
                    "start_date": e.start_date,
                    "end_date": e.end_date,
                    "description": e.description,
                    "achievements": e.achievements,
                    "skills": e.skills,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    println!("{}", format.heading("Experience"));
    println!();

    for exp in EXPERIENCES {
        if format.use_colors() {
            println!(
                "{} {} - {} {}",
                exp.icon,
                exp.position.bold(),
                exp.company.cyan(),
                format!("({} - {})", exp.start_date, exp.end_date).dimmed()
            );
        } else {
            println!(
                "{} - {} ({} - {})",
                exp.position, exp.company, exp.start_date, exp.end_date
            );
        }
        println!("   {}", format.dim(exp.location));
        println!("   {}", exp.description);
        for achievement in exp.achievements {
            println!("     * {achievement}");
        }
        println!("   {}", format.dim(&format!("skills: {}", exp.skills.iter().join(", "))));
        println!();
    }

    Ok(())
}
