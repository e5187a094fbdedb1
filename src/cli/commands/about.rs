//! folio about - awards, skill highlights, and the FAQ

use clap::Args;
use colored::Colorize;

use crate::cli::OutputFormat;
use crate::content::{AWARDS, FAQS, SKILLS};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct AboutArgs {
    /// Include the FAQ entries
    #[arg(long)]
    pub faq: bool,
}

pub fn run(format: OutputFormat, args: &AboutArgs) -> Result<()> {
    if format.is_machine_readable() {
        let mut body = serde_json::json!({
            "awards": AWARDS
                .iter()
                .map(|a| serde_json::json!({ "number": a.number, "text": a.text }))
                .collect::<Vec<_>>(),
            "skills": SKILLS
                .iter()
                .map(|s| serde_json::json!({ "title": s.title, "description": s.description }))
                .collect::<Vec<_>>(),
        });
        if args.faq {
            body["faq"] = FAQS
                .iter()
                .map(|f| serde_json::json!({ "question": f.question, "answer": f.answer }))
                .collect::<Vec<_>>()
                .into();
        }
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    println!("{}", format.heading("Behind every great app is an even greater developer"));
    println!();

    for award in AWARDS {
        if format.use_colors() {
            println!("  {} {}", award.number.cyan().bold(), award.text);
        } else {
            println!("  {} {}", award.number, award.text);
        }
    }
    println!();

    for skill in SKILLS {
        if format.use_colors() {
            println!("  {:<24} {}", skill.title.bold(), skill.description.dimmed());
        } else {
            println!("  {:<24} {}", skill.title, skill.description);
        }
    }

    if args.faq {
        println!();
        println!("{}", format.heading("What's the development process like?"));
        for faq in FAQS {
            println!();
            if format.use_colors() {
                println!("  {}", faq.question.bold());
            } else {
                println!("  {}", faq.question);
            }
            for line in textwrap::wrap(faq.answer, 76) {
                println!("    {line}");
            }
        }
    }

    Ok(())
}
