//! folio send - run the contact form pipeline non-interactively

use clap::Args;
use colored::Colorize;

use crate::cli::OutputFormat;
use crate::config::SiteConfig;
use crate::delivery::{LogSink, MessageSink};
use crate::error::{FolioError, Result};
use crate::form::{ContactForm, Field, Submission};

#[derive(Args, Debug)]
pub struct SendArgs {
    /// Your name
    #[arg(long)]
    pub name: String,

    /// Your email address
    #[arg(long)]
    pub email: String,

    /// The message body
    #[arg(long)]
    pub message: String,
}

pub fn run(config: &SiteConfig, format: OutputFormat, args: &SendArgs) -> Result<()> {
    let mut form = ContactForm::new();
    form.update_field(Field::Name, &args.name);
    form.update_field(Field::Email, &args.email);
    form.update_field(Field::Message, &args.message);

    match form.submit() {
        Submission::Accepted(values) => {
            let receipt = LogSink.send(&values)?;
            tracing::debug!(sink = %config.delivery.sink, "delivery sink resolved");
            if format.is_machine_readable() {
                let body = serde_json::json!({
                    "accepted": true,
                    "receipt": receipt,
                    "values": values,
                });
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else if format.use_colors() {
                println!("{} Message sent to {}", "✓".green(), config.owner.name.bold());
            } else {
                println!("Message sent to {}", config.owner.name);
            }
            Ok(())
        }
        Submission::Rejected => {
            let mut violations = Vec::new();
            for field in Field::ALL {
                let state = form.field(field);
                if !state.error.is_empty() {
                    violations.push(format!("{}: {}", field.as_str(), state.error));
                    if !format.is_machine_readable() {
                        if format.use_colors() {
                            println!("{} {}: {}", "✗".red(), field.as_str(), state.error);
                        } else {
                            println!("{}: {}", field.as_str(), state.error);
                        }
                    }
                }
            }
            Err(FolioError::MessageRejected(violations.join("; ")))
        }
    }
}
