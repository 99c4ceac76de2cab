//! Console output for records, providers and domain events

use annotator_application::EventListener;
use annotator_domain::{DomainEvent, OAuthProvider, Record};
use colored::Colorize;

/// Formats domain values for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the list of login providers
    pub fn format_providers(providers: &[OAuthProvider]) -> String {
        if providers.is_empty() {
            return format!("{}\n", "No login providers available".yellow());
        }

        let mut output = format!("{}\n", "Login providers:".cyan().bold());
        for provider in providers {
            output.push_str(&format!(
                "  * {} ({})\n",
                provider.display_name(),
                provider.provider_type().as_str().dimmed()
            ));
        }
        output
    }

    /// Format a record with its fields, questions and answer state
    pub fn format_record(record: &Record) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {} {}\n",
            "Record".cyan().bold(),
            record.id(),
            format!("[{}]", record.dataset_id()).dimmed()
        ));

        for (name, value) in record.fields() {
            output.push_str(&format!("  {}: {}\n", name.bold(), value));
        }

        if !record.questions().is_empty() {
            output.push_str(&format!("{}\n", "Questions:".cyan().bold()));
            for question in record.questions() {
                let value = match &question.value {
                    Some(v) => v.to_string(),
                    None => "-".dimmed().to_string(),
                };
                output.push_str(&format!("  {}: {}\n", question.name, value));
            }
        }

        match record.answer() {
            Some(answer) => output.push_str(&format!(
                "{} {} ({})\n",
                "Answer:".cyan().bold(),
                answer.id,
                answer.status.as_str().green()
            )),
            None => output.push_str(&format!("{} {}\n", "Answer:".cyan().bold(), "none".dimmed())),
        }

        output
    }

    /// One-line description of a domain event
    pub fn format_event(event: &DomainEvent) -> String {
        match event {
            DomainEvent::RecordResponseUpdated(e) => format!(
                "{} response of record {} updated",
                "event:".yellow().bold(),
                e.record().id()
            ),
        }
    }
}

/// Prints every dispatched domain event to stderr
pub struct ConsoleEventReporter;

impl EventListener for ConsoleEventReporter {
    fn on_event(&self, event: &DomainEvent) {
        eprintln!("{}", ConsoleFormatter::format_event(event));
    }
}
