//! Console output formatter for query outcomes

use colored::Colorize;
use rag_copilot_application::{QueryDelivery, QueryOutcome};
use rag_copilot_domain::OutputFormat;

/// Formats query outcomes for stdout
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Turn colored output off for the whole process when disabled
    pub fn set_color(enabled: bool) {
        if !enabled {
            colored::control::set_override(false);
        }
    }

    /// Format an outcome in the given format.
    ///
    /// Text output is empty for cancelled and failed runs: cancellation is
    /// silent and failures were already reported as notifications.
    pub fn render(outcome: &QueryOutcome, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => Self::format_json(outcome),
            OutputFormat::Text => match outcome {
                QueryOutcome::Delivered(delivery) => Self::format(delivery),
                QueryOutcome::Cancelled | QueryOutcome::Failed { .. } => String::new(),
            },
        }
    }

    /// Format a delivered query
    pub fn format(delivery: &QueryDelivery) -> String {
        let mut output = String::new();
        let report = &delivery.report;

        output.push_str(&Self::header("RAG Prompt"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Question:".cyan().bold(),
            delivery.request.question()
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Source:".cyan().bold(),
            delivery.request.source().label()
        ));

        let clipboard = match report.clipboard_writes {
            0 => "not copied".to_string(),
            1 => "copied".to_string(),
            n => format!("copied ({} times)", n),
        };
        output.push_str(&format!("{} {}\n", "Clipboard:".cyan().bold(), clipboard));

        if let Some(location) = &report.surface_location {
            output.push_str(&format!("{} {}\n", "Saved to:".cyan().bold(), location));
        }

        if let Some(action) = report.follow_up {
            let note = if report.follow_up_defaulted {
                " (default)"
            } else {
                ""
            };
            output.push_str(&format!(
                "{} {}{}\n",
                "Follow-up:".cyan().bold(),
                action.label(),
                note.dimmed()
            ));
        }

        if report.has_failures() {
            output.push_str(&Self::section_header("Delivery problems"));
            for failure in &report.sink_failures {
                output.push_str(&format!(
                    "  {} {}: {}\n",
                    "x".red(),
                    failure.sink,
                    failure.message
                ));
            }
        }

        // Nowhere else to read the prompt from
        if report.surface_location.is_none() {
            output.push_str(&Self::section_header("Prompt"));
            output.push_str(delivery.prompt.text());
            output.push('\n');
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(outcome: &QueryOutcome) -> String {
        serde_json::to_string_pretty(outcome).unwrap_or_else(|_| "{}".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rag_copilot_application::{DeliveryReport, FailureKind, SinkFailure, SinkKind};
    use rag_copilot_domain::{
        FollowUpAction, KnowledgeSource, QueryRequest, Question, extract_prompt,
    };

    fn delivery(report: DeliveryReport) -> QueryDelivery {
        let delimiter = "=".repeat(80);
        let stdout = format!("status\n{delimiter}\nUse <DataTable>.\n{delimiter}\n");
        QueryDelivery {
            request: QueryRequest::new(
                Question::new("How to use DataTable?").unwrap(),
                KnowledgeSource::PrimeVue,
            ),
            prompt: extract_prompt(&stdout).unwrap(),
            report,
        }
    }

    #[test]
    fn test_cancelled_and_failed_text_is_silent() {
        assert!(ConsoleFormatter::render(&QueryOutcome::Cancelled, OutputFormat::Text).is_empty());
        let failed = QueryOutcome::Failed {
            kind: FailureKind::NoWorkspaceOpen,
            message: "No workspace folder open!".into(),
        };
        assert!(ConsoleFormatter::render(&failed, OutputFormat::Text).is_empty());
    }

    #[test]
    fn test_delivered_summary() {
        colored::control::set_override(false);
        let outcome = QueryOutcome::Delivered(delivery(DeliveryReport {
            clipboard_writes: 2,
            surface_location: Some("/work/.rag-copilot/prompts/prompt.md".into()),
            follow_up: Some(FollowUpAction::CopyAgain),
            follow_up_defaulted: false,
            sink_failures: vec![],
        }));

        let text = ConsoleFormatter::render(&outcome, OutputFormat::Text);
        assert!(text.contains("How to use DataTable?"));
        assert!(text.contains("🎨 PrimeVue Only"));
        assert!(text.contains("copied (2 times)"));
        assert!(text.contains("/work/.rag-copilot/prompts/prompt.md"));
        assert!(text.contains("Copy Again"));
        // The prompt body was saved, so it is not repeated
        assert!(!text.contains("Use <DataTable>."));
    }

    #[test]
    fn test_prompt_printed_when_surface_failed() {
        colored::control::set_override(false);
        let outcome = QueryOutcome::Delivered(delivery(DeliveryReport {
            clipboard_writes: 0,
            surface_location: None,
            follow_up: Some(FollowUpAction::OpenChat),
            follow_up_defaulted: true,
            sink_failures: vec![SinkFailure {
                sink: SinkKind::TextSurface,
                message: "read-only file system".into(),
            }],
        }));

        let text = ConsoleFormatter::render(&outcome, OutputFormat::Text);
        assert!(text.contains("not copied"));
        assert!(text.contains("Open Copilot Chat (default)"));
        assert!(text.contains("text surface: read-only file system"));
        assert!(text.contains("Use <DataTable>."));
    }

    #[test]
    fn test_json_output_is_tagged() {
        let json = ConsoleFormatter::render(&QueryOutcome::Cancelled, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["status"], "cancelled");
    }
}
