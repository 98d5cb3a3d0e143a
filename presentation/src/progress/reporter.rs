//! Progress reporting while a query runs

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rag_copilot_application::ProgressNotifier;
use rag_copilot_domain::{KnowledgeSource, ProgressStage};
use std::sync::Mutex;

/// Total of all stage increments
const PROGRESS_TOTAL: u64 = 100;

/// Reports progress with a bar on stderr
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}% {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn title(source: KnowledgeSource) -> String {
        format!("Querying {} documentation...", source)
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_query_start(&self, source: KnowledgeSource) {
        let pb = ProgressBar::new(PROGRESS_TOTAL);
        pb.set_style(Self::bar_style());
        pb.set_prefix(Self::title(source));
        pb.set_message("Starting...");

        if let Ok(mut bar) = self.bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_stage(&self, stage: ProgressStage) {
        let Ok(mut bar) = self.bar.lock() else {
            return;
        };
        if let Some(pb) = bar.as_ref() {
            pb.inc(stage.increment());
            pb.set_message(stage.message());
        }
        // The follow-up offer is printed right after this stage
        if stage == ProgressStage::Done
            && let Some(pb) = bar.take()
        {
            pb.finish_and_clear();
        }
    }

    fn on_query_complete(&self, success: bool) {
        let Ok(mut bar) = self.bar.lock() else {
            return;
        };
        if let Some(pb) = bar.take() {
            if success {
                pb.finish_with_message(format!("{}", "done".green()));
            } else {
                pb.abandon_with_message(format!("{}", "failed".red()));
            }
        }
    }
}

/// Plain line-based progress for non-terminal output
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_query_start(&self, source: KnowledgeSource) {
        eprintln!("{} {}", "->".cyan(), ProgressReporter::title(source).bold());
    }

    fn on_stage(&self, stage: ProgressStage) {
        eprintln!("  {} {}", "v".green(), stage.message());
    }

    fn on_query_complete(&self, success: bool) {
        if !success {
            eprintln!("  {} query failed", "x".red());
        }
    }
}
