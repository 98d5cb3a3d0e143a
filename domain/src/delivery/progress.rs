//! Progress advisories reported while a query runs

/// Stage of a running query, with its share of a notional 100% completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressStage {
    LoadingDatabase,
    GeneratingPrompt,
    ProcessingResult,
    Done,
}

impl ProgressStage {
    /// Stages in reporting order
    pub const ALL: [ProgressStage; 4] = [
        ProgressStage::LoadingDatabase,
        ProgressStage::GeneratingPrompt,
        ProgressStage::ProcessingResult,
        ProgressStage::Done,
    ];

    /// Percentage points added when this stage is reported
    pub fn increment(&self) -> u64 {
        match self {
            ProgressStage::LoadingDatabase => 30,
            ProgressStage::GeneratingPrompt => 40,
            ProgressStage::ProcessingResult => 20,
            ProgressStage::Done => 10,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ProgressStage::LoadingDatabase => "Loading vector database...",
            ProgressStage::GeneratingPrompt => "Generating RAG prompt...",
            ProgressStage::ProcessingResult => "Processing result...",
            ProgressStage::Done => "Done!",
        }
    }
}
