use crate::{DocUpdate, OperationOutput};

/// Front-end view of the current command.
///
/// Transitions consume the old state and return the new one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessingState {
    pub is_processing: bool,
    /// Percent complete, 0-100
    pub progress: u8,
    pub result: Option<OperationOutput>,
    pub error: Option<String>,
}

impl ProcessingState {
    /// Start a new command, clearing any previous outcome
    pub fn begin(self) -> Self {
        Self {
            is_processing: true,
            ..Self::default()
        }
    }

    pub fn apply(self, update: &DocUpdate) -> Self {
        match update {
            DocUpdate::Progress { current, total, .. } => Self {
                progress: percent(*current, *total).max(self.progress),
                ..self
            },
            DocUpdate::Complete { output } => Self {
                is_processing: false,
                progress: 100,
                result: Some(output.clone()),
                error: None,
            },
            DocUpdate::Error { message } => Self {
                is_processing: false,
                progress: self.progress,
                result: None,
                error: Some(message.clone()),
            },
        }
    }

    pub fn reset(self) -> Self {
        Self::default()
    }
}

fn percent(current: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    (current.min(total) * 100 / total) as u8
}
