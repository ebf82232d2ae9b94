//! Player state types
//!
//! Shared enums passed between the input router, the transport and the
//! shell loop.

/// Result of processing an input event.
///
/// This enum is returned by input handlers to signal control flow
/// decisions to the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep running
    Continue,
    /// Exit the player
    Quit,
}

/// Logical transport state.
///
/// There is no stopped state: switching entries re-plays immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportState {
    #[default]
    Playing,
    Paused,
}

impl TransportState {
    /// The other state.
    pub fn toggled(self) -> Self {
        match self {
            Self::Playing => Self::Paused,
            Self::Paused => Self::Playing,
        }
    }

    /// Short label for the status line.
    pub fn label(self) -> &'static str {
        match self {
            Self::Playing => "playing",
            Self::Paused => "paused",
        }
    }
}

/// A command a single key can trigger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Exit the player
    Quit,
    /// Seek by a fixed number of milliseconds (negative = backwards)
    Seek(i64),
    /// Step one frame forward
    FrameForward,
    /// Step one frame backward
    FrameBackward,
    /// Pause or resume
    TogglePause,
    /// Save the displayed frame
    Snapshot,
    /// Next playlist entry
    Next,
    /// Previous playlist entry
    Previous,
    /// Show or hide label and scrub bar
    ToggleIndicator,
    /// Select a playback speed
    SetRate(f64),
}

impl Action {
    /// Human-readable description for key hints.
    pub fn describe(&self) -> String {
        match self {
            Self::Quit => "quit".to_string(),
            Self::Seek(ms) if *ms >= 0 => format!("+{}s", ms / 1000),
            Self::Seek(ms) => format!("-{}s", -ms / 1000),
            Self::FrameForward => "+1 frame".to_string(),
            Self::FrameBackward => "-1 frame".to_string(),
            Self::TogglePause => "pause".to_string(),
            Self::Snapshot => "snapshot".to_string(),
            Self::Next => "next".to_string(),
            Self::Previous => "previous".to_string(),
            Self::ToggleIndicator => "scrub bar".to_string(),
            Self::SetRate(rate) => format!("{}x", rate),
        }
    }
}
