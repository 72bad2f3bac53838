use crate::constants::SOURCE_TV;

use serde::Serialize;

use std::fmt::Display;

/// Coarse playback state reported to the host application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerState {
    /// Nothing observed yet
    Unknown,
    /// Playback stopped, TV on its idle screen
    Idle,
    Off,
    Playing,
    Paused,
}

impl PlayerState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Idle => "idle",
            Self::Off => "off",
            Self::Playing => "playing",
            Self::Paused => "paused",
        }
    }
}

impl Display for PlayerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Playback state in two slots: what the last poll observed and what the
/// last command promised. The observation always wins, every successful
/// poll overwrites it and clears the promise.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Playback {
    observed: PlayerState,
    commanded: Option<PlayerState>,
}

impl Playback {
    pub fn new() -> Self {
        Self {
            observed: PlayerState::Unknown,
            commanded: None,
        }
    }

    /// State to report: the pending promise if there is one, otherwise the
    /// last observation
    pub fn current(&self) -> PlayerState {
        self.commanded.unwrap_or(self.observed)
    }

    /// Record a poll result, discarding any pending promise
    pub fn observe(&mut self, state: PlayerState) {
        self.observed = state;
        self.commanded = None;
    }

    /// Record the expected outcome of a command until the next poll
    pub fn command(&mut self, state: PlayerState) {
        self.commanded = Some(state);
    }
}

/// Best guess at the active source from the poll's noisy signals
///
/// Checked in order, first match wins:
/// * media title contains "TV" somewhere
/// * media title is exactly a configured source name
/// * the device's raw source field is exactly a configured source name
///
/// `None` means no signal matched and the previous guess should stand.
pub(crate) fn derive_source<'a>(
    media_title: Option<&'a str>,
    raw_source: Option<&'a str>,
    sources: &'a [String],
) -> Option<&'a str> {
    let title = media_title.unwrap_or("");
    if title.contains(SOURCE_TV) {
        return Some(SOURCE_TV);
    }
    if sources.iter().any(|s| s == title) {
        return Some(title);
    }
    if let Some(raw) = raw_source {
        if sources.iter().any(|s| s == raw) {
            return Some(raw);
        }
    }
    None
}
