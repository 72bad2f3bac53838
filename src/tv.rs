use crate::error::Result;

use async_trait::async_trait;

/// Streaming apps the TV can start and stop natively
///
/// These are selected through their app launcher rather than the numeric
/// source menu, so they work even when they are not in the configured
/// source list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum App {
    Netflix,
    YouTube,
}

impl App {
    /// Source name the app answers to
    pub fn name(&self) -> &'static str {
        match self {
            Self::Netflix => "Netflix",
            Self::YouTube => "YouTube",
        }
    }

    /// Match a source name against the known apps
    pub fn from_source(source: &str) -> Option<App> {
        match source {
            "Netflix" => Some(App::Netflix),
            "YouTube" => Some(App::YouTube),
            _ => None,
        }
    }
}

/// Connection to a Vestel TV
///
/// [`Player`](super::Player) is transport agnostic: implement this trait on
/// top of whichever client speaks the TV's TCP remote control channel and
/// websocket status channel. Query methods answer from whatever the client
/// has cached; [`refresh()`](TvHandle::refresh) is the one call expected to
/// go out on the wire, once per poll cycle.
///
/// Any method may fail with a communication error. [`Player`](super::Player)
/// passes such failures through without retrying.
#[async_trait]
pub trait TvHandle {
    /// Update cached device state over the wire
    async fn refresh(&self) -> Result<()>;

    /// Coarse activity signal, `true` while the TV reports playback
    async fn is_on(&self) -> Result<bool>;
    /// Current volume level between 0.0 and 1.0
    async fn volume(&self) -> Result<f32>;
    /// Whether the TV reports itself muted
    async fn muted(&self) -> Result<bool>;
    /// Title of whatever is on screen, if the TV exposes one
    async fn media_title(&self) -> Result<Option<String>>;
    /// Source field as reported by the device, unfiltered
    async fn source(&self) -> Result<Option<String>>;
    /// Whether the TV has been seen on the network
    async fn discovered(&self) -> Result<bool>;
    /// Last message seen on the status channel
    async fn ws_state(&self) -> Result<Option<String>>;

    /// Send one raw key code on the remote control channel
    async fn send_key(&self, key: u32) -> Result<()>;
    async fn turn_on(&self) -> Result<()>;
    async fn turn_off(&self) -> Result<()>;
    async fn volume_up(&self) -> Result<()>;
    async fn volume_down(&self) -> Result<()>;
    /// Set an absolute volume level, range handling is the device's business
    async fn set_volume(&self, level: f32) -> Result<()>;
    /// Flip the mute state, the remote protocol has no absolute variant
    async fn toggle_mute(&self) -> Result<()>;
    async fn next_track(&self) -> Result<()>;
    async fn previous_track(&self) -> Result<()>;

    /// Launch a streaming app
    async fn start_app(&self, app: App) -> Result<()>;
    /// Quit a streaming app
    async fn stop_app(&self, app: App) -> Result<()>;

    /// Close the status channel connection
    async fn close(&self) -> Result<()>;
}
