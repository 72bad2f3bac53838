#![allow(dead_code)]

use vestel::{App, Config, Error, Player, Result, TvHandle};

use async_trait::async_trait;
use tokio::time::Instant;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Everything the fake TV answers queries from
///
/// Tests set these fields to stage the device, the way a real TV would
/// change them out from under the client.
#[derive(Debug, Clone)]
pub struct TvState {
    pub on: bool,
    pub volume: f32,
    pub muted: bool,
    pub media_title: Option<String>,
    pub source: Option<String>,
    pub discovered: bool,
    pub ws_state: Option<String>,
}

impl Default for TvState {
    fn default() -> Self {
        Self {
            on: false,
            volume: 0.0,
            muted: false,
            media_title: None,
            source: None,
            discovered: true,
            ws_state: None,
        }
    }
}

/// One recorded call on the fake handle
///
/// Query methods are not recorded, only the calls that would touch the TV.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Refresh,
    SendKey(u32),
    TurnOn,
    TurnOff,
    VolumeUp,
    VolumeDown,
    SetVolume(f32),
    ToggleMute,
    NextTrack,
    PreviousTrack,
    StartApp(App),
    StopApp(App),
    Close,
}

/// In-process stand-in for a TV connection
///
/// Answers queries from a settable [`TvState`] and records every imperative
/// call with the time it arrived. Cloning is cheap and clones share state,
/// so tests keep one clone to stage the device and inspect the call log.
#[derive(Clone)]
pub struct FakeTv {
    inner: Arc<FakeTvRef>,
}

struct FakeTvRef {
    state: Mutex<TvState>,
    calls: Mutex<Vec<(Instant, Call)>>,
    fail_refresh: AtomicBool,
}

impl FakeTv {
    pub fn new(state: TvState) -> Self {
        Self {
            inner: Arc::new(FakeTvRef {
                state: Mutex::new(state),
                calls: Mutex::new(Vec::new()),
                fail_refresh: AtomicBool::new(false),
            }),
        }
    }

    /// Stage the device state the next queries will see
    pub fn set_state<F: FnOnce(&mut TvState)>(&self, f: F) {
        f(&mut self.inner.state.lock().unwrap())
    }

    /// Snapshot of the staged device state
    pub fn state(&self) -> TvState {
        self.inner.state.lock().unwrap().clone()
    }

    /// Whether the fake currently considers itself muted
    pub fn muted(&self) -> bool {
        self.inner.state.lock().unwrap().muted
    }

    /// Calls recorded so far, oldest first
    pub fn calls(&self) -> Vec<Call> {
        self.inner
            .calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, call)| call.clone())
            .collect()
    }

    /// Calls recorded so far with their arrival times
    pub fn timed_calls(&self) -> Vec<(Instant, Call)> {
        self.inner.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.inner.calls.lock().unwrap().clear();
    }

    /// Make the next refresh attempts fail like a dropped connection
    pub fn fail_refresh(&self, fail: bool) {
        self.inner.fail_refresh.store(fail, Ordering::SeqCst);
    }

    fn record(&self, call: Call) {
        self.inner
            .calls
            .lock()
            .unwrap()
            .push((Instant::now(), call));
    }
}

#[async_trait]
impl TvHandle for FakeTv {
    async fn refresh(&self) -> Result<()> {
        self.record(Call::Refresh);
        if self.inner.fail_refresh.load(Ordering::SeqCst) {
            return Err(Error::IO(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                "control channel dropped",
            )));
        }
        Ok(())
    }

    async fn is_on(&self) -> Result<bool> {
        Ok(self.inner.state.lock().unwrap().on)
    }

    async fn volume(&self) -> Result<f32> {
        Ok(self.inner.state.lock().unwrap().volume)
    }

    async fn muted(&self) -> Result<bool> {
        Ok(self.inner.state.lock().unwrap().muted)
    }

    async fn media_title(&self) -> Result<Option<String>> {
        Ok(self.inner.state.lock().unwrap().media_title.clone())
    }

    async fn source(&self) -> Result<Option<String>> {
        Ok(self.inner.state.lock().unwrap().source.clone())
    }

    async fn discovered(&self) -> Result<bool> {
        Ok(self.inner.state.lock().unwrap().discovered)
    }

    async fn ws_state(&self) -> Result<Option<String>> {
        Ok(self.inner.state.lock().unwrap().ws_state.clone())
    }

    async fn send_key(&self, key: u32) -> Result<()> {
        self.record(Call::SendKey(key));
        Ok(())
    }

    async fn turn_on(&self) -> Result<()> {
        self.record(Call::TurnOn);
        Ok(())
    }

    async fn turn_off(&self) -> Result<()> {
        self.record(Call::TurnOff);
        Ok(())
    }

    async fn volume_up(&self) -> Result<()> {
        self.record(Call::VolumeUp);
        Ok(())
    }

    async fn volume_down(&self) -> Result<()> {
        self.record(Call::VolumeDown);
        Ok(())
    }

    async fn set_volume(&self, level: f32) -> Result<()> {
        self.record(Call::SetVolume(level));
        Ok(())
    }

    async fn toggle_mute(&self) -> Result<()> {
        self.record(Call::ToggleMute);
        let mut state = self.inner.state.lock().unwrap();
        state.muted = !state.muted;
        Ok(())
    }

    async fn next_track(&self) -> Result<()> {
        self.record(Call::NextTrack);
        Ok(())
    }

    async fn previous_track(&self) -> Result<()> {
        self.record(Call::PreviousTrack);
        Ok(())
    }

    async fn start_app(&self, app: App) -> Result<()> {
        self.record(Call::StartApp(app));
        Ok(())
    }

    async fn stop_app(&self, app: App) -> Result<()> {
        self.record(Call::StopApp(app));
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        self.record(Call::Close);
        Ok(())
    }
}

/// Player over a fresh fake TV with the default configuration
pub fn player() -> (Player<FakeTv>, FakeTv) {
    player_with(Config::new("127.0.0.1"), TvState::default())
}

/// Player over a fake TV staged with `state`
pub fn player_with(config: Config, state: TvState) -> (Player<FakeTv>, FakeTv) {
    // Start Logger
    if let Err(e) = pretty_env_logger::try_init() {
        log::warn!(target: "test::support", "Logger init() returned '{}'", e);
    }

    let tv = FakeTv::new(state);
    let player = Player::new(config, tv.clone()).expect("player setup");
    (player, tv)
}
