use super::config::Config;
use super::constants::{KEY_SOURCE_SLOT_BASE, SOURCE_SETTLE};
use super::error::{Error, Result};
use super::tv::{App, TvHandle};

mod features;
mod keys;
mod state;

pub use self::features::Features;
pub use self::keys::Key;
pub use self::state::PlayerState;

use self::keys::channel_keys;
use self::state::{derive_source, Playback};

use serde::Serialize;
use serde_json::{json, Value};
use tokio::time::sleep;

use std::fmt::{self, Debug};

/// A Vestel or Procaster TV presented as a media player
///
/// `Player` owns its TV connection and translates between a host
/// application's media player surface and the TV's key codes and app
/// launcher. The host drives it: call [`update()`](Player::update) on every
/// poll tick, the command methods on user actions, and
/// [`shutdown()`](Player::shutdown) once when the application stops.
///
/// Note that `Player` trusts polls over its own commands: playback state set
/// optimistically by a command lasts only until the next successful poll.
///
/// # Example
///
/// ```
/// use vestel::{Config, Player, TvHandle};
///
/// # async fn poll<T: TvHandle>(handle: T) -> Result<(), vestel::Error> {
/// let mut player = Player::new(Config::new("192.168.0.23"), handle)?;
///
/// player.update().await?;
/// println!("{} is {}", player.name(), player.state());
/// // > "Vestel is playing"
/// #
/// # Ok(())
/// # }
/// ```
pub struct Player<T> {
    config: Config,
    handle: T,
    features: Features,
    playback: Playback,
    current_source: String,
    closed: bool,
}

impl<T: TvHandle> Player<T> {
    /// Build a player from a configuration and a TV connection
    ///
    /// The configuration is checked once here and owned by the player
    /// afterwards, as is the handle. Until the first poll the source guess
    /// is the first configured entry and the state is
    /// [`PlayerState::Unknown`].
    pub fn new(config: Config, handle: T) -> Result<Self> {
        config.validate()?;

        let mut features = Features::BASE;
        if config.supports_power {
            features |= Features::TURN_ON | Features::TURN_OFF;
        }
        let current_source = config.sources[0].clone();

        log::info!("set up player '{}' for {}", config.name, config.host);
        Ok(Self {
            config,
            handle,
            features,
            playback: Playback::new(),
            current_source,
            closed: false,
        })
    }

    /// Get the player's display name
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Get the configuration the player was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current playback state
    ///
    /// This is the last poll's observation, unless a command has promised
    /// something newer.
    pub fn state(&self) -> PlayerState {
        self.playback.current()
    }

    /// Best guess at the active source, recomputed on every poll
    pub fn source(&self) -> &str {
        &self.current_source
    }

    /// Sources offered for selection, in source menu order
    pub fn source_list(&self) -> &[String] {
        &self.config.sources
    }

    /// The TV pushes nothing, hosts must poll via [`update()`](Player::update)
    pub fn should_poll(&self) -> bool {
        true
    }

    /// Current volume level between 0.0 and 1.0, read fresh from the handle
    pub async fn volume_level(&self) -> Result<f32> {
        self.handle.volume().await
    }

    /// Current mute flag, read fresh from the handle
    pub async fn is_volume_muted(&self) -> Result<bool> {
        self.handle.muted().await
    }

    /// Title of the current media, if the TV exposes one
    pub async fn media_title(&self) -> Result<Option<String>> {
        self.handle.media_title().await
    }

    /// Abilities to advertise to the host right now
    ///
    /// The set is fixed at construction except for power on, which is
    /// withheld while the TV has not been discovered on the network since a
    /// TV that was never seen cannot be woken.
    pub async fn supported_features(&self) -> Result<Features> {
        let mut features = self.features;
        if !self.handle.discovered().await? {
            features.remove(Features::TURN_ON);
        }
        Ok(features)
    }

    /// Diagnostic attributes exposed next to the state
    pub async fn state_attributes(&self) -> Result<StateAttributes> {
        Ok(StateAttributes {
            last_ws: self.handle.ws_state().await?,
            state: self.handle.is_on().await?,
            discovered: self.handle.discovered().await?,
            media_title: self.handle.media_title().await?,
        })
    }

    /// Run one poll cycle
    ///
    /// Refreshes the handle's device state, maps the TV's activity signal
    /// onto [`PlayerState::Playing`] or [`PlayerState::Off`], and re-derives
    /// the source guess. A failure anywhere propagates as is: nothing is
    /// retried, and the previous state stays visible until a later poll
    /// succeeds.
    pub async fn update(&mut self) -> Result<()> {
        self.handle.refresh().await?;

        let observed = if self.handle.is_on().await? {
            PlayerState::Playing
        } else {
            PlayerState::Off
        };
        self.playback.observe(observed);

        let title = self.handle.media_title().await?;
        let raw_source = self.handle.source().await?;
        if let Some(source) =
            derive_source(title.as_deref(), raw_source.as_deref(), &self.config.sources)
        {
            self.current_source = source.to_string();
        }

        log::trace!(
            "poll: state={} source='{}' title={:?}",
            self.playback.current(),
            self.current_source,
            title
        );
        Ok(())
    }

    /// Power the TV on, if it is currently reported off
    pub async fn turn_on(&mut self) -> Result<()> {
        if self.state() == PlayerState::Off {
            self.handle.turn_on().await?;
            self.playback.command(PlayerState::Playing);
        }
        Ok(())
    }

    /// Power the TV off, unless it is already reported off
    pub async fn turn_off(&mut self) -> Result<()> {
        if self.state() != PlayerState::Off {
            self.handle.turn_off().await?;
            self.playback.command(PlayerState::Off);
        }
        Ok(())
    }

    /// Resume playback
    pub async fn play(&mut self) -> Result<()> {
        self.handle.send_key(Key::Play.code()).await?;
        self.playback.command(PlayerState::Playing);
        Ok(())
    }

    /// Pause playback
    pub async fn pause(&mut self) -> Result<()> {
        self.handle.send_key(Key::Pause.code()).await?;
        self.playback.command(PlayerState::Paused);
        Ok(())
    }

    /// Stop playback, the TV falls back to its idle screen
    pub async fn stop(&mut self) -> Result<()> {
        self.handle.send_key(Key::Stop.code()).await?;
        self.playback.command(PlayerState::Idle);
        Ok(())
    }

    /// Step the volume up one unit
    pub async fn volume_up(&self) -> Result<()> {
        self.handle.volume_up().await
    }

    /// Step the volume down one unit
    pub async fn volume_down(&self) -> Result<()> {
        self.handle.volume_down().await
    }

    /// Set an absolute volume level
    ///
    /// The level is handed to the device untouched, out of range values are
    /// its business.
    pub async fn set_volume(&self, level: f32) -> Result<()> {
        self.handle.set_volume(level).await
    }

    /// Request muting or unmuting
    ///
    /// The remote protocol only has a toggle, so the requested flag is
    /// ignored and the mute state flips either way. Hosts that need an
    /// absolute mute must check
    /// [`is_volume_muted()`](Player::is_volume_muted) first.
    pub async fn mute_volume(&self, _mute: bool) -> Result<()> {
        self.handle.toggle_mute().await
    }

    /// Skip forward
    pub async fn next_track(&self) -> Result<()> {
        self.handle.next_track().await
    }

    /// Skip back
    pub async fn previous_track(&self) -> Result<()> {
        self.handle.previous_track().await
    }

    /// Send one raw key code to the TV
    pub async fn send_key(&self, key: u32) -> Result<()> {
        self.handle.send_key(key).await
    }

    /// Tune to a channel by typing its number on the numeric pad
    ///
    /// The digits go out as individual key presses followed by the confirm
    /// key. Numbers outside 1..=999 are rejected before anything is sent.
    ///
    /// # Example
    ///
    /// ```
    /// # use vestel::{Player, TvHandle};
    /// #
    /// # async fn tune<T: TvHandle>(player: Player<T>) -> Result<(), vestel::Error> {
    /// // Sends digit keys 4 and 2, then the confirm key
    /// player.play_channel(42).await?;
    /// #
    /// # Ok(())
    /// # }
    /// ```
    pub async fn play_channel(&self, channel: u16) -> Result<()> {
        if !(1..=999).contains(&channel) {
            return Err(Error::channel_out_of_range(channel));
        }

        log::debug!("tuning to channel {}", channel);
        for key in channel_keys(channel) {
            self.handle.send_key(key.code()).await?;
        }
        Ok(())
    }

    /// Switch the TV to `source`
    ///
    /// Netflix and YouTube are entered through their app launcher, which
    /// works whether or not they are in the configured source list. Every
    /// other source must be configured and goes through the numeric source
    /// menu, where its position in the list picks the slot key.
    ///
    /// When the TV is leaving Netflix or YouTube the app is quit first and
    /// the TV gets a fixed delay to settle before the next step. There is
    /// no shortcut for re-selecting the current source, the full sequence
    /// runs every time.
    ///
    /// # Example
    ///
    /// ```
    /// # use vestel::{Player, TvHandle};
    /// #
    /// # async fn movie_night<T: TvHandle>(mut player: Player<T>) -> Result<(), vestel::Error> {
    /// player.select_source("Netflix").await?;
    /// println!("{}", player.source());
    /// // > "Netflix"
    /// #
    /// # Ok(())
    /// # }
    /// ```
    pub async fn select_source(&mut self, source: &str) -> Result<()> {
        // Resolve the target up front so an unknown name has no side effects
        let target = match App::from_source(source) {
            Some(app) => Target::App(app),
            None => {
                let slot = self
                    .config
                    .sources
                    .iter()
                    .position(|s| s == source)
                    .ok_or_else(|| Error::unknown_source(source))?;
                Target::MenuSlot(slot as u32)
            }
        };

        log::debug!("switching source '{}' -> '{}'", self.current_source, source);
        if let Some(app) = App::from_source(&self.current_source) {
            self.handle.stop_app(app).await?;
            sleep(SOURCE_SETTLE).await;
        }

        match target {
            Target::App(app) => self.handle.start_app(app).await?,
            Target::MenuSlot(slot) => {
                self.handle.send_key(Key::SourceMenu.code()).await?;
                self.handle.send_key(KEY_SOURCE_SLOT_BASE + slot).await?;
            }
        }

        self.current_source = source.to_string();
        Ok(())
    }

    /// Release the TV connection
    ///
    /// Closes the handle's status channel. The close is attempted once,
    /// calling this again afterwards does nothing.
    pub async fn shutdown(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        // One attempt only, even if the close fails
        self.closed = true;

        self.handle.close().await?;
        log::debug!("closed connection to {}", self.config.host);
        Ok(())
    }
}

impl<T> Debug for Player<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.config.name)
            .field("host", &self.config.host)
            .field("state", &self.playback.current())
            .field("source", &self.current_source)
            .finish()
    }
}

/// Where a source switch is headed
enum Target {
    App(App),
    MenuSlot(u32),
}

/// Diagnostic attributes surfaced next to the player state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateAttributes {
    /// Last message seen on the status channel
    pub last_ws: Option<String>,
    /// Raw activity signal from the device
    pub state: bool,
    /// Whether the TV has been seen on the network
    pub discovered: bool,
    /// Raw media title
    pub media_title: Option<String>,
}

impl StateAttributes {
    /// The attributes as the JSON map hosts consume
    pub fn to_json(&self) -> Value {
        json!({
            "last_ws": self.last_ws,
            "state": self.state,
            "discovered": self.discovered,
            "media_title": self.media_title,
        })
    }
}
