mod config;
mod constants;
mod error;
mod player;
mod tv;

pub use config::Config;
pub use error::{CommandError, ConfigError, Error, Result};
pub use player::{Features, Key, Player, PlayerState, StateAttributes};
pub use tv::{App, TvHandle};
