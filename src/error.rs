use std::fmt::Display;

/// Result for calls from [`Player`](super::Player)
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// Configuration was rejected at setup
    Config(ConfigError),
    /// Command was rejected before anything was sent to the TV
    Command(CommandError),
    /// Error from std::io
    IO(std::io::Error),
    #[doc(hidden)]
    Other(String),
}

impl Error {
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config(_))
    }

    pub fn is_command(&self) -> bool {
        matches!(self, Error::Command(_))
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Error::IO(_))
    }

    pub fn unknown_source<S: Into<String>>(source: S) -> Error {
        CommandError::UnknownSource(source.into()).into()
    }

    pub fn channel_out_of_range(channel: u16) -> Error {
        CommandError::ChannelOutOfRange(channel).into()
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<CommandError> for Error {
    fn from(e: CommandError) -> Self {
        Error::Command(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::IO(e)
    }
}

impl From<String> for Error {
    fn from(e: String) -> Error {
        Error::Other(e)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(e) => write!(f, "{}", e),
            Self::Command(e) => write!(f, "{}", e),
            Self::IO(e) => write!(f, "{}", e),
            Self::Other(e) => write!(f, "{}", e),
        }
    }
}

/// Errors from checking a [`Config`](super::Config)
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Host must not be empty
    EmptyHost,
    /// Source list must contain at least one entry
    NoSources,
    /// Timeout of zero would fail every connection attempt
    ZeroTimeout,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyHost => write!(f, "Host must not be empty"),
            Self::NoSources => write!(f, "Source list must not be empty"),
            Self::ZeroTimeout => write!(f, "Timeout must be at least one second"),
        }
    }
}

/// Errors from commands rejected by [`Player`](super::Player)
#[derive(Debug, PartialEq)]
pub enum CommandError {
    /// Requested source is not a streaming app or a configured source
    UnknownSource(String),
    /// Channel number cannot be entered on the numeric pad
    ChannelOutOfRange(u16),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::UnknownSource(source) => {
                write!(f, "Source '{}' is not in the configured source list", source)
            }

            Self::ChannelOutOfRange(channel) => write!(
                f,
                "Channel number must be between 1 and 999, got: {}",
                channel
            ),
        }
    }
}
