use std::time::Duration;

pub const DEFAULT_NAME: &str = "Vestel";
pub const DEFAULT_TCP_PORT: u16 = 1986;
pub const DEFAULT_WS_PORT: u16 = 7681;
pub const DEFAULT_TIMEOUT: u64 = 5;
pub const DEFAULT_SOURCES: [&str; 3] = ["TV", "Netflix", "YouTube"];

pub const SOURCE_TV: &str = "TV";
pub const SOURCE_SETTLE: Duration = Duration::from_secs(3);

pub const KEY_DIGIT_BASE: u32 = 1000;
pub const KEY_SOURCE_SLOT_BASE: u32 = 1001;
