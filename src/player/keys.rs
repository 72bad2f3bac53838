use crate::constants::KEY_DIGIT_BASE;

/// Remote control keys with a known code on the TCP control channel
///
/// Anything the TV understands beyond these can still be sent raw with
/// [`Player::send_key()`](super::Player::send_key).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Numeric pad digit, 0 through 9
    Digit(u8),
    /// Stop playback
    Stop,
    /// Start playback
    Play,
    /// Pause playback
    Pause,
    /// Confirm a typed channel number
    ChannelEnter,
    /// Open the source menu
    SourceMenu,
}

impl Key {
    /// Code sent on the wire
    ///
    /// Digits map onto a contiguous block, so [`Key::Digit`] values above 9
    /// land on unrelated keys.
    pub fn code(&self) -> u32 {
        match self {
            Self::Digit(digit) => KEY_DIGIT_BASE + u32::from(*digit),
            Self::Stop => 1024,
            Self::Play => 1025,
            Self::Pause => 1049,
            Self::ChannelEnter => 1053,
            Self::SourceMenu => 1056,
        }
    }
}

/// Key sequence which tunes the TV to `channel`
///
/// Plain base ten digit entry: hundreds digit when the number needs it,
/// then tens, then units, then the confirm key. Callers keep `channel`
/// within 1..=999, the three digits a TV channel pad accepts.
// TODO: confirm the tens key of three digit entry against a real unit,
// only one and two digit channels are field proven.
pub(super) fn channel_keys(channel: u16) -> Vec<Key> {
    debug_assert!((1..=999).contains(&channel));

    let mut keys = Vec::with_capacity(4);
    if channel >= 100 {
        keys.push(Key::Digit((channel / 100) as u8));
    }
    if channel >= 10 {
        keys.push(Key::Digit((channel / 10 % 10) as u8));
    }
    keys.push(Key::Digit((channel % 10) as u8));
    keys.push(Key::ChannelEnter);
    keys
}
