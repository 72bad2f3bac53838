use std::fmt::{self, Debug};
use std::ops::{BitOr, BitOrAssign};

/// Set of abilities a [`Player`](super::Player) advertises, packed as a bitmask
///
/// Hosts gate their controls on this instead of probing the TV. The set is
/// mostly fixed per configuration, see
/// [`Player::supported_features()`](super::Player::supported_features) for
/// the one exception.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Features(u32);

impl Features {
    pub const PAUSE: Features = Features(1);
    pub const VOLUME_SET: Features = Features(1 << 1);
    pub const VOLUME_MUTE: Features = Features(1 << 2);
    pub const PREVIOUS_TRACK: Features = Features(1 << 3);
    pub const NEXT_TRACK: Features = Features(1 << 4);
    pub const TURN_ON: Features = Features(1 << 5);
    pub const TURN_OFF: Features = Features(1 << 6);
    pub const PLAY_MEDIA: Features = Features(1 << 7);
    pub const VOLUME_STEP: Features = Features(1 << 8);
    pub const SELECT_SOURCE: Features = Features(1 << 9);
    pub const STOP: Features = Features(1 << 10);
    pub const PLAY: Features = Features(1 << 11);

    /// Everything the TV can do regardless of configuration
    pub(super) const BASE: Features = Features(
        Self::PAUSE.0
            | Self::VOLUME_SET.0
            | Self::VOLUME_MUTE.0
            | Self::PREVIOUS_TRACK.0
            | Self::NEXT_TRACK.0
            | Self::PLAY_MEDIA.0
            | Self::VOLUME_STEP.0
            | Self::SELECT_SOURCE.0
            | Self::STOP.0
            | Self::PLAY.0,
    );

    pub const fn empty() -> Features {
        Features(0)
    }

    /// Raw bitmask value
    pub fn bits(&self) -> u32 {
        self.0
    }

    /// `true` if every flag in `other` is set in `self`
    pub fn contains(&self, other: Features) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: Features) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Features) {
        self.0 &= !other.0;
    }
}

impl BitOr for Features {
    type Output = Features;

    fn bitor(self, rhs: Features) -> Features {
        Features(self.0 | rhs.0)
    }
}

impl BitOrAssign for Features {
    fn bitor_assign(&mut self, rhs: Features) {
        self.0 |= rhs.0;
    }
}

impl Debug for Features {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(Features, &str); 12] = [
            (Features::PAUSE, "PAUSE"),
            (Features::VOLUME_SET, "VOLUME_SET"),
            (Features::VOLUME_MUTE, "VOLUME_MUTE"),
            (Features::PREVIOUS_TRACK, "PREVIOUS_TRACK"),
            (Features::NEXT_TRACK, "NEXT_TRACK"),
            (Features::TURN_ON, "TURN_ON"),
            (Features::TURN_OFF, "TURN_OFF"),
            (Features::PLAY_MEDIA, "PLAY_MEDIA"),
            (Features::VOLUME_STEP, "VOLUME_STEP"),
            (Features::SELECT_SOURCE, "SELECT_SOURCE"),
            (Features::STOP, "STOP"),
            (Features::PLAY, "PLAY"),
        ];

        let mut first = true;
        for (flag, name) in NAMES.iter() {
            if self.contains(*flag) {
                if !first {
                    write!(f, " | ")?;
                }
                write!(f, "{}", name)?;
                first = false;
            }
        }
        if first {
            write!(f, "(none)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_set_excludes_power_control() {
        let base = Features::BASE;
        assert!(base.contains(Features::PLAY));
        assert!(base.contains(Features::PAUSE));
        assert!(base.contains(Features::STOP));
        assert!(base.contains(Features::SELECT_SOURCE));
        assert!(base.contains(Features::PLAY_MEDIA));
        assert!(!base.contains(Features::TURN_ON));
        assert!(!base.contains(Features::TURN_OFF));
    }

    #[test]
    fn insert_and_remove_flip_single_flags() {
        let mut features = Features::empty();
        assert_eq!(features.bits(), 0);

        features.insert(Features::TURN_ON | Features::TURN_OFF);
        assert!(features.contains(Features::TURN_ON));
        assert!(features.contains(Features::TURN_OFF));
        assert!(!features.contains(Features::TURN_ON | Features::PLAY));

        features.remove(Features::TURN_ON);
        assert!(!features.contains(Features::TURN_ON));
        assert!(features.contains(Features::TURN_OFF));
    }

    #[test]
    fn debug_lists_flag_names() {
        assert_eq!(
            format!("{:?}", Features::PAUSE | Features::TURN_ON),
            "PAUSE | TURN_ON"
        );
        assert_eq!(format!("{:?}", Features::empty()), "(none)");
    }
}
