//! Sound cue identifiers and the slot table the client plays them from.
//!
//! The simulation never touches an audio device: it records cues in
//! [`crate::Events`] and the client looks them up in a [`SoundBank`].

use thiserror::Error;

/// Logical sound effects. The discriminant is the first slot of the effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    PlayerPaddleHit = 0,
    AiPaddleHit = 1,
    ScorePoint = 2,
}

impl SoundEffect {
    pub const fn cue(self) -> SoundCue {
        SoundCue(self as usize)
    }

    /// Cue for one of several recordings of the same effect
    pub const fn variant(self, offset: usize) -> SoundCue {
        SoundCue(self as usize + offset)
    }
}

/// Number of interchangeable recordings for [`SoundEffect::ScorePoint`]
pub const SCORE_SOUND_VARIANTS: usize = 2;

/// Total slots: two hit sounds plus the score variants
pub const SOUND_SLOTS: usize = SoundEffect::ScorePoint as usize + SCORE_SOUND_VARIANTS;

/// Index of a slot in the sound bank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundCue(pub usize);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AudioError {
    #[error("sound effect ID out of range: {0}")]
    OutOfRange(usize),
}

/// Fixed table of loaded sounds, generic over the backend's sound handle.
///
/// Slots stay empty when their asset failed to load.
#[derive(Debug)]
pub struct SoundBank<S> {
    slots: Vec<Option<S>>,
}

impl<S> SoundBank<S> {
    pub fn new() -> Self {
        Self {
            slots: (0..SOUND_SLOTS).map(|_| None).collect(),
        }
    }

    pub fn insert(&mut self, cue: SoundCue, sound: S) -> Result<(), AudioError> {
        let slot = self
            .slots
            .get_mut(cue.0)
            .ok_or(AudioError::OutOfRange(cue.0))?;
        *slot = Some(sound);
        Ok(())
    }

    /// Look up a cue; `Ok(None)` means the slot exists but holds no sound
    pub fn get(&self, cue: SoundCue) -> Result<Option<&S>, AudioError> {
        self.slots
            .get(cue.0)
            .map(Option::as_ref)
            .ok_or(AudioError::OutOfRange(cue.0))
    }

    /// Hand the sound for `cue` to `play`. Bad cues are logged and dropped.
    pub fn play_with(&self, cue: SoundCue, play: impl FnOnce(&S)) {
        match self.get(cue) {
            Ok(Some(sound)) => play(sound),
            Ok(None) => log::trace!("no sound loaded for slot {}", cue.0),
            Err(e) => log::warn!("{e}"),
        }
    }

    pub fn loaded(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

impl<S> Default for SoundBank<S> {
    fn default() -> Self {
        Self::new()
    }
}
