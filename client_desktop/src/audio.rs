//! Sound effects and background music on top of `macroquad::audio`.
//!
//! Missing or undecodable files are logged and the game carries on silently.

use game_core::audio::{SoundBank, SoundCue, SoundEffect, SOUND_SLOTS};
use game_core::Events;
use macroquad::audio::{load_sound, play_sound, play_sound_once, PlaySoundParams, Sound};

const RESOURCE_DIR: &str = "resources";

const EFFECT_FILES: [(SoundCue, &str); SOUND_SLOTS] = [
    (SoundEffect::PlayerPaddleHit.cue(), "Player_Hit_Sound.ogg"),
    (SoundEffect::AiPaddleHit.cue(), "Enemy_Hit_Sound.ogg"),
    (SoundEffect::ScorePoint.variant(0), "Scoring_Sound1.ogg"),
    (SoundEffect::ScorePoint.variant(1), "Scoring_Sound2.ogg"),
];

const MUSIC_FILE: &str = "Background_Music.ogg";
const MUSIC_VOLUME: f32 = 0.5;

pub struct AudioManager {
    effects: SoundBank<Sound>,
    music: Option<Sound>,
}

impl AudioManager {
    pub async fn load() -> Self {
        let mut effects = SoundBank::new();
        for (cue, file) in EFFECT_FILES {
            let path = format!("{RESOURCE_DIR}/{file}");
            match load_sound(&path).await {
                Ok(sound) => {
                    if let Err(e) = effects.insert(cue, sound) {
                        log::warn!("{e}");
                    }
                }
                Err(e) => log::warn!("failed to load sound effect {path}: {e:?}"),
            }
        }

        let music_path = format!("{RESOURCE_DIR}/{MUSIC_FILE}");
        let music = match load_sound(&music_path).await {
            Ok(sound) => Some(sound),
            Err(e) => {
                log::warn!("failed to load background music {music_path}: {e:?}");
                None
            }
        };

        log::info!(
            "audio ready: {}/{} effects, music {}",
            effects.loaded(),
            SOUND_SLOTS,
            if music.is_some() { "on" } else { "off" }
        );

        Self { effects, music }
    }

    /// Loop the background track for the rest of the process
    pub fn start_music(&self) {
        if let Some(music) = &self.music {
            play_sound(
                music,
                PlaySoundParams {
                    looped: true,
                    volume: MUSIC_VOLUME,
                },
            );
        }
    }

    pub fn play(&self, cue: SoundCue) {
        self.effects.play_with(cue, |sound| play_sound_once(sound));
    }

    pub fn play_events(&self, events: &Events) {
        for &cue in &events.sounds {
            self.play(cue);
        }
    }
}
