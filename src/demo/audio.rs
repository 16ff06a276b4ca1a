//! Music playback on top of kira.
//!
//! The frame loop never pumps audio; kira's backend streams the track on its
//! own thread, and the handle is only kept so the sound lives as long as the
//! player.

use kira::sound::FromFileError;
use kira::sound::streaming::{StreamingSoundData, StreamingSoundHandle};
use kira::{AudioManager, AudioManagerSettings, DefaultBackend};
use std::error::Error;

pub struct MusicPlayer {
    audio_manager: AudioManager<DefaultBackend>,
    music: Option<StreamingSoundHandle<FromFileError>>,
}

impl MusicPlayer {
    /// Opens the default audio backend.
    pub fn new() -> Result<Self, Box<dyn Error>> {
        let audio_manager = AudioManager::<DefaultBackend>::new(AudioManagerSettings::default())?;

        Ok(MusicPlayer {
            audio_manager,
            music: None,
        })
    }

    /// Streams `path` in a loop, replacing any track already playing.
    ///
    /// The file is decoded lazily as it plays, so a corrupt tail surfaces as
    /// a playback error rather than here.
    pub fn play_music(&mut self, path: &str) -> Result<(), Box<dyn Error>> {
        let sound_data = StreamingSoundData::from_file(path)?.loop_region(..);
        let handle = self.audio_manager.play(sound_data)?;

        if let Some(mut previous) = self.music.replace(handle) {
            previous.stop(kira::Tween::default());
        }
        Ok(())
    }

    pub fn is_playing(&self) -> bool {
        self.music.is_some()
    }
}
