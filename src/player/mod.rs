use std::collections::HashMap;

use tracing::info;

use crate::controller::selection::TrackKey;
use crate::model::MusicTrack;

/// Static player configuration merged into every handoff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    pub list_folded: bool,
    pub list_max_height: u16,
    pub lrc_type: u8,
    pub autoplay: bool,
    pub mutex: bool,
    pub order: PlayOrder,
    pub fixed: bool,
    pub mini: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            list_folded: true,
            list_max_height: 90,
            lrc_type: 0,
            autoplay: false,
            mutex: true,
            order: PlayOrder::Random,
            fixed: true,
            mini: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOrder {
    List,
    Random,
}

/// One audio entry as the player collaborator expects it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerAudio {
    pub name: String,
    pub artist: String,
    pub url: String,
    pub cover: Option<String>,
    pub lrc: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PlayerSetup {
    pub config: PlayerConfig,
    pub data: HashMap<String, Vec<PlayerAudio>>,
}

/// Contract of the external audio player. The playback engine itself lives
/// outside this crate; the panels only drive it through this seam.
pub trait AudioPlayer: Send {
    fn clear(&mut self);
    fn init(&mut self, setup: PlayerSetup);
    fn play(&mut self, composite_id: &str);
}

/// Builds the single-track setup for a row: default config plus a one-entry
/// track map keyed by the composite id.
pub fn single_track_setup(track: &MusicTrack) -> (String, PlayerSetup) {
    let composite_id = TrackKey::of(track).composite();
    let audio = PlayerAudio {
        name: track.title.clone(),
        artist: track.artist.clone(),
        url: track.url.clone(),
        cover: track.cover.clone(),
        lrc: track.lrc.clone(),
    };

    let mut data = HashMap::new();
    data.insert(composite_id.clone(), vec![audio]);

    (
        composite_id,
        PlayerSetup {
            config: PlayerConfig::default(),
            data,
        },
    )
}

/// Full handoff for one selected row: clear any prior instance, initialize a
/// fresh one with the merged setup, start playback by composite id.
pub fn hand_off(player: &mut dyn AudioPlayer, track: &MusicTrack) -> String {
    let (composite_id, setup) = single_track_setup(track);
    player.clear();
    player.init(setup);
    player.play(&composite_id);
    composite_id
}

/// Stand-in collaborator that records the handoff in the log.
#[derive(Debug, Default)]
pub struct LoggingPlayer {
    current: Option<String>,
    tracks: usize,
}

impl AudioPlayer for LoggingPlayer {
    fn clear(&mut self) {
        if self.current.take().is_some() {
            info!("audio player cleared");
        }
        self.tracks = 0;
    }

    fn init(&mut self, setup: PlayerSetup) {
        self.tracks = setup.data.values().map(Vec::len).sum();
        info!(tracks = self.tracks, "audio player initialized");
    }

    fn play(&mut self, composite_id: &str) {
        self.current = Some(composite_id.to_string());
        info!(composite_id, "audio player started");
    }
}

impl LoggingPlayer {
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track() -> MusicTrack {
        MusicTrack {
            id: 9,
            category_id: 4,
            title: "So What".to_string(),
            artist: "Miles Davis".to_string(),
            url: "https://cdn/so-what.mp3".to_string(),
            cover: Some("https://cdn/so-what.jpg".to_string()),
            lrc: None,
        }
    }

    #[test]
    fn setup_holds_one_entry_under_the_composite_id() {
        let (composite_id, setup) = single_track_setup(&track());
        assert_eq!(composite_id, "4&9");
        assert_eq!(setup.data.len(), 1);
        assert_eq!(setup.data["4&9"].len(), 1);
        assert_eq!(setup.data["4&9"][0].name, "So What");
    }

    #[test]
    fn config_defaults_keep_autoplay_off_and_mutex_on() {
        let config = PlayerConfig::default();
        assert!(!config.autoplay);
        assert!(config.mutex);
        assert!(config.list_folded);
        assert_eq!(config.order, PlayOrder::Random);
    }

    #[derive(Default)]
    struct RecordingPlayer {
        calls: Vec<String>,
    }

    impl AudioPlayer for RecordingPlayer {
        fn clear(&mut self) {
            self.calls.push("clear".to_string());
        }

        fn init(&mut self, _setup: PlayerSetup) {
            self.calls.push("init".to_string());
        }

        fn play(&mut self, composite_id: &str) {
            self.calls.push(format!("play:{composite_id}"));
        }
    }

    #[test]
    fn handoff_clears_then_initializes_then_plays() {
        let mut player = RecordingPlayer::default();
        let composite_id = hand_off(&mut player, &track());
        assert_eq!(composite_id, "4&9");
        assert_eq!(player.calls, vec!["clear", "init", "play:4&9"]);
    }
}
