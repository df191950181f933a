use std::collections::HashMap;

use crate::model::MusicTrack;

/// Composite identifier addressing one selectable row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrackKey {
    pub category_id: u64,
    pub music_id: u64,
}

impl TrackKey {
    pub fn of(track: &MusicTrack) -> Self {
        Self {
            category_id: track.category_id,
            music_id: track.id,
        }
    }

    pub fn composite(&self) -> String {
        format!("{}&{}", self.category_id, self.music_id)
    }
}

/// Display fields retained for a checked row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedTrack {
    pub title: String,
    pub artist: String,
    pub url: String,
    pub cover: Option<String>,
    pub lrc: Option<String>,
}

impl From<&MusicTrack> for SelectedTrack {
    fn from(track: &MusicTrack) -> Self {
        Self {
            title: track.title.clone(),
            artist: track.artist.clone(),
            url: track.url.clone(),
            cover: track.cover.clone(),
            lrc: track.lrc.clone(),
        }
    }
}

/// Multi-select state of the music list. Entries come and go atomically with
/// their checkbox and the whole map is dropped on page navigation; selections
/// never survive a page change.
#[derive(Debug, Clone, Default)]
pub struct SelectionMap {
    entries: HashMap<TrackKey, SelectedTrack>,
}

impl SelectionMap {
    pub fn toggle(&mut self, track: &MusicTrack, checked: bool) {
        let key = TrackKey::of(track);
        if checked {
            self.entries.insert(key, SelectedTrack::from(track));
        } else {
            self.entries.remove(&key);
        }
    }

    pub fn contains(&self, key: &TrackKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(category_id: u64, id: u64) -> MusicTrack {
        MusicTrack {
            id,
            category_id,
            title: format!("track-{id}"),
            artist: "artist".to_string(),
            url: format!("https://cdn/{id}.mp3"),
            cover: None,
            lrc: None,
        }
    }

    #[test]
    fn toggle_on_then_off_is_net_zero() {
        let mut selection = SelectionMap::default();
        let row = track(3, 17);

        let before = selection.len();
        selection.toggle(&row, true);
        assert_eq!(selection.len(), before + 1);
        assert!(selection.contains(&TrackKey::of(&row)));

        selection.toggle(&row, false);
        assert_eq!(selection.len(), before);
        assert!(!selection.contains(&TrackKey::of(&row)));
    }

    #[test]
    fn composite_key_deduplicates_reselection() {
        let mut selection = SelectionMap::default();
        let row = track(3, 17);

        selection.toggle(&row, true);
        selection.toggle(&row, true);
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn same_music_id_in_another_category_is_a_distinct_entry() {
        let mut selection = SelectionMap::default();
        selection.toggle(&track(1, 17), true);
        selection.toggle(&track(2, 17), true);
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn page_navigation_clears_wholesale() {
        let mut selection = SelectionMap::default();
        selection.toggle(&track(1, 1), true);
        selection.toggle(&track(1, 2), true);

        selection.clear();
        assert!(selection.is_empty());
    }

    #[test]
    fn composite_joins_category_then_music() {
        let key = TrackKey::of(&track(4, 9));
        assert_eq!(key.composite(), "4&9");
    }
}
