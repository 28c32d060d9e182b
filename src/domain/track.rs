use std::fmt::Display;

/// Represent a music track
///
/// Tracks are immutable once built; playlists only hold shared handles to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    title: String,
    artist: String,
    /// length in seconds
    duration: u32,
}

impl Track {
    pub fn new(title: impl Into<String>, artist: impl Into<String>, duration: u32) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            duration,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// strict comparison, tracks of equal length are not shorter than each other
    pub fn is_shorter_than(&self, other: &Track) -> bool {
        self.duration < other.duration
    }

    /// duration as `m:ss`
    pub fn formatted_duration(&self) -> String {
        format_seconds(self.duration)
    }
}

pub fn format_seconds(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

impl Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {}", self.artist, self.title, self.duration)
    }
}
