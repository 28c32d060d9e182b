use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

/// Playlist file, as written by the user
#[derive(Debug, Deserialize)]
pub struct Config {
    pub version: u32,
    #[serde(default)]
    pub playlists: Vec<PlaylistConfig>,
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Config> {
        log::debug!("Loading playlists from {}", path.to_string_lossy());
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.to_string_lossy()))?;
        toml::from_str(&contents).with_context(|| "Failed to parse config TOML")
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlaylistConfig {
    pub name: String,
    pub capacity: usize,
    #[serde(default)]
    pub tracks: Vec<TrackConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TrackConfig {
    pub title: String,
    pub artist: String,
    /// seconds
    pub duration: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const PLAYLISTS_TOML: &str = r#"
version = 1

[[playlists]]
name = "road trip"
capacity = 5
tracks = [
    { title = "Yesterday", artist = "The Beatles", duration = 125 },
    { title = "Imagine", artist = "John Lennon", duration = 183 },
]

[[playlists]]
name = "empty"
capacity = 0
"#;

    #[test]
    fn test_parse_config_toml() -> anyhow::Result<()> {
        let cfg: Config = toml::from_str(PLAYLISTS_TOML)?;

        assert_eq!(cfg.version, 1);
        assert_eq!(cfg.playlists.len(), 2);

        let road_trip = &cfg.playlists[0];
        assert_eq!(road_trip.name, "road trip");
        assert_eq!(road_trip.capacity, 5);
        assert_eq!(road_trip.tracks.len(), 2);
        assert_eq!(road_trip.tracks[1].title, "Imagine");
        assert_eq!(road_trip.tracks[1].artist, "John Lennon");
        assert_eq!(road_trip.tracks[1].duration, 183);

        // tracks default to empty
        assert!(cfg.playlists[1].tracks.is_empty());
        assert_eq!(cfg.playlists[1].capacity, 0);

        Ok(())
    }

    #[test]
    fn test_parse_rejects_negative_duration() {
        let toml_str = r#"
version = 1

[[playlists]]
name = "bad"
capacity = 1
tracks = [{ title = "x", artist = "y", duration = -3 }]
"#;
        assert!(toml::from_str::<Config>(toml_str).is_err());
    }

    #[test]
    fn test_load_from_file() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("playlists.toml");
        fs::write(&path, PLAYLISTS_TOML)?;

        let cfg = Config::load(&path)?;
        assert_eq!(cfg.playlists[0].name, "road trip");

        Ok(())
    }

    #[test]
    fn test_load_missing_file_is_error() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let result = Config::load(&dir.path().join("nope.toml"));
        assert!(result.is_err());
        Ok(())
    }
}
