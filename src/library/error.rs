use thiserror::Error;

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("unsupported playlist file version {0}")]
    UnsupportedVersion(u32),

    #[error("playlist '{0}' is defined more than once")]
    DuplicatePlaylist(String),

    #[error("playlist '{playlist}' lists more tracks than its capacity {capacity}")]
    CapacityExceeded { playlist: String, capacity: usize },

    #[error("playlist '{0}' not found")]
    UnknownPlaylist(String),
}
