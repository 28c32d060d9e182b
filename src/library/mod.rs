//! Named play lists built from a playlist file

use std::rc::Rc;

use crate::{
    config::{Config, PlaylistConfig},
    domain::{playlist::PlayList, track::Track},
};

pub mod error;

use error::LibraryError;

pub const SUPPORTED_VERSION: u32 = 1;

#[derive(Debug)]
pub struct NamedPlayList {
    pub name: String,
    pub list: PlayList,
}

/// All play lists of a playlist file, in file order
#[derive(Debug, Default)]
pub struct Library {
    playlists: Vec<NamedPlayList>,
}

impl Library {
    pub fn from_config(config: &Config) -> Result<Self, LibraryError> {
        if config.version != SUPPORTED_VERSION {
            return Err(LibraryError::UnsupportedVersion(config.version));
        }

        let mut library = Library::default();
        for playlist in &config.playlists {
            if library.position(&playlist.name).is_some() {
                return Err(LibraryError::DuplicatePlaylist(playlist.name.clone()));
            }
            let list = build_playlist(playlist)?;
            log::debug!(
                "Built playlist '{}' with {} of {} tracks",
                playlist.name,
                list.size(),
                list.max_size()
            );
            library.playlists.push(NamedPlayList {
                name: playlist.name.clone(),
                list,
            });
        }
        Ok(library)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedPlayList> {
        self.playlists.iter()
    }

    pub fn get(&self, name: &str) -> Result<&PlayList, LibraryError> {
        self.position(name)
            .map(|i| &self.playlists[i].list)
            .ok_or_else(|| LibraryError::UnknownPlaylist(name.to_string()))
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut PlayList, LibraryError> {
        match self.position(name) {
            Some(i) => Ok(&mut self.playlists[i].list),
            None => Err(LibraryError::UnknownPlaylist(name.to_string())),
        }
    }

    /// Appends the tracks of `from` to `into`, leaving `from` as it is.
    ///
    /// Returns `Ok(false)` when `into` has no room for all of them, in which
    /// case neither list changes.
    pub fn merge(&mut self, into: &str, from: &str) -> Result<bool, LibraryError> {
        // handles are shared, so the snapshot costs one Rc clone per track
        let source = self.get(from)?.clone();
        let target = self.get_mut(into)?;

        let merged = target.concat(&source);
        if !merged {
            log::warn!(
                "Cannot merge '{from}' ({} tracks) into '{into}' ({} of {} tracks)",
                source.size(),
                target.size(),
                target.max_size()
            );
        }
        Ok(merged)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.playlists.iter().position(|p| p.name == name)
    }
}

fn build_playlist(config: &PlaylistConfig) -> Result<PlayList, LibraryError> {
    let mut list = PlayList::new(config.capacity);
    for track in &config.tracks {
        let track = Rc::new(Track::new(
            track.title.clone(),
            track.artist.clone(),
            track.duration,
        ));
        if !list.add(track) {
            return Err(LibraryError::CapacityExceeded {
                playlist: config.name.clone(),
                capacity: config.capacity,
            });
        }
    }
    Ok(list)
}
