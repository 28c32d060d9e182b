//! Bounded, order-preserving list of tracks.
//!
//! Every invalid request (bad index, full list, unknown title) leaves the list
//! untouched and is reported through a `bool` or an `Option`, never a panic.

use std::{fmt::Display, rc::Rc};

use log::trace;

use super::track::Track;

/// A play list with a capacity fixed at construction.
///
/// Slots `[0, size)` hold the tracks in list order, slots `[size, max_size)`
/// are always `None`.
#[derive(Debug, Clone)]
pub struct PlayList {
    tracks: Box<[Option<Rc<Track>>]>,
    size: usize,
}

impl PlayList {
    /// Constructs an empty play list. A `max_size` of 0 gives a list that is always full.
    pub fn new(max_size: usize) -> Self {
        Self {
            tracks: vec![None; max_size].into_boxed_slice(),
            size: 0,
        }
    }

    pub fn max_size(&self) -> usize {
        self.tracks.len()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn is_full(&self) -> bool {
        self.size == self.max_size()
    }

    /// Returns the track at `index`, or `None` if `index` is not below `size`.
    pub fn get_track(&self, index: usize) -> Option<&Rc<Track>> {
        self.tracks[..self.size].get(index).and_then(Option::as_ref)
    }

    /// Tracks in list order
    pub fn iter(&self) -> impl Iterator<Item = &Rc<Track>> {
        self.tracks[..self.size].iter().flatten()
    }

    /// Appends the track to the end of the list.
    ///
    /// Returns false and does nothing if the list is full.
    pub fn add(&mut self, track: Rc<Track>) -> bool {
        if self.is_full() {
            trace!("add rejected, play list is full ({})", self.max_size());
            return false;
        }
        self.tracks[self.size] = Some(track);
        self.size += 1;
        true
    }

    /// Inserts the track at `index`, shifting later tracks towards the tail.
    ///
    /// Valid positions are `0..=size`. Returns false and does nothing if the
    /// position is out of range or the list is full.
    pub fn insert(&mut self, index: usize, track: Rc<Track>) -> bool {
        if index > self.size || self.is_full() {
            trace!("insert at {index} rejected, size {} of {}", self.size, self.max_size());
            return false;
        }
        for j in (index + 1..=self.size).rev() {
            self.tracks[j] = self.tracks[j - 1].take();
        }
        self.tracks[index] = Some(track);
        self.size += 1;
        true
    }

    /// Removes the track at `index`, shifting later tracks towards the head.
    /// Does nothing if `index` is out of range.
    pub fn remove(&mut self, index: usize) {
        if index >= self.size {
            return;
        }
        for j in index..self.size - 1 {
            self.tracks[j] = self.tracks[j + 1].take();
        }
        self.size -= 1;
        self.tracks[self.size] = None;
    }

    /// Removes the first track whose title matches, ignoring case.
    pub fn remove_title(&mut self, title: &str) {
        if let Some(index) = self.index_of(title) {
            self.remove(index);
        }
    }

    pub fn remove_first(&mut self) {
        self.remove(0);
    }

    pub fn remove_last(&mut self) {
        if self.size > 0 {
            self.size -= 1;
            self.tracks[self.size] = None;
        }
    }

    /// Index of the first track with the given title, compared case-insensitively.
    pub fn index_of(&self, title: &str) -> Option<usize> {
        let needle = title.to_lowercase();
        self.iter()
            .position(|track| track.title().to_lowercase() == needle)
    }

    /// Sum of all durations in seconds
    pub fn total_duration(&self) -> u64 {
        self.iter().map(|track| u64::from(track.duration())).sum()
    }

    pub fn title_of_shortest_track(&self) -> Option<&str> {
        self.min_index(0)
            .and_then(|index| self.get_track(index))
            .map(|track| track.title())
    }

    /// Appends all tracks of `other`, in order.
    ///
    /// `other` is never modified. If the combined size exceeds this list's
    /// capacity nothing is appended and false is returned.
    pub fn concat(&mut self, other: &PlayList) -> bool {
        if self.size + other.size > self.max_size() {
            trace!(
                "concat rejected, {} + {} tracks exceed capacity {}",
                self.size,
                other.size,
                self.max_size()
            );
            return false;
        }
        for track in other.iter() {
            self.add(Rc::clone(track));
        }
        true
    }

    /// Selection sort by increasing duration, in place.
    pub fn sort_by_duration(&mut self) {
        for i in 0..self.size {
            if let Some(min) = self.min_index(i) {
                self.tracks.swap(i, min);
            }
        }
    }

    /// Index of the shortest track in `[start, size)`; the earliest one wins ties.
    fn min_index(&self, start: usize) -> Option<usize> {
        let mut shortest: Option<(usize, &Rc<Track>)> = None;
        for (i, slot) in self.tracks[..self.size].iter().enumerate().skip(start) {
            let Some(track) = slot else { continue };
            match shortest {
                Some((_, min)) if !track.is_shorter_than(min) => {}
                _ => shortest = Some((i, track)),
            }
        }
        shortest.map(|(i, _)| i)
    }
}

impl Display for PlayList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for track in self.iter() {
            writeln!(f, "{track}")?;
        }
        Ok(())
    }
}
