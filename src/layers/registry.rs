//! Bookkeeping of the markers currently bouncing
//!
//! The registry only decides *which* markers should be bouncing; stopping the
//! playback of the ids it hands back is up to the animation driver.

use crate::layers::marker::BouncingMarker;
use std::fmt::Debug;

/// Ordered set of bouncing markers with the exclusivity policy applied on insert.
///
/// An exclusive marker never bounces along with others: starting it stops
/// every bouncing marker, and starting any marker stops the bouncing ones
/// that are exclusive. Exclusivity of the markers already bouncing is looked
/// up when a new one starts, so option changes made meanwhile are honoured.
#[derive(Debug, Clone)]
pub struct BouncingRegistry<K> {
    bouncing: Vec<K>,
}

impl<K> Default for BouncingRegistry<K> {
    fn default() -> Self {
        Self {
            bouncing: Vec::new(),
        }
    }
}

impl<K: PartialEq + Clone + Debug> BouncingRegistry<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `id` as bouncing and returns the ids that must stop.
    ///
    /// `exclusive` stops every other marker. Otherwise only the markers for
    /// which `is_exclusive` currently holds are stopped. A marker already
    /// registered is moved to the end of the bouncing list.
    pub fn add<F>(&mut self, id: K, exclusive: bool, is_exclusive: F) -> Vec<K>
    where
        F: Fn(&K) -> bool,
    {
        self.remove(&id);

        let stopped = if exclusive {
            self.stop_all()
        } else {
            self.stop_exclusive(is_exclusive)
        };

        log::trace!(
            "marker {:?} starts bouncing (exclusive: {}), stopping {:?}",
            id,
            exclusive,
            stopped
        );
        self.bouncing.push(id);
        stopped
    }

    /// Removes `id` from the bouncing markers; returns whether it was bouncing.
    pub fn remove(&mut self, id: &K) -> bool {
        match self.bouncing.iter().position(|bouncing| bouncing == id) {
            Some(index) => {
                self.bouncing.remove(index);
                true
            }
            None => false,
        }
    }

    /// Stops every bouncing marker and returns their ids in bouncing order.
    pub fn stop_all(&mut self) -> Vec<K> {
        self.bouncing.drain(..).collect()
    }

    fn stop_exclusive<F>(&mut self, is_exclusive: F) -> Vec<K>
    where
        F: Fn(&K) -> bool,
    {
        let mut stopped = Vec::new();
        self.bouncing.retain(|id| {
            if is_exclusive(id) {
                stopped.push(id.clone());
                false
            } else {
                true
            }
        });
        stopped
    }

    pub fn is_bouncing(&self, id: &K) -> bool {
        self.bouncing.contains(id)
    }

    /// Ids of the bouncing markers, oldest first
    pub fn bouncing(&self) -> impl Iterator<Item = &K> + '_ {
        self.bouncing.iter()
    }

    pub fn len(&self) -> usize {
        self.bouncing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bouncing.is_empty()
    }
}

impl BouncingRegistry<String> {
    /// Registers a marker, honouring its `exclusive` option. `force_exclusive`
    /// makes this one bounce exclusive regardless of the option.
    ///
    /// `markers` are searched for the current options of the markers already
    /// bouncing; ids missing from it count as non-exclusive.
    pub fn add_marker<'a, I>(
        &mut self,
        marker: &BouncingMarker,
        force_exclusive: bool,
        markers: I,
    ) -> Vec<String>
    where
        I: IntoIterator<Item = &'a BouncingMarker>,
    {
        let exclusive = force_exclusive || marker.bouncing_options().exclusive;
        let exclusive_ids: Vec<&str> = markers
            .into_iter()
            .filter(|other| other.bouncing_options().exclusive)
            .map(BouncingMarker::id)
            .collect();

        self.add(marker.id().to_string(), exclusive, |id| {
            exclusive_ids.contains(&id.as_str())
        })
    }
}
