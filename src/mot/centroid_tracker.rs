use std::fmt;

use log::{debug, info};

use crate::mot::association::associate;
use crate::mot::mot_errors::{NoObjectInTracker, TrackerError};
use crate::mot::registry::Registry;
use crate::mot::{largest_first, Object, ObjectId, SortPolicy};

/// Centroid based multi object tracker with one-shot target selection.
///
/// Keeps a priority-ordered registry of tracked objects, matches each
/// frame's detections to them by greedy nearest-neighbour association and
/// hands out confirmed targets exactly once via [`CentroidTracker::top_valid`].
pub struct CentroidTracker {
    // Max number of consecutive missed frames before an object is evicted. Default is 75
    max_disappeared: usize,
    // Threshold distance for matching, in the same units as detection coordinates. Default is 30.0
    dist_tol: f32,
    // Min number of consecutive matched frames before an object is a valid target. Default is 5
    min_framecount: usize,
    // Priority order over object snapshots; the head of the order is the next target candidate.
    // Applied at registration time: a matched update does not re-sort the sequence.
    sort_policy: SortPolicy,
    // Storage
    registry: Registry,
}

impl CentroidTracker {
    /// Creates default instance of CentroidTracker
    ///
    /// Basic usage:
    ///
    /// ```
    /// use centroid_mot::mot::CentroidTracker;
    /// let mut tracker = CentroidTracker::default();
    /// ```
    pub fn default() -> Self {
        CentroidTracker {
            max_disappeared: 75,
            dist_tol: 30.0,
            min_framecount: 5,
            sort_policy: Box::new(largest_first),
            registry: Registry::new(),
        }
    }
    /// Creates new instance of CentroidTracker with the default priority
    /// policy (biggest object first)
    ///
    /// Basic usage:
    ///
    /// ```
    /// use centroid_mot::mot::CentroidTracker;
    /// let dist_tol: f32 = 50.0;
    /// let max_disappeared: usize = 15;
    /// let min_framecount: usize = 3;
    /// let mut tracker = CentroidTracker::new(dist_tol, max_disappeared, min_framecount);
    /// ```
    pub fn new(_dist_tol: f32, _max_disappeared: usize, _min_framecount: usize) -> Self {
        CentroidTracker {
            max_disappeared: _max_disappeared,
            dist_tol: _dist_tol,
            min_framecount: _min_framecount,
            sort_policy: Box::new(largest_first),
            registry: Registry::new(),
        }
    }
    /// Creates new instance of CentroidTracker with a custom priority policy
    ///
    /// Basic usage:
    ///
    /// ```
    /// use centroid_mot::mot::CentroidTracker;
    /// // Objects further down the frame get targeted first
    /// let mut tracker = CentroidTracker::new_with_policy(50.0, 15, 3, Box::new(|a, b| {
    ///     b.position.y.partial_cmp(&a.position.y).unwrap_or(std::cmp::Ordering::Equal)
    /// }));
    /// ```
    pub fn new_with_policy(
        _dist_tol: f32,
        _max_disappeared: usize,
        _min_framecount: usize,
        _sort_policy: SortPolicy,
    ) -> Self {
        CentroidTracker {
            max_disappeared: _max_disappeared,
            dist_tol: _dist_tol,
            min_framecount: _min_framecount,
            sort_policy: _sort_policy,
            registry: Registry::new(),
        }
    }

    /// Consumes one frame's detections and advances every tracked object's
    /// lifecycle: matched objects get their snapshot overwritten and their
    /// framecount bumped, missed objects accumulate disappearance, unmatched
    /// detections are registered and objects missing for more than
    /// `max_disappeared` frames are evicted.
    ///
    /// Basic usage:
    ///
    /// ```
    /// use centroid_mot::mot::{CentroidTracker, Object};
    /// let mut tracker = CentroidTracker::default();
    /// tracker.update(vec![Object::new(10.0, 20.0, 0.0, 4.0)]).unwrap();
    /// assert_eq!(tracker.object_count(), 1);
    /// ```
    pub fn update(&mut self, detections: Vec<Object>) -> Result<(), TrackerError> {
        if detections.is_empty() {
            // Nothing detected this frame: everything is missing
            for record in self.registry.records_mut() {
                record.disappeared += 1;
                record.framecount = 0;
            }
        } else if self.registry.is_empty() {
            debug!("no current objects, registering all detections");
            for detection in &detections {
                self.register(*detection);
            }
        } else {
            let ids: Vec<ObjectId> = self.registry.ids().to_vec();
            let mut snapshots: Vec<Object> = Vec::with_capacity(ids.len());
            for &id in &ids {
                let record = self.registry.get(id).ok_or_else(|| NoObjectInTracker {
                    txt: format!("id {} is in the priority list but has no record", id),
                })?;
                snapshots.push(record.object);
            }

            let assoc = associate(&snapshots, &detections, self.dist_tol);

            for (row, matched) in assoc.matches.iter().enumerate() {
                let id = ids[row];
                let record = self.registry.get_mut(id).ok_or_else(|| NoObjectInTracker {
                    txt: format!("id {} vanished from the registry mid-update", id),
                })?;
                match matched {
                    Some(col) => {
                        record.object = detections[*col];
                        record.framecount += 1;
                        record.disappeared = 0;
                    }
                    None => {
                        record.disappeared += 1;
                        record.framecount = 0;
                    }
                }
            }

            for &col in &assoc.unmatched_detections {
                self.register(detections[col]);
            }
        }

        self.cleanup_disappeared();
        Ok(())
    }

    /// Returns the object at the head of the priority sequence without any
    /// mutation, or None when nothing is tracked. Idempotent between updates.
    pub fn top(&self) -> Option<(ObjectId, Object)> {
        let id = *self.registry.ids().first()?;
        let record = self.registry.get(id)?;
        Some((id, record.object))
    }

    /// Returns the first object in priority order that has been matched in
    /// at least `min_framecount` consecutive frames and has not been handed
    /// out before, marking it as consumed. Repeated calls walk through the
    /// valid objects one at a time; None once they are exhausted.
    ///
    /// An evicted object that later re-enters the scene is registered under
    /// a new identifier and starts unconsumed again.
    pub fn top_valid(&mut self) -> Option<(ObjectId, Object)> {
        let ids: Vec<ObjectId> = self.registry.ids().to_vec();
        for id in ids {
            if let Some(record) = self.registry.get_mut(id) {
                if record.framecount >= self.min_framecount && !record.uprooted {
                    record.uprooted = true;
                    return Some((id, record.object));
                }
            }
        }
        None
    }

    /// Returns a snapshot of every tracked object's current detection data,
    /// in priority order.
    pub fn active_objects(&self) -> Vec<Object> {
        self.registry
            .ids()
            .iter()
            .filter_map(|&id| self.registry.get(id))
            .map(|record| record.object)
            .collect()
    }

    /// Returns the number of currently tracked objects
    pub fn object_count(&self) -> usize {
        self.registry.len()
    }

    // Registers a detection as a new tracked object and returns its id
    fn register(&mut self, object: Object) -> ObjectId {
        info!(
            "tracking (x,y,z,size) = ({:.2},{:.2},{:.2},{:.2})",
            object.position.x, object.position.y, object.position.z, object.size
        );
        self.registry.insert(object, self.sort_policy.as_ref())
    }

    // Drops a tracked object; its id is never handed out again
    fn deregister(&mut self, id: ObjectId) {
        debug!("object {} dropped from tracking", id);
        self.registry.remove(id);
    }

    // Evicts every object missing for more than max_disappeared frames
    fn cleanup_disappeared(&mut self) {
        let expired: Vec<ObjectId> = self
            .registry
            .ids()
            .iter()
            .copied()
            .filter(|&id| {
                self.registry
                    .get(id)
                    .map_or(false, |record| record.disappeared > self.max_disappeared)
            })
            .collect();
        for id in expired {
            self.deregister(id);
        }
    }
}

impl fmt::Display for CentroidTracker {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Distance tolerance: {}\n\tMaximum disappeared frames: {}\n\tMinimum valid framecount: {}",
            self.dist_tol, self.max_disappeared, self.min_framecount
        )
    }
}
