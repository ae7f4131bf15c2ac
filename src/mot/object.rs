use std::cmp::Ordering;

use crate::utils::{euclidean_distance, Point3};

/// Identifier assigned to a tracked object at registration.
/// Monotonically increasing, never reused within a tracker's lifetime.
pub type ObjectId = usize;

/// One detection produced by the vision front-end for a single frame:
/// a centroid in frame-local 3-D coordinates plus a scalar size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Object {
    pub position: Point3,
    pub size: f32,
}

impl Object {
    pub fn new(_x: f32, _y: f32, _z: f32, _size: f32) -> Self {
        Object {
            position: Point3::new(_x, _y, _z),
            size: _size,
        }
    }
    /// Euclidean distance between the centroids of two objects.
    /// Size is intentionally not part of the metric.
    pub fn distance_to(&self, b: &Object) -> f32 {
        euclidean_distance(&self.position, &b.position)
    }
}

/// Total order over object snapshots deciding the priority sequence.
/// `Ordering::Less` places the first argument ahead of the second, so the
/// head of the sequence is the next target candidate.
pub type SortPolicy = Box<dyn Fn(&Object, &Object) -> Ordering + Send + Sync>;

/// Default priority policy: biggest object first.
pub fn largest_first(a: &Object, b: &Object) -> Ordering {
    b.size.partial_cmp(&a.size).unwrap_or(Ordering::Equal)
}
