//! Centroid based multi object tracking with one-shot target selection.
//!
//! The tracker consumes one unordered list of detections per frame and
//! maintains a registry of persistent objects with stable identifiers,
//! ordered by a caller-supplied priority policy. `top_valid()` hands out
//! each sufficiently-confirmed object exactly once, which is what a
//! downstream actuator (e.g. a weeding implement) needs.
//!
//! The tracker is a plain synchronous state machine: no I/O, no background
//! work. It is not internally synchronized; drive updates and queries from
//! one thread, or wrap the whole tracker in a single mutex.
pub mod mot;
pub mod utils;
