//! Export contents of `mot` folder
mod association;
mod centroid_tracker;
mod mot_errors;
mod object;
mod registry;

pub use self::{centroid_tracker::*, mot_errors::*, object::*};
