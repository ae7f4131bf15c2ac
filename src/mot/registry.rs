use std::cmp::Ordering;
use std::collections::HashMap;

use crate::mot::{Object, ObjectId};

/// One persistent tracked object and its lifecycle counters.
#[derive(Debug, Clone)]
pub(crate) struct TrackedObject {
    /// Latest matched detection snapshot
    pub object: Object,
    /// Consecutive frames this object was matched in; reset to 0 on a miss
    pub framecount: usize,
    /// Consecutive frames this object went unmatched; reset to 0 on a match
    pub disappeared: usize,
    /// One-shot consumption flag, set by `top_valid()` and never cleared
    pub uprooted: bool,
}

/// Owns the map from identifier to tracked object together with the
/// priority-ordered id list. All mutation goes through this type so the
/// two structures cannot drift apart: every id in the list has exactly
/// one record in the map and vice versa.
pub(crate) struct Registry {
    next_id: ObjectId,
    records: HashMap<ObjectId, TrackedObject>,
    id_list: Vec<ObjectId>,
}

impl Registry {
    pub fn new() -> Self {
        Registry {
            next_id: 0,
            records: HashMap::new(),
            id_list: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Live identifiers in priority order.
    pub fn ids(&self) -> &[ObjectId] {
        &self.id_list
    }

    pub fn get(&self, id: ObjectId) -> Option<&TrackedObject> {
        self.records.get(&id)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut TrackedObject> {
        self.records.get_mut(&id)
    }

    /// Mutable access to every record, in no particular order.
    pub fn records_mut(&mut self) -> impl Iterator<Item = &mut TrackedObject> {
        self.records.values_mut()
    }

    /// Registers a fresh object under the next identifier. The id is placed
    /// into the ordered list by insertion sort against `policy`: it lands
    /// immediately before the first entry that does not sort ahead of it.
    pub fn insert(
        &mut self,
        object: Object,
        policy: &(dyn Fn(&Object, &Object) -> Ordering + Send + Sync),
    ) -> ObjectId {
        let id = self.next_id;
        self.next_id += 1;

        let pos = self
            .id_list
            .iter()
            .position(|existing| policy(&self.records[existing].object, &object) != Ordering::Less)
            .unwrap_or(self.id_list.len());
        self.id_list.insert(pos, id);

        self.records.insert(
            id,
            TrackedObject {
                object,
                framecount: 1,
                disappeared: 0,
                uprooted: false,
            },
        );
        id
    }

    /// Removes a record and its id-list entry. Returns false when the id
    /// was not present; the id is never handed out again either way.
    pub fn remove(&mut self, id: ObjectId) -> bool {
        let existed = self.records.remove(&id).is_some();
        if existed {
            self.id_list.retain(|&x| x != id);
        }
        existed
    }
}
