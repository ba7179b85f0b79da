//! Map snapshot shared with concurrent readers.

use std::sync::{Arc, RwLock};

use dhwani_map::GlobalMap;
use log::warn;

/// Latest composed map, swapped in whole between merges
pub type SharedMap = Arc<RwLock<GlobalMap>>;

/// Create a handle holding an all-free map
pub fn shared_map(width: usize, height: usize) -> SharedMap {
    Arc::new(RwLock::new(GlobalMap::empty(width, height)))
}

/// Replace the shared map under a single write lock.
///
/// Returns `false` if the lock was poisoned and the map was not published.
pub fn publish(shared: &SharedMap, map: GlobalMap) -> bool {
    match shared.write() {
        Ok(mut guard) => {
            *guard = map;
            true
        }
        Err(e) => {
            warn!("ControlLoop: failed to publish map snapshot: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dhwani_map::GridCoord;

    #[test]
    fn test_publish_replaces_whole_map() {
        let shared = shared_map(2, 2);
        let map = GlobalMap::from_cells(2, 2, vec![0, 1, 1, 0]).unwrap();

        assert!(publish(&shared, map.clone()));
        let read = shared.read().unwrap();
        assert_eq!(*read, map);
        assert!(read.is_occupied(GridCoord::new(1, 0)));
    }
}
