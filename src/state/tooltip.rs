// Per-tooltip "seen" flags, one storage key per tooltip id.
use crate::config::tooltip_key;
use crate::storage::{KeyValueStore, read_flag, write_flag};

pub fn is_dismissed(store: &dyn KeyValueStore, id: &str) -> bool {
    read_flag(store, &tooltip_key(id))
}

pub fn dismiss(store: &dyn KeyValueStore, id: &str) {
    write_flag(store, &tooltip_key(id), true);
}

pub fn clear<'a>(store: &dyn KeyValueStore, ids: impl IntoIterator<Item = &'a str>) {
    for id in ids {
        write_flag(store, &tooltip_key(id), false);
    }
}
