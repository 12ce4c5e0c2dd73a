use serde::de::DeserializeOwned;

use super::{KeyValueStore, StorageResult};
use crate::contact::ContactMessage;
use crate::state::{Favorites, FilterState};

/// Decodes a JSON entry. Absent or malformed values decode to `None`.
fn read_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(key, ?err, "ignoring malformed stored value");
            None
        }
    }
}

pub fn load_favorites(store: &dyn KeyValueStore, key: &str) -> Favorites {
    read_json::<Vec<String>>(store, key)
        .unwrap_or_default()
        .into_iter()
        .filter(|id| !id.is_empty())
        .collect()
}

pub fn save_favorites(
    store: &mut dyn KeyValueStore,
    key: &str,
    favorites: &Favorites,
) -> StorageResult<()> {
    let encoded = serde_json::to_string(&favorites.to_vec())?;
    store.set(key, &encoded)
}

pub fn load_last_filter(store: &dyn KeyValueStore, key: &str) -> Option<FilterState> {
    read_json(store, key)
}

pub fn save_last_filter(
    store: &mut dyn KeyValueStore,
    key: &str,
    filter: &FilterState,
) -> StorageResult<()> {
    let encoded = serde_json::to_string(filter)?;
    store.set(key, &encoded)
}

pub fn load_contact_log(store: &dyn KeyValueStore, key: &str) -> Vec<ContactMessage> {
    read_json(store, key).unwrap_or_default()
}

/// Read-append-write of the message log. Returns the new log length.
pub fn append_contact_message(
    store: &mut dyn KeyValueStore,
    key: &str,
    message: ContactMessage,
) -> StorageResult<usize> {
    let mut log = load_contact_log(store, key);
    log.push(message);
    let encoded = serde_json::to_string(&log)?;
    store.set(key, &encoded)?;
    Ok(log.len())
}

/// Increments a decimal counter entry; unreadable values count as zero.
pub fn increment_counter(store: &mut dyn KeyValueStore, key: &str) -> StorageResult<u64> {
    let current = store.get(key).map_or(0, |raw| parse_leading_integer(&raw));
    let next = current.saturating_add(1);
    store.set(key, &next.to_string())?;
    Ok(next)
}

fn parse_leading_integer(raw: &str) -> u64 {
    let digits: String = raw
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or(0)
}
