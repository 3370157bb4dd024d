use super::memory::grow_capacity;
use super::{ObjRef, Object, Value};

const TABLE_MAX_LOAD: f64 = 0.75;

/// Written into the value of a deleted slot.
const TOMBSTONE: Value = Value::Bool(true);

#[derive(Debug, Clone, Copy, PartialEq)]
struct Entry {
    key: Option<ObjRef>,
    value: Value,
}

impl Default for Entry {
    fn default() -> Self {
        Entry {
            key: None,
            value: Value::Nil,
        }
    }
}

impl Entry {
    fn is_empty(&self) -> bool {
        self.key.is_none() && self.value == Value::Nil
    }
}

/// ## Open addressing hash table keyed by interned strings
///
/// Linear probing. Deleted slots become tombstones so that keys further
/// along a probe sequence stay reachable. `count` includes tombstones,
/// which keeps the load factor honest.

#[derive(Debug, Default, Clone)]
pub struct Table {
    count: usize,
    entries: Vec<Entry>,
}

impl Table {
    pub fn new() -> Table {
        Table::default()
    }

    /// Occupied slots plus tombstones.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, key: ObjRef) -> Option<Value> {
        if self.count == 0 {
            return None;
        }
        let entry = &self.entries[find_entry(&self.entries, key)];
        entry.key.map(|_| entry.value)
    }

    /// Returns true when `key` was not already present.
    pub fn set(&mut self, key: ObjRef, value: Value) -> bool {
        if (self.count + 1) as f64 > self.capacity() as f64 * TABLE_MAX_LOAD {
            self.adjust_capacity(grow_capacity(self.capacity()));
        }
        let index = find_entry(&self.entries, key);
        let entry = &mut self.entries[index];
        let is_new_key = entry.key.is_none();
        if entry.is_empty() {
            self.count += 1;
        }
        entry.key = Some(key);
        entry.value = value;
        is_new_key
    }

    pub fn delete(&mut self, key: ObjRef) -> bool {
        if self.count == 0 {
            return false;
        }
        let index = find_entry(&self.entries, key);
        let entry = &mut self.entries[index];
        if entry.key.is_none() {
            return false;
        }
        entry.key = None;
        entry.value = TOMBSTONE;
        true
    }

    pub fn add_all(&mut self, from: &Table) {
        for (key, value) in from.iter() {
            self.set(key, value);
        }
    }

    /// Live entries in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (ObjRef, Value)> + '_ {
        self.entries
            .iter()
            .filter_map(|entry| entry.key.map(|key| (key, entry.value)))
    }

    /// Find an interned string by content. This is the only lookup that
    /// compares characters instead of identity.
    pub fn find_string(&self, chars: &str, hash: u32, objects: &[Object]) -> Option<ObjRef> {
        if self.count == 0 {
            return None;
        }
        let capacity = self.capacity();
        let mut index = hash as usize % capacity;
        loop {
            let entry = &self.entries[index];
            match entry.key {
                None if entry.is_empty() => return None,
                None => {}
                Some(key) => {
                    if key.hash() == hash {
                        let found = objects
                            .get(key.index())
                            .and_then(Object::as_string)
                            .map_or(false, |s| s.as_str() == chars);
                        if found {
                            return Some(key);
                        }
                    }
                }
            }
            index = (index + 1) % capacity;
        }
    }

    fn adjust_capacity(&mut self, capacity: usize) {
        let mut entries = vec![Entry::default(); capacity];
        let mut count = 0;
        for entry in &self.entries {
            if let Some(key) = entry.key {
                let dest = find_entry(&entries, key);
                entries[dest] = *entry;
                count += 1;
            }
        }
        log::trace!(
            "table resize {} -> {} ({} live)",
            self.entries.len(),
            capacity,
            count
        );
        self.entries = entries;
        self.count = count;
    }
}

/// Slot for `key`: its own slot if present, else the first tombstone on
/// the probe sequence, else the empty slot that ended the probe.
fn find_entry(entries: &[Entry], key: ObjRef) -> usize {
    let capacity = entries.len();
    let mut index = key.hash() as usize % capacity;
    let mut tombstone = None;
    loop {
        let entry = &entries[index];
        match entry.key {
            None if entry.is_empty() => return tombstone.unwrap_or(index),
            None => {
                if tombstone.is_none() {
                    tombstone = Some(index);
                }
            }
            Some(k) if k == key => return index,
            Some(_) => {}
        }
        index = (index + 1) % capacity;
    }
}
