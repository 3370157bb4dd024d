/// ## Growth policy for every dynamic array in the machine
///
/// Capacity starts at 8 and doubles. Growth reserves the new capacity
/// up front; existing elements stay where they are until the new
/// buffer is fully populated.

const MIN_CAPACITY: usize = 8;

pub fn grow_capacity(capacity: usize) -> usize {
    if capacity < MIN_CAPACITY {
        MIN_CAPACITY
    } else {
        capacity * 2
    }
}

/// Make room for one more element using [`grow_capacity`].
pub fn reserve_one<T>(vec: &mut Vec<T>) {
    if vec.len() == vec.capacity() {
        let additional = grow_capacity(vec.capacity()) - vec.len();
        vec.reserve_exact(additional);
    }
}
