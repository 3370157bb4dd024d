use super::{ObjRef, Table, Value};

/// ## Heap objects
///
/// Every object lives in the [`Heap`] arena that created it.
/// Dropping the heap frees all of them at once.

#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    String(ObjString),
}

impl Object {
    pub fn as_string(&self) -> Option<&ObjString> {
        match self {
            Object::String(s) => Some(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjString {
    chars: Box<str>,
    hash: u32,
}

impl ObjString {
    pub fn as_str(&self) -> &str {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn hash(&self) -> u32 {
        self.hash
    }
}

/// 32-bit FNV-1a.
pub fn hash_string(bytes: &[u8]) -> u32 {
    let mut hash: u32 = 2_166_136_261;
    for byte in bytes {
        hash ^= *byte as u32;
        hash = hash.wrapping_mul(16_777_619);
    }
    hash
}

/// ## Object arena and string intern pool

#[derive(Debug, Default)]
pub struct Heap {
    objects: Vec<Object>,
    strings: Table,
}

impl Heap {
    pub fn new() -> Heap {
        Heap::default()
    }

    /// Intern a copy of `chars`.
    pub fn intern(&mut self, chars: &str) -> ObjRef {
        let hash = hash_string(chars.as_bytes());
        match self.strings.find_string(chars, hash, &self.objects) {
            Some(interned) => interned,
            None => self.allocate_string(chars.into(), hash),
        }
    }

    /// Intern `chars`, taking ownership of the buffer. The buffer is
    /// dropped when an equal string is already interned.
    pub fn take_string(&mut self, chars: String) -> ObjRef {
        let hash = hash_string(chars.as_bytes());
        match self.strings.find_string(&chars, hash, &self.objects) {
            Some(interned) => interned,
            None => self.allocate_string(chars.into_boxed_str(), hash),
        }
    }

    fn allocate_string(&mut self, chars: Box<str>, hash: u32) -> ObjRef {
        let obj = ObjRef::new(self.objects.len(), hash);
        self.objects.push(Object::String(ObjString { chars, hash }));
        self.strings.set(obj, Value::Nil);
        log::trace!("allocate string #{} hash={:08x}", obj.index(), hash);
        obj
    }

    pub fn get(&self, obj: ObjRef) -> Option<&Object> {
        self.objects.get(obj.index())
    }

    pub fn as_str(&self, obj: ObjRef) -> Option<&str> {
        self.get(obj)
            .and_then(Object::as_string)
            .map(ObjString::as_str)
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn strings(&self) -> &Table {
        &self.strings
    }

    /// Free every object. Handles given out earlier become dangling.
    pub fn clear(&mut self) {
        log::debug!("free {} objects", self.objects.len());
        self.objects.clear();
        self.strings = Table::new();
    }

    pub fn display(&self, value: Value) -> ValueDisplay<'_> {
        ValueDisplay { heap: self, value }
    }
}

/// Renders a [`Value`] with access to the heap it points into.
pub struct ValueDisplay<'a> {
    heap: &'a Heap,
    value: Value,
}

impl<'a> std::fmt::Display for ValueDisplay<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.value {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Nil => write!(f, "nil"),
            Value::Number(n) => write!(f, "{}", n),
            Value::Obj(obj) => match self.heap.get(obj) {
                Some(Object::String(s)) => write!(f, "{}", s.as_str()),
                None => write!(f, "<dangling #{}>", obj.index()),
            },
        }
    }
}
