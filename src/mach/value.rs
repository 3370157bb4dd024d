/// ## Runtime values
///
/// Scalars are stored inline. Only `Obj` refers to heap data, and the
/// [`Heap`](super::Heap) that handed out the reference owns it.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Bool(bool),
    Nil,
    Number(f64),
    Obj(ObjRef),
}

impl Default for Value {
    fn default() -> Self {
        Value::Nil
    }
}

impl Value {
    /// Only `nil` and `false` are falsey.
    pub fn is_falsey(&self) -> bool {
        matches!(self, Value::Nil | Value::Bool(false))
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_obj(&self) -> Option<ObjRef> {
        match self {
            Value::Obj(r) => Some(*r),
            _ => None,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<ObjRef> for Value {
    fn from(r: ObjRef) -> Self {
        Value::Obj(r)
    }
}

/// Handle to an object in a [`Heap`](super::Heap).
///
/// Two handles are equal only when they name the same object. The
/// object's hash travels with the handle so tables can probe without
/// reaching into the heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjRef {
    index: usize,
    hash: u32,
}

impl ObjRef {
    pub(crate) fn new(index: usize, hash: u32) -> ObjRef {
        ObjRef { index, hash }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn hash(&self) -> u32 {
        self.hash
    }
}
