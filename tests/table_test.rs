use lox::mach::{Heap, Table, Value};

#[test]
fn test_interned_keys() {
    let mut heap = Heap::new();
    let mut t = Table::new();
    let a = heap.intern("alpha");
    let b = heap.intern("beta");
    assert!(t.set(a, Value::Number(1.0)));
    assert!(t.set(b, Value::Bool(false)));
    assert_eq!(t.get(heap.intern("alpha")), Some(Value::Number(1.0)));
    assert_eq!(t.get(b), Some(Value::Bool(false)));
    assert_eq!(t.get(heap.intern("gamma")), None);
}

#[test]
fn test_delete_and_reinsert() {
    let mut heap = Heap::new();
    let mut t = Table::new();
    let keys: Vec<_> = (0..20).map(|i| heap.intern(&format!("k{}", i))).collect();
    for (i, k) in keys.iter().enumerate() {
        t.set(*k, Value::Number(i as f64));
    }
    for k in keys.iter().step_by(2) {
        assert!(t.delete(*k));
    }
    assert!(!t.delete(keys[0]));
    for (i, k) in keys.iter().enumerate() {
        let expect = if i % 2 == 0 { None } else { Some(Value::Number(i as f64)) };
        assert_eq!(t.get(*k), expect);
    }
    assert!(t.set(keys[0], Value::Nil));
    assert_eq!(t.get(keys[0]), Some(Value::Nil));
    assert_eq!(t.iter().count(), 11);
}

#[test]
fn test_growth() {
    let mut heap = Heap::new();
    let mut t = Table::new();
    assert_eq!(t.capacity(), 0);
    for i in 0..7 {
        t.set(heap.intern(&i.to_string()), Value::Nil);
    }
    assert_eq!(t.capacity(), 16);
    assert!(t.len() as f64 <= t.capacity() as f64 * 0.75);
}

#[test]
fn test_add_all() {
    let mut heap = Heap::new();
    let mut from = Table::new();
    let mut to = Table::new();
    let a = heap.intern("a");
    let b = heap.intern("b");
    from.set(a, Value::Number(1.0));
    from.set(b, Value::Number(2.0));
    from.delete(b);
    to.set(a, Value::Nil);
    to.add_all(&from);
    assert_eq!(to.get(a), Some(Value::Number(1.0)));
    assert_eq!(to.get(b), None);
}

#[test]
fn test_find_string_through_heap() {
    let mut heap = Heap::new();
    let a = heap.intern("same");
    let b = heap.take_string(format!("{}{}", "sa", "me"));
    assert_eq!(a, b);
    assert_eq!(heap.object_count(), 1);
    assert_eq!(heap.strings().get(a), Some(Value::Nil));
}

#[test]
fn test_churn_never_exceeds_distinct_keys() {
    let mut heap = Heap::new();
    let mut t = Table::new();
    let keys: Vec<_> = (0..30).map(|i| heap.intern(&format!("churn{}", i))).collect();
    for round in 0..50 {
        for k in keys.iter().skip(round % 3).step_by(2) {
            t.delete(*k);
        }
        for k in keys.iter() {
            t.set(*k, Value::Number(round as f64));
        }
        assert!(t.len() <= keys.len());
    }
    assert_eq!(t.iter().count(), keys.len());
}
