use super::{Heap, Value};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Instruction semantics that produce a value from operands

pub struct Operation {}

impl Operation {
    pub fn negate(val: Value) -> Result<Value> {
        match val {
            Value::Number(n) => Ok(Value::Number(-n)),
            _ => Err(error!(TypeMismatch; "Operand must be a number.")),
        }
    }

    pub fn not(val: Value) -> Value {
        Value::Bool(val.is_falsey())
    }

    pub fn equal(lhs: Value, rhs: Value) -> Value {
        Value::Bool(lhs == rhs)
    }

    pub fn sum(lhs: Value, rhs: Value, heap: &mut Heap) -> Result<Value> {
        use Value::*;
        match (lhs, rhs) {
            (Number(l), Number(r)) => Ok(Number(l + r)),
            (Obj(l), Obj(r)) => {
                let concat = match (heap.as_str(l), heap.as_str(r)) {
                    (Some(l), Some(r)) => {
                        let mut s = String::with_capacity(l.len() + r.len());
                        s.push_str(l);
                        s.push_str(r);
                        s
                    }
                    _ => return Err(error!(InternalError; "Dangling object reference.")),
                };
                Ok(Obj(heap.take_string(concat)))
            }
            _ => Err(error!(TypeMismatch; "Operands must be two numbers or two strings.")),
        }
    }

    pub fn subtract(lhs: Value, rhs: Value) -> Result<Value> {
        let (l, r) = Operation::numbers(lhs, rhs)?;
        Ok(Value::Number(l - r))
    }

    pub fn multiply(lhs: Value, rhs: Value) -> Result<Value> {
        let (l, r) = Operation::numbers(lhs, rhs)?;
        Ok(Value::Number(l * r))
    }

    pub fn divide(lhs: Value, rhs: Value) -> Result<Value> {
        let (l, r) = Operation::numbers(lhs, rhs)?;
        Ok(Value::Number(l / r))
    }

    pub fn greater(lhs: Value, rhs: Value) -> Result<Value> {
        let (l, r) = Operation::numbers(lhs, rhs)?;
        Ok(Value::Bool(l > r))
    }

    pub fn less(lhs: Value, rhs: Value) -> Result<Value> {
        let (l, r) = Operation::numbers(lhs, rhs)?;
        Ok(Value::Bool(l < r))
    }

    fn numbers(lhs: Value, rhs: Value) -> Result<(f64, f64)> {
        match (lhs, rhs) {
            (Value::Number(l), Value::Number(r)) => Ok((l, r)),
            _ => Err(error!(TypeMismatch; "Operands must be numbers.")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_arithmetic() {
        let n = Value::Number;
        assert_eq!(Operation::subtract(n(5.0), n(3.0)).unwrap(), n(2.0));
        assert_eq!(Operation::divide(n(1.0), n(4.0)).unwrap(), n(0.25));
        assert_eq!(Operation::negate(n(0.5)).unwrap(), n(-0.5));
        let e = Operation::multiply(n(1.0), Value::Nil).unwrap_err();
        assert_eq!(e.code(), ErrorCode::TypeMismatch);
        assert_eq!(e.text(), "Operands must be numbers.");
    }

    #[test]
    fn test_divide_by_zero_is_infinite() {
        let v = Operation::divide(Value::Number(1.0), Value::Number(0.0)).unwrap();
        assert_eq!(v, Value::Number(f64::INFINITY));
    }

    #[test]
    fn test_sum_strings_interns() {
        let mut heap = Heap::new();
        let a = Value::Obj(heap.intern("foo"));
        let b = Value::Obj(heap.intern("bar"));
        let joined = heap.intern("foobar");
        assert_eq!(Operation::sum(a, b, &mut heap).unwrap(), Value::Obj(joined));
        assert_eq!(heap.object_count(), 3);
        let e = Operation::sum(a, Value::Number(1.0), &mut heap).unwrap_err();
        assert_eq!(e.text(), "Operands must be two numbers or two strings.");
    }
}
