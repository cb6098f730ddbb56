use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

/// Loose truthiness of a value.
///
/// Falsy values are `false`, numeric zero, `NaN`, the empty string and null
/// (`None`, JSON `null`). Everything else is truthy, including empty
/// collections.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

/// Free-function form of [`Truthy::is_truthy`].
pub fn is_truthy<T: Truthy + ?Sized>(value: &T) -> bool {
    value.is_truthy()
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! int_truthy {
    ($($t:ty),*) => {
        $(
            impl Truthy for $t {
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

int_truthy!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        // NaN compares unequal to zero, so it needs its own check
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for char {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for Cow<'_, str> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(|v| v.is_truthy())
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Box<T> {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Rc<T> {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Arc<T> {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

// Containers are objects, and objects are always truthy.
macro_rules! container_truthy {
    ($($t:ty => [$($g:ident),*]),* $(,)?) => {
        $(
            impl<$($g),*> Truthy for $t {
                fn is_truthy(&self) -> bool {
                    true
                }
            }
        )*
    };
}

container_truthy!(
    Vec<T> => [T],
    [T] => [T],
    VecDeque<T> => [T],
    HashMap<K, V> => [K, V],
    BTreeMap<K, V> => [K, V],
    HashSet<T> => [T],
    BTreeSet<T> => [T],
);

impl<T, const N: usize> Truthy for [T; N] {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl Truthy for serde_json::Number {
    fn is_truthy(&self) -> bool {
        if let Some(i) = self.as_i64() {
            i != 0
        } else if let Some(u) = self.as_u64() {
            u != 0
        } else {
            self.as_f64().is_some_and(|f| f.is_truthy())
        }
    }
}

impl Truthy for serde_json::Value {
    fn is_truthy(&self) -> bool {
        match self {
            serde_json::Value::Null => false,
            serde_json::Value::Bool(b) => *b,
            serde_json::Value::Number(n) => n.is_truthy(),
            serde_json::Value::String(s) => !s.is_empty(),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
        }
    }
}
