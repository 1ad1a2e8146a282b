//! Cache Value Module
//!
//! Tagged union of everything an adapter can hold, plus the typed
//! arithmetic behind Incr/Decr.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{CacheError, Result};

// == Cache Value ==
/// A value stored in the cache.
///
/// The numeric variants keep their width and signedness through Incr/Decr.
/// `Json` is the catch-all for arbitrary structured values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CacheValue {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Bool(bool),
    Str(String),
    Bytes(Vec<u8>),
    Json(serde_json::Value),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Incr,
    Decr,
}

impl Step {
    fn delta(self) -> f64 {
        match self {
            Step::Incr => 1.0,
            Step::Decr => -1.0,
        }
    }
}

macro_rules! step_int {
    ($n:ident, $op:expr) => {
        match $op {
            Step::Incr => $n.checked_add(1),
            Step::Decr => $n.checked_sub(1),
        }
        .map(|next| *$n = next)
    };
}

impl CacheValue {
    // == Structured Values ==
    /// Encodes any serializable value into the `Json` catch-all.
    pub fn from_serializable<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(CacheValue::Json(serde_json::to_value(value)?))
    }

    /// Decodes the stored value into `T`.
    ///
    /// Works for every variant, so `Str` decodes into `String`, `U32` into
    /// `u32`, and so on.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(self.to_json())?)
    }

    /// Converts the payload into a JSON value, dropping the kind tag.
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::json;
        match self {
            CacheValue::I8(n) => json!(n),
            CacheValue::I16(n) => json!(n),
            CacheValue::I32(n) => json!(n),
            CacheValue::I64(n) => json!(n),
            CacheValue::U8(n) => json!(n),
            CacheValue::U16(n) => json!(n),
            CacheValue::U32(n) => json!(n),
            CacheValue::U64(n) => json!(n),
            CacheValue::F32(n) => json!(n),
            CacheValue::F64(n) => json!(n),
            CacheValue::Bool(b) => json!(b),
            CacheValue::Str(s) => json!(s),
            CacheValue::Bytes(b) => json!(b),
            CacheValue::Json(v) => v.clone(),
        }
    }

    // == Kind ==
    /// Short name of the stored kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            CacheValue::I8(_) => "i8",
            CacheValue::I16(_) => "i16",
            CacheValue::I32(_) => "i32",
            CacheValue::I64(_) => "i64",
            CacheValue::U8(_) => "u8",
            CacheValue::U16(_) => "u16",
            CacheValue::U32(_) => "u32",
            CacheValue::U64(_) => "u64",
            CacheValue::F32(_) => "f32",
            CacheValue::F64(_) => "f64",
            CacheValue::Bool(_) => "bool",
            CacheValue::Str(_) => "str",
            CacheValue::Bytes(_) => "bytes",
            CacheValue::Json(_) => "json",
        }
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(
            self,
            CacheValue::Bool(_) | CacheValue::Str(_) | CacheValue::Bytes(_) | CacheValue::Json(_)
        )
    }

    pub fn is_unsigned(&self) -> bool {
        matches!(
            self,
            CacheValue::U8(_) | CacheValue::U16(_) | CacheValue::U32(_) | CacheValue::U64(_)
        )
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            CacheValue::Str(s) => Some(s),
            _ => None,
        }
    }

    // == Arithmetic ==
    /// Adds one in place, keeping the numeric kind.
    ///
    /// `key` is only used to label the error. On error the value is unchanged.
    pub fn incr(&mut self, key: &str) -> Result<()> {
        self.step(key, Step::Incr)
    }

    /// Subtracts one in place, keeping the numeric kind.
    ///
    /// Unsigned kinds fail with `Underflow` only when already at zero.
    pub fn decr(&mut self, key: &str) -> Result<()> {
        self.step(key, Step::Decr)
    }

    fn step(&mut self, key: &str, op: Step) -> Result<()> {
        let kind = self.kind();
        let stepped = match self {
            CacheValue::I8(n) => step_int!(n, op),
            CacheValue::I16(n) => step_int!(n, op),
            CacheValue::I32(n) => step_int!(n, op),
            CacheValue::I64(n) => step_int!(n, op),
            CacheValue::U8(n) => step_int!(n, op),
            CacheValue::U16(n) => step_int!(n, op),
            CacheValue::U32(n) => step_int!(n, op),
            CacheValue::U64(n) => step_int!(n, op),
            CacheValue::F32(n) => {
                *n += op.delta() as f32;
                Some(())
            }
            CacheValue::F64(n) => {
                *n += op.delta();
                Some(())
            }
            CacheValue::Bool(_)
            | CacheValue::Str(_)
            | CacheValue::Bytes(_)
            | CacheValue::Json(_) => {
                return Err(CacheError::TypeMismatch {
                    key: key.to_string(),
                    kind,
                })
            }
        };

        stepped.ok_or_else(|| {
            if op == Step::Decr && self.is_unsigned() {
                CacheError::Underflow {
                    key: key.to_string(),
                    kind,
                }
            } else {
                CacheError::Overflow {
                    key: key.to_string(),
                    kind,
                }
            }
        })
    }
}

// == Conversions ==
macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for CacheValue {
                fn from(value: $ty) -> Self {
                    CacheValue::$variant(value)
                }
            }
        )*
    };
}

impl_from! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    bool => Bool,
    String => Str,
    Vec<u8> => Bytes,
    serde_json::Value => Json,
}

impl From<&str> for CacheValue {
    fn from(value: &str) -> Self {
        CacheValue::Str(value.to_string())
    }
}
