//! Keys that reset an errored boundary when they change.
//!
//! Comparison is by identity, not by deep equality: primitives compare by
//! value, floats follow `Object.is` rules (`NaN` equals `NaN`, `0.0` differs
//! from `-0.0`), and [`ResetKey::by_ref`] keys compare by pointer. Two
//! structurally equal but separately allocated values therefore count as a
//! change.
//!
//! # Examples
//!
//! ```
//! use std::rc::Rc;
//! use render_boundary::{reset_keys, ResetKey, ResetKeys};
//!
//! let user = Rc::new(vec![1, 2, 3]);
//! let prev = reset_keys![1, "profile", ResetKey::by_ref(user.clone())];
//!
//! assert!(!prev.has_changed(&reset_keys![1, "profile", ResetKey::by_ref(user)]));
//! assert!(prev.has_changed(&reset_keys![1, "profile", ResetKey::by_ref(Rc::new(vec![1, 2, 3]))]));
//! assert!(prev.has_changed(&reset_keys![1, "profile"]));
//! ```
use std::any::Any;
use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

/// A single comparison key.
#[derive(Clone, Debug)]
pub enum ResetKey {
    Unit,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Char(char),
    Str(Rc<str>),
    Ref(RefKey),
}

/// Pointer-identity key created by [`ResetKey::by_ref`].
#[derive(Clone)]
pub struct RefKey(Rc<dyn Any>);

impl RefKey {
    #[inline]
    fn addr(&self) -> *const () {
        Rc::as_ptr(&self.0) as *const ()
    }
}

impl fmt::Debug for RefKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RefKey({:p})", self.addr())
    }
}

impl ResetKey {
    /// Tracks a shared value by allocation identity.
    #[inline]
    pub fn by_ref<T: Any>(value: Rc<T>) -> Self {
        Self::Ref(RefKey(value))
    }

    /// Identity comparison between two keys.
    ///
    /// Keys of different variants are never the same, so `1i32` and `1u32`
    /// differ.
    pub fn same(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Unit, Self::Unit) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::UInt(a), Self::UInt(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => {
                (a.is_nan() && b.is_nan()) || a.to_bits() == b.to_bits()
            },
            (Self::Char(a), Self::Char(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Ref(a), Self::Ref(b)) => a.addr() == b.addr(),
            _ => false,
        }
    }
}

macro_rules! impl_from_key {
    ($variant:ident($target:ty): $($source:ty),+) => {
        $(
            impl From<$source> for ResetKey {
                #[inline]
                fn from(value: $source) -> Self {
                    Self::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

impl_from_key!(Bool(bool): bool);
impl_from_key!(Int(i64): i8, i16, i32, i64);
impl_from_key!(UInt(u64): u8, u16, u32, u64);
impl_from_key!(Float(f64): f32, f64);
impl_from_key!(Char(char): char);
impl_from_key!(Str(Rc<str>): &str, String, Rc<str>);

impl From<()> for ResetKey {
    #[inline]
    fn from(_: ()) -> Self {
        Self::Unit
    }
}

impl From<isize> for ResetKey {
    #[inline]
    fn from(value: isize) -> Self {
        Self::Int(value as i64)
    }
}

impl From<usize> for ResetKey {
    #[inline]
    fn from(value: usize) -> Self {
        Self::UInt(value as u64)
    }
}

/// Ordered list of [`ResetKey`]s supplied on each render pass.
#[derive(Clone, Debug, Default)]
pub struct ResetKeys(SmallVec<[ResetKey; 4]>);

impl ResetKeys {
    #[inline]
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    #[inline]
    pub fn push<K: Into<ResetKey>>(&mut self, key: K) {
        self.0.push(key.into());
    }

    #[inline]
    pub fn with<K: Into<ResetKey>>(mut self, key: K) -> Self {
        self.push(key);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[ResetKey] {
        &self.0
    }

    /// Returns `true` if `next` differs in length or in any position.
    #[inline]
    pub fn has_changed(&self, next: &ResetKeys) -> bool {
        keys_changed(self.as_slice(), next.as_slice())
    }
}

/// Length check first, then positional identity.
pub fn keys_changed(prev: &[ResetKey], next: &[ResetKey]) -> bool {
    prev.len() != next.len() || prev.iter().zip(next).any(|(a, b)| !a.same(b))
}

impl FromIterator<ResetKey> for ResetKeys {
    fn from_iter<I: IntoIterator<Item = ResetKey>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<ResetKey>> for ResetKeys {
    #[inline]
    fn from(keys: Vec<ResetKey>) -> Self {
        Self(SmallVec::from_vec(keys))
    }
}

impl<const N: usize> From<[ResetKey; N]> for ResetKeys {
    #[inline]
    fn from(keys: [ResetKey; N]) -> Self {
        keys.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a ResetKeys {
    type Item = &'a ResetKey;
    type IntoIter = std::slice::Iter<'a, ResetKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
