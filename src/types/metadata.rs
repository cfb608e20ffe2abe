//! Ordered key/value metadata attached to every reason.
//!
//! [`Metadata`] keeps entries in insertion order so that rendered chains and
//! inspected reasons read in the order the producer attached them.

use core::fmt::{self, Display};

use crate::types::ErrorVec;

/// A single metadata value.
///
/// Covers the shapes producers attach in practice: flags, counters, sizes,
/// measurements, free text and lists of those.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataValue {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
    List(Vec<MetadataValue>),
}

impl MetadataValue {
    /// Returns the text payload, if this is a [`MetadataValue::Text`].
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as a signed integer when it fits.
    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            Self::UInt(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Returns the value as an unsigned integer when it fits.
    #[inline]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::UInt(v) => Some(*v),
            Self::Int(v) => u64::try_from(*v).ok(),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Int(v) => write!(f, "{}", v),
            Self::UInt(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Text(s) => f.write_str(s),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            },
        }
    }
}

macro_rules! impl_from_for_metadata_value {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for MetadataValue {
                #[inline]
                fn from(value: $source) -> Self {
                    Self::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

impl_from_for_metadata_value!(Int as i64: i8, i16, i32, i64);
impl_from_for_metadata_value!(UInt as u64: u8, u16, u32, u64);
impl_from_for_metadata_value!(Float as f64: f32, f64);
impl_from_for_metadata_value!(Bool as bool: bool);
impl_from_for_metadata_value!(Text as String: String, &str, Box<str>);

impl From<usize> for MetadataValue {
    #[inline]
    fn from(value: usize) -> Self {
        Self::UInt(value as u64)
    }
}

impl From<isize> for MetadataValue {
    #[inline]
    fn from(value: isize) -> Self {
        Self::Int(value as i64)
    }
}

impl<V: Into<MetadataValue>> From<Vec<V>> for MetadataValue {
    #[inline]
    fn from(values: Vec<V>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

/// Insertion-ordered mapping of string keys to [`MetadataValue`]s.
///
/// Inserting a key that is already present replaces the value but keeps the
/// position of the first insertion.
///
/// # Examples
///
/// ```
/// use trace_rail::Metadata;
///
/// let meta = Metadata::new()
///     .with("table", "users")
///     .with("rows", 3u32)
///     .with("table", "accounts");
///
/// let keys: Vec<&str> = meta.keys().collect();
/// assert_eq!(keys, ["table", "rows"]);
/// assert_eq!(meta.get("table").and_then(|v| v.as_str()), Some("accounts"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    entries: ErrorVec<(String, MetadataValue)>,
}

impl Metadata {
    /// Creates an empty mapping.
    #[inline]
    pub fn new() -> Self {
        Self { entries: ErrorVec::new() }
    }

    /// Builder form of [`insert`](Self::insert).
    #[inline]
    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<MetadataValue>,
    {
        self.insert(key, value);
        self
    }

    /// Inserts or replaces `key`, returning the previous value.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<MetadataValue>
    where
        K: Into<String>,
        V: Into<MetadataValue>,
    {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(core::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            },
        }
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetadataValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl<K, V> FromIterator<(K, V)> for Metadata
where
    K: Into<String>,
    V: Into<MetadataValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut meta = Self::new();
        meta.extend(iter);
        meta
    }
}

impl<K, V> Extend<(K, V)> for Metadata
where
    K: Into<String>,
    V: Into<MetadataValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl Display for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (k, v)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", k, v)?;
        }
        f.write_str("}")
    }
}
