use crate::{Error, Result};

/// A column value paired with an explicit validity flag.
///
/// When `valid` is false the payload is meaningless and every accessor
/// treats the column as holding no value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Null<T> {
    pub value: T,
    pub valid: bool,
}

pub type NullString = Null<String>;
pub type NullInt64 = Null<i64>;
pub type NullInt32 = Null<i32>;
pub type NullInt16 = Null<i16>;
pub type NullByte = Null<u8>;
pub type NullBool = Null<bool>;
pub type NullFloat64 = Null<f64>;

#[cfg(feature = "chrono")]
pub type NullTime = Null<chrono::DateTime<chrono::Utc>>;

impl<T> Null<T> {
    pub const fn new(value: T) -> Self {
        Self { value, valid: true }
    }

    pub fn null() -> Self
    where
        T: Default,
    {
        Self::default()
    }

    pub fn as_option(&self) -> Option<&T> {
        self.valid.then_some(&self.value)
    }

    pub fn into_option(self) -> Option<T> {
        self.valid.then_some(self.value)
    }

    /// Returns the payload, failing when the column holds no value.
    pub fn require(self) -> Result<T> {
        self.into_option().ok_or(Error::ColumnNull)
    }
}

impl<T: Default> From<Option<T>> for Null<T> {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => Self::new(v),
            None => Self::null(),
        }
    }
}

impl<T> From<Null<T>> for Option<T> {
    fn from(v: Null<T>) -> Self {
        v.into_option()
    }
}

/// Returns the payload of a valid column, or the zero value of `T`.
///
/// The stored payload of an invalid column is ignored.
pub fn deref_null<T: Default>(n: Null<T>) -> T {
    n.into_option().unwrap_or_default()
}

pub fn deref_null_string(ns: NullString) -> String {
    deref_null(ns)
}

pub fn deref_null_int64(n: NullInt64) -> i64 {
    deref_null(n)
}

pub fn deref_null_int32(n: NullInt32) -> i32 {
    deref_null(n)
}

pub fn deref_null_int16(n: NullInt16) -> i16 {
    deref_null(n)
}

pub fn deref_null_byte(n: NullByte) -> u8 {
    deref_null(n)
}

pub fn deref_null_bool(nb: NullBool) -> bool {
    deref_null(nb)
}

pub fn deref_null_float64(nf: NullFloat64) -> f64 {
    deref_null(nf)
}

#[cfg(feature = "chrono")]
pub fn deref_null_time(nt: NullTime) -> chrono::DateTime<chrono::Utc> {
    deref_null(nt)
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Null<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.as_option().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Null<T>
where
    T: serde::Deserialize<'de> + Default,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}
