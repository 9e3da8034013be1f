use std::{collections::HashMap, ops::Deref};

/// Returns the value behind `p`, or the zero value of `T` when `p` is absent.
///
/// Any pointer-like type works: `Option<&T>`, `Option<Box<T>>`,
/// `Option<Arc<T>>` and so on.
///
/// ```
/// assert_eq!(typeshift::deref(Some(&42)), 42);
/// assert_eq!(typeshift::deref::<i32, &i32>(None), 0);
/// ```
pub fn deref<T, P>(p: Option<P>) -> T
where
    P: Deref<Target = T>,
    T: Clone + Default,
{
    deref_or(p, T::default())
}

/// Same as [`deref`] with a caller supplied fallback.
pub fn deref_or<T, P>(p: Option<P>, default: T) -> T
where
    P: Deref<Target = T>,
    T: Clone,
{
    match p {
        Some(p) => (*p).clone(),
        None => default,
    }
}

macro_rules! deref_fn {
    ($name:ident, $t:ty) => {
        #[doc = concat!("Returns the `", stringify!($t), "` behind `p`, or its zero value.")]
        #[inline]
        pub fn $name(p: Option<&$t>) -> $t {
            deref(p)
        }
    };
}

deref_fn!(deref_i8, i8);
deref_fn!(deref_i16, i16);
deref_fn!(deref_i32, i32);
deref_fn!(deref_i64, i64);
deref_fn!(deref_isize, isize);
deref_fn!(deref_u8, u8);
deref_fn!(deref_u16, u16);
deref_fn!(deref_u32, u32);
deref_fn!(deref_u64, u64);
deref_fn!(deref_usize, usize);
deref_fn!(deref_f32, f32);
deref_fn!(deref_f64, f64);
deref_fn!(deref_bool, bool);

/// Returns an owned copy of `p`, or an empty string.
pub fn deref_string(p: Option<&str>) -> String {
    p.map(str::to_owned).unwrap_or_default()
}

/// Returns the instant behind `p`, or the Unix epoch.
#[cfg(feature = "chrono")]
pub fn deref_time(p: Option<&chrono::DateTime<chrono::Utc>>) -> chrono::DateTime<chrono::Utc> {
    deref(p)
}

/// Returns the identifier behind `p`, or the nil uuid.
#[cfg(feature = "uuid")]
pub fn deref_uuid(p: Option<&uuid::Uuid>) -> uuid::Uuid {
    p.copied().unwrap_or_else(uuid::Uuid::nil)
}

/// Returns the string representation of a string backed enumeration, or an
/// empty string when `value` is absent.
pub fn deref_enum_to_string<T>(value: Option<&T>) -> String
where
    T: AsRef<str> + ?Sized,
{
    value.map(|v| v.as_ref().to_owned()).unwrap_or_default()
}

/// Deep copies the map behind `p`.
///
/// An absent map stays absent; it is never turned into an empty map.
pub fn deref_map_string_string(
    p: Option<&HashMap<String, String>>,
) -> Option<HashMap<String, String>> {
    let src = p?;
    let mut clone = HashMap::with_capacity(src.len());

    for (k, v) in src {
        clone.insert(k.clone(), v.clone());
    }

    Some(clone)
}
