/// Moves `v` into a freshly allocated, independently owned box.
///
/// The inverse of [`deref`](crate::deref): `deref(Some(ptr(v))) == v`.
#[inline]
pub fn ptr<T>(v: T) -> Box<T> {
    Box::new(v)
}

macro_rules! ptr_fn {
    ($name:ident, $t:ty) => {
        #[doc = concat!("Boxes a `", stringify!($t), "`.")]
        #[inline]
        pub fn $name(v: $t) -> Box<$t> {
            ptr(v)
        }
    };
}

ptr_fn!(ptr_i8, i8);
ptr_fn!(ptr_i16, i16);
ptr_fn!(ptr_i32, i32);
ptr_fn!(ptr_i64, i64);
ptr_fn!(ptr_isize, isize);
ptr_fn!(ptr_u8, u8);
ptr_fn!(ptr_u16, u16);
ptr_fn!(ptr_u32, u32);
ptr_fn!(ptr_u64, u64);
ptr_fn!(ptr_usize, usize);
ptr_fn!(ptr_f32, f32);
ptr_fn!(ptr_f64, f64);
ptr_fn!(ptr_bool, bool);

#[cfg(feature = "chrono")]
ptr_fn!(ptr_time, chrono::DateTime<chrono::Utc>);

#[cfg(feature = "uuid")]
ptr_fn!(ptr_uuid, uuid::Uuid);

pub fn ptr_string(v: impl Into<String>) -> Box<String> {
    ptr(v.into())
}
