//! Trait for set element types (unsigned integers).

use std::fmt;

/// Trait for the scalar values stored in an [`OrdSet`](crate::OrdSet).
///
/// Any totally-ordered `Copy` scalar works; the set additionally needs an
/// absolute-distance operation for closest-match queries. Implemented for
/// the unsigned integer types via [`impl_set_key!`](macro).
pub trait SetKey: Copy + Ord + Eq + Default + fmt::Debug + fmt::Display {
    /// Absolute distance between two values.
    ///
    /// Used to decide between the nearest neighbours below and above a
    /// probe value. Must not overflow for any pair of legal values.
    fn distance(self, other: Self) -> Self;
}

macro_rules! impl_set_key {
    ($($t:ty),*) => {
        $(
            impl SetKey for $t {
                #[inline(always)]
                fn distance(self, other: Self) -> Self {
                    self.abs_diff(other)
                }
            }
        )*
    };
}

impl_set_key!(u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_symmetric() {
        assert_eq!(3u32.distance(7), 4);
        assert_eq!(7u32.distance(3), 4);
        assert_eq!(0u64.distance(u64::MAX), u64::MAX);
    }

    #[test]
    fn distance_to_self_is_zero() {
        assert_eq!(42u64.distance(42), 0);
    }
}
