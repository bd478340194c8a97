//! Bit-scatter (`deposit`) and bit-gather (`extract`) primitives.
//!
//! `deposit(value, mask)` places the low-order bits of `value`, in order,
//! into the bit positions set in `mask` and clears every other bit. This is
//! the `PDEP` instruction from x86 BMI2. `extract` is its inverse (`PEXT`).
//!
//! When the crate is compiled with the `bmi2` target feature enabled
//! (e.g. `-C target-cpu=native` on a Haswell or later machine) the
//! hardware instructions are used. Otherwise a portable loop is used.
//! Both paths are always compiled in the `*_soft` methods and must agree
//! bit for bit; the property tests below compare them.

/// `true` when [`BitScatter::deposit`] and [`BitScatter::extract`] lower to
/// the BMI2 `PDEP`/`PEXT` instructions.
pub const HARDWARE_BIT_SCATTER: bool =
    cfg!(all(target_arch = "x86_64", target_feature = "bmi2"));

/// Bit scatter/gather over an unsigned integer word.
///
/// Implemented for `u32` and `u64`.
pub trait BitScatter: Copy + Sized {
    /// Scatter the low-order bits of `self` into the positions set in `mask`.
    ///
    /// Bits of the result outside `mask` are zero. Reading the bits of the
    /// result inside `mask` in increasing position order yields the low
    /// `mask.count_ones()` bits of `self`.
    fn deposit(self, mask: Self) -> Self;

    /// Gather the bits of `self` at the positions set in `mask` into the
    /// low-order bits of the result.
    fn extract(self, mask: Self) -> Self;

    /// Portable bit-by-bit implementation of [`deposit`](Self::deposit).
    fn deposit_soft(self, mask: Self) -> Self;

    /// Portable bit-by-bit implementation of [`extract`](Self::extract).
    fn extract_soft(self, mask: Self) -> Self;
}

#[cfg(all(target_arch = "x86_64", target_feature = "bmi2"))]
#[allow(unsafe_code, unused_unsafe)]
mod hw {
    use core::arch::x86_64::{_pdep_u32, _pdep_u64, _pext_u32, _pext_u64};

    #[inline(always)]
    pub(super) fn pdep_u32(value: u32, mask: u32) -> u32 {
        // SAFETY: bmi2 is enabled for the whole compilation unit.
        unsafe { _pdep_u32(value, mask) }
    }

    #[inline(always)]
    pub(super) fn pdep_u64(value: u64, mask: u64) -> u64 {
        // SAFETY: bmi2 is enabled for the whole compilation unit.
        unsafe { _pdep_u64(value, mask) }
    }

    #[inline(always)]
    pub(super) fn pext_u32(value: u32, mask: u32) -> u32 {
        // SAFETY: bmi2 is enabled for the whole compilation unit.
        unsafe { _pext_u32(value, mask) }
    }

    #[inline(always)]
    pub(super) fn pext_u64(value: u64, mask: u64) -> u64 {
        // SAFETY: bmi2 is enabled for the whole compilation unit.
        unsafe { _pext_u64(value, mask) }
    }
}

macro_rules! impl_bit_scatter {
    ($ty:ty, $pdep:ident, $pext:ident) => {
        impl BitScatter for $ty {
            #[inline]
            fn deposit(self, mask: Self) -> Self {
                #[cfg(all(target_arch = "x86_64", target_feature = "bmi2"))]
                {
                    hw::$pdep(self, mask)
                }
                #[cfg(not(all(target_arch = "x86_64", target_feature = "bmi2")))]
                {
                    self.deposit_soft(mask)
                }
            }

            #[inline]
            fn extract(self, mask: Self) -> Self {
                #[cfg(all(target_arch = "x86_64", target_feature = "bmi2"))]
                {
                    hw::$pext(self, mask)
                }
                #[cfg(not(all(target_arch = "x86_64", target_feature = "bmi2")))]
                {
                    self.extract_soft(mask)
                }
            }

            fn deposit_soft(self, mask: Self) -> Self {
                let mut out: $ty = 0;
                let mut remaining = mask;
                let mut source: $ty = 1;
                while remaining != 0 {
                    let lowest = remaining & remaining.wrapping_neg();
                    if self & source != 0 {
                        out |= lowest;
                    }
                    remaining &= remaining - 1;
                    source = source.wrapping_shl(1);
                }
                out
            }

            fn extract_soft(self, mask: Self) -> Self {
                let mut out: $ty = 0;
                let mut remaining = mask;
                let mut target: $ty = 1;
                while remaining != 0 {
                    let lowest = remaining & remaining.wrapping_neg();
                    if self & lowest != 0 {
                        out |= target;
                    }
                    remaining &= remaining - 1;
                    target = target.wrapping_shl(1);
                }
                out
            }
        }
    };
}

impl_bit_scatter!(u32, pdep_u32, pext_u32);
impl_bit_scatter!(u64, pdep_u64, pext_u64);

/// Free-function form of [`BitScatter::deposit`].
#[inline]
pub fn deposit<T: BitScatter>(value: T, mask: T) -> T {
    value.deposit(mask)
}

/// Free-function form of [`BitScatter::extract`].
#[inline]
pub fn extract<T: BitScatter>(value: T, mask: T) -> T {
    value.extract(mask)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn deposit_into_even_bits() {
        assert_eq!(0b1111u64.deposit(0b0101_0101), 0b0101_0101);
        assert_eq!(0b1010u64.deposit(0b0101_0101), 0b0100_0100);
    }

    #[test]
    fn deposit_drops_bits_beyond_mask_popcount() {
        // Mask has two bits; only the low two bits of the value survive.
        assert_eq!(0b1111_1101u32.deposit(0b1001_0000), 0b0001_0000);
    }

    #[test]
    fn zero_mask_yields_zero() {
        assert_eq!(u64::MAX.deposit(0), 0);
        assert_eq!(u32::MAX.extract(0), 0);
    }

    #[test]
    fn full_mask_is_identity() {
        assert_eq!(0xDEAD_BEEFu32.deposit(u32::MAX), 0xDEAD_BEEF);
        assert_eq!(0xDEAD_BEEF_CAFE_F00Du64.extract(u64::MAX), 0xDEAD_BEEF_CAFE_F00D);
    }

    #[test]
    fn top_bit_of_mask_is_reachable() {
        let mask = 1u64 << 63 | 1;
        assert_eq!(0b10u64.deposit(mask), 1u64 << 63);
        assert_eq!((1u64 << 63).extract(mask), 0b10);
        let mask32 = 1u32 << 31 | 1;
        assert_eq!(0b11u32.deposit(mask32), mask32);
    }

    #[test]
    fn extract_gathers_in_position_order() {
        assert_eq!(0b0100_0100u64.extract(0b0101_0101), 0b1010);
    }

    #[test]
    fn free_functions_match_methods() {
        assert_eq!(deposit(5u32, 0xF0), 5u32.deposit(0xF0));
        assert_eq!(extract(0x50u64, 0xF0), 0x50u64.extract(0xF0));
    }

    proptest! {
        #[test]
        fn hardware_and_software_deposit_agree_u64(v in any::<u64>(), m in any::<u64>()) {
            prop_assert_eq!(v.deposit(m), v.deposit_soft(m));
            prop_assert_eq!(v.extract(m), v.extract_soft(m));
        }

        #[test]
        fn hardware_and_software_deposit_agree_u32(v in any::<u32>(), m in any::<u32>()) {
            prop_assert_eq!(v.deposit(m), v.deposit_soft(m));
            prop_assert_eq!(v.extract(m), v.extract_soft(m));
        }

        #[test]
        fn deposit_stays_inside_mask(v in any::<u64>(), m in any::<u64>()) {
            prop_assert_eq!(v.deposit(m) & !m, 0);
        }

        #[test]
        fn extract_inverts_deposit(v in any::<u64>(), m in any::<u64>()) {
            let width = m.count_ones();
            let low = if width == 64 { v } else { v & ((1u64 << width) - 1) };
            prop_assert_eq!(v.deposit(m).extract(m), low);
        }

        #[test]
        fn extract_inverts_deposit_u32(v in any::<u32>(), m in any::<u32>()) {
            let width = m.count_ones();
            let low = if width == 32 { v } else { v & ((1u32 << width) - 1) };
            prop_assert_eq!(v.deposit(m).extract(m), low);
        }
    }
}
