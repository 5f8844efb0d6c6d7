pub(crate) const fn div_ceil(lhs: u32, rhs: u32) -> u32 {
    (lhs + rhs - 1) / rhs
}

/// Smallest standard host storage size, in bytes, that can hold `nbits`.
pub(crate) const fn round_up_size(nbits: u32) -> u8 {
    if nbits <= 8 {
        1
    } else if nbits <= 16 {
        2
    } else if nbits <= 32 {
        4
    } else {
        8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn div_ceil_rounds_up() {
        assert_eq!(div_ceil(0, 8), 0);
        assert_eq!(div_ceil(1, 8), 1);
        assert_eq!(div_ceil(8, 8), 1);
        assert_eq!(div_ceil(9, 8), 2);
        assert_eq!(div_ceil(71 * 8, 8), 71);
    }

    #[test]
    fn round_up_size_picks_standard_width() {
        assert_eq!(round_up_size(1), 1);
        assert_eq!(round_up_size(8), 1);
        assert_eq!(round_up_size(9), 2);
        assert_eq!(round_up_size(16), 2);
        assert_eq!(round_up_size(17), 4);
        assert_eq!(round_up_size(32), 4);
        assert_eq!(round_up_size(33), 8);
        assert_eq!(round_up_size(64), 8);
    }
}
