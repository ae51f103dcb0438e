mod variable_base;
pub use self::variable_base::*;

/// Pippenger window width indexed by `floor(log2(number of points))`.
pub(crate) const WINDOW_SIZES: [usize; 32] = [
    1, 1, 1, 1, 2, 3, 4, 5, 6, 7, 7, 8, 9, 10, 11, 12, 13, 13, 14, 15, 16, 16, 17, 17, 17, 17,
    17, 17, 17, 17, 17, 17,
];

/// The window width used for `num_points` points.
pub fn window_size(num_points: usize) -> usize {
    let log2 = if num_points == 0 {
        0
    } else {
        (usize::BITS - 1 - num_points.leading_zeros()) as usize
    };
    WINDOW_SIZES[std::cmp::min(log2, WINDOW_SIZES.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::window_size;

    #[test]
    fn test_window_size() {
        assert_eq!(window_size(0), 1);
        assert_eq!(window_size(1), 1);
        assert_eq!(window_size(16), 2);
        assert_eq!(window_size(31), 2);
        assert_eq!(window_size(1 << 10), 7);
        assert_eq!(window_size(1 << 22), 17);
        assert_eq!(window_size(usize::MAX), 17);
    }
}
