/// A fixed pattern given as live (row, col) offsets inside its bounding box.
pub struct Pattern {
    pub name: &'static str,
    pub height: usize,
    pub width: usize,
    pub cells: &'static [(usize, usize)],
}

/// Gosper glider gun, 9 rows x 36 columns, 36 live cells.
#[rustfmt::skip]
pub const GOSPER_GLIDER_GUN: Pattern = Pattern {
    name: "Gosper glider gun",
    height: 9,
    width: 36,
    cells: &[
        (0, 24),
        (1, 22), (1, 24),
        (2, 12), (2, 13), (2, 20), (2, 21), (2, 34), (2, 35),
        (3, 11), (3, 15), (3, 20), (3, 21), (3, 34), (3, 35),
        (4, 0), (4, 1), (4, 10), (4, 16), (4, 20), (4, 21),
        (5, 0), (5, 1), (5, 10), (5, 14), (5, 16), (5, 17), (5, 22), (5, 24),
        (6, 10), (6, 16), (6, 24),
        (7, 11), (7, 15),
        (8, 12), (8, 13),
    ],
};

/// Glider heading down-right, period 4.
pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    height: 3,
    width: 3,
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_gosper_shape() {
        assert_eq!(GOSPER_GLIDER_GUN.cells.len(), 36);
        let unique: HashSet<_> = GOSPER_GLIDER_GUN.cells.iter().collect();
        assert_eq!(unique.len(), 36, "Gosper gun cells must be distinct");

        for &(row, col) in GOSPER_GLIDER_GUN.cells {
            assert!(row < GOSPER_GLIDER_GUN.height);
            assert!(col < GOSPER_GLIDER_GUN.width);
        }
        // The bounding box is tight
        assert!(GOSPER_GLIDER_GUN.cells.iter().any(|&(r, _)| r == 8));
        assert!(GOSPER_GLIDER_GUN.cells.iter().any(|&(_, c)| c == 35));
    }
}
