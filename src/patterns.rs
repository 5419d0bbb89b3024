//! Row-formula text patterns. Each function returns the lines without
//! newlines; trailing spaces are never emitted.

/// Upper triangle for rows `1..=n`, then the mirror for rows `n..=1`.
/// Row `r` is `n - r` spaces followed by `2r - 1` stars.
pub fn diamond(n: usize) -> Vec<String> {
    let row_line = |row: usize| format!("{}{}", " ".repeat(n - row), "*".repeat(2 * row - 1));

    let upper = (1..=n).map(row_line);
    let lower = (1..=n).rev().map(row_line);
    upper.chain(lower).collect()
}

/// An `n` by `n` cross: a star where `j == i` or `j == n - i - 1`.
pub fn x_pattern(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            let line: String = (0..n)
                .map(|j| if j == i || j == n - i - 1 { '*' } else { ' ' })
                .collect();
            line.trim_end().to_string()
        })
        .collect()
}

/// The first attempt draws `n + 1` rows and columns, mirroring on `j == n - i`.
pub fn x_pattern_first_try(n: usize) -> Vec<String> {
    (0..=n)
        .map(|i| {
            let line: String = (0..=n)
                .map(|j| if j == i || j == n - i { '*' } else { ' ' })
                .collect();
            line.trim_end().to_string()
        })
        .collect()
}

pub fn multiplication_table(n: u32, m: u32) -> Vec<String> {
    let mut lines = Vec::new();
    for cnt_n in 1..=n {
        for cnt_m in 1..=m {
            lines.push(format!("{cnt_n} x {cnt_m} = {}", cnt_n * cnt_m));
        }
    }
    lines
}

/// `1x1 = 1` layout with an empty line closing every block.
pub fn multiplication_table_blocks(n: u32, m: u32) -> Vec<String> {
    let mut lines = Vec::new();
    for i in 1..=n {
        for j in 1..=m {
            lines.push(format!("{i}x{j} = {}", i * j));
        }
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diamond() {
        assert_eq!(
            diamond(3),
            vec!["  *", " ***", "*****", "*****", " ***", "  *"]
        );
        assert!(diamond(0).is_empty());
    }

    #[test]
    fn test_diamond_row_formula() {
        let n = 5;
        for (row, line) in (1..=n).zip(diamond(n)) {
            assert_eq!(line.chars().take_while(|&c| c == ' ').count(), n - row);
            assert_eq!(line.chars().filter(|&c| c == '*').count(), 2 * row - 1);
        }
    }

    #[test]
    fn test_x_pattern() {
        assert_eq!(x_pattern(5), vec!["*   *", " * *", "  *", " * *", "*   *"]);
        assert_eq!(x_pattern(1), vec!["*"]);
    }

    #[test]
    fn test_x_pattern_first_try_is_one_larger() {
        assert_eq!(x_pattern_first_try(4), x_pattern(5));
    }

    #[test]
    fn test_multiplication_tables() {
        let lines = multiplication_table(2, 4);
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "1 x 1 = 1");
        assert_eq!(lines[7], "2 x 4 = 8");

        let blocks = multiplication_table_blocks(2, 2);
        assert_eq!(blocks, vec!["1x1 = 1", "1x2 = 2", "", "2x1 = 2", "2x2 = 4", ""]);
    }
}
