//
// bf-genetic - genetic synthesis of Brainfuck programs
//
// File description:
//   Module: human-readable size/count formatting for the final summary.
//

const SIZE_UNITS: [&str; 7] = ["EB", "PB", "TB", "GB", "MB", "KB", "B"];
const COUNT_UNITS: [char; 7] = ['E', 'P', 'T', 'G', 'M', 'K', 'B'];

/// Renders a byte count as e.g. `"1.00 MB"` or, when the division is exact,
/// `"2 MB"`.
pub fn human_size(size: u64) -> String {
    let mut mult: u64 = 1024u64.pow(6);
    for unit in SIZE_UNITS {
        if size >= mult {
            return if mult != 0 && size % mult == 0 {
                format!("{} {}", size / mult, unit)
            } else {
                format!("{:.2} {}", size as f64 / mult as f64, unit)
            };
        }
        mult /= 1024;
    }
    "0".to_string()
}

/// Renders a plain count as e.g. `"12.3K"` or, when exact, `"12K"`.
pub fn human_count(size: u64) -> String {
    let mut mult: u64 = 1000u64.pow(6);
    for unit in COUNT_UNITS {
        if size >= mult {
            return if mult != 0 && size % mult == 0 {
                format!("{}{}", size / mult, unit)
            } else {
                format!("{:.1}{}", size as f64 / mult as f64, unit)
            };
        }
        mult /= 1000;
    }
    "0".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn human_size_exact_division_has_no_decimals() {
        assert_eq!(human_size(2 * 1024 * 1024), "2 MB");
        assert_eq!(human_size(512), "512 B");
    }

    #[test]
    fn human_size_inexact_division_has_two_decimals() {
        assert_eq!(human_size(1536), "1.50 KB");
    }

    #[test]
    fn human_size_zero_is_zero() {
        assert_eq!(human_size(0), "0");
    }

    #[test]
    fn human_count_exact_division_has_no_decimals() {
        assert_eq!(human_count(12_000), "12K");
    }

    #[test]
    fn human_count_inexact_division_has_one_decimal() {
        assert_eq!(human_count(12_345), "12.3K");
    }

    #[test]
    fn human_count_small_values_use_bare_unit() {
        assert_eq!(human_count(42), "42B");
    }
}
