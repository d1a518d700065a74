// Converts one base-1000 group (0..=999) to words.
use crate::data::lexicon::{HUNDREDS, HUNDRED_EXACT, TENS, UNITS};

/// Spells out `n` in 0..=999. Zero gives an empty string; callers skip
/// empty groups.
pub fn convert_group(n: u16) -> String {
    debug_assert!(n < 1000, "group value {} out of 0..=999", n);

    match n {
        0 => String::new(),
        1..=19 => UNITS[n as usize].to_string(),
        20..=99 => {
            let tens = TENS[(n / 10) as usize];
            match n % 10 {
                0 => tens.to_string(),
                unit => format!("{} e {}", tens, UNITS[unit as usize]),
            }
        }
        100 => HUNDRED_EXACT.to_string(),
        _ => {
            let hundreds = HUNDREDS[(n / 100) as usize];
            match n % 100 {
                0 => hundreds.to_string(),
                rest => format!("{} e {}", hundreds, convert_group(rest)),
            }
        }
    }
}
