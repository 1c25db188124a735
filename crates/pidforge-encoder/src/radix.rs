//! Base-31 rendering with a confusable-character substitution.
//!
//! Seed values render as base-31 numbers over the digit characters `0-9`
//! then `a-u`. Digits that read ambiguously in print are then replaced by
//! the five letters base 31 never uses, so the output alphabet stays at 31
//! symbols with none of `0`, `1`, `i`, `l`, `o` among them.

/// Digit characters for base-31 conversion, lowest value first.
const DIGITS: &[u8; 31] = b"0123456789abcdefghijklmnopqrstu";

const RADIX: u64 = 31;

/// Replaces a digit character that is easily misread with its designated
/// stand-in. Every other digit passes through unchanged.
fn substitute(digit: u8) -> u8 {
    match digit {
        b'0' => b'z',
        b'1' => b'x',
        b'i' => b'w',
        b'l' => b'v',
        b'o' => b'y',
        other => other,
    }
}

/// Renders `value` in base 31, left-padded with the zero digit to
/// `min_len` characters, with the substitution applied. Values that need
/// more than `min_len` digits render at their natural width.
pub fn to_radix31(value: u64, min_len: usize) -> String {
    let mut digits = Vec::with_capacity(min_len.max(8));
    let mut rest = value;
    loop {
        digits.push(DIGITS[(rest % RADIX) as usize]);
        rest /= RADIX;
        if rest == 0 {
            break;
        }
    }
    while digits.len() < min_len {
        digits.push(b'0');
    }

    let mut out = String::with_capacity(digits.len());
    for &digit in digits.iter().rev() {
        out.push(char::from(substitute(digit)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_the_doi_anchor_values() {
        assert_eq!(to_radix31(1_073_741_829, 7), "x6fkf66");
        assert_eq!(to_radix31(1_074_087_174, 7), "x6gx2hb");
    }

    #[test]
    fn pads_small_values_with_the_zero_digit() {
        assert_eq!(to_radix31(0, 7), "zzzzzzz");
        assert_eq!(to_radix31(69_074, 6), "zz29r6");
    }

    #[test]
    fn substitutes_every_confusable_digit() {
        // 0, 1, i (18), l (21), o (24) as single digits.
        assert_eq!(to_radix31(0, 1), "z");
        assert_eq!(to_radix31(1, 1), "x");
        assert_eq!(to_radix31(18, 1), "w");
        assert_eq!(to_radix31(21, 1), "v");
        assert_eq!(to_radix31(24, 1), "y");
    }

    #[test]
    fn never_emits_a_confusable_character() {
        for value in (0..100_000u64).step_by(37) {
            let rendered = to_radix31(value, 7);
            assert!(
                !rendered.contains(['0', '1', 'i', 'l', 'o']),
                "confusable character in {rendered}"
            );
        }
    }

    #[test]
    fn grows_past_the_minimum_length_without_truncating() {
        // 31^7 needs eight digits.
        let value = 31u64.pow(7);
        assert_eq!(to_radix31(value, 7), "xzzzzzzz");
        assert_eq!(to_radix31(value, 7).len(), 8);
    }
}
