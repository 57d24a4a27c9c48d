//! Fixed a..z frequency table and the derived per-letter point values.
//! Pure, total over a..z, case-insensitive at the call site (callers
//! lowercase before looking up).

/// `phf` gives us a perfect-hash compile-time map for the one table in this
/// crate that is genuinely static.
static FREQUENCIES: phf::Map<char, f64> = phf::phf_map! {
    'a' => 0.078, 'b' => 0.02,   'c' => 0.04,  'd' => 0.038,
    'e' => 0.11,  'f' => 0.014,  'g' => 0.03,  'h' => 0.023,
    'i' => 0.086, 'j' => 0.0021, 'k' => 0.0097, 'l' => 0.053,
    'm' => 0.027, 'n' => 0.072,  'o' => 0.061, 'p' => 0.028,
    'q' => 0.0019,'r' => 0.073,  's' => 0.087, 't' => 0.067,
    'u' => 0.033, 'v' => 0.01,   'w' => 0.0091,'x' => 0.0027,
    'y' => 0.016, 'z' => 0.0044,
};

/// Returns the relative frequency of a lowercase letter, or `0.0` for
/// anything outside a..z.
pub fn frequency(letter: char) -> f64 {
    FREQUENCIES.get(&letter).copied().unwrap_or(0.0)
}

/// Derived point value: `floor(log2(freq('e') / freq(letter))) + 1`.
/// Wildcards always score 0 and never go through this function.
pub fn points_for_letter(letter: char) -> u32 {
    let e = FREQUENCIES[&'e'];
    let freq = frequency(letter);
    ((e / freq).log2().floor() as i32 + 1).max(0) as u32
}

/// All 26 lowercase letters, in alphabetical order.
pub fn alphabet() -> impl Iterator<Item = char> {
    ('a'..='z').into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_the_published_point_table() {
        let expected: &[(char, u32)] = &[
            ('a', 2), ('b', 4), ('c', 3), ('d', 3), ('e', 1), ('f', 4),
            ('g', 3), ('h', 3), ('i', 2), ('j', 7), ('k', 5), ('l', 2),
            ('m', 3), ('n', 2), ('o', 2), ('p', 3), ('q', 7), ('r', 2),
            ('s', 1), ('t', 2), ('u', 2), ('v', 4), ('w', 4), ('x', 6),
            ('y', 3), ('z', 5),
        ];
        for &(letter, points) in expected {
            assert_eq!(
                points_for_letter(letter),
                points,
                "letter '{letter}' should score {points} points"
            );
        }
    }

    #[test]
    fn e_is_the_cheapest_letter_and_q_is_among_the_priciest() {
        assert_eq!(points_for_letter('e'), 1);
        assert_eq!(points_for_letter('q'), 7);
    }

    #[test]
    fn total_frequency_is_pure_and_total() {
        for letter in alphabet() {
            assert!(frequency(letter) > 0.0);
        }
    }
}
