// Ordinal words, keyed by the round numbers the composer decomposes into.
use shared::models::Gender;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrdinalEntry {
    pub value: u16,
    pub masculine: &'static str,
    pub feminine: &'static str,
}

impl OrdinalEntry {
    pub fn word(&self, gender: Gender) -> &'static str {
        match gender {
            Gender::Masculine => self.masculine,
            Gender::Feminine => self.feminine,
        }
    }
}

const fn entry(value: u16, masculine: &'static str, feminine: &'static str) -> OrdinalEntry {
    OrdinalEntry { value, masculine, feminine }
}

/// Sorted by value; looked up with a binary search.
pub const ORDINALS: &[OrdinalEntry] = &[
    entry(1, "primeiro", "primeira"),
    entry(2, "segundo", "segunda"),
    entry(3, "terceiro", "terceira"),
    entry(4, "quarto", "quarta"),
    entry(5, "quinto", "quinta"),
    entry(6, "sexto", "sexta"),
    entry(7, "sétimo", "sétima"),
    entry(8, "oitavo", "oitava"),
    entry(9, "nono", "nona"),
    entry(10, "décimo", "décima"),
    entry(11, "décimo primeiro", "décima primeira"),
    entry(12, "décimo segundo", "décima segunda"),
    entry(13, "décimo terceiro", "décima terceira"),
    entry(14, "décimo quarto", "décima quarta"),
    entry(15, "décimo quinto", "décima quinta"),
    entry(16, "décimo sexto", "décima sexta"),
    entry(17, "décimo sétimo", "décima sétima"),
    entry(18, "décimo oitavo", "décima oitava"),
    entry(19, "décimo nono", "décima nona"),
    entry(20, "vigésimo", "vigésima"),
    entry(30, "trigésimo", "trigésima"),
    entry(40, "quadragésimo", "quadragésima"),
    entry(50, "quinquagésimo", "quinquagésima"),
    entry(60, "sexagésimo", "sexagésima"),
    entry(70, "septuagésimo", "septuagésima"),
    entry(80, "octogésimo", "octogésima"),
    entry(90, "nonagésimo", "nonagésima"),
    entry(100, "centésimo", "centésima"),
    entry(200, "ducentésimo", "ducentésima"),
    entry(300, "trecentésimo", "trecentésima"),
    entry(400, "quadringentésimo", "quadringentésima"),
    entry(500, "quingentésimo", "quingentésima"),
    entry(600, "sexcentésimo", "sexcentésima"),
    entry(700, "septingentésimo", "septingentésima"),
    entry(800, "octingentésimo", "octingentésima"),
    entry(900, "noningentésimo", "noningentésima"),
    entry(1000, "milésimo", "milésima"),
];

pub const MIN_ORDINAL: u16 = 1;
pub const MAX_ORDINAL: u16 = 1000;

pub fn lookup(value: u16) -> Option<&'static OrdinalEntry> {
    ORDINALS
        .binary_search_by_key(&value, |e| e.value)
        .ok()
        .map(|idx| &ORDINALS[idx])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted_and_unique() {
        for pair in ORDINALS.windows(2) {
            assert!(pair[0].value < pair[1].value, "{} before {}", pair[0].value, pair[1].value);
        }
    }

    #[test]
    fn test_table_covers_decomposition_keys() {
        let keys = (1..=20)
            .chain((30..=90).step_by(10))
            .chain((100..=1000).step_by(100));
        for key in keys {
            let found = lookup(key).unwrap_or_else(|| panic!("missing ordinal {}", key));
            assert!(!found.masculine.is_empty());
            assert!(!found.feminine.is_empty());
        }
    }

    #[test]
    fn test_feminine_forms_end_in_a() {
        for e in ORDINALS.iter() {
            for word in e.feminine.split(' ') {
                assert!(word.ends_with('a'), "{} has feminine word {}", e.value, word);
            }
        }
    }

    #[test]
    fn test_lookup_miss() {
        assert!(lookup(21).is_none());
        assert!(lookup(0).is_none());
    }
}
