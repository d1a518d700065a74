// Cardinal number words and magnitude classes.

/// 0 to 19. From 11 on the words are irregular and stored as-is.
pub const UNITS: [&str; 20] = [
    "zero",
    "um",
    "dois",
    "três",
    "quatro",
    "cinco",
    "seis",
    "sete",
    "oito",
    "nove",
    "dez",
    "onze",
    "doze",
    "treze",
    "quatorze",
    "quinze",
    "dezesseis",
    "dezessete",
    "dezoito",
    "dezenove",
];

pub const TENS: [&str; 10] = [
    "",
    "",
    "vinte",
    "trinta",
    "quarenta",
    "cinquenta",
    "sessenta",
    "setenta",
    "oitenta",
    "noventa",
];

/// Index 1 is "cento"; exactly 100 reads "cem" and is handled by the converter.
pub const HUNDREDS: [&str; 10] = [
    "",
    "cento",
    "duzentos",
    "trezentos",
    "quatrocentos",
    "quinhentos",
    "seiscentos",
    "setecentos",
    "oitocentos",
    "novecentos",
];

pub const HUNDRED_EXACT: &str = "cem";

pub const ZERO: &str = "zero";

pub const NEGATIVE_PREFIX: &str = "menos";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MagnitudeClass {
    pub singular: &'static str,
    pub plural: &'static str,
}

impl MagnitudeClass {
    pub fn name(&self, group_value: u16) -> &'static str {
        if group_value > 1 {
            self.plural
        } else {
            self.singular
        }
    }
}

/// Indexed by power-of-1000 position. Units carry no name and "mil" never
/// takes a plural.
pub const CLASSES: [MagnitudeClass; 5] = [
    MagnitudeClass { singular: "", plural: "" },
    MagnitudeClass { singular: "mil", plural: "mil" },
    MagnitudeClass { singular: "milhão", plural: "milhões" },
    MagnitudeClass { singular: "bilhão", plural: "bilhões" },
    MagnitudeClass { singular: "trilhão", plural: "trilhões" },
];

pub const THOUSAND_POSITION: usize = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_invariants() {
        assert_eq!(CLASSES[0].singular, "");
        assert_eq!(CLASSES[0].plural, "");
        assert_eq!(CLASSES[THOUSAND_POSITION].singular, CLASSES[THOUSAND_POSITION].plural);
    }

    #[test]
    fn test_class_agreement() {
        assert_eq!(CLASSES[2].name(1), "milhão");
        assert_eq!(CLASSES[2].name(2), "milhões");
        assert_eq!(CLASSES[4].name(999), "trilhões");
    }

    #[test]
    fn test_tables_have_no_padding() {
        for word in UNITS.iter().chain(TENS.iter()).chain(HUNDREDS.iter()) {
            assert_eq!(word.trim(), *word);
        }
    }
}
