use std::fmt;

use serde::{Deserialize, Serialize};

/// The fixed set of weights a customer can pick for a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WeightOption {
    Grams250,
    Grams500,
    Kilogram,
    KilogramAndHalf,
    TwoKilograms,
}

impl WeightOption {
    pub const ALL: [WeightOption; 5] = [
        Self::Grams250,
        Self::Grams500,
        Self::Kilogram,
        Self::KilogramAndHalf,
        Self::TwoKilograms,
    ];

    pub fn grams(self) -> u32 {
        match self {
            Self::Grams250 => 250,
            Self::Grams500 => 500,
            Self::Kilogram => 1000,
            Self::KilogramAndHalf => 1500,
            Self::TwoKilograms => 2000,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Grams250 => "250 г",
            Self::Grams500 => "500 г",
            Self::Kilogram => "1 кг",
            Self::KilogramAndHalf => "1.5 кг",
            Self::TwoKilograms => "2 кг",
        }
    }

    pub fn from_grams(grams: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|option| option.grams() == grams)
    }
}

impl fmt::Display for WeightOption {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn from_grams_accepts_every_option() {
        for option in WeightOption::ALL {
            assert_eq!(WeightOption::from_grams(option.grams()), Some(option));
        }
    }

    #[test]
    fn from_grams_rejects_unlisted_weight() {
        assert_eq!(WeightOption::from_grams(750), None);
        assert_eq!(WeightOption::from_grams(0), None);
    }

    #[test]
    fn labels_use_kilograms_from_one_kilo_up() {
        assert_eq!(WeightOption::Grams250.to_string(), "250 г");
        assert_eq!(WeightOption::Kilogram.to_string(), "1 кг");
        assert_eq!(WeightOption::KilogramAndHalf.to_string(), "1.5 кг");
    }

    #[test]
    fn options_are_ordered_by_weight() {
        let grams: Vec<u32> = WeightOption::ALL.iter().map(|o| o.grams()).collect();

        assert_eq!(grams, vec![250, 500, 1000, 1500, 2000]);
    }
}
