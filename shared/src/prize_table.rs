use std::collections::HashSet;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::constants::FULL_TURN_DEG;

/// A single prize on the wheel.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Prize {
    pub id: u32,
    pub text: String,  // Full wording, used in the result line and the claim message
    pub short: String, // Label drawn on the wheel
}

impl Prize {
    pub fn new(id: u32, text: impl Into<String>, short: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            short: short.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrizeTableError {
    Empty,
    DuplicateId(u32),
}

impl fmt::Display for PrizeTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "prize table must contain at least one prize"),
            Self::DuplicateId(id) => write!(f, "prize id {} appears more than once", id),
        }
    }
}

impl std::error::Error for PrizeTableError {}

/// Ordered prizes. Index `i` owns sector `i`, counted clockwise from the pointer.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(try_from = "Vec<Prize>", into = "Vec<Prize>")]
pub struct PrizeTable {
    prizes: Vec<Prize>,
}

impl PrizeTable {
    pub fn new(prizes: Vec<Prize>) -> Result<Self, PrizeTableError> {
        if prizes.is_empty() {
            return Err(PrizeTableError::Empty);
        }

        let mut seen = HashSet::with_capacity(prizes.len());
        for prize in &prizes {
            if !seen.insert(prize.id) {
                return Err(PrizeTableError::DuplicateId(prize.id));
            }
        }

        Ok(Self { prizes })
    }

    pub fn len(&self) -> usize {
        self.prizes.len()
    }

    // Always false, tables are validated non-empty
    pub fn is_empty(&self) -> bool {
        self.prizes.is_empty()
    }

    pub fn sector_width(&self) -> f64 {
        FULL_TURN_DEG / self.prizes.len() as f64
    }

    pub fn get(&self, index: usize) -> Option<&Prize> {
        self.prizes.get(index)
    }

    /// Prize owning `sector`. Indices wrap around the table.
    pub fn prize_for_sector(&self, sector: usize) -> &Prize {
        &self.prizes[sector % self.prizes.len()]
    }

    pub fn by_id(&self, id: u32) -> Option<&Prize> {
        self.prizes.iter().find(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Prize> {
        self.prizes.iter()
    }
}

impl TryFrom<Vec<Prize>> for PrizeTable {
    type Error = PrizeTableError;

    fn try_from(prizes: Vec<Prize>) -> Result<Self, Self::Error> {
        Self::new(prizes)
    }
}

impl From<PrizeTable> for Vec<Prize> {
    fn from(table: PrizeTable) -> Self {
        table.prizes
    }
}

pub static DEFAULT_PRIZES: Lazy<PrizeTable> = Lazy::new(|| PrizeTable {
    prizes: vec![
        Prize::new(1, "бесплатное сопровождение 1 неделю", "1 неделя"),
        Prize::new(2, "бесплатную консультацию", "консультация"),
        Prize::new(3, "скидку 10%", "10%"),
        Prize::new(4, "бесплатную статистику по боту", "статистика"),
    ],
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        assert_eq!(DEFAULT_PRIZES.len(), 4);
        assert_eq!(DEFAULT_PRIZES.sector_width(), 90.0);
        assert_eq!(DEFAULT_PRIZES.get(2).map(|p| p.short.as_str()), Some("10%"));
        assert_eq!(DEFAULT_PRIZES.by_id(4).map(|p| p.short.as_str()), Some("статистика"));
    }

    #[test]
    fn test_rejects_empty_and_duplicates() {
        assert_eq!(PrizeTable::new(vec![]), Err(PrizeTableError::Empty));

        let dup = vec![Prize::new(7, "a", "a"), Prize::new(7, "b", "b")];
        assert_eq!(PrizeTable::new(dup), Err(PrizeTableError::DuplicateId(7)));
    }

    #[test]
    fn test_prize_for_sector_wraps() {
        let table = PrizeTable::new(vec![Prize::new(1, "a", "a"), Prize::new(2, "b", "b")]).unwrap();
        assert_eq!(table.prize_for_sector(3).id, 2);
    }

    #[test]
    fn test_deserialize_validates() {
        let table: PrizeTable =
            serde_json::from_str(r#"[{"id":1,"text":"x","short":"x"}]"#).unwrap();
        assert_eq!(table.len(), 1);

        assert!(serde_json::from_str::<PrizeTable>("[]").is_err());
        assert!(serde_json::from_str::<PrizeTable>(
            r#"[{"id":1,"text":"x","short":"x"},{"id":1,"text":"y","short":"y"}]"#
        )
        .is_err());
    }
}
