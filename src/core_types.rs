use crate::consts::{MAX_DIFFICULTY, MIN_DIFFICULTY};
use crate::error::{BfResult, BoardForgeError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use strum_macros::{Display, EnumIter};

/// Ordinal difficulty label, 1 (lowest) to 5 (highest).
///
/// Serialized as its ordinal so item files and JSON boards stay plain numbers.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Difficulty {
    Trivial = 1,
    Easy = 2,
    Medium = 3,
    Hard = 4,
    Extreme = 5,
}

impl Difficulty {
    /// Filler label used when supply is smaller than the grid.
    pub const FILLER: Difficulty = Difficulty::Trivial;

    #[inline(always)]
    pub fn value(self) -> u8 {
        self as u8
    }

    #[inline(always)]
    pub fn as_f32(self) -> f32 {
        self as u8 as f32
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Trivial),
            2 => Ok(Self::Easy),
            3 => Ok(Self::Medium),
            4 => Ok(Self::Hard),
            5 => Ok(Self::Extreme),
            v => Err(format!(
                "difficulty {} outside {}..={}",
                v, MIN_DIFFICULTY, MAX_DIFFICULTY
            )),
        }
    }
}

impl From<Difficulty> for u8 {
    fn from(d: Difficulty) -> Self {
        d.value()
    }
}

/// A caller-owned input record. `difficulty` stays raw so that
/// out-of-range values can be rejected instead of clamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub name: String,
    pub count: u32,
    pub difficulty: u8,
}

impl Item {
    pub fn new(id: u32, name: impl Into<String>, count: u32, difficulty: u8) -> Self {
        Self {
            id,
            name: name.into(),
            count,
            difficulty,
        }
    }

    pub fn checked_difficulty(&self) -> BfResult<Difficulty> {
        Difficulty::try_from(self.difficulty).map_err(|_| BoardForgeError::InvalidDifficulty {
            item_id: self.id,
            value: self.difficulty,
        })
    }
}

/// Rejects the first item whose difficulty is out of range, then any id
/// that appears twice.
pub fn validate_items(items: &[Item]) -> BfResult<()> {
    for item in items {
        item.checked_difficulty()?;
    }
    check_unique_ids(items)
}

pub fn check_unique_ids(items: &[Item]) -> BfResult<()> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item.id) {
            return Err(BoardForgeError::Validation(format!(
                "duplicate item id {}",
                item.id
            )));
        }
    }
    Ok(())
}

/// Validated, typed view of one item's supply. The pipeline only ever works
/// on these, never on the caller's `Item`s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Supply {
    pub item_id: u32,
    pub name: String,
    pub difficulty: Difficulty,
    pub remaining: u32,
}

impl Supply {
    /// Filler-only placeholders have no name and can never fill a cell.
    #[inline(always)]
    pub fn is_placeable(&self) -> bool {
        !self.name.is_empty() && self.remaining > 0
    }
}

/// Validates every item and converts the list into owned supplies,
/// preserving order.
pub fn supplies_from(items: &[Item]) -> BfResult<Vec<Supply>> {
    validate_items(items)?;
    items
        .iter()
        .map(|item| {
            Ok(Supply {
                item_id: item.id,
                name: item.name.clone(),
                difficulty: item.checked_difficulty()?,
                remaining: item.count,
            })
        })
        .collect()
}

/// Total supply across all items.
pub fn total_count(items: &[Item]) -> u64 {
    items.iter().map(|i| i.count as u64).sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub width: usize,
    pub height: usize,
}

impl GridSize {
    pub fn new(width: usize, height: usize) -> BfResult<Self> {
        if width == 0 || height == 0 || width.checked_mul(height).is_none() {
            return Err(BoardForgeError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Square grid with side `floor(sqrt(total supply))`.
    pub fn square_for(items: &[Item]) -> BfResult<Self> {
        let side = isqrt(total_count(items)) as usize;
        Self::new(side, side)
    }

    #[inline(always)]
    pub fn cells(&self) -> usize {
        self.width * self.height
    }
}

fn isqrt(n: u64) -> u64 {
    let mut r = (n as f64).sqrt() as u64;
    while r * r > n {
        r -= 1;
    }
    while (r + 1) * (r + 1) <= n {
        r += 1;
    }
    r
}

/// One board slot. Filled cells hold a value copy of the item they consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Cell {
    Item {
        item_id: u32,
        name: String,
        difficulty: Difficulty,
    },
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Cell::Item { name, .. } => Some(name),
            Cell::Empty => None,
        }
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        match self {
            Cell::Item { difficulty, .. } => Some(*difficulty),
            Cell::Empty => None,
        }
    }

    pub fn item_id(&self) -> Option<u32> {
        match self {
            Cell::Item { item_id, .. } => Some(*item_id),
            Cell::Empty => None,
        }
    }
}

/// Row-major grid of cells. The only artifact that outlives a generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Cell>,
}

impl Board {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1))
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    pub fn filled_count(&self) -> usize {
        self.len() - self.empty_count()
    }

    /// Number of cells consumed from the item with `id`.
    pub fn count_for_item(&self, id: u32) -> usize {
        self.cells
            .iter()
            .filter(|c| c.item_id() == Some(id))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_difficulty_ordinals_roundtrip() {
        for d in Difficulty::iter() {
            assert_eq!(Difficulty::try_from(d.value()), Ok(d));
        }
        assert!(Difficulty::try_from(0).is_err());
        assert!(Difficulty::try_from(6).is_err());
    }

    #[test]
    fn test_square_for_floors_sqrt() {
        let items = vec![Item::new(0, "a", 10, 1), Item::new(1, "b", 7, 2)];
        let grid = GridSize::square_for(&items).unwrap();
        assert_eq!((grid.width, grid.height), (4, 4));
    }

    #[test]
    fn test_square_for_empty_supply_is_rejected() {
        let items = vec![Item::new(0, "a", 0, 1)];
        assert!(matches!(
            GridSize::square_for(&items),
            Err(BoardForgeError::InvalidDimensions { width: 0, height: 0 })
        ));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let items = vec![Item::new(3, "a", 1, 1), Item::new(3, "b", 1, 2)];
        assert!(matches!(
            validate_items(&items),
            Err(BoardForgeError::Validation(_))
        ));
        assert!(supplies_from(&items).is_err());
    }

    #[test]
    fn test_isqrt_perfect_squares() {
        assert_eq!(isqrt(0), 0);
        assert_eq!(isqrt(1), 1);
        assert_eq!(isqrt(24), 4);
        assert_eq!(isqrt(25), 5);
        assert_eq!(isqrt(26), 5);
    }
}
