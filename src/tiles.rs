//! Tile distribution: bag frequencies and letter point values.
//!
//! Source data is authored as two literal tables keyed by symbol
//! character, mirroring the boxed game's tile listing: how many tiles of
//! each letter the bag holds and what each letter scores. Everything else
//! (total bag size, the flattened letter-value lookup) is derived.

use crate::error::{GenError, GenResult, SpecTable};

/// Number of letters in the alphabet.
pub const NUM_LETTERS: usize = 26;

/// Number of tile symbols: 26 letters, the blank, and an unused empty
/// placeholder slot.
pub const NUM_TILES: usize = NUM_LETTERS + 2;

/// Length of the flattened letter-value table: 26 letter slots, 26
/// replicated blank slots, and one trailing blank slot.
///
/// The consuming engine addresses this table directly by character-code
/// offset without branching on case or tile kind, which is why the blank
/// value is replicated rather than looked up.
pub const LETTER_VALUE_SLOTS: usize = NUM_LETTERS * 2 + 1;

/// Per-letter tile counts in the standard bag (98 letter tiles plus two
/// blanks; the empty placeholder holds no tiles).
const FREQUENCIES: &[(char, u8)] = &[
    ('A', 9),
    ('B', 2),
    ('C', 2),
    ('D', 4),
    ('E', 12),
    ('F', 2),
    ('G', 3),
    ('H', 2),
    ('I', 9),
    ('J', 1),
    ('K', 1),
    ('L', 4),
    ('M', 2),
    ('N', 6),
    ('O', 8),
    ('P', 2),
    ('Q', 1),
    ('R', 6),
    ('S', 4),
    ('T', 6),
    ('U', 4),
    ('V', 2),
    ('W', 2),
    ('X', 1),
    ('Y', 2),
    ('Z', 1),
    ('?', 2),
    (' ', 0),
];

/// Point value per letter, grouped by scoring tier. The blank is worth
/// nothing in every position.
const VALUES: &[(char, u8)] = &[
    ('?', 0),
    ('E', 1),
    ('A', 1),
    ('I', 1),
    ('O', 1),
    ('N', 1),
    ('R', 1),
    ('T', 1),
    ('L', 1),
    ('S', 1),
    ('U', 1),
    ('D', 2),
    ('G', 2),
    ('B', 3),
    ('C', 3),
    ('M', 3),
    ('P', 3),
    ('F', 4),
    ('H', 4),
    ('V', 4),
    ('W', 4),
    ('Y', 4),
    ('K', 5),
    ('J', 8),
    ('X', 8),
    ('Q', 10),
    ('Z', 10),
];

/// A tile symbol: one of the 26 letters, the blank wildcard, or the
/// unused empty placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile(u8);

impl Tile {
    /// The blank wildcard tile.
    pub const BLANK: Tile = Tile(26);

    /// The unused empty placeholder slot.
    pub const EMPTY: Tile = Tile(27);

    /// Map a source-table symbol to its tile.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // symbol is ASCII here
    pub const fn from_symbol(symbol: char) -> Option<Tile> {
        match symbol {
            'A'..='Z' => Some(Tile(symbol as u8 - b'A')),
            '?' => Some(Tile::BLANK),
            ' ' => Some(Tile::EMPTY),
            _ => None,
        }
    }

    /// Tile for a zero-based letter index (`0..26` for `A..Z`), or
    /// `None` past the letters.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // index < 26
    pub const fn letter(index: usize) -> Option<Tile> {
        if index < NUM_LETTERS {
            Some(Tile(index as u8))
        } else {
            None
        }
    }

    /// Index into the frequency and value tables (`A` = 0 .. `Z` = 25,
    /// blank = 26, empty = 27).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// True for the 26 letter tiles.
    #[must_use]
    pub const fn is_letter(self) -> bool {
        (self.0 as usize) < NUM_LETTERS
    }

    /// The symbol character: the letter itself, `'?'` for blank, `' '`
    /// for empty.
    #[must_use]
    pub const fn symbol(self) -> char {
        if self.is_letter() {
            (b'A' + self.0) as char
        } else if self.0 as usize == NUM_LETTERS {
            '?'
        } else {
            ' '
        }
    }

    /// Identifier emitted for this tile in the generated enum and bag
    /// statements (`A`..`Z`, `Blank`, `Empty`).
    #[must_use]
    pub fn enum_name(self) -> String {
        if self.is_letter() {
            self.symbol().to_string()
        } else if self == Tile::BLANK {
            "Blank".to_string()
        } else {
            "Empty".to_string()
        }
    }

    /// All 28 tiles in table order.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // i < 28
    pub fn all() -> impl Iterator<Item = Tile> {
        (0..NUM_TILES).map(|i| Tile(i as u8))
    }
}

/// Validated tile distribution: bag frequencies and point values for
/// every tile symbol.
///
/// Built once per generation run by [`TileDistribution::standard`];
/// immutable afterward.
#[derive(Debug, Clone, Copy)]
pub struct TileDistribution {
    frequencies: [u8; NUM_TILES],
    values: [u8; NUM_TILES],
}

impl TileDistribution {
    /// Build the standard distribution from the compiled-in tables.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::MissingSpec`] if a letter is absent from
    /// either source table.
    pub fn standard() -> GenResult<Self> {
        Self::from_tables(FREQUENCIES, VALUES)
    }

    /// Build a distribution from explicit frequency and value tables.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::MissingSpec`] if any letter `A..Z` is absent
    /// from either table.
    pub fn from_tables(
        frequencies: &[(char, u8)],
        values: &[(char, u8)],
    ) -> GenResult<Self> {
        let mut freq = [0u8; NUM_TILES];
        let mut val = [0u8; NUM_TILES];
        let mut freq_seen = [false; NUM_TILES];
        let mut val_seen = [false; NUM_TILES];

        for &(symbol, count) in frequencies {
            if let Some(tile) = Tile::from_symbol(symbol) {
                freq[tile.index()] = count;
                freq_seen[tile.index()] = true;
            }
        }
        for &(symbol, value) in values {
            if let Some(tile) = Tile::from_symbol(symbol) {
                val[tile.index()] = value;
                val_seen[tile.index()] = true;
            }
        }

        for letter in Tile::all().filter(|t| t.is_letter()) {
            let index = letter.index();
            if !freq_seen[index] {
                return Err(GenError::MissingSpec {
                    letter: letter.symbol(),
                    table: SpecTable::Frequencies,
                });
            }
            if !val_seen[index] {
                return Err(GenError::MissingSpec {
                    letter: letter.symbol(),
                    table: SpecTable::Values,
                });
            }
        }
        if !freq_seen[Tile::BLANK.index()] {
            return Err(GenError::MissingSpec {
                letter: '?',
                table: SpecTable::Frequencies,
            });
        }

        // The empty placeholder holds no tiles regardless of the table.
        freq[Tile::EMPTY.index()] = 0;
        val[Tile::EMPTY.index()] = 0;

        Ok(Self {
            frequencies: freq,
            values: val,
        })
    }

    /// Number of physical tiles bearing this symbol in the bag.
    #[must_use]
    pub const fn frequency(&self, tile: Tile) -> u8 {
        self.frequencies[tile.index()]
    }

    /// Score contribution of this tile when played (blank scores 0).
    #[must_use]
    pub const fn point_value(&self, tile: Tile) -> u8 {
        self.values[tile.index()]
    }

    /// Total tile count: sum over the 26 letters and the blank. The
    /// empty placeholder contributes nothing.
    #[must_use]
    pub fn total_tiles(&self) -> u32 {
        Tile::all()
            .filter(|&t| t != Tile::EMPTY)
            .map(|t| u32::from(self.frequency(t)))
            .sum()
    }

    /// The flattened letter-value lookup table: 26 letter values, then
    /// 26 replicated blank slots, then one trailing blank slot.
    #[must_use]
    pub fn letter_values(&self) -> [u8; LETTER_VALUE_SLOTS] {
        let blank = self.point_value(Tile::BLANK);
        let mut table = [blank; LETTER_VALUE_SLOTS];
        for letter in Tile::all().filter(|t| t.is_letter()) {
            table[letter.index()] = self.point_value(letter);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist() -> TileDistribution {
        TileDistribution::standard().unwrap()
    }

    #[test]
    fn test_total_tiles() {
        let dist = dist();
        assert_eq!(dist.total_tiles(), 100);
        // 98 letter tiles plus the two blanks.
        let letters: u32 = Tile::all()
            .filter(|t| t.is_letter())
            .map(|t| u32::from(dist.frequency(t)))
            .sum();
        assert_eq!(letters, 98);
        assert_eq!(dist.frequency(Tile::BLANK), 2);
        assert_eq!(dist.frequency(Tile::EMPTY), 0);
    }

    #[test]
    fn test_known_values() {
        let dist = dist();
        let value_of = |c: char| dist.point_value(Tile::from_symbol(c).unwrap());
        assert_eq!(value_of('E'), 1);
        assert_eq!(value_of('D'), 2);
        assert_eq!(value_of('K'), 5);
        assert_eq!(value_of('Q'), 10);
        assert_eq!(value_of('Z'), 10);
        assert_eq!(value_of('?'), 0);
    }

    #[test]
    fn test_letter_values_layout() {
        let table = dist().letter_values();
        assert_eq!(table.len(), 53);
        assert_eq!(table[0], 1); // A
        assert_eq!(table[25], 10); // Z
        // Every blank slot, replicated and trailing, is zero.
        assert!(table[NUM_LETTERS..].iter().all(|&v| v == 0));
    }

    #[test]
    fn test_symbol_round_trip() {
        for tile in Tile::all() {
            assert_eq!(Tile::from_symbol(tile.symbol()), Some(tile));
        }
        assert_eq!(Tile::from_symbol('a'), None);
        assert_eq!(Tile::from_symbol('!'), None);
    }

    #[test]
    fn test_enum_names() {
        assert_eq!(Tile::from_symbol('A').unwrap().enum_name(), "A");
        assert_eq!(Tile::BLANK.enum_name(), "Blank");
        assert_eq!(Tile::EMPTY.enum_name(), "Empty");
    }

    #[test]
    fn test_missing_letter_rejected() {
        // Drop 'Q' from the frequency table.
        let freqs: Vec<(char, u8)> = FREQUENCIES
            .iter()
            .copied()
            .filter(|&(c, _)| c != 'Q')
            .collect();
        let err = TileDistribution::from_tables(&freqs, VALUES).unwrap_err();
        assert_eq!(
            err,
            GenError::MissingSpec {
                letter: 'Q',
                table: SpecTable::Frequencies,
            }
        );

        // Drop 'Z' from the value table.
        let values: Vec<(char, u8)> = VALUES
            .iter()
            .copied()
            .filter(|&(c, _)| c != 'Z')
            .collect();
        let err = TileDistribution::from_tables(FREQUENCIES, &values).unwrap_err();
        assert_eq!(
            err,
            GenError::MissingSpec {
                letter: 'Z',
                table: SpecTable::Values,
            }
        );
    }

    #[test]
    fn test_missing_blank_frequency_rejected() {
        let freqs: Vec<(char, u8)> = FREQUENCIES
            .iter()
            .copied()
            .filter(|&(c, _)| c != '?')
            .collect();
        let err = TileDistribution::from_tables(&freqs, VALUES).unwrap_err();
        assert_eq!(
            err,
            GenError::MissingSpec {
                letter: '?',
                table: SpecTable::Frequencies,
            }
        );
    }
}
