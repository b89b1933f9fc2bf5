use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde_with::{DeserializeFromStr, SerializeDisplay};
use thiserror::Error;

/// A plate row, 'A' (top) to 'H' (bottom).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(strum_macros::Display, strum_macros::EnumCount, strum_macros::EnumIter, strum_macros::EnumString)]
pub enum RowLetter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl RowLetter {
    /// 0-based row index, 'A' = 0.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// A 1-based plate column number, 1 (left) to 12 (right).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ColumnNumber(u8);

impl ColumnNumber {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 12;

    pub fn new(number: u8) -> Result<Self, WellCoordinateError> {
        match number {
            Self::MIN..=Self::MAX => Ok(Self(number)),
            _ => Err(WellCoordinateError::ColumnOutOfRange(number)),
        }
    }

    /// All column numbers, 1 first.
    pub fn iter() -> impl Iterator<Item = ColumnNumber> + Clone {
        (Self::MIN..=Self::MAX).map(ColumnNumber)
    }

    pub fn number(&self) -> u8 {
        self.0
    }

    /// 0-based column index, column 1 = 0.
    pub fn index(&self) -> usize {
        (self.0 - Self::MIN) as usize
    }
}

impl TryFrom<u8> for ColumnNumber {
    type Error = WellCoordinateError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::new(number)
    }
}

impl From<ColumnNumber> for u8 {
    fn from(column: ColumnNumber) -> Self {
        column.0
    }
}

impl FromStr for ColumnNumber {
    type Err = WellCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: u8 = s
            .parse()
            .map_err(|_| WellCoordinateError::InvalidCoordinate(s.to_string()))?;
        Self::new(number)
    }
}

impl Display for ColumnNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single plate position.
///
/// Canonical form is the row letter followed by the 1-based column number,
/// no separator, e.g. `A1`, `H12`.
///
/// The natural ordering is row-major; see [`WellCoordinate::cmp_column_major`]
/// for the column-major ordering.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[derive(DeserializeFromStr, SerializeDisplay)]
pub struct WellCoordinate {
    pub row: RowLetter,
    pub column: ColumnNumber,
}

impl WellCoordinate {
    pub fn new(row: RowLetter, column: ColumnNumber) -> Self {
        Self {
            row,
            column,
        }
    }

    /// Column-major ordering, column 1 before column 2, row 'A' before 'B'
    /// within a column.
    pub fn cmp_column_major(&self, other: &Self) -> Ordering {
        self.column
            .cmp(&other.column)
            .then(self.row.cmp(&other.row))
    }
}

impl Ord for WellCoordinate {
    /// Row-major ordering, row 'A' before 'B', column 1 before column 2
    /// within a row.
    fn cmp(&self, other: &Self) -> Ordering {
        self.row
            .cmp(&other.row)
            .then(self.column.cmp(&other.column))
    }
}

impl PartialOrd for WellCoordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for WellCoordinate {
    type Err = WellCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() < 2 || !s.is_char_boundary(1) {
            return Err(WellCoordinateError::InvalidCoordinate(s.to_string()));
        }

        let (letter, number) = s.split_at(1);

        let row =
            RowLetter::from_str(letter).map_err(|_| WellCoordinateError::RowOutOfRange(letter.to_string()))?;
        let column = ColumnNumber::from_str(number)?;

        Ok(Self {
            row,
            column,
        })
    }
}

impl Display for WellCoordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.row, self.column)
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum WellCoordinateError {
    #[error("Invalid well coordinate. value: '{0}'")]
    InvalidCoordinate(String),
    #[error("Row letter out of range, expected 'A' to 'H'. value: '{0}'")]
    RowOutOfRange(String),
    #[error("Column number out of range, expected 1 to 12. value: {0}")]
    ColumnOutOfRange(u8),
}
