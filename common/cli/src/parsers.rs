use std::ffi::OsStr;
use std::str::FromStr;

use clap::builder::TypedValueParser;
use clap::error::ErrorKind;
use clap::{Arg, Command, Error};
use plate::well::{ColumnNumber, WellCoordinate};

#[derive(Clone, Default)]
pub struct WellCoordinateParser {}

impl TypedValueParser for WellCoordinateParser {
    type Value = WellCoordinate;

    /// Parses a value in the format '<ROW><COLUMN>', e.g. 'A1', 'H12'
    fn parse_ref(&self, _cmd: &Command, _arg: Option<&Arg>, value: &OsStr) -> Result<Self::Value, Error> {
        let value = value
            .to_str()
            .ok_or_else(|| Error::raw(ErrorKind::InvalidValue, "Invalid argument encoding"))?;

        WellCoordinate::from_str(value).map_err(|error| Error::raw(ErrorKind::InvalidValue, error.to_string()))
    }
}

#[derive(Clone, Default)]
pub struct ColumnNumberParser {}

impl TypedValueParser for ColumnNumberParser {
    type Value = ColumnNumber;

    /// Parses a 1-based column number, '1' to '12'
    fn parse_ref(&self, _cmd: &Command, _arg: Option<&Arg>, value: &OsStr) -> Result<Self::Value, Error> {
        let value = value
            .to_str()
            .ok_or_else(|| Error::raw(ErrorKind::InvalidValue, "Invalid argument encoding"))?;

        ColumnNumber::from_str(value).map_err(|error| Error::raw(ErrorKind::InvalidValue, error.to_string()))
    }
}
