use clap::ValueEnum;
use plate::well::RowLetter;

/// Args decouple the CLI arg handling requirements from the internal data structures

#[derive(Debug, Clone)]
#[derive(ValueEnum)]
#[value(rename_all = "UPPER")]
pub enum RowLetterArg {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl RowLetterArg {
    pub fn to_row_letter(&self) -> RowLetter {
        match self {
            RowLetterArg::A => RowLetter::A,
            RowLetterArg::B => RowLetter::B,
            RowLetterArg::C => RowLetter::C,
            RowLetterArg::D => RowLetter::D,
            RowLetterArg::E => RowLetter::E,
            RowLetterArg::F => RowLetter::F,
            RowLetterArg::G => RowLetter::G,
            RowLetterArg::H => RowLetter::H,
        }
    }
}
