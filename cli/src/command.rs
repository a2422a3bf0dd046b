use minefield_core::Coord2;
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    NewGame,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum ParseCommandError {
    #[error("Empty input")]
    Empty,
    #[error("Unknown command `{0}`")]
    Unknown(String),
    #[error("Expected `<row> <col>` after the command")]
    MissingCoords,
    #[error("`{0}` is not a valid coordinate")]
    InvalidCoord(String),
    #[error("Unexpected trailing input `{0}`")]
    Trailing(String),
}

impl Command {
    /// Parses one input line: `r <row> <col>`, `f <row> <col>`, `n` or `q`.
    pub(crate) fn parse(line: &str) -> Result<Self, ParseCommandError> {
        let mut words = line.split_whitespace();
        let head = words.next().ok_or(ParseCommandError::Empty)?;

        let command = match head.to_ascii_lowercase().as_str() {
            "r" | "reveal" => Self::Reveal(parse_coords(&mut words)?),
            "f" | "flag" => Self::Flag(parse_coords(&mut words)?),
            "n" | "new" => Self::NewGame,
            "q" | "quit" => Self::Quit,
            _ => return Err(ParseCommandError::Unknown(head.to_string())),
        };

        match words.next() {
            Some(extra) => Err(ParseCommandError::Trailing(extra.to_string())),
            None => Ok(command),
        }
    }
}

fn parse_coords<'a>(words: &mut impl Iterator<Item = &'a str>) -> Result<Coord2, ParseCommandError> {
    let mut next = || -> Result<u8, ParseCommandError> {
        let word = words.next().ok_or(ParseCommandError::MissingCoords)?;
        word.parse()
            .map_err(|_| ParseCommandError::InvalidCoord(word.to_string()))
    };
    let row = next()?;
    let col = next()?;
    Ok((row, col))
}
