use thiserror::Error;

/// Number of stickers on a cube, 9 per face.
pub const FACELET_COUNT: usize = 54;

// face letters and color letters in both cases. R and B show up in both sets
// (right/red, back/blue), kept as-is
const ALLOWED: &str = "URFDLBurfdlbWYROGBwyrogb";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidFormat {
    #[error("Cube string must be exactly 54 characters.")]
    WrongLength(usize),
    #[error("Cube contains invalid characters.")]
    InvalidCharacter { ch: char, index: usize },
}

/// A validated facelet string: 54 characters from the allowed alphabet.
///
/// Nothing beyond character membership is checked, so a string of 54 `U`s
/// is as valid as a real scramble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceletString(String);

impl FaceletString {
    pub fn parse(cube: &str) -> Result<Self, InvalidFormat> {
        let len = cube.chars().count();
        if len != FACELET_COUNT {
            return Err(InvalidFormat::WrongLength(len));
        }

        if let Some((index, ch)) = cube.chars().enumerate().find(|(_, c)| !ALLOWED.contains(*c)) {
            return Err(InvalidFormat::InvalidCharacter { ch, index });
        }

        Ok(Self(cube.to_owned()))
    }
}

impl AsRef<str> for FaceletString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
