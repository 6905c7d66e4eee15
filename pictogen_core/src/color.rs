use std::fmt;

use crate::errors::IdenticonError;

/// Fill color of an identicon
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl fmt::Display for Rgb {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "#{:02x}{:02x}{:02x}",
            self.red,
            self.green,
            self.blue,
        )
    }
}

/// Reads the first three digest bytes as an RGB color
pub fn pick_color(digest: &[u8]) -> Result<Rgb, IdenticonError> {
    match digest {
        [red, green, blue, ..] => Ok(Rgb {
            red: *red,
            green: *green,
            blue: *blue,
        }),
        _ => Err(IdenticonError::MalformedDigest),
    }
}
