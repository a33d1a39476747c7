use std::{error::Error, fmt};

use light_cycle_core::ExcludedRegion;
use tracing::warn;

/// Number of characters encoding a single widget rectangle.
const GROUP_LENGTH: usize = 4;

/// Decodes the compact widget location string into excluded regions.
///
/// Every group of four decimal digits encodes `left`, `top`, `right` and
/// `bottom` in icon-grid units. A group containing anything other than a digit
/// is skipped with a warning.
pub(crate) fn decode(value: &str) -> Result<Vec<ExcludedRegion>, WidgetLocationsError> {
    let trimmed = value.trim();
    let characters: Vec<char> = trimmed.chars().collect();
    if characters.len() % GROUP_LENGTH != 0 {
        return Err(WidgetLocationsError::InvalidLength(characters.len()));
    }

    let mut regions = Vec::with_capacity(characters.len() / GROUP_LENGTH);
    for group in characters.chunks(GROUP_LENGTH) {
        match parse_group(group) {
            Some([left, top, right, bottom]) => {
                regions.push(ExcludedRegion::new(left, top, right, bottom));
            }
            None => {
                let group: String = group.iter().collect();
                warn!(group = %group, "skipping invalid widget rectangle");
            }
        }
    }
    Ok(regions)
}

fn parse_group(group: &[char]) -> Option<[u32; GROUP_LENGTH]> {
    let mut digits = [0; GROUP_LENGTH];
    for (slot, character) in digits.iter_mut().zip(group) {
        *slot = character.to_digit(10)?;
    }
    Some(digits)
}

/// Errors that can occur while decoding widget location strings.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum WidgetLocationsError {
    /// The string length was not a multiple of four characters.
    InvalidLength(usize),
}

impl fmt::Display for WidgetLocationsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(length) => write!(
                f,
                "widget locations must be groups of {GROUP_LENGTH} digits, got {length} characters"
            ),
        }
    }
}

impl Error for WidgetLocationsError {}
