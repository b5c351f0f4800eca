//! Supported regions and their formatting tables.
//!
//! A [`Region`] decides how addresses and phone numbers are laid out and which
//! alphabet the corruption engine draws inserted characters from.
//!
//! | Region  | Address                              | Phone                |
//! |---------|--------------------------------------|----------------------|
//! | USA     | `{street}, {city}, {state} {zip}`    | `(+1) ddd-ddd-dddd`  |
//! | Germany | `{street} {city} {state}`            | `+49-ddd-ddd-dddd`   |
//! | Poland  | `{street}, {city}, {state} {zip}`    | `+48-ddd-ddd-dddd`   |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SynthesisError;

const USA_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";
const GERMANY_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzäöüß";
const POLAND_ALPHABET: &str = "aąbcćdeęfghijklłmnńoópqrsśtuvwxyzźż";

/// The closed set of regions records can be generated for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    /// United States, English locale.
    #[default]
    #[serde(rename = "USA")]
    Usa,
    /// Germany, German locale.
    Germany,
    /// Poland, Polish locale.
    Poland,
}

impl Region {
    /// All supported regions in display order.
    pub const ALL: [Self; 3] = [Self::Usa, Self::Germany, Self::Poland];

    /// Returns the canonical region name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Usa => "USA",
            Self::Germany => "Germany",
            Self::Poland => "Poland",
        }
    }

    /// Returns the lowercase alphabet used for inserted characters.
    ///
    /// Each alphabet includes the region's diacritics, so Polish records can
    /// pick up a stray `ł` and German ones an `ß`.
    ///
    /// # Example
    ///
    /// ```
    /// use identity_forge::Region;
    ///
    /// assert_eq!(Region::Usa.alphabet().chars().count(), 26);
    /// assert!(Region::Germany.alphabet().contains('ß'));
    /// assert!(Region::Poland.alphabet().contains('ł'));
    /// ```
    #[must_use]
    pub const fn alphabet(self) -> &'static str {
        match self {
            Self::Usa => USA_ALPHABET,
            Self::Germany => GERMANY_ALPHABET,
            Self::Poland => POLAND_ALPHABET,
        }
    }

    /// Joins address parts in the region's order and punctuation.
    ///
    /// # Example
    ///
    /// ```
    /// use identity_forge::{AddressParts, Region};
    ///
    /// let parts = AddressParts {
    ///     street: "Main St".to_owned(),
    ///     city: "Springfield".to_owned(),
    ///     state: "IL".to_owned(),
    ///     zip: "62704".to_owned(),
    /// };
    ///
    /// assert_eq!(
    ///     Region::Usa.format_address(&parts),
    ///     "Main St, Springfield, IL 62704"
    /// );
    /// ```
    #[must_use]
    pub fn format_address(self, parts: &AddressParts) -> String {
        let AddressParts {
            street,
            city,
            state,
            zip,
        } = parts;
        match self {
            // German addresses carry no commas and no postal code.
            Self::Germany => format!("{street} {city} {state}"),
            Self::Usa | Self::Poland => format!("{street}, {city}, {state} {zip}"),
        }
    }

    /// Prefixes and groups a phone number for the region.
    ///
    /// # Example
    ///
    /// ```
    /// use identity_forge::{PhoneNumber, Region};
    ///
    /// let phone = PhoneNumber {
    ///     area: "555".to_owned(),
    ///     exchange: "010".to_owned(),
    ///     line: "4477".to_owned(),
    /// };
    ///
    /// assert_eq!(Region::Usa.format_phone(&phone), "(+1) 555-010-4477");
    /// assert_eq!(Region::Poland.format_phone(&phone), "+48-555-010-4477");
    /// ```
    #[must_use]
    pub fn format_phone(self, phone: &PhoneNumber) -> String {
        let PhoneNumber {
            area,
            exchange,
            line,
        } = phone;
        match self {
            Self::Usa => format!("(+1) {area}-{exchange}-{line}"),
            Self::Germany => format!("+49-{area}-{exchange}-{line}"),
            Self::Poland => format!("+48-{area}-{exchange}-{line}"),
        }
    }

    /// Builds the street line from a street name and building number.
    #[must_use]
    pub fn format_street(self, street_name: &str, building: &str) -> String {
        match self {
            Self::Usa => format!("{building} {street_name}"),
            Self::Germany => format!("{street_name} {building}"),
            Self::Poland => format!("ul. {street_name} {building}"),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Region {
    type Err = SynthesisError;

    /// Parses a region name case-insensitively.
    ///
    /// Unknown names are rejected rather than defaulted to [`Region::Usa`].
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "usa" | "us" => Ok(Self::Usa),
            "germany" | "de" => Ok(Self::Germany),
            "poland" | "pl" => Ok(Self::Poland),
            _ => Err(SynthesisError::UnknownRegion {
                value: value.to_owned(),
            }),
        }
    }
}

/// Address components before regional formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressParts {
    /// Street line, including the building number.
    pub street: String,
    /// City name.
    pub city: String,
    /// State, province or voivodeship.
    pub state: String,
    /// Postal code. Unused by German formatting.
    pub zip: String,
}

/// Phone number digit groups (3-3-4) before regional formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber {
    /// First group of three digits.
    pub area: String,
    /// Second group of three digits.
    pub exchange: String,
    /// Final group of four digits.
    pub line: String,
}
