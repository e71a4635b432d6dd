use std::fmt;
use std::str::FromStr;

use crate::crc::{
    CRC_CCITT_FALSE_INIT, CRC_CCITT_FALSE_TABLE, CRC_CCITT_INIT, CRC_CCITT_TABLE, crc_ccitt,
    crc_ccitt_byte, crc_ccitt_false, crc_ccitt_false_byte,
};

/// Which CCITT convention to apply. The two are not numerically equivalent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// LSB-first, right shifting (HDLC FCS / Kermit).
    Ccitt,
    /// MSB-first, left shifting.
    CcittFalse,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Ccitt, Variant::CcittFalse];

    /// Reference seed for this variant.
    pub const fn init(self) -> u16 {
        match self {
            Variant::Ccitt => CRC_CCITT_INIT,
            Variant::CcittFalse => CRC_CCITT_FALSE_INIT,
        }
    }

    pub const fn table(self) -> &'static [u16; 256] {
        match self {
            Variant::Ccitt => &CRC_CCITT_TABLE,
            Variant::CcittFalse => &CRC_CCITT_FALSE_TABLE,
        }
    }

    #[inline]
    #[must_use]
    pub const fn update_byte(self, crc: u16, byte: u8) -> u16 {
        match self {
            Variant::Ccitt => crc_ccitt_byte(crc, byte),
            Variant::CcittFalse => crc_ccitt_false_byte(crc, byte),
        }
    }

    #[must_use]
    pub fn update(self, crc: u16, data: &[u8]) -> u16 {
        match self {
            Variant::Ccitt => crc_ccitt(crc, data),
            Variant::CcittFalse => crc_ccitt_false(crc, data),
        }
    }

    /// Checksum of `data` starting from [`Variant::init`].
    #[must_use]
    pub fn checksum(self, data: &[u8]) -> u16 {
        self.update(self.init(), data)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Variant::Ccitt => "ccitt",
            Variant::CcittFalse => "ccitt-false",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseVariantError(String);

impl fmt::Display for ParseVariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown CRC variant '{}' (expected 'ccitt' or 'ccitt-false')",
            self.0
        )
    }
}

impl std::error::Error for ParseVariantError {}

impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ccitt" | "kermit" => Ok(Variant::Ccitt),
            "ccitt-false" | "ccitt_false" | "false" => Ok(Variant::CcittFalse),
            _ => Err(ParseVariantError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_seeds() {
        assert_eq!(Variant::Ccitt.init(), 0x0000);
        assert_eq!(Variant::CcittFalse.init(), 0xFFFF);
    }

    #[test]
    fn checksum_uses_reference_seed() {
        assert_eq!(Variant::Ccitt.checksum(b"123456789"), 0x2189);
        assert_eq!(Variant::CcittFalse.checksum(b"123456789"), 0x29B1);
        assert_eq!(Variant::CcittFalse.checksum(b""), 0xFFFF);
    }

    #[test]
    fn update_byte_dispatches_to_matching_table() {
        for variant in Variant::ALL {
            for i in 0..=u8::MAX {
                assert_eq!(variant.update_byte(0, i), variant.table()[usize::from(i)]);
            }
        }
    }

    #[test]
    fn parse_names_round_trip_through_display() {
        for variant in Variant::ALL {
            assert_eq!(variant.to_string().parse::<Variant>(), Ok(variant));
        }
        assert_eq!("KERMIT".parse::<Variant>(), Ok(Variant::Ccitt));
        assert_eq!(" ccitt_false ".parse::<Variant>(), Ok(Variant::CcittFalse));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "crc32".parse::<Variant>().unwrap_err();
        assert!(err.to_string().contains("crc32"));
    }
}
