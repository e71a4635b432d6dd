//! Table-driven CRC-16/CCITT checksums for HDLC-style links.
//! Provides the CCITT (LSB-first) and CCITT-FALSE (MSB-first) conventions,
//! a runtime variant selector, and a streaming digest.

pub mod crc;
pub mod digest;
pub mod variant;

pub use crc::{
    CRC_CCITT_FALSE_INIT, CRC_CCITT_FALSE_TABLE, CRC_CCITT_INIT, CRC_CCITT_TABLE, crc_ccitt,
    crc_ccitt_byte, crc_ccitt_false, crc_ccitt_false_byte,
};
pub use digest::{Digest, checksum_reader};
pub use variant::{ParseVariantError, Variant};
