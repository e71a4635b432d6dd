/// CRC-16/CCITT generator polynomial x^16 + x^12 + x^5 + 1 (MSB-first).
pub const CRC_CCITT_POLY: u16 = 0x1021;

/// The same polynomial bit-reversed, for the LSB-first (right shifting) variant.
pub const CRC_CCITT_POLY_REFLECTED: u16 = 0x8408;

/// Seed used by the right shifting CCITT variant (HDLC/Kermit style).
pub const CRC_CCITT_INIT: u16 = 0x0000;

/// Seed used by CCITT-FALSE.
pub const CRC_CCITT_FALSE_INIT: u16 = 0xFFFF;

/// Lookup table for [`crc_ccitt_byte`], LSB-first.
pub const CRC_CCITT_TABLE: [u16; 256] = reflected_table(CRC_CCITT_POLY_REFLECTED);

/// Lookup table for [`crc_ccitt_false_byte`], MSB-first.
pub const CRC_CCITT_FALSE_TABLE: [u16; 256] = normal_table(CRC_CCITT_POLY);

const fn reflected_table(poly: u16) -> [u16; 256] {
    let mut table = [0u16; 256];
    let mut i = 0usize;

    while i < 256 {
        let mut crc = i as u16;
        let mut bit = 0;
        while bit < 8 {
            if (crc & 0x0001) != 0 {
                crc = (crc >> 1) ^ poly;
            } else {
                crc >>= 1;
            }
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }

    table
}

const fn normal_table(poly: u16) -> [u16; 256] {
    let mut table = [0u16; 256];
    let mut i = 0usize;

    while i < 256 {
        // Byte goes into the top 8 bits of the register.
        let mut crc = (i as u16) << 8;
        let mut bit = 0;
        while bit < 8 {
            if (crc & 0x8000) != 0 {
                crc = (crc << 1) ^ poly;
            } else {
                crc <<= 1;
            }
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }

    table
}

/// Feed one byte into a CCITT accumulator.
#[inline]
#[must_use]
pub const fn crc_ccitt_byte(crc: u16, byte: u8) -> u16 {
    (crc >> 8) ^ CRC_CCITT_TABLE[((crc ^ byte as u16) & 0xFF) as usize]
}

/// Feed one byte into a CCITT-FALSE accumulator.
#[inline]
#[must_use]
pub const fn crc_ccitt_false_byte(crc: u16, byte: u8) -> u16 {
    (crc << 8) ^ CRC_CCITT_FALSE_TABLE[((crc >> 8) ^ byte as u16) as usize]
}

/// CRC-16/CCITT over `data`, continuing from `crc`.
///
/// Pass [`CRC_CCITT_INIT`] to start a fresh checksum, or the result of a
/// previous call to continue one.
#[must_use]
pub fn crc_ccitt(crc: u16, data: &[u8]) -> u16 {
    data.iter().fold(crc, |crc, &byte| crc_ccitt_byte(crc, byte))
}

/// CRC-16/CCITT-FALSE over `data`, continuing from `crc`.
///
/// Pass [`CRC_CCITT_FALSE_INIT`] to start a fresh checksum.
#[must_use]
pub fn crc_ccitt_false(crc: u16, data: &[u8]) -> u16 {
    data.iter().fold(crc, |crc, &byte| crc_ccitt_false_byte(crc, byte))
}
