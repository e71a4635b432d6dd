use std::io;
use std::io::Read;

use log::{debug, trace};

use crate::variant::Variant;

const READ_CHUNK: usize = 8 * 1024;

/// Running CRC state for streaming input.
///
/// This is a plain value: copy it to fork a checksum, or hand `crc()` to a
/// later [`Digest::with_seed`] to resume.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Digest {
    variant: Variant,
    seed: u16,
    crc: u16,
}

impl Digest {
    #[must_use]
    pub const fn new(variant: Variant) -> Self {
        Self::with_seed(variant, variant.init())
    }

    #[must_use]
    pub const fn with_seed(variant: Variant, seed: u16) -> Self {
        Self {
            variant,
            seed,
            crc: seed,
        }
    }

    pub fn update(&mut self, data: &[u8]) {
        self.crc = self.variant.update(self.crc, data);
    }

    #[inline]
    pub fn update_byte(&mut self, byte: u8) {
        self.crc = self.variant.update_byte(self.crc, byte);
    }

    pub const fn crc(&self) -> u16 {
        self.crc
    }

    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// Back to the seed this digest was created with.
    pub fn reset(&mut self) {
        self.crc = self.seed;
    }
}

impl io::Write for Digest {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Stream `reader` to EOF through a `variant` accumulator seeded with `seed`.
pub fn checksum_reader<R: Read>(variant: Variant, seed: u16, mut reader: R) -> io::Result<u16> {
    let mut digest = Digest::with_seed(variant, seed);
    let mut buf = [0u8; READ_CHUNK];
    let mut total: u64 = 0;

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        digest.update(&buf[..n]);
        total += n as u64;
        trace!("{variant}: {n} bytes, crc=0x{:04X}", digest.crc());
    }

    debug!(
        "{variant}: {total} bytes from seed 0x{seed:04X} -> 0x{:04X}",
        digest.crc()
    );
    Ok(digest.crc())
}
