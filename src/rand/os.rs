//! OS entropy source - buffered reads from /dev/urandom.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use zeroize::Zeroize;

use super::Source;

const DEVICE: &str = "/dev/urandom";
const BUF_SIZE: usize = 4096;

/// Cryptographically strong source backed by the kernel entropy device.
///
/// Draws are served from a refillable buffer so bulk generation does not
/// pay one syscall per character. Spent buffer contents are zeroized on
/// refill and on drop.
pub struct OsEntropy {
    file: File,
    buf: [u8; BUF_SIZE],
    pos: usize,
}

impl OsEntropy {
    pub fn is_available() -> bool {
        Path::new(DEVICE).exists()
    }

    /// Open the device. `None` when the host does not provide it or the
    /// first fill fails.
    pub fn open() -> Option<Self> {
        if !Self::is_available() {
            return None;
        }
        let mut src = Self {
            file: File::open(DEVICE).ok()?,
            buf: [0u8; BUF_SIZE],
            pos: BUF_SIZE,
        };
        src.refill().then_some(src)
    }

    fn refill(&mut self) -> bool {
        self.buf.zeroize();
        self.pos = 0;
        self.file.read_exact(&mut self.buf).is_ok()
    }
}

impl Source for OsEntropy {
    fn next_u32(&mut self) -> u32 {
        if self.pos + 4 > BUF_SIZE {
            // A read failure after a successful open leaves the zeroized
            // buffer in place rather than aborting the batch.
            let _ = self.refill();
        }
        let mut word = [0u8; 4];
        word.copy_from_slice(&self.buf[self.pos..self.pos + 4]);
        self.pos += 4;
        u32::from_le_bytes(word)
    }

    fn is_secure(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        DEVICE
    }
}

impl Drop for OsEntropy {
    fn drop(&mut self) {
        self.buf.zeroize();
    }
}
