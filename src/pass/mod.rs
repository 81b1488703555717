//! Password generation core and delivery.

pub mod charset;
mod generate;
pub mod output;

pub use generate::{
    MAX_COUNT, MAX_LENGTH, MIN_COUNT, MIN_LENGTH, generate_batch, sample, satisfies_categories,
};

use std::io::Write;

use zeroize::Zeroize;

const WRITER_BUF_SIZE: usize = 8 * 1024;

/// Buffered writer that zeroizes its buffer on flush and drop.
///
/// Passwords pass through here on their way to stdout or a file; the
/// intermediate copies must not linger in freed heap memory.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> SecureBufWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(WRITER_BUF_SIZE),
        }
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
        if self.buf.len() + data.len() > WRITER_BUF_SIZE {
            self.flush()?;
        }
        if data.len() > WRITER_BUF_SIZE {
            return self.inner.write(data);
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        let result = self.inner.write_all(&self.buf);
        self.buf.zeroize();
        result?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        let _ = self.inner.write_all(&self.buf);
        self.buf.zeroize();
        let _ = self.inner.flush();
    }
}
