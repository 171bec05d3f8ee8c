//! Password output.

use std::io::{self, Write};

use zeroize::{Zeroize, Zeroizing};

const BUF_CAPACITY: usize = 8 * 1024;

/// Buffered writer that wipes its staging buffer after every flush and on drop.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> SecureBufWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(BUF_CAPACITY),
        }
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        let res = self.inner.write_all(&self.buf);
        self.buf.zeroize();
        res
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.buf.len() + data.len() > BUF_CAPACITY {
            self.flush_buf()?;
        }
        if data.len() >= BUF_CAPACITY {
            return self.inner.write(data);
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_buf()?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush();
        self.buf.zeroize();
    }
}

/// Write one password per line.
pub fn write_lines<W: Write>(out: &mut W, passwords: &[Zeroizing<String>]) -> io::Result<()> {
    for password in passwords {
        out.write_all(password.as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()
}

/// Join passwords with newlines for the clipboard.
pub fn joined(passwords: &[Zeroizing<String>]) -> Zeroizing<String> {
    let total = passwords.iter().map(|p| p.len() + 1).sum();
    let mut all = Zeroizing::new(String::with_capacity(total));
    for (i, password) in passwords.iter().enumerate() {
        if i > 0 {
            all.push('\n');
        }
        all.push_str(password);
    }
    all
}
