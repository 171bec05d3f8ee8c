//! OS entropy boundary.
//!
//! Two primitive reads: a best-effort nonblocking syscall and a blocking
//! read of the persistent random device. [`EntropySource::fill`] layers the
//! fallback policy on top.

use std::fs::File;
use std::io::{self, Read};
use std::sync::OnceLock;

use crate::error::{Error, Result};

pub const RANDOM_DEVICE: &str = "/dev/random";

/// Raw byte source shared read-only by every fill worker.
pub trait EntropySource: Sync {
    /// Read up to `dest.len()` bytes without blocking. May short-read.
    fn read_nonblocking(&self, dest: &mut [u8]) -> io::Result<usize>;

    /// Read exactly `dest.len()` bytes, blocking until available.
    fn read_blocking(&self, dest: &mut [u8]) -> io::Result<()>;

    /// Fill `dest` completely, falling back to the blocking device when the
    /// nonblocking read fails or comes up short.
    ///
    /// # Errors
    ///
    /// [`Error::EntropySourceUnavailable`] when both paths fail.
    fn fill(&self, dest: &mut [u8]) -> Result<()> {
        self.fill_tracked(dest, &mut Fallback::default())
    }

    /// Like [`fill`](Self::fill), but remembers a fallback in `state`: once
    /// the nonblocking path has failed, later calls go straight to the
    /// device and the fallback is logged only once.
    fn fill_tracked(&self, dest: &mut [u8], state: &mut Fallback) -> Result<()> {
        if !state.engaged {
            match self.read_nonblocking(dest) {
                Ok(n) if n == dest.len() => return Ok(()),
                Ok(n) => tracing::warn!(
                    got = n,
                    wanted = dest.len(),
                    "short nonblocking entropy read, falling back to {RANDOM_DEVICE}"
                ),
                Err(e) if e.kind() == io::ErrorKind::Unsupported => {}
                Err(e) => tracing::warn!(
                    error = %e,
                    "nonblocking entropy read failed, falling back to {RANDOM_DEVICE}"
                ),
            }
            state.engaged = true;
        }

        self.read_blocking(dest).map_err(|e| {
            tracing::error!(error = %e, "random device read failed");
            Error::EntropySourceUnavailable(e.to_string())
        })
    }
}

/// Per-reader fallback memory for [`EntropySource::fill_tracked`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Fallback {
    engaged: bool,
}

impl Fallback {
    pub fn engaged(&self) -> bool {
        self.engaged
    }
}

/// Random device handle shared by every reader for the life of the process.
static DEVICE: OnceLock<File> = OnceLock::new();

fn device() -> io::Result<&'static File> {
    if let Some(file) = DEVICE.get() {
        return Ok(file);
    }
    let file = File::open(RANDOM_DEVICE)?;
    Ok(DEVICE.get_or_init(|| file))
}

/// The real OS: `getrandom(2)` with `GRND_NONBLOCK`, then `/dev/random`.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl OsEntropy {
    pub fn source_name() -> &'static str {
        #[cfg(target_os = "linux")]
        {
            "getrandom(2)"
        }
        #[cfg(not(target_os = "linux"))]
        {
            RANDOM_DEVICE
        }
    }
}

impl EntropySource for OsEntropy {
    #[cfg(target_os = "linux")]
    fn read_nonblocking(&self, dest: &mut [u8]) -> io::Result<usize> {
        if dest.is_empty() {
            return Ok(0);
        }
        let ret = unsafe {
            libc::getrandom(
                dest.as_mut_ptr() as *mut libc::c_void,
                dest.len(),
                libc::GRND_NONBLOCK,
            )
        };
        if ret < 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(ret as usize)
    }

    #[cfg(not(target_os = "linux"))]
    fn read_nonblocking(&self, _dest: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::from(io::ErrorKind::Unsupported))
    }

    fn read_blocking(&self, dest: &mut [u8]) -> io::Result<()> {
        let mut file = device()?;
        file.read_exact(dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rand::mock::{FailingEntropy, ShortReadEntropy};

    #[test]
    fn os_entropy_fills_buffer() {
        let mut buf = [0u8; 64];
        OsEntropy.fill(&mut buf).unwrap();
        // 64 zero bytes from a working source is not a realistic outcome
        assert!(buf.iter().any(|&b| b != 0));
    }

    #[test]
    fn short_read_falls_back_to_device() {
        let source = ShortReadEntropy::new(0xAB);
        let mut buf = [0u8; 8];
        source.fill(&mut buf).unwrap();
        assert_eq!(buf, [0xAB; 8]);
        assert_eq!(source.fallbacks(), 1);
    }

    #[test]
    fn tracked_fallback_skips_nonblocking_after_first_failure() {
        let source = ShortReadEntropy::new(0x11);
        let mut state = Fallback::default();
        let mut buf = [0u8; 8];
        for _ in 0..50 {
            source.fill_tracked(&mut buf, &mut state).unwrap();
        }
        assert!(state.engaged());
        assert_eq!(source.attempts(), 1);
        assert_eq!(source.fallbacks(), 50);
    }

    #[test]
    fn device_reads_reuse_one_handle() {
        let mut a = [0u8; 16];
        let mut b = [0u8; 16];
        OsEntropy.read_blocking(&mut a).unwrap();
        let first = device().unwrap() as *const File;
        OsEntropy.read_blocking(&mut b).unwrap();
        assert_eq!(first, device().unwrap() as *const File);
    }

    #[test]
    fn both_paths_failing_is_unavailable() {
        let mut buf = [0u8; 8];
        let err = FailingEntropy.fill(&mut buf).unwrap_err();
        assert!(matches!(err, Error::EntropySourceUnavailable(_)));
    }
}
