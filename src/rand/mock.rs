//! Test doubles for [`EntropySource`].

use std::collections::VecDeque;
use std::io;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::os::EntropySource;

/// Hands out scripted 64-bit words, one per nonblocking read, then runs dry.
pub struct ScriptedEntropy {
    words: Mutex<VecDeque<u64>>,
    draws: AtomicUsize,
}

impl ScriptedEntropy {
    pub fn new(words: impl IntoIterator<Item = u64>) -> Self {
        ScriptedEntropy {
            words: Mutex::new(words.into_iter().collect()),
            draws: AtomicUsize::new(0),
        }
    }

    pub fn draws(&self) -> usize {
        self.draws.load(Ordering::Relaxed)
    }

    pub fn remaining(&self) -> usize {
        self.words.lock().map(|w| w.len()).unwrap_or(0)
    }
}

impl EntropySource for ScriptedEntropy {
    fn read_nonblocking(&self, dest: &mut [u8]) -> io::Result<usize> {
        let word = self
            .words
            .lock()
            .ok()
            .and_then(|mut w| w.pop_front())
            .ok_or_else(|| io::Error::from(io::ErrorKind::WouldBlock))?;
        self.draws.fetch_add(1, Ordering::Relaxed);

        let bytes = word.to_ne_bytes();
        let n = dest.len().min(bytes.len());
        dest[..n].copy_from_slice(&bytes[..n]);
        Ok(n)
    }

    fn read_blocking(&self, _dest: &mut [u8]) -> io::Result<()> {
        Err(io::Error::other("script exhausted"))
    }
}

/// Both paths always fail.
pub struct FailingEntropy;

impl EntropySource for FailingEntropy {
    fn read_nonblocking(&self, _dest: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::from(io::ErrorKind::WouldBlock))
    }

    fn read_blocking(&self, _dest: &mut [u8]) -> io::Result<()> {
        Err(io::Error::from(io::ErrorKind::NotFound))
    }
}

/// Nonblocking path always returns zero bytes; the device fills with a
/// constant and counts how often it was needed.
pub struct ShortReadEntropy {
    fill_byte: u8,
    attempts: AtomicUsize,
    fallbacks: AtomicUsize,
}

impl ShortReadEntropy {
    pub fn new(fill_byte: u8) -> Self {
        ShortReadEntropy {
            fill_byte,
            attempts: AtomicUsize::new(0),
            fallbacks: AtomicUsize::new(0),
        }
    }

    /// Nonblocking reads attempted.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }
}

impl EntropySource for ShortReadEntropy {
    fn read_nonblocking(&self, _dest: &mut [u8]) -> io::Result<usize> {
        self.attempts.fetch_add(1, Ordering::Relaxed);
        Ok(0)
    }

    fn read_blocking(&self, dest: &mut [u8]) -> io::Result<()> {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
        dest.fill(self.fill_byte);
        Ok(())
    }
}

/// Works for the first `budget` fills, then fails on both paths.
pub struct FailAfter {
    budget: AtomicUsize,
}

impl FailAfter {
    pub fn new(budget: usize) -> Self {
        FailAfter {
            budget: AtomicUsize::new(budget),
        }
    }
}

impl EntropySource for FailAfter {
    fn read_nonblocking(&self, dest: &mut [u8]) -> io::Result<usize> {
        let taken = self
            .budget
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |b| b.checked_sub(1));
        match taken {
            Ok(left) => {
                dest.fill(left as u8 | 1);
                Ok(dest.len())
            }
            Err(_) => Err(io::Error::from(io::ErrorKind::WouldBlock)),
        }
    }

    fn read_blocking(&self, _dest: &mut [u8]) -> io::Result<()> {
        Err(io::Error::from(io::ErrorKind::NotFound))
    }
}
