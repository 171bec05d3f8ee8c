//! Excluded byte set.

/// Bitmap over the 7-bit ASCII range with O(1) membership.
///
/// Bytes at or above 128 can never be excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludeSet([bool; 128]);

impl Default for ExcludeSet {
    fn default() -> Self {
        ExcludeSet([false; 128])
    }
}

impl ExcludeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut set = Self::new();
        for &b in bytes {
            set.insert(b);
        }
        set
    }

    pub fn insert(&mut self, byte: u8) {
        if let Some(slot) = self.0.get_mut(byte as usize) {
            *slot = true;
        }
    }

    #[inline(always)]
    pub fn contains(&self, byte: u8) -> bool {
        self.0.get(byte as usize).copied().unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        !self.0.iter().any(|&b| b)
    }

    /// Excluded bytes in ascending order.
    pub fn to_bytes(&self) -> Vec<u8> {
        (0u8..128).filter(|&b| self.contains(b)).collect()
    }
}
