//! Named feature toggles.

/// Boolean switches recognized by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum Feature {
    IncludeLower = 1 << 0,
    IncludeUpper = 1 << 1,
    IncludeDigits = 1 << 2,
    IncludeSpecial = 1 << 3,
    IncludeExtendedSpecial = 1 << 4,
    UseCustomAlphabet = 1 << 5,
    FastMode = 1 << 6,
    SecureMode = 1 << 7,
    ShowEntropy = 1 << 8,
}

impl Feature {
    pub const ALL: [Feature; 9] = [
        Feature::IncludeLower,
        Feature::IncludeUpper,
        Feature::IncludeDigits,
        Feature::IncludeSpecial,
        Feature::IncludeExtendedSpecial,
        Feature::UseCustomAlphabet,
        Feature::FastMode,
        Feature::SecureMode,
        Feature::ShowEntropy,
    ];

    #[inline(always)]
    const fn bit(self) -> u16 {
        self as u16
    }
}

/// Set of enabled [`Feature`]s.
///
/// Enabling is idempotent: passing the same flag twice leaves it on.
/// `FastMode` and `SecureMode` are mutually exclusive, the later enable wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureSet(u16);

impl FeatureSet {
    pub const fn empty() -> Self {
        FeatureSet(0)
    }

    #[inline]
    pub fn has(&self, feature: Feature) -> bool {
        self.0 & feature.bit() != 0
    }

    pub fn enable(&mut self, feature: Feature) -> &mut Self {
        match feature {
            Feature::FastMode => self.0 &= !Feature::SecureMode.bit(),
            Feature::SecureMode => self.0 &= !Feature::FastMode.bit(),
            _ => {}
        }
        self.0 |= feature.bit();
        self
    }

    pub fn disable(&mut self, feature: Feature) -> &mut Self {
        self.0 &= !feature.bit();
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = Feature> + '_ {
        Feature::ALL.into_iter().filter(|f| self.has(*f))
    }
}

impl FromIterator<Feature> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        let mut set = FeatureSet::empty();
        for feature in iter {
            set.enable(feature);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enable_is_idempotent() {
        let mut set = FeatureSet::empty();
        set.enable(Feature::IncludeDigits);
        set.enable(Feature::IncludeDigits);
        assert!(set.has(Feature::IncludeDigits));
    }

    #[test]
    fn modes_are_exclusive() {
        let mut set = FeatureSet::empty();
        set.enable(Feature::FastMode);
        set.enable(Feature::SecureMode);
        assert!(set.has(Feature::SecureMode));
        assert!(!set.has(Feature::FastMode));

        set.enable(Feature::FastMode);
        assert!(set.has(Feature::FastMode));
        assert!(!set.has(Feature::SecureMode));
    }

    #[test]
    fn disable_clears_only_that_flag() {
        let mut set: FeatureSet = [Feature::IncludeLower, Feature::IncludeUpper]
            .into_iter()
            .collect();
        set.disable(Feature::IncludeLower);
        assert!(!set.has(Feature::IncludeLower));
        assert!(set.has(Feature::IncludeUpper));
        assert_eq!(set.iter().count(), 1);
    }
}
