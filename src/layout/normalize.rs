use std::collections::HashSet;

/// The set of font families whose text must be translated into a legacy single-byte
/// codepage before it is measured. Family names are compared case-insensitively.
///
/// The default set holds the families of the standard PDF core fonts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyFamilies {
    families: HashSet<String>,
}

impl Default for LegacyFamilies {
    fn default() -> Self {
        ["arial", "helvetica", "symbol", "zapfdingbats", "courier"]
            .into_iter()
            .collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for LegacyFamilies {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        LegacyFamilies {
            families: iter
                .into_iter()
                .map(|family| family.as_ref().to_lowercase())
                .collect(),
        }
    }
}

impl LegacyFamilies {
    /// An empty set: no family gets translated
    pub fn none() -> LegacyFamilies {
        LegacyFamilies {
            families: HashSet::new(),
        }
    }

    pub fn insert(&mut self, family: &str) -> bool {
        self.families.insert(family.to_lowercase())
    }

    pub fn remove(&mut self, family: &str) -> bool {
        self.families.remove(&family.to_lowercase())
    }

    pub fn contains(&self, family: &str) -> bool {
        self.families.contains(&family.to_lowercase())
    }
}
