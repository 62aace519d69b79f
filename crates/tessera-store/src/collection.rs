//! Record collections.

use strum::{Display, EnumIter, IntoStaticStr};

/// The set of collections the store persists.
///
/// Each collection maps to one directory under the store's base
/// directory; the directory name is the lowercase variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Collection {
    /// Account records, keyed by user name.
    Users,
    /// Session token records, keyed by derived token id.
    Tokens,
}

impl Collection {
    /// Returns the on-disk directory name for this collection.
    #[must_use]
    pub fn dir_name(self) -> &'static str {
        self.into()
    }
}
