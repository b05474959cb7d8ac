//! Cascade origins.

use serde::{Deserialize, Serialize};

/// Where a declaration came from. Ordered from weakest to strongest for
/// normal declarations; important declarations reverse the order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Origin {
    UserAgent,
    User,
    #[default]
    Author,
}
