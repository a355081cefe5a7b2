//! External output port traits.

use super::types::Narration;

/// Where narration goes. The combat engine never prints directly.
#[cfg_attr(test, mockall::automock)]
pub trait NarratorPort: Send + Sync {
    fn narrate(&self, line: &Narration);
}
