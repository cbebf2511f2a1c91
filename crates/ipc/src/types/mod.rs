//! Type definitions for IPC messages.

use serde::{Deserialize, Serialize};

/// Installed materials per recipe after a paint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialCounts {
    pub original: usize,
    pub special: usize,
    pub glass: usize,
    pub body: usize,
}

impl MaterialCounts {
    pub fn total(&self) -> usize {
        self.original + self.special + self.glass + self.body
    }
}
