use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, VariantArray};

use crate::error::UnknownProvider;

/// An upstream contracting entity whose work is tracked.
///
/// The provider decides which rate-card codes a work item may use; a code
/// valid for one provider is not implicitly valid for another.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, VariantArray,
)]
pub enum WorkProvider {
    Wessex,
    Gigaclear,
}

impl FromStr for WorkProvider {
    type Err = UnknownProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wessex" => Ok(WorkProvider::Wessex),
            "gigaclear" => Ok(WorkProvider::Gigaclear),
            _ => Err(UnknownProvider(s.to_string())),
        }
    }
}
