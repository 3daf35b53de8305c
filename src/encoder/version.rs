/// Version selection by bit capacity
use std::str::FromStr;

use tracing::warn;

use crate::error::{QrError, Result};
use crate::models::Version;

/// What to do when a stream exceeds the largest version's capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Fail with [`QrError::CapacityExceeded`]
    #[default]
    Reject,
    /// Use the largest version anyway; trailing bits are dropped at placement
    Clamp,
}

impl FromStr for OverflowPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(OverflowPolicy::Reject),
            "clamp" | "legacy" => Ok(OverflowPolicy::Clamp),
            other => Err(format!("unknown overflow policy: {other}")),
        }
    }
}

/// Picks the smallest version whose capacity holds a stream
pub struct VersionSelector;

impl VersionSelector {
    /// Smallest version with `bit_len <= capacity`, `None` if nothing fits
    pub fn select(bit_len: usize) -> Option<Version> {
        Version::all().find(|v| bit_len <= v.capacity_bits())
    }

    /// Select a version, resolving overflow according to `policy`
    pub fn select_with_policy(bit_len: usize, policy: OverflowPolicy) -> Result<Version> {
        if let Some(version) = Self::select(bit_len) {
            return Ok(version);
        }
        let max_bits = Version::MAX.capacity_bits();
        match policy {
            OverflowPolicy::Reject => Err(QrError::CapacityExceeded {
                required_bits: bit_len,
                max_bits,
            }),
            OverflowPolicy::Clamp => {
                warn!(
                    bit_len,
                    max_bits, "stream exceeds largest version, clamping to version {}", Version::MAX
                );
                Ok(Version::MAX)
            }
        }
    }
}
