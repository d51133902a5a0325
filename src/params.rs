use std::{fmt, str::FromStr};

use anyhow::{Result, bail};

/// How a single representative color is chosen for each block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlockColorStrategy {
    /// Use the top-left sample of the block. Never reads any other sample.
    #[default]
    First = 0,
    /// Per-channel integer mean, truncated toward zero.
    ///
    /// All four channels are averaged independently. Alpha is not
    /// premultiplied and no gamma correction is applied.
    Average = 1,
    /// Modal color of the block.
    ///
    /// On equal counts the color whose first occurrence comes earliest in
    /// row-major order within the block wins.
    MostFrequent = 2,
}

impl BlockColorStrategy {
    pub const ALL: [Self; 3] = [Self::First, Self::Average, Self::MostFrequent];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Average => "average",
            Self::MostFrequent => "most-frequent",
        }
    }
}

impl TryFrom<i64> for BlockColorStrategy {
    type Error = anyhow::Error;

    fn try_from(val: i64) -> Result<Self> {
        Ok(match val {
            0 => Self::First,
            1 => Self::Average,
            2 => Self::MostFrequent,
            _ => bail!("Invalid value for 'strategy', must be 0-2, got {val}."),
        })
    }
}

impl FromStr for BlockColorStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "first" => Self::First,
            "average" | "avg" => Self::Average,
            "most-frequent" | "most_frequent" | "mostfrequent" | "mode" => Self::MostFrequent,
            _ => bail!(
                "Invalid value for 'strategy', must be one of first, average, most-frequent, got {s:?}."
            ),
        })
    }
}

impl fmt::Display for BlockColorStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
