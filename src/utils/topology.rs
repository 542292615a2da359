use super::GridError;
use std::{fmt, str::FromStr};

/// Describes how neighbours are counted at the edges of the field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BorderPolicy {
    /// Bounds of the field are stitched together (torus).
    #[default]
    Wrap,
    /// Everything outside the field is dead.
    NoWrap,
}

impl BorderPolicy {
    pub const ALL: [Self; 2] = [Self::Wrap, Self::NoWrap];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Wrap => "wrap",
            Self::NoWrap => "nowrap",
        }
    }
}

impl FromStr for BorderPolicy {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wrap" => Ok(Self::Wrap),
            "nowrap" => Ok(Self::NoWrap),
            _ => Err(GridError::UnknownBorderPolicy(s.to_owned())),
        }
    }
}

impl fmt::Display for BorderPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
