use serde::{Deserialize, Serialize};

/// Row of a feature stack. Consumers address channels by position, so the
/// discriminants are fixed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Original = 0,
    Smoothed = 1,
    Edges = 2,
}

impl Channel {
    /// All channels in stack order.
    pub const ALL: [Channel; 3] = [Channel::Original, Channel::Smoothed, Channel::Edges];

    /// Number of rows in a feature stack.
    pub const COUNT: usize = Self::ALL.len();

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Channel::Original => "original",
            Channel::Smoothed => "smoothed",
            Channel::Edges => "edges",
        }
    }
}
