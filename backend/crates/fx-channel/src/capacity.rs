/// How many more messages a subscription will accept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capacity {
    Unbounded,
    Remaining(usize),
}

impl Capacity {
    /// None means unbounded
    pub fn from_limit(limit: Option<usize>) -> Self {
        match limit {
            Some(n) => Self::Remaining(n),
            None => Self::Unbounded,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Remaining(0))
    }

    pub fn remaining(&self) -> Option<usize> {
        match self {
            Self::Unbounded => None,
            Self::Remaining(n) => Some(*n),
        }
    }

    /// Use up one delivery. Returns true if that was the last one allowed.
    pub(crate) fn consume(&mut self) -> bool {
        match self {
            Self::Unbounded => false,
            Self::Remaining(n) => {
                *n = n.saturating_sub(1);
                *n == 0
            }
        }
    }
}

impl std::fmt::Display for Capacity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unbounded => write!(f, "unbounded"),
            Self::Remaining(n) => write!(f, "{n} remaining"),
        }
    }
}
