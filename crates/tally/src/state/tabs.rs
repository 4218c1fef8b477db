/// Tab identifiers for the TUI application.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabId {
    Overview,
    Income,
    Investments,
}

impl TabId {
    pub const ALL: [TabId; 3] = [TabId::Overview, TabId::Income, TabId::Investments];

    pub fn name(&self) -> &'static str {
        match self {
            TabId::Overview => "Overview",
            TabId::Income => "Income",
            TabId::Investments => "Investments",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            TabId::Overview => 0,
            TabId::Income => 1,
            TabId::Investments => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(TabId::Overview),
            1 => Some(TabId::Income),
            2 => Some(TabId::Investments),
            _ => None,
        }
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}
