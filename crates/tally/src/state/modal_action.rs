/// Forms the user can open. Each one maps to a single ledger operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    /// Record a new income entry
    AddIncome,
    /// Open a new position or top up an existing one
    AddInvestment,
    /// Replace the return of an existing position
    RecordReturn,
}

impl ModalAction {
    pub fn title(&self) -> &'static str {
        match self {
            ModalAction::AddIncome => "Add Income",
            ModalAction::AddInvestment => "Add Investment",
            ModalAction::RecordReturn => "Record Return",
        }
    }
}
