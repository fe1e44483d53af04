/// Lifecycle of one bulk-issuance run in the admin view.
#[derive(Clone, Debug, PartialEq)]
pub enum BatchStatus {
    Idle,
    /// Rows issued so far out of the total.
    InProgress { done: u32, total: u32 },
    Completed { total_records: u32, badges_created: u32 },
    Failed(String),
}

impl BatchStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, BatchStatus::InProgress { .. })
    }
}
