use serde::Serialize;

/// Data contract for the day-grouped agenda
#[derive(Debug, Clone, Serialize)]
pub struct AgendaViewModel {
    pub title: String,
    pub vault: String,
    pub days: Vec<DayViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayViewModel {
    pub date: String,
    pub entries: Vec<EntryViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EntryViewModel {
    /// Note display name
    pub label: String,
    /// Navigation link for the host application
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// Data contract for the collect-run report
#[derive(Debug, Clone, Serialize)]
pub struct CollectViewModel {
    pub vault: String,
    pub notes_scanned: usize,
    pub events_found: usize,
    pub skipped: Vec<SkippedViewModel>,
    pub completed_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkippedViewModel {
    pub path: String,
    pub error: String,
}
