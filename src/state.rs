/// In-memory loop state: the poll window cutoff plus the last notification
/// and last reported error, kept only to suppress duplicate messages.
/// Nothing here survives a restart.
#[derive(Debug)]
pub struct PollState {
    cutoff: i64,
    last_message: Option<String>,
    last_error: Option<String>,
}

impl PollState {
    pub fn new(cutoff: i64) -> Self {
        Self {
            cutoff,
            last_message: None,
            last_error: None,
        }
    }

    pub fn cutoff(&self) -> i64 {
        self.cutoff
    }

    /// Advance the window from the server's `current_date`; keep the old
    /// cutoff when the server did not send one.
    pub fn advance_cutoff(&mut self, current_date: Option<i64>) {
        if let Some(ts) = current_date {
            self.cutoff = ts;
        }
    }

    /// A message identical to the last one actually sent is suppressed.
    pub fn should_notify(&self, message: &str) -> bool {
        self.last_message.as_deref() != Some(message)
    }

    /// Record a successfully sent status notification. A fresh status
    /// message also clears the error suppression, so a recurrence of the
    /// same error later is reported again.
    pub fn record_sent(&mut self, message: String) {
        self.last_message = Some(message);
        self.last_error = None;
    }

    /// Errors are logged every cycle but notified once per distinct text.
    pub fn should_report_error(&self, text: &str) -> bool {
        self.last_error.as_deref() != Some(text)
    }

    pub fn record_error(&mut self, text: String) {
        self.last_error = Some(text);
    }
}
