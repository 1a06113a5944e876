//! EventLog port
//!
//! Fire-and-forget event sink. Every registry mutation and rejection is
//! recorded through this trait; an adapter that cannot write must drop
//! the event rather than disturb the caller.

pub trait EventLog: Send + Sync {
    fn record(&self, message: &str);
}
