//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Emit a line for every card fetch spawned and every outcome delivered.
    pub log_fetch: bool,

    /// Log stale fetch outcomes that get discarded by the generation guard.
    pub log_stale_drops: bool,

    /// Log scroll-target dispatch from the header/footer nav buttons.
    pub log_navigation: bool,

    /// Log watchlist add/remove activity.
    pub log_watchlist: bool,
}

pub const DF: LogFlags = LogFlags {
    log_fetch: true,
    log_stale_drops: true,

    log_navigation: false,
    log_watchlist: false,
};
