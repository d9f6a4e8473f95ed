//! Session status tool
//!
//! Provides runtime status information about the running console session.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Runtime status of a console session
#[derive(Debug, Clone, Serialize)]
pub struct SessionStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Session information
    pub uptime_seconds: u64,
    pub tracked_entries: usize,
    pub tdee_computed: bool,

    /// Process information
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
}

impl StatusTracker {
    /// Create a new status tracker
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    /// Get the current status
    pub fn get_status(&self, tracked_entries: usize, tdee_computed: bool) -> SessionStatus {
        let build_info = BuildInfo::current();

        // Get process info
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        SessionStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            tracked_entries,
            tdee_computed,
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStatus {
    /// Render the status as display text
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Version: {} (build {}, compiled {})\n",
            self.version, self.build_number, self.build_timestamp
        ));
        out.push_str(&format!("Uptime: {}s\n", self.uptime_seconds));
        out.push_str(&format!("Tracked entries: {}\n", self.tracked_entries));
        out.push_str(&format!(
            "TDEE result stored: {}\n",
            if self.tdee_computed { "yes" } else { "no" }
        ));
        out.push_str(&format!(
            "Process: pid {}, {} bytes",
            self.process_id, self.memory_usage_bytes
        ));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reports_session_state() {
        let tracker = StatusTracker::new();
        let status = tracker.get_status(3, true);

        assert_eq!(status.tracked_entries, 3);
        assert!(status.tdee_computed);
        assert_eq!(status.process_id, std::process::id());
    }

    #[test]
    fn test_status_render() {
        let tracker = StatusTracker::new();
        let text = tracker.get_status(0, false).render();

        assert!(text.contains("Tracked entries: 0"));
        assert!(text.contains("TDEE result stored: no"));
        assert!(text.contains("Version:"));
    }
}
