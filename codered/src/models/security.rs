//! Security audit log

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogStatus {
    Success,
    Warning,
    Info,
    Critical,
}

/// One audit row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityLogEntry {
    pub id: String,
    pub time: String,
    pub event: String,
    pub user: String,
    pub ip: String,
    pub status: LogStatus,
}

fn entry(id: &str, time: &str, event: &str, user: &str, ip: &str, status: LogStatus) -> SecurityLogEntry {
    SecurityLogEntry {
        id: id.to_string(),
        time: time.to_string(),
        event: event.to_string(),
        user: user.to_string(),
        ip: ip.to_string(),
        status,
    }
}

/// Audit rows, newest first
pub fn seed_security_logs() -> Vec<SecurityLogEntry> {
    vec![
        entry("LOG-9921", "14:02:11", "AUTH_SUCCESS", "CMD-8921", "192.168.1.4", LogStatus::Success),
        entry("LOG-9920", "13:55:04", "ROUTE_ACCESS", "LOG-4421", "10.0.0.12", LogStatus::Success),
        entry("LOG-9919", "13:42:00", "FAILED_LOGIN", "UNKNOWN", "45.22.11.9", LogStatus::Warning),
        entry("LOG-9918", "12:30:15", "SYSTEM_BOOT", "SYSTEM", "LOCALHOST", LogStatus::Info),
        entry(
            "LOG-9917",
            "12:29:55",
            "ENCRYPTION_KEY_ROTATION",
            "SYSTEM",
            "LOCALHOST",
            LogStatus::Success,
        ),
        entry("LOG-9916", "11:15:22", "UNAUTHORIZED_PING", "UNKNOWN", "198.51.100.2", LogStatus::Critical),
    ]
}
