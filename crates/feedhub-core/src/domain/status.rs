//! Triage enumerations
//!
//! Stored data written by older builds spells statuses in several ways
//! (`pending`, `In Progress`, `New`, `Closed`), so parsing is lenient
//! while serialization always emits the canonical label. A stored value
//! that matches nothing reads as the default instead of failing the record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::lenient::de_opt_text;

use crate::Error;

/// Triage state of a feedback item or complaint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Pending,
    InProcess,
    Resolved,
    Unresolved,
}

impl Status {
    /// All statuses in display order
    pub const ALL: [Status; 4] = [
        Status::Pending,
        Status::InProcess,
        Status::Resolved,
        Status::Unresolved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::InProcess => "In Process",
            Status::Resolved => "Resolved",
            Status::Unresolved => "Unresolved",
        }
    }

    /// Lenient parse: case-insensitive, `_`/`-` read as spaces.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "" | "pending" | "new" | "open" => Some(Status::Pending),
            "in process" | "in progress" | "inprocess" | "processing" => Some(Status::InProcess),
            "resolved" | "closed" | "done" | "completed" => Some(Status::Resolved),
            "unresolved" => Some(Status::Unresolved),
            _ => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::parse(s).ok_or_else(|| Error::validation("status", format!("unknown status '{s}'")))
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = de_opt_text(deserializer)?.unwrap_or_default();
        Ok(Status::parse(&raw).unwrap_or_else(|| {
            log::warn!("[DOMAIN] unknown status '{}', reading as Pending", raw);
            Status::Pending
        }))
    }
}

/// Status filter used by the admin list panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(Status),
}

impl StatusFilter {
    /// Filter options in select order
    pub const OPTIONS: [StatusFilter; 5] = [
        StatusFilter::All,
        StatusFilter::Only(Status::Pending),
        StatusFilter::Only(Status::InProcess),
        StatusFilter::Only(Status::Resolved),
        StatusFilter::Only(Status::Unresolved),
    ];

    pub fn matches(&self, status: Status) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }

    /// Value used in `<select>` options
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("all") {
            return StatusFilter::All;
        }
        Status::parse(raw).map_or(StatusFilter::All, StatusFilter::Only)
    }
}

/// Complaint priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "" | "low" => Some(Priority::Low),
            "medium" | "normal" => Some(Priority::Medium),
            "high" | "urgent" | "critical" => Some(Priority::High),
            _ => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Priority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = de_opt_text(deserializer)?.unwrap_or_default();
        Ok(Priority::parse(&raw).unwrap_or_else(|| {
            log::warn!("[DOMAIN] unknown priority '{}', reading as Low", raw);
            Priority::Low
        }))
    }
}
