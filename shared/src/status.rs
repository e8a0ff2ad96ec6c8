// Static label/icon table for invoice and purchase-order statuses.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormatError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Draft,
    Pending,
    Approved,
    Rejected,
    Paid,
    PartiallyPaid,
    Overdue,
    Cancelled,
}

/// Colour family a status badge is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Neutral,
    Info,
    Success,
    Warning,
    Danger,
}

impl DocumentStatus {
    pub const ALL: [DocumentStatus; 8] = [
        DocumentStatus::Draft,
        DocumentStatus::Pending,
        DocumentStatus::Approved,
        DocumentStatus::Rejected,
        DocumentStatus::Paid,
        DocumentStatus::PartiallyPaid,
        DocumentStatus::Overdue,
        DocumentStatus::Cancelled,
    ];

    /// Backend code, as sent by the REST API.
    pub fn code(self) -> &'static str {
        match self {
            DocumentStatus::Draft => "draft",
            DocumentStatus::Pending => "pending",
            DocumentStatus::Approved => "approved",
            DocumentStatus::Rejected => "rejected",
            DocumentStatus::Paid => "paid",
            DocumentStatus::PartiallyPaid => "partially_paid",
            DocumentStatus::Overdue => "overdue",
            DocumentStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DocumentStatus::Draft => "Draft",
            DocumentStatus::Pending => "Waiting for approval",
            DocumentStatus::Approved => "Approved",
            DocumentStatus::Rejected => "Rejected",
            DocumentStatus::Paid => "Paid",
            DocumentStatus::PartiallyPaid => "Partially paid",
            DocumentStatus::Overdue => "Overdue",
            DocumentStatus::Cancelled => "Cancelled",
        }
    }

    /// Icon name in the app's icon set.
    pub fn icon(self) -> &'static str {
        match self {
            DocumentStatus::Draft => "file-pen",
            DocumentStatus::Pending => "hourglass",
            DocumentStatus::Approved => "circle-check",
            DocumentStatus::Rejected => "circle-x",
            DocumentStatus::Paid => "badge-dollar-sign",
            DocumentStatus::PartiallyPaid => "circle-dashed",
            DocumentStatus::Overdue => "alarm-clock",
            DocumentStatus::Cancelled => "ban",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            DocumentStatus::Draft | DocumentStatus::Cancelled => Tone::Neutral,
            DocumentStatus::Pending => Tone::Info,
            DocumentStatus::Approved | DocumentStatus::Paid => Tone::Success,
            DocumentStatus::PartiallyPaid => Tone::Warning,
            DocumentStatus::Rejected | DocumentStatus::Overdue => Tone::Danger,
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DocumentStatus {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        DocumentStatus::ALL
            .into_iter()
            .find(|status| status.code() == code)
            .ok_or_else(|| FormatError::UnknownStatus(s.to_string()))
    }
}
