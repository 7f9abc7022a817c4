//! Plain-text downloads built from results already in hand.

use std::fmt::Display;

use chrono::{DateTime, TimeZone};
use serde::Serialize;

use super::SectionOutcome;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Download {
    pub file_name: String,
    pub content: String,
}

/// Stamped with the wall-clock time of `now`'s own zone; handlers pass local time.
pub fn analysis_file_name<Tz: TimeZone>(now: DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    format!("resume_analysis_{}.txt", now.format("%Y%m%d_%H%M%S"))
}

pub fn cold_mail_file_name<Tz: TimeZone>(now: DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    format!("cold_mail_{}.txt", now.format("%Y%m%d_%H%M%S"))
}

/// One `=== <type> ===` block per section, separated by a blank line.
/// Failed sections carry their localized message.
pub fn analysis_download<Tz: TimeZone>(sections: &[SectionOutcome], now: DateTime<Tz>) -> Download
where
    Tz::Offset: Display,
{
    let content = sections
        .iter()
        .map(|section| {
            format!(
                "=== {} ===\n{}",
                section.analysis_type().display_name(),
                section.text()
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    Download {
        file_name: analysis_file_name(now),
        content,
    }
}

pub fn cold_mail_download<Tz: TimeZone>(body_text: &str, now: DateTime<Tz>) -> Download
where
    Tz::Offset: Display,
{
    Download {
        file_name: cold_mail_file_name(now),
        content: body_text.to_string(),
    }
}
