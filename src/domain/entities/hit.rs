//! Hit entity representing a single recorded visit.

use chrono::{DateTime, NaiveDateTime, SubsecRound, Utc};

/// Prefix written at the start of every hit line.
pub const HIT_PREFIX: &str = "hit: ";

/// Timestamp layout of a hit line (UTC, second precision).
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

const TIMESTAMP_LEN: usize = "YYYY/MM/DD HH:MM:SS".len();

/// A visit to a link, as persisted in its storage unit.
///
/// Serialized as one self-contained line:
///
/// ```text
/// hit: 2026/10/15 09:30:00 Mozilla/5.0 (X11; Linux x86_64)
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub recorded_at: DateTime<Utc>,
    pub client_signature: String,
}

impl Hit {
    /// Creates a hit stamped with the current time.
    ///
    /// Line breaks in the signature are replaced with spaces so the hit always
    /// occupies exactly one line.
    pub fn now(client_signature: &str) -> Self {
        Self {
            recorded_at: Utc::now().trunc_subsecs(0),
            client_signature: sanitize_signature(client_signature),
        }
    }

    /// Renders the hit as a newline-terminated log line.
    pub fn to_line(&self) -> String {
        format!(
            "{HIT_PREFIX}{} {}\n",
            self.recorded_at.format(TIMESTAMP_FORMAT),
            self.client_signature
        )
    }

    /// Parses a single line (without its terminator) back into a hit.
    ///
    /// Returns `None` for anything that is not a complete hit line, including
    /// the destination line and a torn final write.
    pub fn parse_line(line: &str) -> Option<Self> {
        let rest = line.strip_prefix(HIT_PREFIX)?;
        let timestamp = rest.get(..TIMESTAMP_LEN)?;
        let recorded_at = NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT)
            .ok()?
            .and_utc();

        let client_signature = match &rest[TIMESTAMP_LEN..] {
            "" => "",
            tail => tail.strip_prefix(' ')?,
        };

        Some(Self {
            recorded_at,
            client_signature: client_signature.to_string(),
        })
    }
}

fn sanitize_signature(signature: &str) -> String {
    signature.replace(['\r', '\n'], " ")
}
