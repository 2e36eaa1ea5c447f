//! Line-delimited JSON event input.
//!
//! One event per line:
//!
//! ```text
//! {"facet": "campus", "selection": [{"value": "UTM"}]}
//! {"toggle": "darkMode"}
//! {"set_courses": ["CSC108H5", "MAT102H5"]}
//! {"add_course": "CSC148H5"}
//! {"remove_course": 0}
//! ```

use serde::Deserialize;
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc::UnboundedSender;

use crate::message::{FilterMessage, Message, PreferenceMessage};

/// Wire form of an input line.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Event {
    Facet { facet: String, selection: Value },
    Toggle { toggle: String },
    SetCourses { set_courses: Vec<String> },
    AddCourse { add_course: String },
    RemoveCourse { remove_course: usize },
}

impl From<Event> for Message {
    fn from(event: Event) -> Self {
        match event {
            Event::Facet { facet, selection } => {
                FilterMessage::FacetChanged { facet, selection }.into()
            }
            Event::Toggle { toggle } => PreferenceMessage::Toggle(toggle).into(),
            Event::SetCourses { set_courses } => FilterMessage::SetCourses(set_courses).into(),
            Event::AddCourse { add_course } => FilterMessage::AddCourse(add_course).into(),
            Event::RemoveCourse { remove_course } => {
                FilterMessage::RemoveCourse(remove_course).into()
            }
        }
    }
}

/// Parse one input line.
pub fn parse_event(line: &str) -> serde_json::Result<Event> {
    serde_json::from_str(line)
}

/// Forward events from `reader` until end of input.
///
/// Blank lines are skipped; lines that are not a known event are logged
/// and dropped.
pub async fn forward_events<R>(reader: R, tx: UnboundedSender<Message>) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut line_no = 0usize;
    while let Some(line) = lines.next_line().await? {
        line_no += 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_event(line) {
            Ok(event) => {
                if tx.send(event.into()).is_err() {
                    break;
                }
            }
            Err(error) => tracing::warn!(line = line_no, %error, "Skipping unrecognized input"),
        }
    }
    tracing::debug!(lines = line_no, "Input closed");
    drop(tx);
    Ok(())
}
