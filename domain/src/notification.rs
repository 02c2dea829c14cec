//! Notification value object handed to the host UI

use crate::quote::entities::Quote;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Visual classification of a notification, as understood by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// Celebration, rendered prominently
    Success,
    /// Informational, rendered quietly
    Info,
}

/// A notification ready for the host to render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
}

impl Notification {
    /// Success notification for a streak milestone
    pub fn milestone(message: impl Into<String>) -> Self {
        Self {
            title: "Streak Milestone!".to_string(),
            message: message.into(),
            kind: NotificationKind::Success,
        }
    }

    /// Info notification showing a quote after a completion
    pub fn completion_quote(quote: &Quote) -> Self {
        Self {
            title: "Great job!".to_string(),
            message: quote.attributed(),
            kind: NotificationKind::Info,
        }
    }

    /// Info notification for the on-demand quote command
    pub fn daily_quote(quote: &Quote) -> Self {
        Self {
            title: "Daily Quote".to_string(),
            message: quote.attributed(),
            kind: NotificationKind::Info,
        }
    }

    /// Milestone helper accepting either borrowed or generated messages
    pub fn milestone_from(message: Cow<'_, str>) -> Self {
        Self::milestone(message.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serializes_as_host_type_field() {
        let notification = Notification::milestone("50 days! You're unstoppable!");
        let json = serde_json::to_value(&notification).unwrap();
        assert_eq!(json["type"], "success");
        assert_eq!(json["title"], "Streak Milestone!");
    }

    #[test]
    fn test_quote_notifications_share_attribution_format() {
        let quote = Quote::new("Focus on being productive instead of busy.", "Tim Ferriss");
        let completion = Notification::completion_quote(&quote);
        let daily = Notification::daily_quote(&quote);
        assert_eq!(completion.message, daily.message);
        assert_eq!(completion.kind, NotificationKind::Info);
        assert_eq!(daily.title, "Daily Quote");
    }
}
