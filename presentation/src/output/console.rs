//! Console notifier and habit listing
//!
//! The console notifier implements the application's [`Notifier`] port
//! the way the host's notification UI would: success notifications are
//! rendered prominently, info notifications quietly.

use colored::Colorize;
use motivator_application::ports::notifier::Notifier;
use motivator_domain::{Habit, Notification, NotificationKind};

/// Renders notifications to the terminal.
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    fn format(notification: &Notification) -> String {
        match notification.kind {
            NotificationKind::Success => format!(
                "{} {}",
                format!("[{}]", notification.title).green().bold(),
                notification.message.bold()
            ),
            NotificationKind::Info => format!(
                "{} {}",
                format!("[{}]", notification.title).cyan(),
                notification.message
            ),
        }
    }
}

impl Notifier for ConsoleNotifier {
    fn show(&self, notification: Notification) {
        println!("{}", Self::format(&notification));
    }
}

/// Format habits as a listing for the `habits` subcommand.
pub fn format_habit_list(habits: &[Habit]) -> String {
    if habits.is_empty() {
        return "No habits found.".to_string();
    }

    let mut output = String::new();
    for habit in habits {
        let streak = match habit.current_streak {
            0 => "no streak".normal(),
            1 => "1 day".yellow(),
            n => format!("{n} days").yellow(),
        };
        output.push_str(&format!(
            "{:<20} {} ({})\n",
            habit.id.as_str().bold(),
            habit.name,
            streak
        ));
    }
    output
}
