//! Some utility functions

use chrono::NaiveDate;

use crate::color::Hsl;
use crate::task::{Dueity, Task};
use crate::view::TaskView;

/// A human readable date, e.g. `Mar 05, 2024`
pub fn date_str(date: Option<NaiveDate>) -> String {
    match date {
        None => "never".to_string(),
        Some(date) => date.format("%b %d, %Y").to_string(),
    }
}

/// How far `date` is from `today`, e.g. `yesterday`, `in 2 weeks` or `3 months ago`
pub fn relative_time(date: Option<NaiveDate>, today: NaiveDate) -> String {
    let date = match date {
        None => return "never".to_string(),
        Some(d) => d,
    };

    let delta = (date - today).num_days();
    let days = delta.abs();
    let (num, units) = if days < 7 {
        (days, "days")
    } else if days < 30 {
        let weeks = days / 7;
        (weeks, if weeks == 1 { "week" } else { "weeks" })
    } else if days < 365 {
        let months = days / 30;
        (months, if months == 1 { "month" } else { "months" })
    } else {
        let years = (days as f64 / 365.25) as i64;
        (years, if years == 1 { "year" } else { "years" })
    };

    match delta {
        0 => "today".to_string(),
        -1 => "yesterday".to_string(),
        1 => "tomorrow".to_string(),
        d if d < 0 => format!("{} {} ago", num, units),
        _ => format!("in {} {}", num, units),
    }
}

/// A human readable recurrence length, e.g. `1 week, 3 days`
pub fn time_str(days: u32) -> String {
    if days == 0 {
        return "never".to_string();
    }

    fn pl(word: &str, n: u32) -> String {
        if n == 1 { word.to_string() } else { format!("{}s", word) }
    }

    let mut days = days;
    let mut result = Vec::new();
    while days != 0 {
        if days / 365 > 0 {
            let years = days / 365;
            result.push(format!("{} {}", years, pl("year", years)));
            days %= 365;
        } else if days / 7 > 0 {
            let weeks = days / 7;
            result.push(format!("{} {}", weeks, pl("week", weeks)));
            days %= 7;
        } else {
            result.push(format!("{} {}", days, pl("day", days)));
            days = 0;
        }
    }
    result.join(", ")
}

/// A colour triple along with its hex code, e.g. `0,100%,50% (#ff0000)`.
/// Triples that cannot be parsed are displayed as they are
pub fn format_hsl(hsl: &Hsl) -> String {
    match hsl.to_color() {
        Ok(color) => format!("{} ({})", hsl, color.to_hex_string()),
        Err(err) => {
            log::debug!("{}", err);
            hsl.to_string()
        },
    }
}

/// A one-line description of a task
pub fn format_task(task: &Task, today: NaiveDate) -> String {
    let marker = match task.dueity() {
        Some(Dueity::Overdue) => "!",
        Some(Dueity::Due) => "*",
        Some(Dueity::NotDue) | None => " ",
    };
    let due = match task.duedate() {
        None => String::new(),
        Some(_) => format!("due {}", relative_time(task.duedate(), today)),
    };
    let every = match task.length() {
        None => String::new(),
        Some(length) => format!("every {}", time_str(length)),
    };
    format!("    {} {}\t{}\t{}\t[{}]\t{}", marker, task.display_name(), due, every, format_hsl(task.hsl()), task.id())
}

/// A debug utility that pretty-prints a task
pub fn print_task(task: &Task, today: NaiveDate) {
    println!("{}", format_task(task, today));
}

/// A multi-line description of a whole view
pub fn format_view(view: &TaskView, today: NaiveDate) -> String {
    let mut lines = vec![format!("Highlight: {}", format_hsl(view.gravatar_border()))];
    if let Some(selected) = view.current_task_id() {
        lines.push(format!("Selected: {}", selected));
    }
    for task in view.tasks() {
        lines.push(format_task(task, today));
    }
    for notification in view.notifications() {
        lines.push(format!("  /!\\ {}", notification));
    }
    lines.join("\n")
}

/// A debug utility that pretty-prints a whole view
pub fn print_view(view: &TaskView, today: NaiveDate) {
    println!("{}", format_view(view, today));
}
