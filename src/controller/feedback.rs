//! Utilities to follow what a task view is doing

use std::fmt::{Display, Error, Formatter};

use crate::task::TaskId;
use crate::view::Notification;

/// An event that happens in a task view
#[derive(Clone, Debug, PartialEq)]
pub enum ViewEvent {
    /// Nothing has happened yet
    NotStarted,
    /// The task list is being fetched
    Loading,
    /// The task list has been (re)loaded
    Loaded{ count: usize },
    /// A completion is being recorded
    Completing{ task_id: TaskId },
    /// A completion has been recorded, and its follow-up has been applied
    Completed{ task_id: TaskId },
    /// Something went wrong. The tasks and the highlight are unchanged
    Failed{ notification: Notification },
}

impl Display for ViewEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            ViewEvent::NotStarted => write!(f, "Not started"),
            ViewEvent::Loading => write!(f, "Loading tasks..."),
            ViewEvent::Loaded{count} => write!(f, "{} tasks loaded", count),
            ViewEvent::Completing{task_id} => write!(f, "Completing task {}...", task_id),
            ViewEvent::Completed{task_id} => write!(f, "Task {} completed", task_id),
            ViewEvent::Failed{notification} => write!(f, "{}", notification),
        }
    }
}

impl Default for ViewEvent {
    fn default() -> Self {
        Self::NotStarted
    }
}


/// See [`feedback_channel`]
pub type FeedbackSender = tokio::sync::watch::Sender<ViewEvent>;
/// See [`feedback_channel`]
pub type FeedbackReceiver = tokio::sync::watch::Receiver<ViewEvent>;

/// Create a feeback channel, that can be used to follow the progress of a task view
pub fn feedback_channel() -> (FeedbackSender, FeedbackReceiver) {
    tokio::sync::watch::channel(ViewEvent::default())
}
