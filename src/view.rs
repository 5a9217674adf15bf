//! The state a task view displays

use std::fmt::{Display, Error, Formatter};

use crate::color::Hsl;
use crate::task::{Task, TaskId};

/// Where a view stands in the completion of a task
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No completion is being recorded
    Idle,
    /// A completion write is in flight for this task
    Completing(TaskId),
}

impl Default for Phase {
    fn default() -> Self {
        Self::Idle
    }
}


/// A failure the user should be told about.
///
/// None of these is fatal: the user can always retry (by selecting the task again, or reloading the view)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notification {
    /// The task list could not be fetched, or could not be understood
    LoadFailed{ reason: String },
    /// The completion of a task could not be recorded
    WriteFailed{ task_id: TaskId, reason: String },
}

impl Display for Notification {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            Notification::LoadFailed{reason} => write!(f, "Unable to load the tasks: {}", reason),
            Notification::WriteFailed{task_id, reason} => write!(f, "Unable to complete task {}: {}", task_id, reason),
        }
    }
}


/// Everything a task view renders
#[derive(Clone, Debug, PartialEq)]
pub struct TaskView {
    tasks: Vec<Task>,
    current_task: Option<TaskId>,
    gravatar_border: Hsl,
    phase: Phase,
    notifications: Vec<Notification>,
}

impl Default for TaskView {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskView {
    /// A freshly activated view: no task yet, and the default highlight
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            current_task: None,
            gravatar_border: Hsl::default(),
            phase: Phase::Idle,
            notifications: Vec::new(),
        }
    }

    /// The tasks, in the order the backend returned them
    pub fn tasks(&self) -> &[Task]                  { &self.tasks }
    /// The task that has last been selected for completion.
    /// This is only used for display, and may not be in `tasks` anymore after a reload
    pub fn current_task_id(&self) -> Option<&TaskId> { self.current_task.as_ref() }
    pub fn gravatar_border(&self) -> &Hsl           { &self.gravatar_border }
    pub fn phase(&self) -> &Phase                   { &self.phase }
    pub fn notifications(&self) -> &[Notification]  { &self.notifications }

    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    pub fn get_task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// The task that has last been selected for completion, if it is still displayed
    pub fn current_task(&self) -> Option<&Task> {
        self.current_task.as_ref().and_then(|id| self.get_task(id))
    }

    /// Remove and return every pending notification
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    pub(crate) fn set_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }
    pub(crate) fn set_current_task(&mut self, id: TaskId) {
        self.current_task = Some(id);
    }
    pub(crate) fn set_gravatar_border(&mut self, hsl: Hsl) {
        self.gravatar_border = hsl;
    }
    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }
    pub(crate) fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}
