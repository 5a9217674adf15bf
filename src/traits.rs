use std::error::Error;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::task::{TaskId, TaskList};
use crate::date::CompletionDate;

/// The backend REST API a task view talks to
#[async_trait]
pub trait TaskApi {
    /// Returns the current tasks of the backend, in the order the backend sorted them.
    /// Both response shapes (envelope and bare array) are normalized into a [`TaskList`]
    async fn get_tasks(&self) -> Result<TaskList, Box<dyn Error>>;

    /// Records that `task_id` has been completed on `completed_on`.
    ///
    /// Submitting the same completion twice is expected to be harmless, but this is up to the backend.
    async fn put_completion(&self, task_id: &TaskId, completed_on: &CompletionDate) -> Result<(), Box<dyn Error>>;
}

/// Something that knows which day it is
pub trait Clock {
    /// The current calendar day, in the local time zone
    fn today(&self) -> NaiveDate;

    /// Today, as it should be sent to the server
    fn completion_date(&self) -> CompletionDate {
        CompletionDate::new(self.today())
    }
}
