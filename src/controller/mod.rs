//! This module drives a task view: it loads the task list, and records completions
//!
//! A [`TaskController`] owns a [`TaskView`] and is given its capabilities explicitly: a [`TaskApi`] to talk to the backend, and a [`Clock`] to know which day it is.

use std::error::Error;
use std::future::Future;

use crate::traits::{Clock, TaskApi};
use crate::task::{ResponseShape, TaskId, TaskList};
use crate::view::{Notification, Phase, TaskView};
use crate::config::{CompletionStrategy, RetryPolicy, Settings};

pub mod feedback;
use feedback::{FeedbackSender, ViewEvent};


/// Runs a task view
///
/// Failures never panic nor clear the view: they are logged, stored as [`Notification`]s on the view and sent to the feedback channel (if any).
pub struct TaskController<A, C>
where
    A: TaskApi,
    C: Clock,
{
    api: A,
    clock: C,
    strategy: CompletionStrategy,
    retry: RetryPolicy,

    view: TaskView,
    feedback_channel: Option<FeedbackSender>,
}

impl<A, C> TaskController<A, C>
where
    A: TaskApi,
    C: Clock,
{
    /// Create a controller for a view that has not been loaded yet.
    /// Nothing is fetched until [`Self::load`] is called
    pub fn new(api: A, clock: C, strategy: CompletionStrategy, retry: RetryPolicy) -> Self {
        Self {
            api, clock, strategy, retry,
            view: TaskView::new(),
            feedback_channel: None,
        }
    }

    /// Create a controller that uses the strategy and the retry policy of some `Settings`
    pub fn from_settings(api: A, clock: C, settings: &Settings) -> Self {
        Self::new(api, clock, settings.completion_strategy, settings.retry.clone())
    }

    /// Same as [`Self::new`], but every change is also reported to `channel`
    pub fn new_with_feedback_channel(api: A, clock: C, strategy: CompletionStrategy, retry: RetryPolicy, channel: FeedbackSender) -> Self {
        let mut controller = Self::new(api, clock, strategy, retry);
        controller.feedback_channel = Some(channel);
        controller
    }

    pub fn view(&self) -> &TaskView                  { &self.view }
    pub fn api(&self) -> &A                          { &self.api }
    pub fn strategy(&self) -> CompletionStrategy     { self.strategy }

    /// Remove and return the failures the user has not been shown yet
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.view.take_notifications()
    }

    /// Fetch the task list and display it.
    ///
    /// When the server wrapped the list in an envelope, the highlight is set to the colour of its first task.
    /// Returns whether the list has been loaded. In case it could not, the view is left as it was.
    pub async fn load(&mut self) -> bool {
        self.feedback(ViewEvent::Loading);

        let api = &self.api;
        let result = retrying(&self.retry, "load the tasks", || api.get_tasks())
            .await
            .map_err(|err| err.to_string());

        match result {
            Err(reason) => {
                self.fail(Notification::LoadFailed{ reason });
                false
            },
            Ok(list) => {
                self.apply_task_list(list);
                true
            },
        }
    }

    fn apply_task_list(&mut self, list: TaskList) {
        let shape = list.shape();
        let tasks = list.into_tasks();
        let count = tasks.len();

        if shape == ResponseShape::Envelope {
            if let Some(first) = tasks.first() {
                self.view.set_gravatar_border(first.hsl().clone());
            }
        }
        self.view.set_tasks(tasks);

        log::info!("{} tasks loaded", count);
        self.feedback(ViewEvent::Loaded{ count });
    }

    /// Record that `task_id` has been completed today, then either reload the list or highlight the task, depending on the [`CompletionStrategy`].
    ///
    /// Returns whether the completion has been recorded.
    /// A failed reload after a successful write still returns `true` (and adds a [`Notification::LoadFailed`]).
    pub async fn complete(&mut self, task_id: &TaskId) -> bool {
        if let Phase::Completing(pending) = self.view.phase() {
            log::warn!("The completion of task {} never finished. Starting a new one anyway.", pending);
        }
        if self.view.get_task(task_id).is_none() {
            log::debug!("Task {} is not in the current list. Letting the server decide.", task_id);
        }

        self.view.set_current_task(task_id.clone());
        self.view.set_phase(Phase::Completing(task_id.clone()));
        self.feedback(ViewEvent::Completing{ task_id: task_id.clone() });

        let completed_on = self.clock.completion_date();
        log::info!("Completing task {} on {}", task_id, completed_on);

        let api = &self.api;
        let day = &completed_on;
        let result = retrying(&self.retry, "record the completion", || api.put_completion(task_id, day))
            .await
            .map_err(|err| err.to_string());

        match result {
            Err(reason) => {
                self.view.set_phase(Phase::Idle);
                self.fail(Notification::WriteFailed{ task_id: task_id.clone(), reason });
                false
            },
            Ok(()) => {
                match self.strategy {
                    CompletionStrategy::Reload => {
                        self.load().await;
                    },
                    CompletionStrategy::Highlight => self.highlight(task_id),
                }
                self.view.set_phase(Phase::Idle);
                self.feedback(ViewEvent::Completed{ task_id: task_id.clone() });
                true
            },
        }
    }

    fn highlight(&mut self, task_id: &TaskId) {
        match self.view.get_task(task_id).map(|task| task.hsl().clone()) {
            Some(hsl) => self.view.set_gravatar_border(hsl),
            None => log::warn!("Task {} is not displayed, the highlight is left as it is", task_id),
        }
    }

    fn fail(&mut self, notification: Notification) {
        log::error!("{}", notification);
        self.view.notify(notification.clone());
        self.feedback(ViewEvent::Failed{ notification });
    }

    /// Send an event as a feedback to the listener (if any).
    fn feedback(&self, event: ViewEvent) {
        if let Some(sender) = &self.feedback_channel {
            // nobody may be listening anymore
            let _ = sender.send(event);
        }
    }
}


/// Run `request` up to as many times as `policy` allows, and return its first success or its last error
async fn retrying<T, F, Fut>(policy: &RetryPolicy, descr: &str, mut request: F) -> Result<T, Box<dyn Error>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, Box<dyn Error>>>,
{
    let max_attempts = policy.effective_attempts();
    let mut attempt = 1;
    loop {
        let reason = match request().await {
            Ok(value) => return Ok(value),
            Err(err) if attempt >= max_attempts => return Err(err),
            Err(err) => err.to_string(),
        };
        log::warn!("Unable to {} (attempt {}/{}): {}. Retrying.", descr, attempt, max_attempts, reason);
        attempt += 1;
        tokio::time::sleep(policy.delay()).await;
    }
}
