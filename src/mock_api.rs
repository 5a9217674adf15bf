//! An in-memory backend, used to test task views without a server
#![cfg(any(test, feature = "mock_api"))]

use std::error::Error;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::traits::TaskApi;
use crate::task::{Task, TaskId, TaskList, ResponseShape};
use crate::date::CompletionDate;
use crate::mock_behaviour::MockBehaviour;

#[derive(Debug, Default)]
struct MockState {
    tasks: Vec<Task>,
    completions: Vec<(TaskId, CompletionDate)>,
    get_tasks_calls: usize,
    put_completion_calls: usize,
    behaviour: MockBehaviour,
}

/// A [`TaskApi`] that keeps its tasks in memory and records every completion it is sent
#[derive(Debug)]
pub struct MockApi {
    shape: ResponseShape,
    state: Mutex<MockState>,
}

impl MockApi {
    pub fn new(tasks: Vec<Task>, shape: ResponseShape) -> Self {
        Self {
            shape,
            state: Mutex::new(MockState{ tasks, ..MockState::default() }),
        }
    }

    pub fn set_behaviour(&self, behaviour: MockBehaviour) {
        self.lock().behaviour = behaviour;
    }

    /// Replace the tasks the next `get_tasks` will return
    pub fn set_tasks(&self, tasks: Vec<Task>) {
        self.lock().tasks = tasks;
    }

    /// Every completion that has been accepted, in order
    pub fn completions(&self) -> Vec<(TaskId, CompletionDate)> {
        self.lock().completions.clone()
    }

    /// How many times `get_tasks` has been called (including failed calls)
    pub fn get_tasks_calls(&self) -> usize {
        self.lock().get_tasks_calls
    }

    /// How many times `put_completion` has been called (including failed calls)
    pub fn put_completion_calls(&self) -> usize {
        self.lock().put_completion_calls
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        // a test that panicked while holding the lock already failed
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl TaskApi for MockApi {
    async fn get_tasks(&self) -> Result<TaskList, Box<dyn Error>> {
        let mut state = self.lock();
        state.get_tasks_calls += 1;
        state.behaviour.can_get_tasks()?;
        Ok(TaskList::new(state.tasks.clone(), self.shape))
    }

    async fn put_completion(&self, task_id: &TaskId, completed_on: &CompletionDate) -> Result<(), Box<dyn Error>> {
        let mut state = self.lock();
        state.put_completion_calls += 1;
        state.behaviour.can_put_completion()?;
        state.completions.push((task_id.clone(), *completed_on));
        Ok(())
    }
}
