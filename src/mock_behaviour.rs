//! This module provides ways to tweak mocked backends, so that they can return errors on some tests
#![cfg(any(test, feature = "mock_api"))]

use std::error::Error;

/// This stores some behaviour tweaks, that describe how a mocked backend will behave during a given test
///
/// So that a functions fails _n_ times after _m_ initial successes, set `(m, n)` for the suited parameter
#[derive(Default, Clone, Debug)]
pub struct MockBehaviour {
    // From the TaskApi trait
    pub get_tasks_behaviour: (u32, u32),
    pub put_completion_behaviour: (u32, u32),
}

impl MockBehaviour {
    pub fn new() -> Self {
        Self::default()
    }

    /// All requests will fail at once, for `n_fails` times
    pub fn fail_now(n_fails: u32) -> Self {
        Self {
            get_tasks_behaviour: (0, n_fails),
            put_completion_behaviour: (0, n_fails),
        }
    }

    pub fn can_get_tasks(&mut self) -> Result<(), Box<dyn Error>> {
        decrement(&mut self.get_tasks_behaviour, "get_tasks")
    }
    pub fn can_put_completion(&mut self) -> Result<(), Box<dyn Error>> {
        decrement(&mut self.put_completion_behaviour, "put_completion")
    }
}


/// Return Ok(()) in case the value is `(1+, _)` or `(_, 0)`, or return Err and decrement otherwise
fn decrement(value: &mut (u32, u32), descr: &str) -> Result<(), Box<dyn Error>> {
    let remaining_successes = value.0;
    let remaining_failures = value.1;

    if remaining_successes > 0 {
        value.0 -= 1;
        log::debug!("Mock behaviour: allowing a {} ({:?})", descr, value);
        Ok(())
    } else if remaining_failures > 0 {
        value.1 -= 1;
        log::debug!("Mock behaviour: failing a {} ({:?})", descr, value);
        Err(format!("Mocked behaviour requires this {} to fail this time. ({:?})", descr, value).into())
    } else {
        log::debug!("Mock behaviour: allowing a {} ({:?})", descr, value);
        Ok(())
    }
}
