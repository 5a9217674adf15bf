//! This module provides a client to connect to a Cyclence server

use std::error::Error;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use url::Url;

use crate::traits::TaskApi;
use crate::task::{TaskId, TaskList};
use crate::date::CompletionDate;

static TASKS_PATH: &str = "/api/tasks";


/// A [`TaskApi`] that talks to an actual Cyclence server over HTTP
pub struct Client {
    url: Url,
    http: reqwest::Client,
}

impl Client {
    /// Create a client. This does not start a connection
    pub fn new<S: AsRef<str>>(url: S) -> Result<Self, Box<dyn Error>> {
        let url = Url::parse(url.as_ref())?;
        if url.cannot_be_a_base() {
            return Err(format!("{} cannot be used as a server URL", url).into());
        }

        Ok(Self{
            url,
            http: reqwest::Client::new(),
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The URL of the task list
    pub fn tasks_url(&self) -> Url {
        let mut url = self.url.clone();
        url.set_path(TASKS_PATH);
        url.set_query(None);
        url
    }

    /// The URL of the completion resource of a task on a given day
    pub fn completion_url(&self, task_id: &TaskId, completed_on: &CompletionDate) -> Url {
        let mut url = self.tasks_url();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .push(task_id.as_str())
                .push("completions")
                .push(&completed_on.to_string());
        }
        url
    }
}

#[async_trait]
impl TaskApi for Client {
    async fn get_tasks(&self) -> Result<TaskList, Box<dyn Error>> {
        let url = self.tasks_url();
        log::debug!("Fetching the task list from {}", url);

        let response = self.http
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        if response.status().is_success() == false {
            return Err(format!("Unexpected HTTP status code {:?} for GET {}", response.status(), url).into());
        }

        let text = response.text().await?;
        let list = TaskList::from_json(&text)
            .map_err(|err| format!("Malformed task list from {}: {}", url, err))?;
        log::debug!("Got {} tasks ({:?} response)", list.len(), list.shape());
        Ok(list)
    }

    async fn put_completion(&self, task_id: &TaskId, completed_on: &CompletionDate) -> Result<(), Box<dyn Error>> {
        let url = self.completion_url(task_id, completed_on);
        log::debug!("Recording a completion: PUT {}", url);

        let response = self.http
            .put(url.clone())
            .send()
            .await?;

        if response.status().is_success() == false {
            return Err(format!("Unexpected HTTP status code {:?} for PUT {}", response.status(), url).into());
        }
        Ok(())
    }
}
