//! Recurring tasks, as the backend describes them

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use chrono::NaiveDate;

use crate::color::Hsl;


/// An opaque, server-assigned task identifier.
///
/// Depending on the backend, this is either a UUID string or a JSON number. Both are kept as their textual form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId {
    content: String,
}

impl TaskId {
    pub fn as_str(&self) -> &str {
        &self.content
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        Self { content: s.to_string() }
    }
}
impl From<String> for TaskId {
    fn from(content: String) -> Self {
        Self { content }
    }
}
impl From<u64> for TaskId {
    fn from(n: u64) -> Self {
        Self { content: n.to_string() }
    }
}
impl FromStr for TaskId {
    type Err = std::convert::Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content)
    }
}

/// Used to support serde
impl Serialize for TaskId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.content)
    }
}
/// Used to support serde
impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D>(deserializer: D) -> Result<TaskId, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Text(s) => Ok(TaskId::from(s)),
            RawId::Number(n) => Ok(TaskId::from(n.to_string())),
        }
    }
}


/// Whether a task should be done today
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dueity {
    #[serde(rename = "due")]
    Due,
    #[serde(rename = "overdue")]
    Overdue,
    #[serde(rename = "not due")]
    NotDue,
}

impl Display for Dueity {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Dueity::Due => write!(f, "due"),
            Dueity::Overdue => write!(f, "overdue"),
            Dueity::NotDue => write!(f, "not due"),
        }
    }
}


/// A recurring task
///
/// Only `id` and `hsl` are required. The other attributes are only used for display, and are empty when the backend does not send them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    /// The colour that tells how overdue this task is
    hsl: Hsl,

    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    /// How many points completing this task on time is worth
    #[serde(default)]
    points: Option<u32>,
    /// How often this task recurs, in days
    #[serde(default)]
    length: Option<u32>,
    #[serde(default)]
    duedate: Option<NaiveDate>,
    #[serde(default)]
    dueity: Option<Dueity>,
}

impl Task {
    /// Create a task that only has the mandatory attributes
    pub fn new<I: Into<TaskId>>(id: I, hsl: Hsl) -> Self {
        Self {
            id: id.into(),
            hsl,
            name: None,
            notes: None,
            tags: Vec::new(),
            points: None,
            length: None,
            duedate: None,
            dueity: None,
        }
    }

    pub fn with_name<S: ToString>(mut self, name: S) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_schedule(mut self, length: u32, duedate: NaiveDate, dueity: Dueity) -> Self {
        self.length = Some(length);
        self.duedate = Some(duedate);
        self.dueity = Some(dueity);
        self
    }

    pub fn id(&self) -> &TaskId                 { &self.id }
    pub fn hsl(&self) -> &Hsl                   { &self.hsl }
    pub fn name(&self) -> Option<&str>          { self.name.as_deref() }
    pub fn notes(&self) -> Option<&str>         { self.notes.as_deref() }
    pub fn tags(&self) -> &[String]             { &self.tags }
    pub fn points(&self) -> Option<u32>         { self.points }
    pub fn length(&self) -> Option<u32>         { self.length }
    pub fn duedate(&self) -> Option<NaiveDate>  { self.duedate }
    pub fn dueity(&self) -> Option<Dueity>      { self.dueity }

    /// The name if there is one, the ID otherwise
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("<task {}>", self.id),
        }
    }
}


/// How the backend wrapped the task list it returned
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseShape {
    /// `{ "tasks": [...] }`
    Envelope,
    /// `[...]`
    Bare,
}

/// The body of a `GET /api/tasks` reply, in any of the shapes a backend may use
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TasksResponse {
    Envelope { tasks: Vec<Task> },
    Bare(Vec<Task>),
}

/// A list of tasks, normalized from whatever shape the backend used
#[derive(Clone, Debug, PartialEq)]
pub struct TaskList {
    tasks: Vec<Task>,
    shape: ResponseShape,
}

impl TaskList {
    pub fn new(tasks: Vec<Task>, shape: ResponseShape) -> Self {
        Self { tasks, shape }
    }

    /// Parse the body of a `GET /api/tasks` reply
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        let list = match serde_json::from_str(body)? {
            TasksResponse::Envelope{ tasks } => Self::new(tasks, ResponseShape::Envelope),
            TasksResponse::Bare(tasks) => Self::new(tasks, ResponseShape::Bare),
        };
        Ok(list)
    }

    pub fn tasks(&self) -> &[Task]          { &self.tasks }
    pub fn shape(&self) -> ResponseShape    { self.shape }
    pub fn into_tasks(self) -> Vec<Task>    { self.tasks }

    pub fn len(&self) -> usize       { self.tasks.len() }
    pub fn is_empty(&self) -> bool   { self.tasks.is_empty() }
}
