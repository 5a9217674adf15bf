//! This crate provides a client for the Cyclence habit tracker.
//!
//! It provides an HTTP client for the Cyclence REST API in the [`client`] module, that can be used as a stand-alone module.
//!
//! A task view (the list of tasks, the last completed one, and the highlight colour) is driven by a [`TaskController`](controller::TaskController). \
//! A controller is given its backend (any [`TaskApi`](traits::TaskApi), usually a [`Client`](client::Client)) and its [`Clock`](traits::Clock) explicitly,
//! so that it can be tested against an in-memory backend on a fixed day.

pub mod traits;

mod color;
pub use color::{Hsl, DEFAULT_HIGHLIGHT};
pub mod task;
pub use task::Task;
pub mod date;
pub mod view;
pub use view::TaskView;

pub mod client;
pub mod controller;
pub use controller::TaskController;

pub mod config;
pub mod utils;

pub mod mock_behaviour;
pub mod mock_api;
