//! A command-line task view for a Cyclence server
//!
//! Set the RUST_LOG environment variable to display more info about what happens.

use std::path::PathBuf;

use structopt::StructOpt;

use cyclence::client::Client;
use cyclence::config::Settings;
use cyclence::controller::TaskController;
use cyclence::date::SystemClock;
use cyclence::task::TaskId;
use cyclence::traits::Clock;
use cyclence::utils::print_view;

#[derive(Debug, StructOpt)]
pub enum Command {
    /// List the current tasks
    List,
    /// Record that a task has been done today
    Complete {
        /// The ID of the task, as displayed by `list`
        #[structopt()]
        task_id: String,
    },
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "cyclence",
    about = "Lists and completes your recurring tasks."
)]
pub struct CommandLineArgs {
    #[structopt(subcommand)]
    pub action: Command,

    /// A JSON settings file
    #[structopt(parse(from_os_str), short, long)]
    pub config: Option<PathBuf>,

    /// The server URL (overrides the settings file and CYCLENCE_URL)
    #[structopt(short, long)]
    pub url: Option<String>,
}


#[tokio::main]
async fn main() {
    env_logger::init();

    let CommandLineArgs { action, config, url } = CommandLineArgs::from_args();

    let settings = match url {
        Some(url) => match config {
            Some(path) => Settings::from_file(&path).map(|s| Settings { url, ..s }),
            None => Ok(Settings::new(url)),
        },
        None => Settings::load(config.as_deref()),
    };
    let settings = match settings {
        Ok(s) => s,
        Err(err) => {
            eprintln!("Invalid settings: {}", err);
            std::process::exit(2);
        }
    };

    let client = match Client::new(&settings.url) {
        Ok(c) => c,
        Err(err) => {
            eprintln!("Invalid server URL {:?}: {}", settings.url, err);
            std::process::exit(2);
        }
    };

    let clock = SystemClock;
    let today = clock.today();
    let mut controller = TaskController::from_settings(client, clock, &settings);

    let success = match action {
        Command::List => controller.load().await,
        Command::Complete { task_id } => {
            // The view is activated first, just like a page would be
            controller.load().await;
            controller.complete(&TaskId::from(task_id)).await
        },
    };

    print_view(controller.view(), today);

    if success == false {
        std::process::exit(1);
    }
}
