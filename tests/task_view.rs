//! Runs task views against a mocked Cyclence server

use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cyclence::client::Client;
use cyclence::config::{CompletionStrategy, RetryPolicy, Settings};
use cyclence::controller::TaskController;
use cyclence::date::FixedClock;
use cyclence::task::TaskId;
use cyclence::view::{Notification, Phase};
use cyclence::DEFAULT_HIGHLIGHT;

fn on(y: i32, m: u32, d: u32) -> FixedClock {
    FixedClock::new(NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn envelope() -> serde_json::Value {
    json!({ "tasks": [
        { "id": 1, "hsl": "10,90%,40%" },
        { "id": 2, "hsl": "200,80%,60%" },
    ]})
}

async fn mount_tasks(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn controller(server: &MockServer, strategy: CompletionStrategy) -> TaskController<Client, FixedClock> {
    let client = Client::new(server.uri()).unwrap();
    TaskController::new(client, on(2024, 1, 9), strategy, RetryPolicy::no_retry())
}


#[tokio::test]
async fn test_load_envelope() {
    let _ = env_logger::builder().is_test(true).try_init();

    let server = MockServer::start().await;
    mount_tasks(&server, envelope()).await;

    let mut ctrl = controller(&server, CompletionStrategy::Reload);
    assert!(ctrl.load().await);

    let view = ctrl.view();
    assert_eq!(view.tasks().len(), 2);
    assert_eq!(view.tasks()[0].id().as_str(), "1");
    assert_eq!(view.tasks()[1].id().as_str(), "2");
    assert_eq!(view.gravatar_border().as_str(), "10,90%,40%");
}

#[tokio::test]
async fn test_load_bare_array() {
    let _ = env_logger::builder().is_test(true).try_init();

    let server = MockServer::start().await;
    mount_tasks(&server, json!([
        { "id": "b7e3", "hsl": "120,100%,50%", "name": "Shave" },
        { "id": "c001", "hsl": "0,0%,75%" },
        { "id": "d42a", "hsl": "60,100%,50%" },
    ])).await;

    let mut ctrl = controller(&server, CompletionStrategy::Highlight);
    assert!(ctrl.load().await);

    let ids: Vec<&str> = ctrl.view().tasks().iter().map(|t| t.id().as_str()).collect();
    assert_eq!(ids, vec!["b7e3", "c001", "d42a"]);
    assert_eq!(ctrl.view().tasks()[0].name(), Some("Shave"));
    assert_eq!(ctrl.view().gravatar_border().as_str(), DEFAULT_HIGHLIGHT);
}

#[tokio::test]
async fn test_complete_then_reload() {
    let _ = env_logger::builder().is_test(true).try_init();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope()))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/tasks/2/completions/2024-1-9"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut ctrl = controller(&server, CompletionStrategy::Reload);
    assert!(ctrl.load().await);
    assert!(ctrl.complete(&TaskId::from(2u64)).await);

    assert_eq!(ctrl.view().phase(), &Phase::Idle);
    assert_eq!(ctrl.view().current_task_id(), Some(&TaskId::from("2")));
    assert!(ctrl.view().notifications().is_empty());

    let requests = server.received_requests().await.unwrap();
    let methods: Vec<String> = requests.iter().map(|r| r.method.to_string()).collect();
    assert_eq!(methods, vec!["GET", "PUT", "GET"]);
}

#[tokio::test]
async fn test_complete_then_highlight() {
    let _ = env_logger::builder().is_test(true).try_init();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/tasks/2/completions/2024-1-9"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let mut ctrl = controller(&server, CompletionStrategy::Highlight);
    assert!(ctrl.load().await);
    assert_eq!(ctrl.view().gravatar_border().as_str(), "10,90%,40%");

    assert!(ctrl.complete(&TaskId::from(2u64)).await);
    assert_eq!(ctrl.view().gravatar_border().as_str(), "200,80%,60%");
    assert!(ctrl.view().is_idle());
}

#[tokio::test]
async fn test_server_error_on_load() {
    let _ = env_logger::builder().is_test(true).try_init();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let mut ctrl = controller(&server, CompletionStrategy::Reload);
    assert_eq!(ctrl.load().await, false);

    let view = ctrl.view();
    assert!(view.tasks().is_empty());
    assert_eq!(view.gravatar_border().as_str(), DEFAULT_HIGHLIGHT);
    assert_eq!(view.notifications().len(), 1);
    assert!(matches!(view.notifications()[0], Notification::LoadFailed{..}));
}

#[tokio::test]
async fn test_malformed_task_list() {
    let _ = env_logger::builder().is_test(true).try_init();

    let server = MockServer::start().await;
    mount_tasks(&server, json!({ "items": [] })).await;

    let mut ctrl = controller(&server, CompletionStrategy::Reload);
    assert_eq!(ctrl.load().await, false);
    match &ctrl.view().notifications()[0] {
        Notification::LoadFailed{ reason } => assert!(reason.contains("Malformed task list")),
        other => panic!("Unexpected notification {:?}", other),
    }
}

#[tokio::test]
async fn test_write_failure() {
    let _ = env_logger::builder().is_test(true).try_init();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let mut ctrl = controller(&server, CompletionStrategy::Reload);
    assert!(ctrl.load().await);
    assert_eq!(ctrl.complete(&TaskId::from(1u64)).await, false);

    let view = ctrl.view();
    assert!(view.is_idle());
    assert_eq!(view.tasks().len(), 2);
    assert_eq!(view.current_task_id(), Some(&TaskId::from("1")));
    assert_eq!(view.gravatar_border().as_str(), "10,90%,40%");
    match &view.notifications()[..] {
        [Notification::WriteFailed{ task_id, reason }] => {
            assert_eq!(task_id.as_str(), "1");
            assert!(reason.contains("404"));
        },
        other => panic!("Unexpected notifications {:?}", other),
    }
}

#[tokio::test]
async fn test_retry_from_settings() {
    let _ = env_logger::builder().is_test(true).try_init();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    mount_tasks(&server, envelope()).await;

    let settings: Settings = serde_json::from_value(json!({
        "url": server.uri(),
        "completion_strategy": "highlight",
        "retry": { "max_attempts": 2, "delay_ms": 10 },
    })).unwrap();
    let client = Client::new(&settings.url).unwrap();
    let mut ctrl = TaskController::from_settings(client, on(2024, 3, 5), &settings);

    assert_eq!(ctrl.strategy(), CompletionStrategy::Highlight);
    assert!(ctrl.load().await);
    assert_eq!(ctrl.view().tasks().len(), 2);
    assert!(ctrl.view().notifications().is_empty());
}
