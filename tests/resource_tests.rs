//! Integration tests for the entity facades.
//!
//! Each test mounts the exact method and path an operation must hit, then
//! checks the decoded result.

use std::sync::Arc;

use rocketlane_api::clients::MemorySink;
use rocketlane_api::rest::resources::{
    CloneProjectInput, CommentInput, InviteInput, ProjectStatus, TaskAssignment, TaskFilter,
    TaskInput, TaskStatus, TeamInput, UserUpdate,
};
use rocketlane_api::rest::{ListQuery, OperationOptions, Outcome, RestResource};
use rocketlane_api::{ApiKey, BaseUrl, HttpError, RocketlaneClient, RocketlaneConfig};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_client(server: &MockServer) -> RocketlaneClient {
    let config = RocketlaneConfig::builder()
        .api_key(ApiKey::new("rl-test-key").unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    RocketlaneClient::new(config).unwrap()
}

fn task_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": "Kickoff call",
        "status": "in_progress",
        "projectId": "p-1",
        "createdAt": "2024-05-01T09:30:00Z"
    })
}

fn project_json(id: &str, status: &str) -> serde_json::Value {
    json!({"id": id, "name": "Acme onboarding", "status": status})
}

/// Unwraps a completed outcome.
fn completed<T>(outcome: Outcome<T>) -> T {
    match outcome {
        Outcome::Completed(value) => value,
        Outcome::DryRun => panic!("Expected a completed call, got a dry run"),
        Outcome::NoContent => panic!("Expected a completed call, got no content"),
    }
}

// ============================================================================
// Standard operations
// ============================================================================

#[tokio::test]
async fn test_list_sends_query_and_decodes_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tasks"))
        .and(query_param("limit", "2"))
        .and(query_param("filter.projectId", "p-1"))
        .and(query_param("filter.status", "blocked"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [task_json("t-1"), task_json("t-2")],
            "nextPageToken": "abc",
            "total": 5
        })))
        .expect(1)
        .mount(&server)
        .await;

    let query = ListQuery::new().limit(2).filter(TaskFilter {
        project_id: Some("p-1".to_string()),
        status: Some(TaskStatus::Blocked.into()),
        ..Default::default()
    });
    let page = completed(
        create_client(&server)
            .tasks()
            .list(Some(&query), None)
            .await
            .unwrap(),
    );

    assert_eq!(page.len(), 2);
    assert_eq!(page[0].id, "t-1");
    assert_eq!(page[1].status, TaskStatus::InProgress);
    assert!(page.has_next_page());
    assert_eq!(page.next_page_token(), Some("abc"));
    assert_eq!(page.total, Some(5));
}

#[tokio::test]
async fn test_retrieve_encodes_id_segment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tasks/t%2F1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_json("t/1")))
        .expect(1)
        .mount(&server)
        .await;

    let task = completed(
        create_client(&server)
            .tasks()
            .retrieve("t/1", None)
            .await
            .unwrap(),
    );
    assert_eq!(task.id, "t/1");
    assert!(task.audit.created_at.is_some());
}

#[tokio::test]
async fn test_create_posts_input_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tasks"))
        .and(body_json(json!({"name": "Kickoff call", "projectId": "p-1"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(task_json("t-9")))
        .expect(1)
        .mount(&server)
        .await;

    let input = TaskInput {
        name: "Kickoff call".to_string(),
        project_id: "p-1".to_string(),
        ..Default::default()
    };
    let task = completed(
        create_client(&server)
            .tasks()
            .create(&input, None)
            .await
            .unwrap(),
    );
    assert_eq!(task.id, "t-9");
}

#[tokio::test]
async fn test_update_patches_only_set_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/users/u-1"))
        .and(body_json(json!({"role": "admin"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "u-1",
            "name": "Ada",
            "email": "ada@example.com",
            "role": "admin",
            "isActive": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let update = UserUpdate {
        role: Some("admin".to_string()),
        ..Default::default()
    };
    let user = completed(
        create_client(&server)
            .users()
            .update("u-1", &update, None)
            .await
            .unwrap(),
    );
    assert_eq!(user.role, "admin");
}

#[tokio::test]
async fn test_delete_accepts_empty_and_json_bodies() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/templates/tpl-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/templates/tpl-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deleted": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    assert_eq!(
        client.templates().delete("tpl-1", None).await.unwrap(),
        Outcome::Completed(())
    );
    assert_eq!(
        client.templates().delete("tpl-2", None).await.unwrap(),
        Outcome::Completed(())
    );
}

#[tokio::test]
async fn test_invite_user_posts_to_collection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .and(body_json(json!({"email": "ada@example.com", "role": "member"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "u-2",
            "name": "",
            "email": "ada@example.com",
            "role": "member",
            "isActive": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let invite = InviteInput {
        email: "ada@example.com".to_string(),
        role: "member".to_string(),
        ..Default::default()
    };
    let user = completed(
        create_client(&server)
            .users()
            .create(&invite, None)
            .await
            .unwrap(),
    );
    assert!(!user.is_active);
}

#[tokio::test]
async fn test_not_found_surfaces_as_response_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/customers/c-404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "not found"})))
        .mount(&server)
        .await;

    let error = create_client(&server)
        .customers()
        .retrieve("c-404", None)
        .await
        .unwrap_err();

    assert!(matches!(&error, HttpError::Response(e) if e.message == "not found"));
    assert_eq!(error.status(), Some(404));
}

// ============================================================================
// Entity-specific operations
// ============================================================================

#[tokio::test]
async fn test_task_operations_hit_their_paths() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tasks/bulk/status"))
        .and(body_json(json!({"taskIds": ["t-1", "t-2"], "status": "completed"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "successes": [task_json("t-1")],
            "failures": [{"identifier": {"id": "t-2"}, "error": "locked"}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/tasks/assignments"))
        .and(body_json(json!({"assignments": [{"taskId": "t-1", "userId": "u-1"}]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "successes": [{"taskId": "t-1", "userId": "u-1"}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/tasks/t-1/comments"))
        .and(body_json(json!({"body": "Looks good"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "cm-1",
            "body": "Looks good",
            "authorId": "u-1",
            "taskId": "t-1"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/tasks/t-1/comments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/tasks/t-1/time-entries"))
        .and(body_json(json!({"timeEntryId": "te-1"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let tasks = client.tasks();

    let bulk = completed(
        tasks
            .bulk_update_status(&["t-1", "t-2"], TaskStatus::Completed, None)
            .await
            .unwrap(),
    );
    assert!(!bulk.is_complete_success());
    assert_eq!(bulk.failures[0].identifier.id, "t-2");

    let assignments = [TaskAssignment {
        task_id: "t-1".to_string(),
        user_id: "u-1".to_string(),
    }];
    let assigned = completed(tasks.assign(&assignments, None).await.unwrap());
    assert!(assigned.is_complete_success());
    assert_eq!(assigned.successes, assignments);

    let comment = CommentInput {
        body: "Looks good".to_string(),
        ..Default::default()
    };
    let created = completed(tasks.add_comment("t-1", &comment, None).await.unwrap());
    assert_eq!(created.id, "cm-1");

    assert!(completed(tasks.list_comments("t-1", None).await.unwrap()).is_empty());

    assert_eq!(
        tasks.link_time_entry("t-1", "te-1", None).await.unwrap(),
        Outcome::Completed(())
    );
}

#[tokio::test]
async fn test_project_operations_hit_their_paths() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/projects/p-1/archive"))
        .respond_with(ResponseTemplate::new(200).set_body_json(project_json("p-1", "archived")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/projects/p-1/unarchive"))
        .respond_with(ResponseTemplate::new(200).set_body_json(project_json("p-1", "active")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/projects/clone"))
        .and(body_json(json!({"projectId": "p-1", "startDate": "2024-07-01"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(project_json("p-2", "draft")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/projects/summary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "p-1",
            "name": "Acme onboarding",
            "status": "active",
            "health": "green",
            "taskCount": 12,
            "overdueTasks": 1
        }])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/projects/p-1/tasks"))
        .and(query_param("filter.status", "not_started"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [task_json("t-1")]})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/projects/templates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "tpl-1", "name": "Standard"}])))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let projects = client.projects();

    let archived = completed(projects.archive("p-1", None).await.unwrap());
    assert_eq!(archived.status, ProjectStatus::Archived);

    let restored = completed(projects.unarchive("p-1", None).await.unwrap());
    assert_eq!(restored.status, ProjectStatus::Active);

    let input = CloneProjectInput {
        project_id: "p-1".to_string(),
        name: None,
        start_date: Some("2024-07-01".to_string()),
    };
    let copy = completed(projects.clone_project(&input, None).await.unwrap());
    assert_eq!(copy.id, "p-2");

    let summary = completed(projects.summary(None).await.unwrap());
    assert_eq!(summary[0].overdue_tasks, Some(1));

    let query = ListQuery::new().filter(TaskFilter {
        status: Some(TaskStatus::NotStarted.into()),
        ..Default::default()
    });
    let page = completed(projects.list_tasks("p-1", Some(&query), None).await.unwrap());
    assert!(!page.has_next_page());

    let templates = completed(projects.list_templates(None).await.unwrap());
    assert_eq!(templates[0].name, "Standard");
}

#[tokio::test]
async fn test_membership_and_lifecycle_operations() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/teams/tm-1/members"))
        .and(body_json(json!({"memberId": "u-1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "tm-1",
            "name": "Delivery",
            "memberIds": ["u-1"]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/teams/tm-1/members/u-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/users/u-1/deactivate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "u-1",
            "name": "Ada",
            "email": "ada@example.com",
            "role": "member",
            "isActive": false
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/time-entries/te-1/approve"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "te-1",
            "projectId": "p-1",
            "userId": "u-1",
            "date": "2024-06-03",
            "durationMinutes": 45
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/templates/tpl-1/publish"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "tpl-1", "name": "Standard"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/task-lists/tl-1/tasks"))
        .and(body_json(json!({"name": "Kickoff call", "projectId": "p-1"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(task_json("t-5")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/customers/c-1/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);

    let team = completed(client.teams().add_member("tm-1", "u-1", None).await.unwrap());
    assert_eq!(team.member_ids, vec!["u-1"]);
    assert_eq!(
        client.teams().remove_member("tm-1", "u-1", None).await.unwrap(),
        Outcome::Completed(())
    );

    let user = completed(client.users().deactivate("u-1", None).await.unwrap());
    assert!(!user.is_active);

    let entry = completed(client.time_entries().approve("te-1", None).await.unwrap());
    assert_eq!(entry.duration_minutes, 45);

    let template = completed(client.templates().publish("tpl-1", None).await.unwrap());
    assert_eq!(template.id, "tpl-1");

    let input = TaskInput {
        name: "Kickoff call".to_string(),
        project_id: "p-1".to_string(),
        ..Default::default()
    };
    let task = completed(client.task_lists().create_task("tl-1", &input, None).await.unwrap());
    assert_eq!(task.id, "t-5");

    let projects = completed(client.customers().list_projects("c-1", None, None).await.unwrap());
    assert!(projects.is_empty());
}

#[tokio::test]
async fn test_forms_use_nested_collection_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forms/responses"))
        .and(query_param("filter.formId", "f-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "r-1", "formId": "f-1", "answers": {"q1": "yes"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let query = ListQuery::new().filter(rocketlane_api::rest::resources::FormResponseFilter {
        form_id: Some("f-1".to_string()),
        ..Default::default()
    });
    let page = completed(
        create_client(&server)
            .forms()
            .list(Some(&query), None)
            .await
            .unwrap(),
    );
    assert_eq!(page[0].answers["q1"], json!("yes"));
}

// ============================================================================
// Operation options
// ============================================================================

#[tokio::test]
async fn test_dry_run_option_skips_network_for_any_operation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let sink = Arc::new(MemorySink::new());
    let options = OperationOptions::new().dry_run(true).dry_run_sink(sink.clone());
    let input = TeamInput {
        name: "Delivery".to_string(),
        ..Default::default()
    };

    let outcome = create_client(&server)
        .teams()
        .create(&input, Some(options))
        .await
        .unwrap();

    assert!(outcome.is_dry_run());
    let commands = sink.commands();
    assert_eq!(commands.len(), 1);
    assert!(commands[0].starts_with(&format!("curl -X POST '{}/teams'", server.uri())));
    assert!(commands[0].ends_with(r#"--data '{"name":"Delivery"}'"#));
}

#[tokio::test]
async fn test_option_headers_reach_the_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tasks/t-1/comments"))
        .and(wiremock::matchers::header("x-request-source", "nightly-sync"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let options = OperationOptions::new().header("X-Request-Source", "nightly-sync");
    create_client(&server)
        .tasks()
        .list_comments("t-1", Some(options))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_bulk_status_update_decodes_partial_results() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tasks/bulk/status"))
        .and(body_json(json!({"taskIds": ["t-1", "t-2", "t-3"], "status": "blocked"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "successes": [task_json("t-1"), task_json("t-3")],
            "failures": [{"identifier": {"id": "t-2"}, "error": "task is archived"}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/tasks/bulk/status"))
        .and(body_json(json!({"taskIds": ["t-4"], "status": "blocked"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "successes": [task_json("t-4")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);

    let partial = completed(
        client
            .tasks()
            .bulk_update_status(&["t-1", "t-2", "t-3"], TaskStatus::Blocked, None)
            .await
            .unwrap(),
    );
    assert_eq!(partial.successes.len(), 2);
    assert_eq!(partial.successes[1].id, "t-3");
    assert_eq!(partial.failures.len(), 1);
    assert_eq!(partial.failures[0].error, "task is archived");

    let clean = completed(
        client
            .tasks()
            .bulk_update_status(&["t-4"], TaskStatus::Blocked, None)
            .await
            .unwrap(),
    );
    assert!(clean.is_complete_success());
    assert!(clean.failures.is_empty());
}

#[tokio::test]
async fn test_entity_operation_with_empty_body_yields_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/projects/p-1/archive"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/projects/p-1/unarchive"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/projects/p-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let projects = client.projects();

    let archived = projects.archive("p-1", None).await.unwrap();
    assert_eq!(archived, Outcome::NoContent);

    let restored = projects.unarchive("p-1", None).await.unwrap();
    assert!(restored.is_no_content());
    assert!(restored.into_option().is_none());

    assert_eq!(
        projects.delete("p-1", None).await.unwrap(),
        Outcome::Completed(())
    );
}
