//! When steps for to-do lifecycle BDD scenarios.

use super::world::TodoApiWorld;
use axum::http::Method;
use rstest_bdd_macros::when;
use serde_json::json;

#[when(r#"a client creates a todo titled "{title}" with priority {priority:i64}"#)]
fn create_todo(
    world: &mut TodoApiWorld,
    title: String,
    priority: i64,
) -> Result<(), eyre::Report> {
    let body = json!({"title": title, "priority": priority});
    let response = world.send(Method::POST, "/v1/todos", Some(body))?;
    let id = response.body["data"]["id"].as_i64();
    if id.is_some() {
        world.created_id = id;
    }
    Ok(())
}

#[when("the client fetches the created todo")]
fn fetch_created(world: &mut TodoApiWorld) -> Result<(), eyre::Report> {
    let id = world.created_id()?;
    world.send(Method::GET, &format!("/v1/todos/{id}"), None)?;
    Ok(())
}

#[when("the client marks the created todo as completed")]
fn mark_completed(world: &mut TodoApiWorld) -> Result<(), eyre::Report> {
    let id = world.created_id()?;
    world.send(
        Method::PATCH,
        &format!("/v1/todos/{id}"),
        Some(json!({"isCompleted": true})),
    )?;
    Ok(())
}

#[when("the client deletes the created todo")]
fn delete_created(world: &mut TodoApiWorld) -> Result<(), eyre::Report> {
    let id = world.created_id()?;
    world.send(Method::DELETE, &format!("/v1/todos/{id}"), None)?;
    Ok(())
}

#[when("the client lists todos on page {page:i64}")]
fn list_page(world: &mut TodoApiWorld, page: i64) -> Result<(), eyre::Report> {
    world.send(Method::GET, &format!("/v1/todos?page={page}"), None)?;
    Ok(())
}
