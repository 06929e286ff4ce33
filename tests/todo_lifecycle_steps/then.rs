//! Then steps for to-do lifecycle BDD scenarios.

use super::world::TodoApiWorld;
use rstest_bdd_macros::then;

#[then("the response status is {status:u16}")]
fn response_status_is(world: &TodoApiWorld, status: u16) -> Result<(), eyre::Report> {
    let actual = world.response()?.status.as_u16();
    if actual != status {
        return Err(eyre::eyre!("expected status {status}, found {actual}"));
    }
    Ok(())
}

#[then("the response location points at the created todo")]
fn location_points_at_created(world: &TodoApiWorld) -> Result<(), eyre::Report> {
    let expected = format!("/v1/todos/{}", world.created_id()?);
    let location = world.response()?.location.as_deref();
    if location != Some(expected.as_str()) {
        return Err(eyre::eyre!("expected location {expected}, found {location:?}"));
    }
    Ok(())
}

#[then(r#"the returned todo has title "{title}" and priority {priority:u64}"#)]
fn returned_todo_has(
    world: &TodoApiWorld,
    title: String,
    priority: u64,
) -> Result<(), eyre::Report> {
    let data = &world.response()?.body["data"];
    if data["title"].as_str() != Some(title.as_str()) {
        return Err(eyre::eyre!("expected title {title}, found {}", data["title"]));
    }
    if data["priority"].as_u64() != Some(priority) {
        return Err(eyre::eyre!(
            "expected priority {priority}, found {}",
            data["priority"]
        ));
    }
    Ok(())
}

#[then("the returned todo is completed")]
fn returned_todo_completed(world: &TodoApiWorld) -> Result<(), eyre::Report> {
    expect_completion(world, true)
}

#[then("the returned todo is not completed")]
fn returned_todo_not_completed(world: &TodoApiWorld) -> Result<(), eyre::Report> {
    expect_completion(world, false)
}

#[then(r#"the response errors include "{message}""#)]
fn errors_include(world: &TodoApiWorld, message: String) -> Result<(), eyre::Report> {
    let body = &world.response()?.body;
    let found = body["errors"]
        .as_array()
        .is_some_and(|errors| errors.iter().any(|error| error.as_str() == Some(message.as_str())));
    if !found {
        return Err(eyre::eyre!("expected error {message:?} in {body}"));
    }
    if !body["data"].is_null() {
        return Err(eyre::eyre!("failure envelope carried data: {body}"));
    }
    Ok(())
}

#[then("the listing holds {count:usize} items with a total of {total:u64}")]
fn listing_holds(world: &TodoApiWorld, count: usize, total: u64) -> Result<(), eyre::Report> {
    let data = &world.response()?.body["data"];
    let items = data["items"]
        .as_array()
        .ok_or_else(|| eyre::eyre!("listing has no items array: {data}"))?;
    if items.len() != count {
        return Err(eyre::eyre!("expected {count} items, found {}", items.len()));
    }
    if data["total"].as_u64() != Some(total) {
        return Err(eyre::eyre!("expected total {total}, found {}", data["total"]));
    }
    Ok(())
}

fn expect_completion(world: &TodoApiWorld, expected: bool) -> Result<(), eyre::Report> {
    let data = &world.response()?.body["data"];
    if data["isCompleted"].as_bool() != Some(expected) {
        return Err(eyre::eyre!(
            "expected isCompleted {expected}, found {}",
            data["isCompleted"]
        ));
    }
    Ok(())
}
