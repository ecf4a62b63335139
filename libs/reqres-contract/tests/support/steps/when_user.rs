use cucumber::when;

use reqres_contract::assertions::CallWindow;
use reqres_contract::{ProfileFields, SystemClock};

use crate::support::world::ContractWorld;

#[when(expr = "I get user {int}")]
pub async fn get_user(world: &mut ContractWorld, id: i64) {
    world.user_result = Some(world.suite().get_user(id).await);
}

#[when(expr = "I get the missing user {int}")]
pub async fn get_missing_user(world: &mut ContractWorld, id: i64) {
    world.exchange_result = Some(world.suite().get_missing_user(id).await);
}

#[when(expr = "I delete user {int}")]
pub async fn delete_user(world: &mut ContractWorld, id: i64) {
    let result = world.suite().delete_user(id).await;
    world.delete_results.push(result);
}

#[when(expr = "I update user {int} with name {string} and job {string}")]
pub async fn update_user(world: &mut ContractWorld, id: i64, name: String, job: String) {
    let profile = ProfileFields::new(name, job);
    let window = CallWindow::open(&SystemClock);
    let result = world.suite().update_user(id, profile).await;
    world.update_window = Some(window.close(&SystemClock));
    world.update_result = Some(result);
}

#[when(expr = "I update user {int} with name {string} and job {string} and updatedAt {string}")]
pub async fn update_user_with_timestamp(
    world: &mut ContractWorld,
    id: i64,
    name: String,
    job: String,
    updated_at: String,
) {
    let profile = ProfileFields::new(name, job);
    let window = CallWindow::open(&SystemClock);
    let result = world
        .suite()
        .update_user_with_client_timestamp(id, profile, &updated_at)
        .await;
    world.update_window = Some(window.close(&SystemClock));
    world.update_result = Some(result);
}
