use cucumber::then;

use reqres_contract::assertions::{
    ensure_avatar_embeds_id, ensure_updated_at_current, ensure_user_complete,
};

use crate::support::world::ContractWorld;

#[then("the user has every field")]
pub async fn user_has_every_field(world: &mut ContractWorld) {
    let result = world.user_result.as_ref().expect("User result should exist");
    let user = result.as_ref().expect("GET user should succeed");
    ensure_user_complete(user).expect("all user fields should be present");
}

#[then("the user avatar contains the user id")]
pub async fn avatar_contains_id(world: &mut ContractWorld) {
    let result = world.user_result.as_ref().expect("User result should exist");
    let user = result.as_ref().expect("GET user should succeed");
    ensure_avatar_embeds_id(user).expect("avatar should embed the id");
}

#[then(expr = "the response status is {int}")]
pub async fn response_status(world: &mut ContractWorld, status: u16) {
    let result = world
        .exchange_result
        .as_ref()
        .expect("Exchange result should exist");
    let exchange = result.as_ref().expect("call should match its specification");
    assert_eq!(exchange.status.as_u16(), status);
}

#[then(expr = "every deletion answers {int} with an empty body")]
pub async fn every_deletion_answers(world: &mut ContractWorld, status: u16) {
    assert!(!world.delete_results.is_empty(), "no deletion was made");
    for result in &world.delete_results {
        let exchange = result.as_ref().expect("DELETE should succeed");
        assert_eq!(exchange.status.as_u16(), status);
        assert!(exchange.body.is_empty());
    }
}

#[then(expr = "the update echoes name {string} and job {string}")]
pub async fn update_echoes(world: &mut ContractWorld, name: String, job: String) {
    let result = world.update_result.as_ref().expect("Update result should exist");
    let response = result.as_ref().expect("PUT should succeed");
    assert_eq!(response.profile.name.as_deref(), Some(name.as_str()));
    assert_eq!(response.profile.job.as_deref(), Some(job.as_str()));
}

#[then("the updatedAt is in the current UTC minute")]
pub async fn updated_at_current(world: &mut ContractWorld) {
    let result = world.update_result.as_ref().expect("Update result should exist");
    let response = result.as_ref().expect("PUT should succeed");
    let window = world.update_window.as_ref().expect("Update window should exist");
    let updated_at = response
        .updated_at
        .as_deref()
        .expect("updatedAt should be present");
    ensure_updated_at_current(updated_at, window).expect("updatedAt should be in the call minute");
}

#[then(expr = "the updatedAt is not {string}")]
pub async fn updated_at_is_not(world: &mut ContractWorld, client_value: String) {
    let result = world.update_result.as_ref().expect("Update result should exist");
    let response = result.as_ref().expect("PUT should succeed");
    assert_ne!(response.updated_at.as_deref(), Some(client_value.as_str()));
}
