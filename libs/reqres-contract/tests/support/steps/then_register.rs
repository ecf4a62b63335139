use cucumber::then;

use crate::support::world::ContractWorld;

#[then(expr = "the registration returns id {int} and token {string}")]
pub async fn registration_returns(world: &mut ContractWorld, id: i64, token: String) {
    let result = world
        .registration_result
        .as_ref()
        .expect("Registration result should exist");
    let success = result.as_ref().expect("registration should succeed");
    assert_eq!(success.id, Some(id));
    assert_eq!(success.token.as_deref(), Some(token.as_str()));
}

#[then(expr = "the registration error is {string}")]
pub async fn registration_error(world: &mut ContractWorld, expected: String) {
    let result = world
        .rejection_result
        .as_ref()
        .expect("Rejection result should exist");
    let failure = result.as_ref().expect("call should answer 400");
    assert_eq!(failure.error.as_deref(), Some(expected.as_str()));
}
