use cucumber::when;

use reqres_contract::RegistrationFixture;

use crate::support::world::ContractWorld;

#[when(expr = "I register with email {string} and password {string}")]
pub async fn register(world: &mut ContractWorld, email: String, password: String) {
    let fixture = RegistrationFixture {
        email,
        password,
        ..world.suite().config().registration.clone()
    };
    world.registration_result = Some(world.suite().register(&fixture).await);
}

#[when(expr = "I register {string} without a password")]
pub async fn register_without_password(world: &mut ContractWorld, email: String) {
    world.rejection_result = Some(world.suite().register_without_password(&email).await);
}
