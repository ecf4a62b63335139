use cucumber::given;

use reqres_contract::constants::REQRES_BASE_URL;
use reqres_contract::{ContractConfig, ContractSuite};

use crate::support::world::ContractWorld;

/// Live service when `REQRES_BASE_URL` is set, a fresh local stub otherwise.
#[given("the reqres service")]
pub async fn reqres_service(world: &mut ContractWorld) {
    let config = if std::env::var(REQRES_BASE_URL).is_ok() {
        ContractConfig::from_env()
    } else {
        let stub = reqres_stub::spawn_local()
            .await
            .expect("stub should start");
        let config = ContractConfig::from_env().with_base_url(stub.base_url());
        world.stub = Some(stub);
        config
    };

    world.suite = Some(ContractSuite::new(config).expect("suite should build"));
}
