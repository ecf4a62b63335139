use cucumber::World;

use reqres_contract::assertions::CallWindow;
use reqres_contract::{
    ContractError, ContractSuite, Exchange, ProfileUpdateResponse, RegisterFailure,
    RegisterSuccess, UserRecord,
};
use reqres_stub::RunningStub;

#[derive(Debug, Default, World)]
pub struct ContractWorld {
    // Target
    pub stub: Option<RunningStub>,
    pub suite: Option<ContractSuite>,

    // Results
    pub user_result: Option<Result<UserRecord, ContractError>>,
    pub exchange_result: Option<Result<Exchange, ContractError>>,
    pub registration_result: Option<Result<RegisterSuccess, ContractError>>,
    pub rejection_result: Option<Result<RegisterFailure, ContractError>>,
    pub update_result: Option<Result<ProfileUpdateResponse, ContractError>>,
    pub update_window: Option<CallWindow>,
    pub delete_results: Vec<Result<Exchange, ContractError>>,
}

impl ContractWorld {
    pub fn suite(&mut self) -> &mut ContractSuite {
        self.suite
            .as_mut()
            .expect("a Given step should configure the service first")
    }
}
