//! Endpoint checks, one positive and one negative per endpoint.
//!
//! Every check is a straight line: install its own specification, make one
//! call, decode, assert. There are no retries and no branches on the response.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use tracing::Instrument;

use crate::assertions::{
    ensure_avatar_embeds_id, ensure_eq, ensure_updated_at_current, ensure_user_complete,
    require, CallWindow,
};
use crate::client::{ContractClient, Exchange};
use crate::clock::{Clock, SystemClock};
use crate::config::{ContractConfig, RegistrationFixture};
use crate::constants::{
    user_path, FIXTURE_CLIENT_UPDATED_AT, FIXTURE_PROFILE_JOB, FIXTURE_PROFILE_NAME,
    MISSING_PASSWORD_ERROR, REGISTER_PATH,
};
use crate::error::ContractError;
use crate::models::{
    Envelope, ProfileFields, ProfileUpdateRequest, ProfileUpdateRequestWithTimestamp,
    ProfileUpdateResponse, RegisterFailure, RegisterRequest, RegisterSuccess, UserRecord,
};
use crate::spec::ResponseSpec;

const NO_CONTENT: u16 = 204;

/// The catalogue of checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    GetUser,
    GetMissingUser,
    Register,
    RegisterWithoutPassword,
    DeleteUser,
    DeleteMissingUser,
    UpdateUser,
    /// Labelled negative, but the service simply overwrites the client value
    /// and answers 200, so the assertions are the positive ones.
    UpdateUserWithClientTimestamp,
}

impl Scenario {
    pub const ALL: [Scenario; 8] = [
        Scenario::GetUser,
        Scenario::GetMissingUser,
        Scenario::Register,
        Scenario::RegisterWithoutPassword,
        Scenario::DeleteUser,
        Scenario::DeleteMissingUser,
        Scenario::UpdateUser,
        Scenario::UpdateUserWithClientTimestamp,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Scenario::GetUser => "get-user",
            Scenario::GetMissingUser => "get-missing-user",
            Scenario::Register => "register",
            Scenario::RegisterWithoutPassword => "register-without-password",
            Scenario::DeleteUser => "delete-user",
            Scenario::DeleteMissingUser => "delete-missing-user",
            Scenario::UpdateUser => "update-user",
            Scenario::UpdateUserWithClientTimestamp => "update-user-with-client-timestamp",
        }
    }

    pub fn is_negative(&self) -> bool {
        matches!(
            self,
            Scenario::GetMissingUser
                | Scenario::RegisterWithoutPassword
                | Scenario::DeleteMissingUser
                | Scenario::UpdateUserWithClientTimestamp
        )
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scenario {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.name() == s)
            .ok_or_else(|| ContractError::InvalidConfig(format!("unknown scenario `{s}`")))
    }
}

/// Result of running one catalogue entry
#[derive(Debug)]
pub struct ScenarioReport {
    pub scenario: Scenario,
    pub outcome: Result<(), ContractError>,
    pub elapsed: Duration,
}

impl ScenarioReport {
    pub fn passed(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Owns everything a check needs: its client, configuration and clock.
///
/// Suites share nothing, so two suites can run side by side.
#[derive(Debug)]
pub struct ContractSuite<C = SystemClock> {
    client: ContractClient,
    config: ContractConfig,
    clock: C,
}

impl ContractSuite<SystemClock> {
    pub fn new(config: ContractConfig) -> Result<Self, ContractError> {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> ContractSuite<C> {
    pub fn with_clock(config: ContractConfig, clock: C) -> Result<Self, ContractError> {
        let client = ContractClient::new(config.timeout)?;
        Ok(Self {
            client,
            config,
            clock,
        })
    }

    pub fn config(&self) -> &ContractConfig {
        &self.config
    }

    pub fn client(&self) -> &ContractClient {
        &self.client
    }

    fn install(&mut self, response: ResponseSpec) -> Result<(), ContractError> {
        let request = self.config.request_spec()?;
        self.client.install(request, response);
        Ok(())
    }

    /// GET an existing user: every field present, avatar embeds the id.
    pub async fn get_user(&mut self, id: i64) -> Result<UserRecord, ContractError> {
        self.install(ResponseSpec::ok_200())?;
        let exchange = self.client.get(&user_path(id)).await?;

        let envelope: Envelope<UserRecord> = exchange.json()?;
        let user = envelope.data.ok_or(ContractError::MissingField("data"))?;

        ensure_user_complete(&user)?;
        ensure_eq("user id", Some(id), user.id)?;
        ensure_avatar_embeds_id(&user)?;
        Ok(user)
    }

    /// GET an id the backend does not know: 404, body not inspected.
    pub async fn get_missing_user(&mut self, id: i64) -> Result<Exchange, ContractError> {
        self.install(ResponseSpec::not_found_404())?;
        self.client.get(&user_path(id)).await
    }

    pub async fn register(
        &mut self,
        fixture: &RegistrationFixture,
    ) -> Result<RegisterSuccess, ContractError> {
        self.install(ResponseSpec::ok_200())?;
        let request = RegisterRequest::new(fixture.email.as_str(), fixture.password.as_str());
        let exchange = self.client.post(REGISTER_PATH, &request).await?;

        let success: RegisterSuccess = exchange.json()?;
        let id = *require("id", &success.id)?;
        let token = require("token", &success.token)?;

        ensure_eq("registration id", fixture.expected_id, id)?;
        ensure_eq(
            "registration token",
            fixture.expected_token.as_str(),
            token.as_str(),
        )?;
        Ok(success)
    }

    pub async fn register_without_password(
        &mut self,
        email: &str,
    ) -> Result<RegisterFailure, ContractError> {
        self.install(ResponseSpec::bad_request_400())?;
        let request = RegisterRequest::new(email, "");
        let exchange = self.client.post(REGISTER_PATH, &request).await?;

        let failure: RegisterFailure = exchange.json()?;
        let error = require("error", &failure.error)?;
        ensure_eq("registration error", MISSING_PASSWORD_ERROR, error.as_str())?;
        Ok(failure)
    }

    /// DELETE answers 204 with no body whether or not the id exists.
    pub async fn delete_user(&mut self, id: i64) -> Result<Exchange, ContractError> {
        self.install(ResponseSpec::with_status(NO_CONTENT)?)?;
        self.client.delete(&user_path(id)).await
    }

    pub async fn update_user(
        &mut self,
        id: i64,
        profile: ProfileFields,
    ) -> Result<ProfileUpdateResponse, ContractError> {
        self.install(ResponseSpec::ok_200())?;
        let request = ProfileUpdateRequest::from(profile);

        let window = CallWindow::open(&self.clock);
        let exchange = self.client.put(&user_path(id), &request).await?;
        let window = window.close(&self.clock);

        check_update(&request.profile, &exchange, &window)
    }

    /// PUT with a client-chosen `updatedAt`; the service must overwrite it
    /// with its own current time.
    pub async fn update_user_with_client_timestamp(
        &mut self,
        id: i64,
        profile: ProfileFields,
        updated_at: &str,
    ) -> Result<ProfileUpdateResponse, ContractError> {
        self.install(ResponseSpec::ok_200())?;
        let request = ProfileUpdateRequestWithTimestamp::new(profile, updated_at);

        let window = CallWindow::open(&self.clock);
        let exchange = self.client.put(&user_path(id), &request).await?;
        let window = window.close(&self.clock);

        check_update(&request.profile, &exchange, &window)
    }

    pub async fn run(&mut self, scenario: Scenario) -> ScenarioReport {
        let started = Instant::now();
        let span = tracing::info_span!("scenario", scenario = scenario.name());
        let outcome = self.run_scenario(scenario).instrument(span).await;

        ScenarioReport {
            scenario,
            outcome,
            elapsed: started.elapsed(),
        }
    }

    async fn run_scenario(&mut self, scenario: Scenario) -> Result<(), ContractError> {
        let existing = self.config.existing_user_id;
        let missing = self.config.missing_user_id;

        match scenario {
            Scenario::GetUser => self.get_user(existing).await.map(drop),
            Scenario::GetMissingUser => self.get_missing_user(missing).await.map(drop),
            Scenario::Register => {
                let fixture = self.config.registration.clone();
                self.register(&fixture).await.map(drop)
            }
            Scenario::RegisterWithoutPassword => {
                let email = self.config.registration.email.clone();
                self.register_without_password(&email).await.map(drop)
            }
            Scenario::DeleteUser => self.delete_user(existing).await.map(drop),
            Scenario::DeleteMissingUser => self.delete_user(missing).await.map(drop),
            Scenario::UpdateUser => self.update_user(existing, fixture_profile()).await.map(drop),
            Scenario::UpdateUserWithClientTimestamp => self
                .update_user_with_client_timestamp(
                    existing,
                    fixture_profile(),
                    FIXTURE_CLIENT_UPDATED_AT,
                )
                .await
                .map(drop),
        }
    }
}

pub fn fixture_profile() -> ProfileFields {
    ProfileFields::new(FIXTURE_PROFILE_NAME, FIXTURE_PROFILE_JOB)
}

fn check_update(
    sent: &ProfileFields,
    exchange: &Exchange,
    window: &CallWindow,
) -> Result<ProfileUpdateResponse, ContractError> {
    let response: ProfileUpdateResponse = exchange.json()?;

    let name = require("name", &response.profile.name)?;
    let job = require("job", &response.profile.job)?;
    let updated_at = require("updatedAt", &response.updated_at)?;

    ensure_eq("echoed name", sent.name.as_deref(), Some(name.as_str()))?;
    ensure_eq("echoed job", sent.job.as_deref(), Some(job.as_str()))?;
    ensure_updated_at_current(updated_at, window)?;

    Ok(response)
}
