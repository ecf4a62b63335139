//! Assertions shared by the contract checks.
//!
//! Every helper returns a [`ContractError`] carrying expected and observed
//! values instead of panicking, so callers decide how a failure surfaces.

use std::fmt::Debug;

use chrono::{DateTime, Utc};

use crate::clock::Clock;
use crate::error::ContractError;
use crate::models::UserRecord;

const MINUTE_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Unwraps a field the service must always send.
pub fn require<'a, T>(field: &'static str, value: &'a Option<T>) -> Result<&'a T, ContractError> {
    value.as_ref().ok_or(ContractError::MissingField(field))
}

pub fn ensure_eq<T>(check: &'static str, expected: T, actual: T) -> Result<(), ContractError>
where
    T: PartialEq + Debug,
{
    if expected == actual {
        Ok(())
    } else {
        Err(ContractError::Mismatch {
            check,
            expected: format!("{expected:?}"),
            actual: format!("{actual:?}"),
        })
    }
}

pub fn ensure_user_complete(user: &UserRecord) -> Result<(), ContractError> {
    require("id", &user.id)?;
    require("email", &user.email)?;
    require("first_name", &user.first_name)?;
    require("last_name", &user.last_name)?;
    require("avatar", &user.avatar)?;
    Ok(())
}

/// The avatar URL must embed the decimal form of the user's own id.
pub fn ensure_avatar_embeds_id(user: &UserRecord) -> Result<(), ContractError> {
    let id = require("id", &user.id)?.to_string();
    let avatar = require("avatar", &user.avatar)?;

    if avatar.contains(&id) {
        Ok(())
    } else {
        Err(ContractError::Mismatch {
            check: "avatar embeds user id",
            expected: format!("a URL containing {id}"),
            actual: avatar.clone(),
        })
    }
}

/// `YYYY-MM-DDTHH:MM`, seconds and below dropped
pub fn minute_prefix(instant: DateTime<Utc>) -> String {
    instant.format(MINUTE_FORMAT).to_string()
}

/// Client clock readings taken immediately before and after a call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallWindow {
    pub started: DateTime<Utc>,
    pub finished: DateTime<Utc>,
}

impl CallWindow {
    pub fn open(clock: &impl Clock) -> CallWindowStart {
        CallWindowStart {
            started: clock.now_utc(),
        }
    }
}

/// A window whose call has not returned yet
#[derive(Debug, Clone, Copy)]
pub struct CallWindowStart {
    started: DateTime<Utc>,
}

impl CallWindowStart {
    pub fn close(self, clock: &impl Clock) -> CallWindow {
        CallWindow {
            started: self.started,
            finished: clock.now_utc(),
        }
    }
}

/// A server-generated `updatedAt` must fall in the minute the call was made.
///
/// Both ends of the window are accepted so a call spanning a minute boundary
/// does not fail spuriously.
pub fn ensure_updated_at_current(updated_at: &str, window: &CallWindow) -> Result<(), ContractError> {
    let parsed = DateTime::parse_from_rfc3339(updated_at).map_err(|source| {
        ContractError::InvalidTimestamp {
            value: updated_at.to_string(),
            source,
        }
    })?;
    let observed = minute_prefix(parsed.with_timezone(&Utc));

    let started = minute_prefix(window.started);
    let finished = minute_prefix(window.finished);

    if observed == started || observed == finished {
        return Ok(());
    }

    let expected = if started == finished {
        started
    } else {
        format!("{started} or {finished}")
    };
    Err(ContractError::Mismatch {
        check: "updatedAt matches current UTC minute",
        expected,
        actual: observed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::MockClock;
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, h, m, s).unwrap()
    }

    fn janet() -> UserRecord {
        UserRecord {
            id: Some(2),
            email: Some("janet.weaver@reqres.in".to_string()),
            first_name: Some("Janet".to_string()),
            last_name: Some("Weaver".to_string()),
            avatar: Some("https://reqres.in/img/faces/2-image.jpg".to_string()),
        }
    }

    #[test]
    fn require_reports_the_missing_field() {
        let missing: Option<String> = None;
        assert!(matches!(
            require("token", &missing),
            Err(ContractError::MissingField("token"))
        ));
        assert_eq!(require("id", &Some(4)).unwrap(), &4);
    }

    #[test]
    fn ensure_eq_formats_values_with_debug() {
        let err = ensure_eq("registration id", 4, 5).unwrap_err();
        assert_eq!(err.to_string(), "registration id: expected 4, got 5");
        assert!(ensure_eq("error", "Missing password", "Missing password").is_ok());
    }

    #[test]
    fn complete_user_passes() {
        assert!(ensure_user_complete(&janet()).is_ok());
        assert!(ensure_avatar_embeds_id(&janet()).is_ok());
    }

    #[test]
    fn incomplete_user_names_first_gap() {
        let user = UserRecord {
            last_name: None,
            ..janet()
        };
        assert!(matches!(
            ensure_user_complete(&user),
            Err(ContractError::MissingField("last_name"))
        ));
    }

    #[test]
    fn avatar_of_another_user_fails() {
        let user = UserRecord {
            avatar: Some("https://reqres.in/img/faces/7-image.jpg".to_string()),
            ..janet()
        };
        let err = ensure_avatar_embeds_id(&user).unwrap_err();
        assert!(matches!(
            err,
            ContractError::Mismatch { check: "avatar embeds user id", .. }
        ));
    }

    #[test]
    fn minute_prefix_truncates_seconds() {
        assert_eq!(minute_prefix(at(10, 20, 59)), "2024-05-01T10:20");
    }

    #[test]
    fn updated_at_in_same_minute_passes() {
        let window = CallWindow {
            started: at(10, 20, 1),
            finished: at(10, 20, 2),
        };
        assert!(ensure_updated_at_current("2024-05-01T10:20:01.512Z", &window).is_ok());
    }

    #[test]
    fn updated_at_across_minute_boundary_passes() {
        let window = CallWindow {
            started: at(10, 20, 59),
            finished: at(10, 21, 0),
        };
        assert!(ensure_updated_at_current("2024-05-01T10:21:00.004Z", &window).is_ok());
        assert!(ensure_updated_at_current("2024-05-01T10:20:59.990Z", &window).is_ok());
    }

    #[test]
    fn updated_at_with_offset_is_compared_in_utc() {
        let window = CallWindow {
            started: at(10, 20, 0),
            finished: at(10, 20, 1),
        };
        assert!(ensure_updated_at_current("2024-05-01T12:20:00.500+02:00", &window).is_ok());
    }

    #[test]
    fn stale_client_timestamp_fails() {
        let window = CallWindow {
            started: at(10, 20, 0),
            finished: at(10, 20, 1),
        };
        let err = ensure_updated_at_current("2020-01-01T00:00:00.000Z", &window).unwrap_err();
        match err {
            ContractError::Mismatch {
                expected, actual, ..
            } => {
                assert_eq!(expected, "2024-05-01T10:20");
                assert_eq!(actual, "2020-01-01T00:00");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn garbage_timestamp_is_invalid() {
        let window = CallWindow {
            started: at(10, 20, 0),
            finished: at(10, 20, 1),
        };
        assert!(matches!(
            ensure_updated_at_current("yesterday", &window),
            Err(ContractError::InvalidTimestamp { .. })
        ));
    }

    #[test]
    fn window_reads_clock_on_open_and_close() {
        let mut clock = MockClock::new();
        let mut readings = vec![at(10, 20, 59), at(10, 21, 3)].into_iter();
        clock
            .expect_now_utc()
            .times(2)
            .returning(move || readings.next().unwrap());

        let window = CallWindow::open(&clock).close(&clock);

        assert_eq!(window.started, at(10, 20, 59));
        assert_eq!(window.finished, at(10, 21, 3));
    }
}
