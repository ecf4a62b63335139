use std::sync::Arc;

pub const AVATAR_BASE_URL: &str = "https://reqres.in/img/faces";
pub const SUPPORT_URL: &str = "https://reqres.in/#support-heading";
pub const SUPPORT_TEXT: &str =
    "To keep ReqRes free, contributions towards server costs are appreciated!";

/// Token the public backend hands out for user 4
pub const EVE_HOLT_TOKEN: &str = "QpwL5tke4Pnpja7X4";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedUser {
    pub id: i64,
    pub email: &'static str,
    pub first_name: &'static str,
    pub last_name: &'static str,
}

impl SeedUser {
    pub fn avatar(&self) -> String {
        format!("{}/{}-image.jpg", AVATAR_BASE_URL, self.id)
    }

    pub fn token(&self) -> String {
        if self.id == 4 {
            EVE_HOLT_TOKEN.to_string()
        } else {
            format!("stub{}{}", self.id, self.last_name.to_lowercase())
        }
    }
}

const fn seed(
    id: i64,
    email: &'static str,
    first_name: &'static str,
    last_name: &'static str,
) -> SeedUser {
    SeedUser {
        id,
        email,
        first_name,
        last_name,
    }
}

const SEED_USERS: [SeedUser; 12] = [
    seed(1, "george.bluth@reqres.in", "George", "Bluth"),
    seed(2, "janet.weaver@reqres.in", "Janet", "Weaver"),
    seed(3, "emma.wong@reqres.in", "Emma", "Wong"),
    seed(4, "eve.holt@reqres.in", "Eve", "Holt"),
    seed(5, "charles.morris@reqres.in", "Charles", "Morris"),
    seed(6, "tracey.ramos@reqres.in", "Tracey", "Ramos"),
    seed(7, "michael.lawson@reqres.in", "Michael", "Lawson"),
    seed(8, "lindsay.ferguson@reqres.in", "Lindsay", "Ferguson"),
    seed(9, "tobias.funke@reqres.in", "Tobias", "Funke"),
    seed(10, "byron.fields@reqres.in", "Byron", "Fields"),
    seed(11, "george.edwards@reqres.in", "George", "Edwards"),
    seed(12, "rachel.howell@reqres.in", "Rachel", "Howell"),
];

/// Read-only fixture data; nothing a request does changes it.
#[derive(Debug, Clone)]
pub struct AppState {
    users: Arc<[SeedUser]>,
}

impl AppState {
    pub fn seeded() -> Self {
        Self {
            users: Arc::from(SEED_USERS.as_slice()),
        }
    }

    pub fn user(&self, id: i64) -> Option<&SeedUser> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn user_by_email(&self, email: &str) -> Option<&SeedUser> {
        self.users.iter().find(|u| u.email.eq_ignore_ascii_case(email))
    }
}
