pub const SERVICE: &str = "contract-runner";
pub const ENV: &str = "ENV";
pub const LOCAL_ENV: &str = "local";

pub const DEFAULT_STUB_PORT: u16 = 3334;
