use super::*;

const ENV_KEYS: [&str; 6] = [
    "ADGEN_API_URL",
    "ADGEN_REQUEST_TIMEOUT_SECS",
    "ADGEN_CONNECT_TIMEOUT_SECS",
    "ADGEN_LIST_POLL_MS",
    "ADGEN_DETAIL_POLL_MS",
    "ADGEN_TOAST_MS",
];

// Env vars are process-global; serialize every test that touches them.
static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// # Safety
/// Callers must hold `ENV_LOCK`.
unsafe fn clear_adgen_env() {
    for key in ENV_KEYS {
        unsafe { std::env::remove_var(key) };
    }
}

#[test]
fn from_env_uses_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe { clear_adgen_env() };

    let cfg = ClientConfig::from_env().unwrap();
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.api_url, DEFAULT_API_URL);
    assert_eq!(cfg.poll.list(), Duration::from_millis(5_000));
    assert_eq!(cfg.poll.detail(), Duration::from_millis(3_000));
    assert_eq!(cfg.toast_ttl(), Duration::from_millis(5_000));
}

#[test]
fn from_env_parses_overrides() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_adgen_env();
        std::env::set_var("ADGEN_API_URL", "https://adgen.example.test/api/");
        std::env::set_var("ADGEN_REQUEST_TIMEOUT_SECS", "42");
        std::env::set_var("ADGEN_CONNECT_TIMEOUT_SECS", "7");
        std::env::set_var("ADGEN_LIST_POLL_MS", "250");
        std::env::set_var("ADGEN_DETAIL_POLL_MS", "100");
        std::env::set_var("ADGEN_TOAST_MS", "900");
    }

    let cfg = ClientConfig::from_env().unwrap();
    assert_eq!(cfg.api_url, "https://adgen.example.test/api");
    assert_eq!(cfg.timeouts, Timeouts { request_secs: 42, connect_secs: 7 });
    assert_eq!(cfg.poll, PollIntervals { list_ms: 250, detail_ms: 100 });
    assert_eq!(cfg.toast_ms, 900);

    unsafe { clear_adgen_env() };
}

#[test]
fn from_env_falls_back_on_bad_or_zero_numbers() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_adgen_env();
        std::env::set_var("ADGEN_LIST_POLL_MS", "soon");
        std::env::set_var("ADGEN_DETAIL_POLL_MS", "0");
    }

    let cfg = ClientConfig::from_env().unwrap();
    assert_eq!(cfg.poll.list_ms, DEFAULT_LIST_POLL_MS);
    assert_eq!(cfg.poll.detail_ms, DEFAULT_DETAIL_POLL_MS);

    unsafe { clear_adgen_env() };
}

#[test]
fn from_env_rejects_non_http_url() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_adgen_env();
        std::env::set_var("ADGEN_API_URL", "ftp://files.example.test");
    }

    let err = ClientConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("invalid API URL"));

    unsafe { clear_adgen_env() };
}

#[test]
fn with_api_url_trims_trailing_slash() {
    let cfg = ClientConfig::default().with_api_url("http://localhost:9000/").unwrap();
    assert_eq!(cfg.api_url, "http://localhost:9000");
}

#[test]
fn with_api_url_rejects_garbage() {
    assert!(ClientConfig::default().with_api_url("not a url").is_err());
}
