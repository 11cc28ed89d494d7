use std::sync::{Mutex, MutexGuard};

use super::*;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Serializes tests that mutate process env.
fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_llm_env() {
    unsafe {
        std::env::remove_var("LLM_MODEL");
        std::env::remove_var("LLM_API_KEY_ENV");
        std::env::remove_var("LLM_BASE_URL");
        std::env::remove_var("LLM_MAX_OUTPUT_TOKENS");
        std::env::remove_var("LLM_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("LLM_CONNECT_TIMEOUT_SECS");
        std::env::remove_var("GEMINI_API_KEY");
        std::env::remove_var("TEST_KEY");
    }
}

#[test]
fn from_env_defaults_to_gemini_flash() {
    let _guard = env_lock();
    unsafe {
        clear_llm_env();
        std::env::set_var("GEMINI_API_KEY", "secret");
    }

    let cfg = LlmConfig::from_env().unwrap();
    assert_eq!(cfg.api_key, "secret");
    assert_eq!(cfg.model, DEFAULT_MODEL);
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    assert_eq!(cfg.max_output_tokens, 8192);
    assert_eq!(
        cfg.timeouts,
        LlmTimeouts { request_secs: DEFAULT_LLM_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_LLM_CONNECT_TIMEOUT_SECS }
    );

    unsafe { clear_llm_env() };
}

#[test]
fn from_env_parses_overrides() {
    let _guard = env_lock();
    unsafe {
        clear_llm_env();
        std::env::set_var("LLM_API_KEY_ENV", "TEST_KEY");
        std::env::set_var("TEST_KEY", "k-test");
        std::env::set_var("LLM_MODEL", "gemini-2.5-pro");
        std::env::set_var("LLM_BASE_URL", "https://example.test/v1/");
        std::env::set_var("LLM_MAX_OUTPUT_TOKENS", "256");
        std::env::set_var("LLM_REQUEST_TIMEOUT_SECS", "42");
        std::env::set_var("LLM_CONNECT_TIMEOUT_SECS", "7");
    }

    let cfg = LlmConfig::from_env().unwrap();
    assert_eq!(cfg.api_key, "k-test");
    assert_eq!(cfg.model, "gemini-2.5-pro");
    assert_eq!(cfg.base_url, "https://example.test/v1");
    assert_eq!(cfg.max_output_tokens, 256);
    assert_eq!(cfg.timeouts, LlmTimeouts { request_secs: 42, connect_secs: 7 });

    unsafe { clear_llm_env() };
}

#[test]
fn from_env_missing_key_names_variable() {
    let _guard = env_lock();
    unsafe {
        clear_llm_env();
        std::env::set_var("LLM_API_KEY_ENV", "TEST_KEY");
    }

    let err = LlmConfig::from_env().unwrap_err();
    assert!(matches!(&err, LlmError::MissingApiKey { var } if var == "TEST_KEY"));

    unsafe { clear_llm_env() };
}

#[test]
fn from_env_blank_key_is_missing() {
    let _guard = env_lock();
    unsafe {
        clear_llm_env();
        std::env::set_var("GEMINI_API_KEY", "  ");
    }

    assert!(matches!(LlmConfig::from_env(), Err(LlmError::MissingApiKey { .. })));

    unsafe { clear_llm_env() };
}

#[test]
fn from_env_invalid_number_falls_back_to_default() {
    let _guard = env_lock();
    unsafe {
        clear_llm_env();
        std::env::set_var("GEMINI_API_KEY", "secret");
        std::env::set_var("LLM_MAX_OUTPUT_TOKENS", "lots");
    }

    let cfg = LlmConfig::from_env().unwrap();
    assert_eq!(cfg.max_output_tokens, DEFAULT_LLM_MAX_OUTPUT_TOKENS);

    unsafe { clear_llm_env() };
}

#[test]
fn env_parse_missing_returns_default() {
    let val: u64 = env_parse("__NYV_TEST_NONEXISTENT_KEY__", 42);
    assert_eq!(val, 42);
}
