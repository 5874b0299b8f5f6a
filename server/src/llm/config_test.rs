use super::*;

fn clear_env() {
    for key in [
        "LLM_PROVIDER",
        "LLM_API_KEY_ENV",
        "LLM_MODEL",
        "LLM_OPENAI_BASE_URL",
        "__TEST_LLM_KEY__",
    ] {
        unsafe { std::env::remove_var(key) };
    }
}

// Env-var tests share process state; run them in one test body to avoid
// interleaving.
#[test]
fn from_env_behaviors() {
    clear_env();

    // Missing key indirection var.
    let err = LlmConfig::from_env().unwrap_err();
    assert!(matches!(err, LlmError::MissingApiKey { .. }));

    // Key var named but unset.
    unsafe { std::env::set_var("LLM_API_KEY_ENV", "__TEST_LLM_KEY__") };
    let err = LlmConfig::from_env().unwrap_err();
    assert!(matches!(err, LlmError::MissingApiKey { var } if var == "__TEST_LLM_KEY__"));

    // Fully configured: defaults fill in provider and model.
    unsafe { std::env::set_var("__TEST_LLM_KEY__", "sk-test") };
    let config = LlmConfig::from_env().unwrap();
    assert_eq!(config.provider, LlmProviderKind::Anthropic);
    assert_eq!(config.api_key, "sk-test");
    assert_eq!(config.model, "claude-sonnet-4-5-20250929");
    assert_eq!(config.timeouts.request_secs, DEFAULT_LLM_REQUEST_TIMEOUT_SECS);

    // Explicit provider + model + trailing-slash base URL.
    unsafe {
        std::env::set_var("LLM_PROVIDER", "openai");
        std::env::set_var("LLM_MODEL", "gpt-4o-mini");
        std::env::set_var("LLM_OPENAI_BASE_URL", "https://llm.internal/v1/");
    }
    let config = LlmConfig::from_env().unwrap();
    assert_eq!(config.provider, LlmProviderKind::OpenAi);
    assert_eq!(config.model, "gpt-4o-mini");
    assert_eq!(config.openai_base_url, "https://llm.internal/v1");

    // Unknown provider.
    unsafe { std::env::set_var("LLM_PROVIDER", "ouija") };
    assert!(matches!(LlmConfig::from_env().unwrap_err(), LlmError::ConfigParse(_)));

    clear_env();
}
