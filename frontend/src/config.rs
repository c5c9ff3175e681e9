use anyhow::{anyhow, bail, Context};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

/// Trims whitespace and trailing slashes; blank input falls back to the default.
pub fn normalize_base_url(value: &str) -> String {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

fn read_global(name: &str, keys: [&str; 2]) -> Option<String> {
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &name.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(&any, &(*key).into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    })
}

fn snapshot_from_globals() -> Option<String> {
    // window.__HRMS_ENV (env.js) wins over window.__HRMS_CONFIG
    read_global("__HRMS_ENV", ["API_BASE_URL", "api_base_url"])
        .or_else(|| read_global("__HRMS_CONFIG", ["api_base_url", "API_BASE_URL"]))
}

fn cache_base_url(value: &str) -> String {
    let value = normalize_base_url(value);
    let _ = API_BASE_URL.set(value.clone());
    API_BASE_URL.get().cloned().unwrap_or(value)
}

fn write_window_config(cfg: &RuntimeConfig) {
    let (Some(url), Some(window)) = (&cfg.api_base_url, web_sys::window()) else {
        return;
    };
    let obj = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &obj,
        &"api_base_url".into(),
        &wasm_bindgen::JsValue::from_str(url),
    );
    let _ = js_sys::Reflect::set(&window, &"__HRMS_CONFIG".into(), &obj);
}

async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
    let window = web_sys::window().context("no global `window` exists")?;
    let href = window
        .location()
        .href()
        .map_err(|_| anyhow!("location.href is unavailable"))?;
    let url = reqwest::Url::parse(&href)?.join("config.json")?;
    let response = reqwest::get(url).await?;
    if !response.status().is_success() {
        bail!("config.json returned {}", response.status());
    }
    Ok(response.json::<RuntimeConfig>().await?)
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    match fetch_runtime_config().await {
        Ok(cfg) => {
            write_window_config(&cfg);
            if let Some(url) = cfg.api_base_url {
                return cache_base_url(&url);
            }
        }
        Err(err) => log::debug!("Runtime config not loaded: {:#}", err),
    }
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let base_url = await_api_base_url().await;
    log::info!("API base URL: {}", base_url);
}
