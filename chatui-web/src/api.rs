use shared::config::ConfigError;
use shared::{ChatClient, CsrfSource};
use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, Window};

use crate::config::FrontendConfig;

/// Reads the anti-forgery token from `document.cookie` on every request, so a
/// token rotated by the server is picked up without reloading.
#[derive(Clone, Debug)]
pub struct CookieCsrfToken {
    cookie_name: String,
}

impl CookieCsrfToken {
    pub fn new(cookie_name: &str) -> Self {
        Self {
            cookie_name: cookie_name.to_string(),
        }
    }
}

impl CsrfSource for CookieCsrfToken {
    fn csrf_token(&self) -> Option<String> {
        read_cookie(&self.cookie_name)
    }
}

/// API client for the backend that served this page.
pub fn browser_client(
    config: &FrontendConfig,
) -> Result<ChatClient<CookieCsrfToken>, ConfigError> {
    let origin = web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default();
    ChatClient::from_config(
        &config.client_config(&origin),
        CookieCsrfToken::new(&config.csrf_cookie_name),
    )
}

fn read_cookie(name: &str) -> Option<String> {
    let window: Window = web_sys::window()?;
    let document = window.document()?;
    let html_doc: HtmlDocument = document.dyn_into().ok()?;
    let cookie_string = html_doc.cookie().ok()?;
    let raw = find_cookie(&cookie_string, name)?;

    Some(
        js_sys::decode_uri_component(raw)
            .ok()
            .and_then(|decoded| decoded.as_string())
            .unwrap_or_else(|| raw.to_string()),
    )
}

/// Raw (still URI-encoded) value of cookie `name` in a `document.cookie`
/// string.
fn find_cookie<'a>(cookie_string: &'a str, name: &str) -> Option<&'a str> {
    cookie_string.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key.trim() == name).then(|| value.trim())
    })
}
