use std::collections::HashMap;

const GAME_ID_PARAM: &str = "game_id";

/// Snapshot of the browser location, taken once at startup.
#[derive(Debug, Clone)]
pub struct PageEnv {
    pub protocol: String,
    pub host: String,
    pub search: String,
    pub origin: String,
}

/// Startup configuration handed to the embedded chess app.
///
/// `host` carries the full websocket endpoint, not just the host name;
/// the app expects the value under that field name.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub host: String,
    pub game_id: String,
}

/// Picks the websocket scheme for the page protocol: any protocol
/// containing an `s` ("https:") gets the secure scheme.
pub fn websocket_scheme(protocol: &str) -> &'static str {
    if protocol.contains('s') {
        "wss://"
    } else {
        "ws://"
    }
}

pub fn session_config(env: &PageEnv, params: &HashMap<String, String>) -> SessionConfig {
    SessionConfig {
        host: format!("{}{}", websocket_scheme(&env.protocol), env.host),
        game_id: params.get(GAME_ID_PARAM).cloned().unwrap_or_default(),
    }
}

/// Where to send the browser once a game id is assigned, if anywhere.
///
/// As soon as the query string mentions a game id the address bar is
/// left alone, even if the assigned id differs from the one shown.
pub fn game_id_redirect(env: &PageEnv, game_id: &str) -> Option<String> {
    if env.search.contains(GAME_ID_PARAM) {
        None
    } else {
        Some(format!("{}?{}={}", env.origin, GAME_ID_PARAM, game_id))
    }
}

/// Builds the handler wired into the app's game id notifications.
pub fn game_id_listener<N>(env: PageEnv, navigate: N) -> impl Fn(String) + 'static
where
    N: Fn(String) + 'static,
{
    move |game_id| {
        if let Some(url) = game_id_redirect(&env, &game_id) {
            navigate(url);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::query;

    fn env(protocol: &str, host: &str, search: &str) -> PageEnv {
        PageEnv {
            protocol: protocol.to_string(),
            host: host.to_string(),
            search: search.to_string(),
            origin: format!("{}//{}", protocol, host),
        }
    }

    #[test]
    fn https_picks_secure_scheme() {
        assert_eq!(websocket_scheme("https:"), "wss://");
        assert_eq!(websocket_scheme("http:"), "ws://");
    }

    #[test]
    fn endpoint_keeps_explicit_port() {
        let env = env("https:", "example.com:4000", "");
        let config = session_config(&env, &query::decode(&env.search));
        assert_eq!(config.host, "wss://example.com:4000");
    }

    #[test]
    fn game_id_comes_from_query() {
        let env = env("http:", "example.com", "?game_id=42");
        let config = session_config(&env, &query::decode(&env.search));
        assert_eq!(config.host, "ws://example.com");
        assert_eq!(config.game_id, "42");
    }

    #[test]
    fn missing_game_id_defaults_to_empty() {
        let env = env("http:", "example.com", "?foo=bar");
        let config = session_config(&env, &query::decode(&env.search));
        assert_eq!(config.game_id, "");
    }

    #[test]
    fn assigned_id_redirects_to_origin() {
        let env = env("https:", "example.com", "");
        assert_eq!(
            game_id_redirect(&env, "abc123").as_deref(),
            Some("https://example.com?game_id=abc123")
        );
    }

    #[test]
    fn redirect_drops_unrelated_params() {
        let env = env("https:", "example.com", "?foo=bar");
        assert_eq!(
            game_id_redirect(&env, "abc123").as_deref(),
            Some("https://example.com?game_id=abc123")
        );
    }

    #[test]
    fn no_redirect_when_url_already_names_a_game() {
        let env = env("https:", "example.com", "?game_id=xyz");
        assert_eq!(game_id_redirect(&env, "abc123"), None);
    }

    #[test]
    fn listener_navigates_once_per_assignment() {
        let visited = Rc::new(RefCell::new(Vec::new()));
        let sink = visited.clone();
        let listener = game_id_listener(env("http:", "example.com", ""), move |url| {
            sink.borrow_mut().push(url)
        });

        listener("abc123".to_string());
        assert_eq!(
            *visited.borrow(),
            vec!["http://example.com?game_id=abc123".to_string()]
        );
    }

    #[test]
    fn listener_stays_quiet_when_game_id_present() {
        let visited = Rc::new(RefCell::new(Vec::new()));
        let sink = visited.clone();
        let listener = game_id_listener(env("http:", "example.com", "?game_id=xyz"), move |url| {
            sink.borrow_mut().push(url)
        });

        listener("abc123".to_string());
        assert!(visited.borrow().is_empty());
    }
}
