//! Authenticating wrapper around operation definitions.
//!
//! # Design
//! `wrap(definition)` captures a definition, `bind(config)` captures the
//! configuration, and `call(args)` builds a fresh request and stamps the
//! `PRIVATE-TOKEN` header on it. The request is returned unsent; the caller
//! decides when and how to execute it.

use std::sync::Arc;

use crate::config::Config;
use crate::definitions::Operation;
use crate::error::Result;
use crate::http::HttpRequest;

/// Header carrying the private token on every request.
pub const PRIVATE_TOKEN_HEADER: &str = "PRIVATE-TOKEN";

/// A definition waiting for its configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Wrap<O> {
    operation: O,
}

pub fn wrap<O: Operation>(operation: O) -> Wrap<O> {
    Wrap { operation }
}

impl<O: Operation + Clone> Wrap<O> {
    pub fn bind(&self, config: Arc<Config>) -> BoundOperation<O> {
        BoundOperation {
            operation: self.operation.clone(),
            config,
        }
    }
}

/// A definition bound to one configuration, callable with per-call arguments.
#[derive(Debug, Clone)]
pub struct BoundOperation<O> {
    operation: O,
    config: Arc<Config>,
}

impl<O: Operation> BoundOperation<O> {
    /// Build the request and attach the credential header. Errors from the
    /// definition are returned unchanged.
    pub fn call(&self, args: O::Args) -> Result<HttpRequest> {
        let mut req = self.operation.build(&self.config.api_base_url, args)?;
        req.set(PRIVATE_TOKEN_HEADER, &self.config.token);
        tracing::debug!(method = %req.method, path = %req.path, "built authenticated request");
        Ok(req)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::{AddProjectLabel, GetProjectLabels};
    use crate::error::Error;
    use crate::http::HttpMethod;
    use crate::types::{NewLabel, ProjectId};

    fn config() -> Arc<Config> {
        Arc::new(Config::new("https://gitlab.example.com/api/v3", "9koXpg98eAheJpvBs5tK"))
    }

    /// Definition that always fails, to check error propagation.
    #[derive(Clone)]
    struct Failing;

    impl Operation for Failing {
        type Args = ();

        fn build(&self, _api_base_url: &str, _args: ()) -> Result<HttpRequest> {
            let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
            Err(Error::Serialization(err))
        }
    }

    /// Definition that already sets a token header of its own.
    #[derive(Clone)]
    struct PresetToken;

    impl Operation for PresetToken {
        type Args = ();

        fn build(&self, api_base_url: &str, _args: ()) -> Result<HttpRequest> {
            let mut req = HttpRequest::new(HttpMethod::Get, format!("{api_base_url}/version"));
            req.set("private-token", "stale");
            Ok(req)
        }
    }

    #[test]
    fn call_attaches_private_token() {
        let op = wrap(GetProjectLabels).bind(config());
        let req = op.call(ProjectId::Id(1)).unwrap();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "https://gitlab.example.com/api/v3/projects/1/labels");
        assert_eq!(req.header(PRIVATE_TOKEN_HEADER), Some("9koXpg98eAheJpvBs5tK"));
    }

    #[test]
    fn token_is_attached_alongside_definition_headers() {
        let op = wrap(AddProjectLabel).bind(config());
        let payload = NewLabel {
            name: "feature".to_string(),
            color: "#5843AD".to_string(),
        };
        let req = op.call((ProjectId::Id(1), payload)).unwrap();
        assert_eq!(req.header("content-type"), Some("application/json"));
        assert_eq!(req.header(PRIVATE_TOKEN_HEADER), Some("9koXpg98eAheJpvBs5tK"));
        assert_eq!(req.headers.len(), 2);
    }

    #[test]
    fn bound_token_replaces_definition_token() {
        let req = wrap(PresetToken).bind(config()).call(()).unwrap();
        assert_eq!(req.headers.len(), 1);
        assert_eq!(req.header(PRIVATE_TOKEN_HEADER), Some("9koXpg98eAheJpvBs5tK"));
    }

    #[test]
    fn definition_errors_propagate() {
        let err = wrap(Failing).bind(config()).call(()).unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn repeated_calls_yield_independent_requests() {
        let op = wrap(GetProjectLabels).bind(config());
        let mut first = op.call(ProjectId::Id(1)).unwrap();
        let second = op.call(ProjectId::Id(1)).unwrap();
        assert_eq!(first, second);

        first.query("name", "bug");
        first.set(PRIVATE_TOKEN_HEADER, "changed");
        assert!(second.query.is_empty());
        assert_eq!(second.header(PRIVATE_TOKEN_HEADER), Some("9koXpg98eAheJpvBs5tK"));
    }

    #[test]
    fn one_definition_binds_to_many_configs() {
        let wrapped = wrap(GetProjectLabels);
        let a = wrapped.bind(Arc::new(Config::new("https://a.example.com", "token-a")));
        let b = wrapped.bind(Arc::new(Config::new("https://b.example.com", "token-b")));
        let req_a = a.call(ProjectId::Id(1)).unwrap();
        let req_b = b.call(ProjectId::Id(1)).unwrap();
        assert_eq!(req_a.header(PRIVATE_TOKEN_HEADER), Some("token-a"));
        assert_eq!(req_b.header(PRIVATE_TOKEN_HEADER), Some("token-b"));
        assert_eq!(req_b.path, "https://b.example.com/projects/1/labels");
    }

    #[test]
    #[tracing_test::traced_test]
    fn call_logs_request_without_token() {
        let op = wrap(GetProjectLabels).bind(config());
        op.call(ProjectId::Id(1)).unwrap();
        assert!(logs_contain("built authenticated request"));
        assert!(logs_contain("https://gitlab.example.com/api/v3/projects/1/labels"));
        assert!(!logs_contain("9koXpg98eAheJpvBs5tK"));
    }
}
