//! Request-building client core for the GitLab project labels API.
//!
//! # Overview
//! Builds `HttpRequest` values for the labels endpoints without touching the
//! network (host-does-IO pattern). The caller sends the request with any
//! transport and handles the response itself.
//!
//! # Design
//! - `definitions` holds one pure builder per endpoint, each also exposed as
//!   an [`Operation`] unit struct.
//! - `wrapper` binds an operation to a [`Config`] and stamps the
//!   `PRIVATE-TOKEN` header on every request it builds.
//! - `labels` bundles all label operations for a single `Config`.
//! - Types use owned `String` / `Vec` fields so requests move freely between
//!   threads and transports.

pub mod config;
pub mod definitions;
pub mod error;
pub mod http;
pub mod labels;
pub mod types;
pub mod wrapper;

pub use config::Config;
pub use definitions::{AddProjectLabel, DeleteProjectLabels, GetProjectLabels, Operation, UpdateProjectLabels};
pub use error::{Error, Result};
pub use http::{HttpMethod, HttpRequest};
pub use labels::{labels, Labels};
pub use types::{Label, LabelUpdate, NewLabel, ProjectId};
pub use wrapper::{wrap, BoundOperation, Wrap, PRIVATE_TOKEN_HEADER};
