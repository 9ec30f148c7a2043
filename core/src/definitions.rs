//! Operation definitions for the project labels endpoints.
//!
//! # Design
//! Each endpoint is a pure function from a base URL and its arguments to an
//! unsent `HttpRequest`. The functions hold no state and do no I/O, so they
//! can be called repeatedly and from any thread. Each one is also exposed as
//! a unit struct implementing [`Operation`], which is what the authenticating
//! wrapper is generic over.

use serde::Serialize;

use crate::error::Result;
use crate::http::{HttpMethod, HttpRequest};
use crate::types::{LabelUpdate, NewLabel, ProjectId};

/// A request builder for one remote endpoint.
pub trait Operation {
    /// Per-call arguments, everything except the base URL.
    type Args;

    fn build(&self, api_base_url: &str, args: Self::Args) -> Result<HttpRequest>;
}

fn labels_path(api_base_url: &str, id: &ProjectId) -> String {
    format!("{api_base_url}/projects/{id}/labels")
}

fn with_json_body<T: Serialize>(mut req: HttpRequest, payload: &T) -> Result<HttpRequest> {
    req.body = Some(serde_json::to_string(payload)?);
    req.set("content-type", "application/json");
    Ok(req)
}

/// `GET /projects/:id/labels`
pub fn get_project_labels(api_base_url: &str, id: &ProjectId) -> HttpRequest {
    HttpRequest::new(HttpMethod::Get, labels_path(api_base_url, id))
}

/// `POST /projects/:id/labels` with body `{name, color}`.
pub fn add_project_label(api_base_url: &str, id: &ProjectId, payload: &NewLabel) -> Result<HttpRequest> {
    let req = HttpRequest::new(HttpMethod::Post, labels_path(api_base_url, id));
    with_json_body(req, payload)
}

/// `DELETE /projects/:id/labels`
///
/// The label to delete is chosen by the caller through the query string,
/// e.g. `req.query("name", "bug")`.
pub fn delete_project_labels(api_base_url: &str, id: &ProjectId) -> HttpRequest {
    HttpRequest::new(HttpMethod::Delete, labels_path(api_base_url, id))
}

/// `PUT /projects/:id/labels` with body `{name, new_name, color}`.
pub fn update_project_labels(
    api_base_url: &str,
    id: &ProjectId,
    payload: &LabelUpdate,
) -> Result<HttpRequest> {
    let req = HttpRequest::new(HttpMethod::Put, labels_path(api_base_url, id));
    with_json_body(req, payload)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GetProjectLabels;

impl Operation for GetProjectLabels {
    type Args = ProjectId;

    fn build(&self, api_base_url: &str, id: ProjectId) -> Result<HttpRequest> {
        Ok(get_project_labels(api_base_url, &id))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AddProjectLabel;

impl Operation for AddProjectLabel {
    type Args = (ProjectId, NewLabel);

    fn build(&self, api_base_url: &str, (id, payload): Self::Args) -> Result<HttpRequest> {
        add_project_label(api_base_url, &id, &payload)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteProjectLabels;

impl Operation for DeleteProjectLabels {
    type Args = ProjectId;

    fn build(&self, api_base_url: &str, id: ProjectId) -> Result<HttpRequest> {
        Ok(delete_project_labels(api_base_url, &id))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateProjectLabels;

impl Operation for UpdateProjectLabels {
    type Args = (ProjectId, LabelUpdate);

    fn build(&self, api_base_url: &str, (id, payload): Self::Args) -> Result<HttpRequest> {
        update_project_labels(api_base_url, &id, &payload)
    }
}
