//! All label operations bound to one configuration.

use std::sync::Arc;

use crate::config::Config;
use crate::definitions::{AddProjectLabel, DeleteProjectLabels, GetProjectLabels, UpdateProjectLabels};
use crate::wrapper::{wrap, BoundOperation};

/// Bound label operations sharing one `Config`.
///
/// ```
/// use gitlab_labels::{labels, Config, NewLabel, ProjectId};
///
/// let labels = labels(Config::new("https://gitlab.example.com/api/v3", "token"));
/// let req = labels
///     .add_project_label
///     .call((ProjectId::Id(1), NewLabel { name: "feature".into(), color: "#5843AD".into() }))
///     .unwrap();
/// assert_eq!(req.header("PRIVATE-TOKEN"), Some("token"));
/// ```
#[derive(Debug, Clone)]
pub struct Labels {
    pub get_project_labels: BoundOperation<GetProjectLabels>,
    pub add_project_label: BoundOperation<AddProjectLabel>,
    pub delete_project_labels: BoundOperation<DeleteProjectLabels>,
    pub update_project_labels: BoundOperation<UpdateProjectLabels>,
}

pub fn labels(config: Config) -> Labels {
    let config = Arc::new(config);
    Labels {
        get_project_labels: wrap(GetProjectLabels).bind(Arc::clone(&config)),
        add_project_label: wrap(AddProjectLabel).bind(Arc::clone(&config)),
        delete_project_labels: wrap(DeleteProjectLabels).bind(Arc::clone(&config)),
        update_project_labels: wrap(UpdateProjectLabels).bind(config),
    }
}
