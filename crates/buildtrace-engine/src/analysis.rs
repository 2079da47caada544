use serde::Serialize;

use buildtrace_types::{BuildEvent, ProjectId};

use crate::model::ProjectAnalysis;

/// The immutable result of one pipeline run: every per-project record, in
/// project-id order, plus the events no handler claimed.
#[derive(Debug, Clone, Serialize)]
pub struct BuildAnalysis {
    projects: Vec<ProjectAnalysis>,
    skipped: Vec<BuildEvent>,
}

impl BuildAnalysis {
    pub(crate) fn new(projects: Vec<ProjectAnalysis>, skipped: Vec<BuildEvent>) -> Self {
        Self { projects, skipped }
    }

    pub fn projects(&self) -> &[ProjectAnalysis] {
        &self.projects
    }

    pub fn get(&self, project_id: ProjectId) -> Option<&ProjectAnalysis> {
        self.projects.iter().find(|p| p.project_id == project_id)
    }

    pub fn skipped(&self) -> &[BuildEvent] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProjectAnalysis> {
        self.projects.iter()
    }

    /// True when every analyzed project succeeded; vacuously true for an
    /// empty run. An external exit-code fact, where one exists, is ANDed
    /// with this by the caller.
    pub fn overall_success(&self) -> bool {
        self.projects.iter().all(ProjectAnalysis::overall_success)
    }
}

impl<'a> IntoIterator for &'a BuildAnalysis {
    type Item = &'a ProjectAnalysis;
    type IntoIter = std::slice::Iter<'a, ProjectAnalysis>;

    fn into_iter(self) -> Self::IntoIter {
        self.projects.iter()
    }
}

impl IntoIterator for BuildAnalysis {
    type Item = ProjectAnalysis;
    type IntoIter = std::vec::IntoIter<ProjectAnalysis>;

    fn into_iter(self) -> Self::IntoIter {
        self.projects.into_iter()
    }
}
