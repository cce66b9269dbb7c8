use crate::error::ScaffoldResult;
use crate::filesystem;
use kick_templates::generator::{
    EnvFile, ExecutableSource, ExportPresets, GdExtension, GodotProject, LibrarySource, Manifest,
};
use kick_templates::resources::Resource;
use kick_templates::{Project, Template};
use std::path::PathBuf;
use tracing::info;

enum Action {
    Render {
        template: Box<dyn Template>,
        allow_overwrite: bool,
    },
    Copy(Resource),
    Directory,
}

/// One artifact of the generated project.
pub struct GenerationStep {
    pub name: &'static str,
    /// Target path, relative to the project root.
    pub path: PathBuf,
    action: Action,
}

impl GenerationStep {
    fn render(template: impl Template + 'static, project: &Project, allow_overwrite: bool) -> Self {
        Self {
            name: template.name(),
            path: template.path(project),
            action: Action::Render {
                template: Box::new(template),
                allow_overwrite,
            },
        }
    }

    fn copy(resource: Resource) -> Self {
        Self {
            name: resource.name(),
            path: resource.destination().to_path_buf(),
            action: Action::Copy(resource),
        }
    }

    fn directory(name: &'static str, path: PathBuf) -> Self {
        Self {
            name,
            path,
            action: Action::Directory,
        }
    }

    /// Produce the artifact, returning its absolute path.
    #[tracing::instrument(skip_all, fields(step = self.name))]
    pub fn execute(self, project: &Project) -> ScaffoldResult<PathBuf> {
        let path = project.absolute(&self.path);

        match self.action {
            Action::Render {
                template,
                allow_overwrite,
            } => filesystem::create_file(&path, &template.render(project), allow_overwrite)?,
            Action::Copy(resource) => filesystem::copy_resource(resource, &path)?,
            Action::Directory => filesystem::create_directory(&path, true)?,
        }

        info!(path = ?path, "Created");
        Ok(path)
    }
}

/// Every step of a generation run, in the order they execute.
pub fn plan(project: &Project) -> Vec<GenerationStep> {
    vec![
        GenerationStep::render(Manifest, project, true),
        GenerationStep::copy(Resource::Readme),
        GenerationStep::copy(Resource::GitIgnore),
        GenerationStep::render(EnvFile, project, true),
        GenerationStep::directory("sources directory", project.sources_directory()),
        GenerationStep::directory("library target", project.library_directory()),
        GenerationStep::render(LibrarySource, project, false),
        GenerationStep::directory("executable target", project.executable_directory()),
        GenerationStep::render(ExecutableSource, project, true),
        GenerationStep::directory(
            "executable resources",
            project.executable_resources_directory(),
        ),
        GenerationStep::copy(Resource::DesignDocument),
        GenerationStep::copy(Resource::GodotDirectory),
        GenerationStep::render(GodotProject, project, true),
        GenerationStep::render(GdExtension, project, true),
        GenerationStep::render(ExportPresets, project, true),
        GenerationStep::copy(Resource::Makefile),
    ]
}

/// The artifacts created by a run, in creation order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    created: Vec<(&'static str, PathBuf)>,
}

impl GenerationResult {
    pub fn record(&mut self, name: &'static str, path: PathBuf) {
        self.created.push((name, path));
    }

    pub fn entries(&self) -> &[(&'static str, PathBuf)] {
        &self.created
    }

    #[cfg(test)]
    pub fn paths(&self) -> impl Iterator<Item = &std::path::Path> {
        self.created.iter().map(|(_, path)| path.as_path())
    }
}
