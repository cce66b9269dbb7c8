use crate::cli::{RunContext, Supplied};
use crate::console::{Console, Tone};
use crate::error::{GenerationError, ScaffoldResult};
use crate::filesystem::{self, PathStatus};
use crate::input::{InputSource, Resolver};
use kick_templates::generator::Manifest;
use kick_templates::{Project, Template};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub use crate::scaffold::steps::GenerationResult;

mod steps;

/// Where a run currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ResolvingInputs,
    ValidatingTarget,
    AwaitingConfirmation,
    Generating,
    Done,
    Aborted,
    Failed,
}

/// How a run ended, when it did not end in an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created(GenerationResult),
    /// The user would not let the target directory be created.
    TargetDeclined,
    /// The user stopped before anything was generated.
    ProceedDeclined,
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Created(_) | Outcome::ProceedDeclined => 0,
            Outcome::TargetDeclined => 1,
        }
    }
}

/// The directory a project is generated into.
struct Target {
    root: PathBuf,
    /// Whether this run created the directory.
    created: bool,
}

/// Drives one project generation, from the first prompt to the last file.
pub struct Scaffolder<S, W> {
    resolver: Resolver<S>,
    console: Console<W>,
    stage: Stage,
    /// Deletes the target directory when the user declines to proceed.
    remove_tree: fn(&Path) -> io::Result<()>,
}

impl<S: InputSource, W: Write> Scaffolder<S, W> {
    pub fn new(context: &RunContext, supplied: Supplied, source: S, out: W) -> Self {
        Self {
            resolver: Resolver::new(source, supplied, context),
            console: Console::new(context.palette, out),
            stage: Stage::ResolvingInputs,
            remove_tree: filesystem::remove_tree,
        }
    }

    #[cfg(test)]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn console(&mut self) -> &mut Console<W> {
        &mut self.console
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (S, W) {
        (self.resolver.into_source(), self.console.into_inner())
    }

    pub fn run(&mut self) -> ScaffoldResult<Outcome> {
        let result = self.drive();

        match &result {
            Ok(Outcome::Created(_)) => {}
            Ok(outcome) => {
                info!(?outcome, "Generation stopped by the user");
                self.enter(Stage::Aborted);
            }
            Err(error) => {
                debug!(kind = ?error.kind(), stage = ?self.stage, "Generation failed");
                self.enter(Stage::Failed);
            }
        }

        result
    }

    fn drive(&mut self) -> ScaffoldResult<Outcome> {
        self.enter(Stage::ResolvingInputs);
        let engine_path = self.resolver.engine_path()?;
        let project_path = self.resolver.project_path()?;
        self.resolver.check_supplied_names()?;

        self.enter(Stage::ValidatingTarget);
        let Some(target) = self.prepare_target(Path::new(&project_path))? else {
            self.console.line("Goodbye")?;
            return Ok(Outcome::TargetDeclined);
        };

        let Some(project) = self.settle(&target, engine_path)? else {
            self.roll_back(&target)?;
            self.console.line("Goodbye")?;
            return Ok(Outcome::ProceedDeclined);
        };

        self.enter(Stage::Generating);
        let result = self.generate(&project)?;

        self.enter(Stage::Done);
        self.console.line(&format!(
            "run the following command:\n\ncd {} && make all",
            project.root.display()
        ))?;

        Ok(Outcome::Created(result))
    }

    /// Makes sure the target exists, is empty and is the working directory.
    ///
    /// Returns `None` when the user declines to create a missing directory.
    #[tracing::instrument(skip(self))]
    fn prepare_target(&mut self, path: &Path) -> ScaffoldResult<Option<Target>> {
        let created = match filesystem::path_status(path) {
            PathStatus::Missing => {
                let question = self.console.palette().paint(
                    Tone::Warning,
                    &format!(
                        "There is no directory at path: {}, would you like to create it?",
                        path.display()
                    ),
                );
                if !self.resolver.confirm(&question)? {
                    return Ok(None);
                }

                filesystem::create_directory(path, true)?;
                info!(path = ?path, "Created project directory");
                true
            }
            PathStatus::File | PathStatus::Directory => false,
        };

        let root = filesystem::canonical_directory(path)
            .map_err(|source| change_directory_error(path, source))?;

        let target = Target { root, created };
        move_into(&target)?;

        Ok(Some(target))
    }

    /// Collects the names and asks for the go-ahead.
    fn settle(&mut self, target: &Target, engine_path: String) -> ScaffoldResult<Option<Project>> {
        let project_name = self.resolver.project_name()?;
        let executable_name = self.resolver.executable_name(&project_name)?;

        self.enter(Stage::AwaitingConfirmation);
        let project = Project::new(
            target.root.clone(),
            project_name,
            executable_name,
            engine_path,
        );
        let manifest = project.absolute(&Manifest.path(&project));
        let proceed = self.resolver.confirm(&format!(
            "Project will be created at: {}, would you like to proceed?",
            manifest.display()
        ))?;

        Ok(proceed.then_some(project))
    }

    fn roll_back(&mut self, target: &Target) -> ScaffoldResult<()> {
        if !target.created {
            debug!(path = ?target.root, "Directory existed before this run, leaving it");
            return Ok(());
        }

        self.console
            .line(&format!("Removing {}", target.root.display()))?;
        if let Err(error) = (self.remove_tree)(&target.root) {
            warn!(path = ?target.root, %error, "Could not remove the project directory");
            self.console
                .failure(&format!("Could not remove {}", target.root.display()))?;
        }

        Ok(())
    }

    #[tracing::instrument(skip_all, fields(root = ?project.root))]
    fn generate(&mut self, project: &Project) -> ScaffoldResult<GenerationResult> {
        let mut result = GenerationResult::default();

        for step in steps::plan(project) {
            let name = step.name;
            let path = step.execute(project)?;
            self.console
                .success(&format!("Created {}", path.display()))?;
            result.record(name, path);
        }

        info!(files = result.entries().len(), "Project generated");
        Ok(result)
    }

    fn enter(&mut self, stage: Stage) {
        debug!(from = ?self.stage, to = ?stage, "Stage transition");
        self.stage = stage;
    }
}

fn move_into(target: &Target) -> ScaffoldResult<()> {
    std::env::set_current_dir(&target.root)
        .map_err(|source| change_directory_error(&target.root, source))?;

    let entries = filesystem::list_directory(&target.root)?;
    if !entries.is_empty() {
        return Err(GenerationError::DirectoryNotEmpty {
            path: target.root.clone(),
            entries,
        });
    }

    Ok(())
}

fn change_directory_error(path: &Path, source: io::Error) -> GenerationError {
    GenerationError::ChangeDirectory {
        path: path.to_path_buf(),
        status: filesystem::path_status(path),
        source,
    }
}
