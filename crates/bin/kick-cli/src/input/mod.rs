use crate::cli::{ENGINE_ENV_VAR, RunContext, Supplied};
use crate::console::{Palette, Tone};
use crate::error::{GenerationError, ScaffoldResult};
use kick_templates::ENGINE_VERSION;
use std::fmt;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use tracing::{debug, warn};

#[cfg(test)]
pub mod scripted;

/// The values the tool needs from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    ProjectPath,
    ProjectName,
    ExecutableName,
    EnginePath,
    Confirmation,
}

impl Input {
    /// Command line flag supplying this value, if there is one.
    pub fn flag(&self) -> Option<&'static str> {
        match self {
            Input::ProjectPath => Some("--projectPath"),
            Input::ProjectName => Some("--projectName"),
            Input::ExecutableName => Some("--executableName"),
            Input::EnginePath => Some("--godot"),
            Input::Confirmation => None,
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Input::ProjectPath => "project path",
            Input::ProjectName => "project name",
            Input::ExecutableName => "executable name",
            Input::EnginePath => "Godot path",
            Input::Confirmation => "confirmation answer",
        };
        write!(f, "{name}")
    }
}

/// Somewhere answers to prompts come from.
pub trait InputSource {
    /// Show `prompt` and read one line, without its line terminator.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    fn next(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Line based prompts over a reader/writer pair, standard input by default.
pub struct LineSource<R, W> {
    reader: R,
    writer: W,
}

impl LineSource<StdinLock<'static>, Stdout> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LineSource<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> InputSource for LineSource<R, W> {
    fn next(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

/// Resolves every input, preferring command line values over prompts.
pub struct Resolver<S> {
    source: S,
    supplied: Supplied,
    engine_env: Option<String>,
    bundle_suffix: Option<&'static str>,
    palette: Palette,
}

impl<S: InputSource> Resolver<S> {
    pub fn new(source: S, supplied: Supplied, context: &RunContext) -> Self {
        Self {
            source,
            supplied,
            engine_env: context.engine_env.clone(),
            bundle_suffix: context.bundle_suffix,
            palette: context.palette,
        }
    }

    /// Path to the Godot executable: `--godot`, then the environment, then a prompt.
    pub fn engine_path(&mut self) -> ScaffoldResult<String> {
        let path = match (non_empty(&self.supplied.engine_path), self.engine_env.clone()) {
            (Some(path), _) => path,
            (None, Some(path)) => {
                debug!(variable = ENGINE_ENV_VAR, "Using Godot path from the environment");
                path
            }
            (None, None) => {
                let prompt = format!(
                    "{}\nPlease enter the full path to the Godot {ENGINE_VERSION} executable: ",
                    self.palette
                        .paint(Tone::Warning, &format!("{ENGINE_ENV_VAR} not set"))
                );
                self.ask(Input::EnginePath, &prompt)?
            }
        };

        self.check_bundle_path(&path)?;
        Ok(path)
    }

    /// Rejects application bundles on platforms where Godot ships as one.
    pub fn check_bundle_path(&self, path: &str) -> ScaffoldResult<()> {
        let Some(suffix) = self.bundle_suffix else {
            return Ok(());
        };

        if path.trim_end_matches('/').ends_with(suffix) {
            return Err(GenerationError::BundlePath {
                path: path.to_string(),
            });
        }

        Ok(())
    }

    pub fn project_path(&mut self) -> ScaffoldResult<String> {
        self.supplied_or_ask(
            self.supplied.project_path.clone(),
            Input::ProjectPath,
            "Please enter where you would like the project directory to be created: ",
        )
    }

    pub fn project_name(&mut self) -> ScaffoldResult<String> {
        self.supplied_or_ask(
            self.supplied.project_name.clone(),
            Input::ProjectName,
            "Please enter the name of the project: ",
        )
    }

    pub fn executable_name(&mut self, project_name: &str) -> ScaffoldResult<String> {
        let executable_name = self.supplied_or_ask(
            self.supplied.executable_name.clone(),
            Input::ExecutableName,
            "Please enter the name of the executable: ",
        )?;

        check_distinct_names(project_name, &executable_name)?;
        Ok(executable_name)
    }

    /// Fail early when both names came from the command line and collide.
    pub fn check_supplied_names(&self) -> ScaffoldResult<()> {
        match (
            non_empty(&self.supplied.project_name),
            non_empty(&self.supplied.executable_name),
        ) {
            (Some(project_name), Some(executable_name)) => {
                check_distinct_names(&project_name, &executable_name)
            }
            _ => Ok(()),
        }
    }

    /// Ask a yes/no question until it gets a recognisable answer.
    pub fn confirm(&mut self, question: &str) -> ScaffoldResult<bool> {
        let prompt = format!("{question} [y/n] ");
        loop {
            let answer = self.ask(Input::Confirmation, &prompt)?;
            match parse_answer(&answer) {
                Some(answer) => return Ok(answer),
                None => debug!(answer, "Unrecognised answer, asking again"),
            }
        }
    }

    #[cfg(test)]
    pub fn into_source(self) -> S {
        self.source
    }

    fn supplied_or_ask(
        &mut self,
        supplied: Option<String>,
        input: Input,
        prompt: &str,
    ) -> ScaffoldResult<String> {
        match supplied.filter(|value| !value.is_empty()) {
            Some(value) => Ok(value),
            None => self.ask(input, prompt),
        }
    }

    fn ask(&mut self, input: Input, prompt: &str) -> ScaffoldResult<String> {
        let answer = self.source.next(prompt).map_err(|error| {
            warn!(%input, %error, "Failed to read an answer");
            GenerationError::MissingInput(input)
        })?;

        match answer.as_deref().map(str::trim) {
            Some(answer) if !answer.is_empty() => Ok(answer.to_string()),
            _ => Err(GenerationError::MissingInput(input)),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.clone().filter(|value| !value.is_empty())
}

/// Project and executable targets must not share a name, in any casing.
pub fn check_distinct_names(project_name: &str, executable_name: &str) -> ScaffoldResult<()> {
    if project_name.to_lowercase() == executable_name.to_lowercase() {
        return Err(GenerationError::DuplicateName {
            project_name: project_name.to_string(),
            executable_name: executable_name.to_string(),
        });
    }

    Ok(())
}

fn parse_answer(answer: &str) -> Option<bool> {
    match answer.to_lowercase().as_str() {
        "y" | "yes" | "true" => Some(true),
        "n" | "no" | "false" => Some(false),
        _ => None,
    }
}
