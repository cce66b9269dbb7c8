use crate::console::Palette;
use clap::Parser;

/// Environment variable consulted for the Godot path when `--godot` is absent.
pub const ENGINE_ENV_VAR: &str = "GODOT";

/// Suffix of application bundles on platforms where Godot ships as one.
pub const PLATFORM_BUNDLE_SUFFIX: Option<&str> = if cfg!(target_os = "macos") {
    Some(".app")
} else {
    None
};

#[derive(Parser, Debug, Default)]
#[command(name = "swift-godot-kick", version, about, long_about = None)]
pub struct Cli {
    /// Disable colorized output
    #[arg(long = "noColor")]
    pub no_color: bool,

    /// Project name
    #[arg(long = "projectName", value_name = "name")]
    pub project_name: Option<String>,

    /// Executable name
    #[arg(long = "executableName", value_name = "name")]
    pub executable_name: Option<String>,

    /// Path where Package.swift and other files will be saved
    #[arg(long = "projectPath", value_name = "path")]
    pub project_path: Option<String>,

    /// Path to the Godot binary.
    ///
    /// Falls back to the GODOT environment variable, then to a prompt.
    #[arg(long = "godot", value_name = "path")]
    pub godot: Option<String>,
}

impl Cli {
    pub fn supplied(&self) -> Supplied {
        Supplied {
            project_path: self.project_path.clone(),
            project_name: self.project_name.clone(),
            executable_name: self.executable_name.clone(),
            engine_path: self.godot.clone(),
        }
    }
}

/// Values given on the command line. Anything missing is asked for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Supplied {
    pub project_path: Option<String>,
    pub project_name: Option<String>,
    pub executable_name: Option<String>,
    pub engine_path: Option<String>,
}

/// Process-wide settings, captured once at startup and never re-read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    pub palette: Palette,
    /// Value of [`ENGINE_ENV_VAR`], when set and non-empty.
    pub engine_env: Option<String>,
    pub bundle_suffix: Option<&'static str>,
}

impl RunContext {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            palette: Palette::new(!cli.no_color),
            engine_env: std::env::var(ENGINE_ENV_VAR)
                .ok()
                .filter(|value| !value.is_empty()),
            bundle_suffix: PLATFORM_BUNDLE_SUFFIX,
        }
    }

    pub fn color(&self) -> bool {
        self.palette.colored()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_parses_camel_case_flags() {
        let cli = Cli::try_parse_from([
            "swift-godot-kick",
            "--projectPath",
            "/tmp/demo",
            "--projectName",
            "Foo",
            "--executableName",
            "FooGame",
            "--godot",
            "/usr/local/bin/godot",
            "--noColor",
        ])
        .unwrap();

        assert!(cli.no_color);
        assert_eq!(
            cli.supplied(),
            Supplied {
                project_path: Some("/tmp/demo".to_string()),
                project_name: Some("Foo".to_string()),
                executable_name: Some("FooGame".to_string()),
                engine_path: Some("/usr/local/bin/godot".to_string()),
            }
        );
    }

    #[test]
    fn test_every_value_is_optional() {
        let cli = Cli::try_parse_from(["swift-godot-kick"]).unwrap();

        assert!(!cli.no_color);
        assert_eq!(cli.supplied(), Supplied::default());
    }

    #[test]
    fn test_help_and_version_are_not_errors() {
        let help = Cli::try_parse_from(["swift-godot-kick", "--help"]).unwrap_err();
        let version = Cli::try_parse_from(["swift-godot-kick", "--version"]).unwrap_err();

        assert_eq!(help.kind(), ErrorKind::DisplayHelp);
        assert_eq!(version.kind(), ErrorKind::DisplayVersion);
        assert_eq!(help.exit_code(), 0);
        assert_eq!(version.exit_code(), 0);
    }

    #[test]
    fn test_no_color_switches_palette_off() {
        let cli = Cli::try_parse_from(["swift-godot-kick", "--noColor"]).unwrap();

        assert!(!RunContext::from_cli(&cli).color());
    }
}
