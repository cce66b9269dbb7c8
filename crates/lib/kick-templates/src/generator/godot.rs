use crate::generator::ENTRY_SYMBOL;
use crate::{ENGINE_VERSION, Project, Template};
use std::path::PathBuf;

/// Platform and architecture keys Godot may load the extension library for.
const LIBRARY_TARGETS: &[&str] = &[
    "macos",
    "windows.x86_32",
    "windows.x86_64",
    "linux.x86_64",
    "linux.arm64",
    "linux.rv64",
    "android.x86_64",
    "android.arm64",
];

/// `project.godot`, the engine project settings.
pub struct GodotProject;

impl Template for GodotProject {
    fn name(&self) -> &'static str {
        "godot project file"
    }

    fn path(&self, project: &Project) -> PathBuf {
        project.godot_directory().join("project.godot")
    }

    fn render(&self, project: &Project) -> Vec<u8> {
        format!(
            r#"; Engine configuration file.
; It's best edited using the editor UI and not directly,
; since the parameters that go here are not all obvious.
;
; Format:
;   [section] ; section goes between []
;   param=value ; assign values to parameters

config_version=5

[application]

config/name="{name}"
config/features=PackedStringArray("{ENGINE_VERSION}")
"#,
            name = project.name,
        )
        .into_bytes()
    }
}

/// `<name>.gdextension`, telling Godot where the Swift library lives.
pub struct GdExtension;

impl Template for GdExtension {
    fn name(&self) -> &'static str {
        "godot extension file"
    }

    fn path(&self, project: &Project) -> PathBuf {
        project
            .godot_directory()
            .join(format!("{}.gdextension", project.name))
    }

    fn render(&self, project: &Project) -> Vec<u8> {
        let library = format!("res://bin/lib{}.so", project.name);
        let libraries: String = LIBRARY_TARGETS
            .iter()
            .flat_map(|target| {
                let (platform, arch) = match target.split_once('.') {
                    Some((platform, arch)) => (platform, format!(".{arch}")),
                    None => (*target, String::new()),
                };
                ["debug", "release"]
                    .map(|build| format!("{platform}.{build}{arch} = \"{library}\"\n"))
            })
            .collect();

        format!(
            "[configuration]
entry_symbol = \"{ENTRY_SYMBOL}\"
compatibility_minimum = {ENGINE_VERSION}

[libraries]
{libraries}"
        )
        .into_bytes()
    }
}

/// `export_presets.cfg` with a single Web preset shipping the extension.
pub struct ExportPresets;

impl Template for ExportPresets {
    fn name(&self) -> &'static str {
        "export presets file"
    }

    fn path(&self, project: &Project) -> PathBuf {
        project.godot_directory().join("export_presets.cfg")
    }

    fn render(&self, project: &Project) -> Vec<u8> {
        format!(
            r#"[preset.0]

name="Packer"
platform="Web"
runnable=true
dedicated_server=false
custom_features=""
export_filter="exclude"
export_files=PackedStringArray("res://{name}.gdextension")
include_filter=""
exclude_filter=""
export_path=""
encryption_include_filters=""
encryption_exclude_filters=""
encrypt_pck=false
encrypt_directory=false

[preset.0.options]

custom_template/debug=""
custom_template/release=""
variant/extensions_support=false
vram_texture_compression/for_desktop=true
vram_texture_compression/for_mobile=false
html/export_icon=true
html/custom_html_shell=""
html/head_include=""
html/canvas_resize_policy=2
html/focus_canvas_on_start=true
html/experimental_virtual_keyboard=false
progressive_web_app/enabled=false
progressive_web_app/offline_page=""
progressive_web_app/display=1
progressive_web_app/orientation=0
progressive_web_app/icon_144x144=""
progressive_web_app/icon_180x180=""
progressive_web_app/icon_512x512=""
progressive_web_app/background_color=Color(0, 0, 0, 1)
"#,
            name = project.name,
        )
        .into_bytes()
    }
}
