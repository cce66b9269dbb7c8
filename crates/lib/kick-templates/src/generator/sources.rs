use crate::generator::ENTRY_SYMBOL;
use crate::{Project, Template};
use std::path::PathBuf;

/// Example source file of the library target, registering one Godot type.
pub struct LibrarySource;

impl Template for LibrarySource {
    fn name(&self) -> &'static str {
        "library source"
    }

    fn path(&self, project: &Project) -> PathBuf {
        project
            .library_directory()
            .join(format!("{}.swift", project.name))
    }

    fn render(&self, _project: &Project) -> Vec<u8> {
        format!(
            r#"import SwiftGodot

#warning("Remove this HelloWorld class")
@Godot(.tool)
public class HelloWorld: Node {{
    public override func _ready() {{
        GD.printDebug("Hello world!")
    }}
}}

public let godotTypes: [Wrapped.Type] = [
    HelloWorld.self
]

#initSwiftExtension(cdecl: "{ENTRY_SYMBOL}", types: godotTypes)
"#
        )
        .into_bytes()
    }
}

/// `main.swift` of the executable target, booting Godot with the library types.
pub struct ExecutableSource;

impl Template for ExecutableSource {
    fn name(&self) -> &'static str {
        "executable source"
    }

    fn path(&self, project: &Project) -> PathBuf {
        project.executable_directory().join("main.swift")
    }

    fn render(&self, project: &Project) -> Vec<u8> {
        let name = &project.name;

        format!(
            r#"import {name}
import SwiftGodot
import SwiftGodotKit

func loadScene(scene: SceneTree) {{
    scene.root?.addChild(node: HelloWorld())
}}

func registerTypes(level: GDExtension.InitializationLevel) {{
    switch level {{
    case .scene:
        {name}.godotTypes.forEach {{ register(type: $0) }}
    default:
        break
    }}
}}

runGodot(
    args: [],
    initHook: registerTypes,
    loadScene: loadScene,
    loadProjectSettings: {{ settings in }}
)
"#
        )
        .into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_source_exports_entry_symbol() {
        let project = Project::new("/tmp/demo", "Foo", "FooGame", "/usr/local/bin/godot");
        let rendered = String::from_utf8(LibrarySource.render(&project)).unwrap();

        assert!(rendered.contains(r#"#initSwiftExtension(cdecl: "swift_entry_point""#));
    }

    #[test]
    fn test_executable_source_imports_library() {
        let project = Project::new("/tmp/demo", "Foo", "FooGame", "/usr/local/bin/godot");
        let rendered = String::from_utf8(ExecutableSource.render(&project)).unwrap();

        assert!(rendered.starts_with("import Foo\n"));
        assert!(rendered.contains("Foo.godotTypes.forEach { register(type: $0) }"));
        assert!(rendered.contains("loadProjectSettings: { settings in }"));
    }
}
