use crate::{Project, SWIFT_TOOLS_VERSION, Template};
use std::path::PathBuf;

const SWIFT_GODOT_URL: &str = "https://github.com/EstevanBR/SwiftGodot";
const SWIFT_GODOT_KIT_URL: &str = "https://github.com/EstevanBR/SwiftGodotKit";
const DEPENDENCY_BRANCH: &str = "estevanBR";

/// `Package.swift` declaring the dynamic library and the game executable.
pub struct Manifest;

impl Template for Manifest {
    fn name(&self) -> &'static str {
        "manifest"
    }

    fn path(&self, _project: &Project) -> PathBuf {
        PathBuf::from("Package.swift")
    }

    fn render(&self, project: &Project) -> Vec<u8> {
        let name = &project.name;
        let executable = &project.executable_name;

        format!(
            r#"// swift-tools-version: {SWIFT_TOOLS_VERSION}

import PackageDescription

let package = Package(
    name: "{name}",
    products: [
        .executable(
            name: "{executable}",
            targets: ["{executable}"]),
        .library(
            name: "{name}",
            type: .dynamic,
            targets: ["{name}"]),
    ],
    dependencies: [
        .package(url: "{SWIFT_GODOT_URL}", branch: "{DEPENDENCY_BRANCH}"),
        .package(url: "{SWIFT_GODOT_KIT_URL}", branch: "{DEPENDENCY_BRANCH}")
    ],
    targets: [
        .executableTarget(
            name: "{executable}",
            dependencies: [
                "{name}",
                .product(name: "SwiftGodotKit", package: "SwiftGodotKit")
            ],
            resources: [
                .copy("Resources")
            ]),
        .target(
            name: "{name}",
            dependencies: [
                .product(name: "SwiftGodot", package: "SwiftGodot")
            ]),
    ]
)
"#
        )
        .into_bytes()
    }
}
