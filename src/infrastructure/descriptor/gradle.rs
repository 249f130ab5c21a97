//! Gradle descriptor writer
//!
//! One `build.gradle` per module output directory, rendered from an embedded
//! template, and one `settings.gradle` per project output root.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::domain::entities::{Module, ModuleMap};
use crate::domain::ports::{DescriptorContext, DescriptorError, DescriptorGenerator, FileSystem};
use crate::infrastructure::fs::LocalFs;

const TEMPLATE: &str = include_str!("module.gradle.template");

pub const DESCRIPTOR_FILE: &str = "build.gradle";
pub const SETTINGS_FILE: &str = "settings.gradle";

const INDENT: &str = "    ";

/// Single-quoted Groovy string
fn quoted(path: &Path) -> String {
    let raw = path.display().to_string();
    format!("'{}'", raw.replace('\\', "\\\\").replace('\'', "\\'"))
}

fn source_set(name: &str, java: Option<&Path>, resources: Option<&Path>) -> Option<String> {
    if java.is_none() && resources.is_none() {
        return None;
    }
    let mut block = format!("{INDENT}{name} {{\n");
    if let Some(java) = java {
        block.push_str(&format!("{INDENT}{INDENT}java.srcDirs = [{}]\n", quoted(java)));
    }
    if let Some(resources) = resources {
        block.push_str(&format!(
            "{INDENT}{INDENT}resources.srcDirs = [{}]\n",
            quoted(resources)
        ));
    }
    block.push_str(&format!("{INDENT}}}"));
    Some(block)
}

fn source_sets(module: &Module, exclude_types: &[String]) -> String {
    let layout = module.layout();
    let mut blocks = Vec::new();

    if !exclude_types.is_empty() {
        let mut all = format!("{INDENT}all {{\n");
        for pattern in exclude_types {
            let pattern = quoted(Path::new(pattern));
            all.push_str(&format!("{INDENT}{INDENT}java.exclude {pattern}\n"));
            all.push_str(&format!("{INDENT}{INDENT}resources.exclude {pattern}\n"));
        }
        all.push_str(&format!("{INDENT}}}"));
        blocks.push(all);
    }

    blocks.extend(source_set(
        "main",
        layout.source.as_deref(),
        layout.source_resource.as_deref(),
    ));
    blocks.extend(source_set(
        "test",
        layout.test_unit.as_deref(),
        layout.test_unit_resource.as_deref(),
    ));
    blocks.extend(source_set(
        "testIntegration",
        layout.test_integration.as_deref(),
        layout.test_integration_resource.as_deref(),
    ));
    blocks.join("\n")
}

/// Module references name modules by basename; each resolves to the project
/// of the first module with that name. Unknown names are dropped.
fn dependencies(module: &Module, context: &DescriptorContext) -> String {
    let deps = module.dependencies();
    let mut lines: Vec<String> = deps
        .bundled_jars()
        .chain(deps.external_jars())
        .map(|jar| format!("{INDENT}implementation files({})", quoted(jar.path())))
        .collect();
    lines.extend(
        context
            .portal_lib_jars
            .iter()
            .map(|jar| format!("{INDENT}compileOnly files({})", quoted(jar))),
    );
    for reference in deps.modules() {
        match context.modules.lookup(reference.name()) {
            Some(target) => lines.push(format!(
                "{INDENT}implementation project(':{}')",
                target.project_name()
            )),
            None => warn!(
                module = %module.name(),
                reference = reference.name(),
                "reference to an undiscovered module dropped"
            ),
        }
    }
    lines.join("\n")
}

/// Render a module's `build.gradle`.
pub fn render_descriptor(module: &Module, context: &DescriptorContext) -> String {
    TEMPLATE
        .replace("*insert-module-name*", &module.name())
        .replace(
            "*insert-source-sets*",
            &source_sets(module, &context.exclude_types),
        )
        .replace("*insert-dependencies*", &dependencies(module, context))
}

/// Render the project `settings.gradle`: every project once, grouped by parent.
pub fn render_settings(project_root: &Path, modules: &ModuleMap) -> String {
    let mut out = String::from("// Generated by portalmod. Do not edit.\n");
    if let Some(name) = project_root.file_name() {
        out.push_str(&format!(
            "\nrootProject.name = {}\n",
            quoted(Path::new(name))
        ));
    }

    let mut seen = BTreeSet::new();
    for parent in modules.parents() {
        let Some(bucket) = modules.modules_in(parent) else {
            continue;
        };
        let mut group = String::new();
        for module in bucket.values() {
            let name = module.project_name();
            if !seen.insert(name.clone()) {
                continue;
            }
            group.push_str(&format!("include \"{name}\"\n"));
            if let Some(output) = module.output_path() {
                let dir = output.strip_prefix(project_root).unwrap_or(output);
                group.push_str(&format!(
                    "project(\":{name}\").projectDir = file({})\n",
                    quoted(dir)
                ));
            }
        }
        if !group.is_empty() {
            out.push_str(&format!("\n// {}\n", parent.display()));
            out.push_str(&group);
        }
    }
    out
}

/// Writes Gradle descriptors through the FileSystem port
pub struct GradleDescriptorWriter<F: FileSystem = LocalFs> {
    fs: F,
}

impl GradleDescriptorWriter<LocalFs> {
    pub fn new() -> Self {
        Self { fs: LocalFs::new() }
    }
}

impl Default for GradleDescriptorWriter<LocalFs> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileSystem> GradleDescriptorWriter<F> {
    pub fn with_fs(fs: F) -> Self {
        Self { fs }
    }
}

impl<F: FileSystem> DescriptorGenerator for GradleDescriptorWriter<F> {
    fn generate(
        &self,
        module: &Module,
        context: &DescriptorContext,
    ) -> Result<PathBuf, DescriptorError> {
        let output = module
            .output_path()
            .ok_or_else(|| DescriptorError::MissingOutputPath {
                module: module.module_path().to_path_buf(),
            })?;
        let target = output.join(DESCRIPTOR_FILE);
        self.fs
            .write_atomic(&target, render_descriptor(module, context).as_bytes())?;
        Ok(target)
    }

    fn generate_settings(
        &self,
        project_root: &Path,
        modules: &ModuleMap,
    ) -> Result<PathBuf, DescriptorError> {
        let target = project_root.join(SETTINGS_FILE);
        self.fs
            .write_atomic(&target, render_settings(project_root, modules).as_bytes())?;
        Ok(target)
    }
}
