//! Show command handler

use std::path::Path;

use anyhow::Result;
use serde_json::json;

use portalmod::application::{portal_root_for, ShowOptions, ShowUseCase};
use portalmod::config::Config;
use portalmod::domain::entities::Module;
use portalmod::domain::ports::BuildCollaborator;
use portalmod::domain::value_objects::PathKind;
use portalmod::infrastructure::{
    GradleCollaborator, LocalFs, NoopCollaborator, PropertiesDependencySource,
};

pub fn cmd_show(config: &Config, module_path: &Path, json: bool) -> Result<()> {
    let module_path = std::path::absolute(module_path)?;
    let portal_root = portal_root_for(&module_path, &config.project.portal_dirs);
    let options = ShowOptions::new(&module_path, portal_root)
        .with_fingerprint_file(config.scan.fingerprint_file.clone())
        .with_descriptor_file(config.build.descriptor_file.clone())
        .with_display_build_output(config.build.display_output);

    let module = if config.build.enabled {
        let collaborator = GradleCollaborator::new().with_command(config.build.command.clone());
        resolve(config, collaborator, &options)?
    } else {
        resolve(config, NoopCollaborator, &options)?
    };

    if json {
        println!("{}", to_json(&module));
    } else {
        print_module(&module);
    }
    Ok(())
}

fn resolve<C: BuildCollaborator>(
    config: &Config,
    collaborator: C,
    options: &ShowOptions,
) -> Result<Module> {
    let fs = LocalFs::new();
    let declared = PropertiesDependencySource::load(&fs, &config.dependency_file());
    let module = ShowUseCase::new(fs, collaborator)
        .with_declared_dependencies(Box::new(declared))
        .execute(options)?;
    Ok(module)
}

fn print_module(module: &Module) {
    println!("{} ({})", module.name(), module.module_path().display());
    match module.checksum() {
        Some(checksum) => println!("  checksum: {checksum}"),
        None => println!("  checksum: none"),
    }
    for kind in PathKind::ALL {
        if let Some(path) = module.layout().get(kind) {
            println!("  {:<24} {}", format!("{kind}:"), path.display());
        }
    }

    let deps = module.dependencies();
    if !deps.jars().is_empty() {
        println!("  jars:");
        for jar in deps.jars() {
            let origin = if jar.is_bundled() { "bundled" } else { "external" };
            println!("    [{origin}] {}", jar.path().display());
        }
    }
    if !deps.modules().is_empty() {
        println!("  modules:");
        for dependency in deps.modules() {
            println!("    {}", dependency.name());
        }
    }
}

fn to_json(module: &Module) -> serde_json::Value {
    let layout: serde_json::Map<String, serde_json::Value> = module
        .layout()
        .resolved()
        .map(|(kind, path)| (kind.to_string(), json!(path.display().to_string())))
        .collect();
    let deps = module.dependencies();
    json!({
        "name": module.name(),
        "module_path": module.module_path().display().to_string(),
        "checksum": module.checksum().map(|c| c.as_str().to_string()),
        "layout": layout,
        "bundled_jars": deps.bundled_jars().map(|j| j.path().display().to_string()).collect::<Vec<_>>(),
        "external_jars": deps.external_jars().map(|j| j.path().display().to_string()).collect::<Vec<_>>(),
        "modules": deps.modules().iter().map(|m| m.name().to_string()).collect::<Vec<_>>(),
    })
}
