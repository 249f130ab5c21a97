//! Domain Entities
//!
//! - `Module` - a discovered buildable unit with its resolved layout
//! - `ModuleMap` - modules grouped by logical parent directory
//! - `JarDependency` / `ModuleDependency` - what a module depends on

mod dependency;
mod module;
mod module_map;

pub use dependency::{Dependencies, JarDependency, ModuleDependency};
pub use module::{module_name, Module, ModuleLayout};
pub use module_map::{logical_parent, ModuleMap};
