//! Domain Layer
//!
//! Module discovery and change detection, independent of any concrete file
//! system, record format or build tool.
//!
//! ## Structure
//!
//! - `entities/` - Module, ModuleLayout, ModuleMap, dependencies
//! - `value_objects/` - Checksum, ExclusionSet, PathKind, policies
//! - `services/` - Walker, PathResolver, ModuleIdentity, DependencyResolver, Planner
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **Ports & Adapters** - All I/O goes through trait-defined ports
//! 2. **Plan, then act** - Classification never touches outputs

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
