//! Kinds of directories a module layout can resolve

use std::fmt;

/// Resource set a resource directory belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceSet {
    Main,
    Test,
    TestIntegration,
}

impl ResourceSet {
    /// Directory name under `src/`
    pub fn dir_name(self) -> &'static str {
        match self {
            ResourceSet::Main => "main",
            ResourceSet::Test => "test",
            ResourceSet::TestIntegration => "testIntegration",
        }
    }
}

/// A directory role resolved by the path resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathKind {
    Source,
    Resource(ResourceSet),
    TestUnit,
    TestIntegration,
}

impl PathKind {
    /// All six roles in record order
    pub const ALL: [PathKind; 6] = [
        PathKind::Source,
        PathKind::Resource(ResourceSet::Main),
        PathKind::TestUnit,
        PathKind::Resource(ResourceSet::Test),
        PathKind::TestIntegration,
        PathKind::Resource(ResourceSet::TestIntegration),
    ];
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathKind::Source => write!(f, "source"),
            PathKind::Resource(set) => write!(f, "{} resources", set.dir_name()),
            PathKind::TestUnit => write!(f, "unit tests"),
            PathKind::TestIntegration => write!(f, "integration tests"),
        }
    }
}
