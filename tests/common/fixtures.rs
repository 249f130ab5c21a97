//! Reusable module trees.

use super::env::TestEnv;

pub const JAVA_BUILD_GRADLE: &str = "apply plugin: 'java'\n";

pub const WEB_BUILD_GRADLE: &str = r#"dependencies {
    compile project(":apps:blogs:blogs-api")
    // compile project(":commented-out")
}
"#;

/// A small portal:
///
/// ```text
/// modules/apps/blogs/blogs-api     build.gradle, src/main/java
/// modules/apps/blogs/blogs-web     build.gradle -> blogs-api, src/main/{java,resources}, src/test/java
/// portal-kernel                    src/, lib/commons.jar (no fingerprint)
/// portlets/chat/docroot/WEB-INF    src/ (legacy layout)
/// tools/node_modules/left-pad      src/ (excluded by default)
/// ```
pub fn standard_portal(env: &TestEnv) {
    env.write("modules/apps/blogs/blogs-api/build.gradle", JAVA_BUILD_GRADLE);
    env.mkdir("modules/apps/blogs/blogs-api/src/main/java/com/example");

    env.write("modules/apps/blogs/blogs-web/build.gradle", WEB_BUILD_GRADLE);
    env.mkdir("modules/apps/blogs/blogs-web/src/main/java");
    env.mkdir("modules/apps/blogs/blogs-web/src/main/resources");
    env.mkdir("modules/apps/blogs/blogs-web/src/test/java");

    env.mkdir("portal-kernel/src/com/example");
    env.write("portal-kernel/lib/commons.jar", "");

    env.mkdir("portlets/chat/docroot/WEB-INF/src/com/example");

    env.mkdir("tools/node_modules/left-pad/src");
}

/// Names of the modules `standard_portal` yields, in discovery order
pub const STANDARD_MODULES: &[&str] = &["blogs-api", "blogs-web", "portal-kernel", "chat"];
