//! Default configuration values and well-known file names

/// Workspace descriptor file at the monorepo root
pub const WORKSPACE_FILE: &str = "pnpm-workspace.yaml";

/// Per-package manifest file name
pub const MANIFEST_FILE: &str = "package.json";

/// Ignore list file at the monorepo root (one package name per line)
pub const IGNORE_FILE: &str = ".tbignore";

/// Version specifier prefix marking an in-workspace dependency
pub const WORKSPACE_PROTOCOL: &str = "workspace:";

/// Placeholder substituted with the package name in the build command
pub const PACKAGE_PLACEHOLDER: &str = "PACKAGE";

/// Default build command template
pub const DEFAULT_BUILD_COMMAND: &str = "pnpm --filter PACKAGE run build";

/// Directory name excluded from manifest discovery
pub const NODE_MODULES_DIR: &str = "node_modules";

/// Environment toggle that skips build execution when set to "yes"
pub const SKIP_BUILD_ENV: &str = "SKIP_BUILD";

/// Environment toggle that enables verbose diagnostics when set to "yes"
pub const DEBUG_ENV: &str = "DEBUG";
