use std::fmt::{self, Display};

use serde::Serialize;

/// Build metadata captured by `build.rs`.
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub build_profile: &'static str,
    pub build_features: &'static str,
    pub build_timestamp: &'static str,
    pub rust_version: &'static str,
    pub version: &'static str,
    pub pkg_version: &'static str,
}

impl Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "boltview {} ({})", self.pkg_version, self.version)?;
        writeln!(f, "  profile:  {}", self.build_profile)?;
        writeln!(f, "  features: {}", self.build_features)?;
        writeln!(f, "  built:    {}", self.build_timestamp)?;
        write!(f, "  rustc:    {}", self.rust_version)
    }
}

pub fn build_info() -> BuildInfo {
    BuildInfo {
        build_profile: env!("BUILD_PROFILE"),
        build_features: env!("BUILD_FEATURES"),
        build_timestamp: env!("BUILD_TIMESTAMP"),
        rust_version: env!("RUST_VERSION"),
        version: env!("REPO_VERSION"),
        pkg_version: env!("CARGO_PKG_VERSION"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info_display() {
        let info = build_info();
        let rendered = info.to_string();
        assert!(rendered.starts_with("boltview "));
        assert!(rendered.contains(info.build_profile));
    }
}
