use guard_hook_platform::Platform;

/// cfn-guard release every hook installation uses.
///
/// Pinned rather than resolved from the "latest release" API so that every
/// machine running the hook validates with the same rule engine.
pub const PINNED_VERSION: &str = "3.1.2";

pub const RELEASE_BASE_URL: &str =
    "https://github.com/aws-cloudformation/cloudformation-guard/releases/download";

/// A release descriptor: version tag plus where its archives are published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    version: String,
    base_url: String,
}

impl Release {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            base_url: RELEASE_BASE_URL.to_string(),
        }
    }

    /// Download from a mirror laid out like the GitHub releases tree.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn url(&self, platform: Platform) -> String {
        format!(
            "{}/{}/cfn-guard-v3-{}-latest.tar.gz",
            self.base_url,
            self.version,
            asset_label(platform)
        )
    }
}

/// Runner image name baked into the upstream asset names.
fn asset_label(platform: Platform) -> &'static str {
    match platform {
        Platform::Linux => "ubuntu",
        Platform::Darwin => "macos",
        Platform::Windows => "windows",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_urls_for_every_platform() {
        let release = Release::new(PINNED_VERSION);
        assert_eq!(release.version(), PINNED_VERSION);
        assert_eq!(
            release.url(Platform::Linux),
            format!("{RELEASE_BASE_URL}/{PINNED_VERSION}/cfn-guard-v3-ubuntu-latest.tar.gz")
        );
        assert_eq!(
            release.url(Platform::Darwin),
            format!("{RELEASE_BASE_URL}/{PINNED_VERSION}/cfn-guard-v3-macos-latest.tar.gz")
        );
        assert_eq!(
            release.url(Platform::Windows),
            format!("{RELEASE_BASE_URL}/{PINNED_VERSION}/cfn-guard-v3-windows-latest.tar.gz")
        );
    }

    #[test]
    fn mirror_base_url_drops_trailing_slash() {
        let release = Release::new("9.9.9").with_base_url("https://mirror.example/guard/");
        assert_eq!(
            release.url(Platform::Linux),
            "https://mirror.example/guard/9.9.9/cfn-guard-v3-ubuntu-latest.tar.gz"
        );
    }
}
