//! Download URL construction for the build service artifact endpoint

use std::fmt;

/// Build service host used when no query base is supplied
pub const DEFAULT_QUERY_URL_BASE: &str = "https://androidbuildinternal.googleapis.com";

/// Identifies one artifact of the latest attempt of a build
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ArtifactRef {
    /// Build target name (e.g. "aosp_arm64-trunk_staging-userdebug")
    pub target: String,
    /// Build ID
    pub build_id: String,
    /// Artifact name, may contain `/`
    pub artifact_name: String,
}

impl ArtifactRef {
    /// Create a new artifact reference
    pub fn new(
        target: impl Into<String>,
        build_id: impl Into<String>,
        artifact_name: impl Into<String>,
    ) -> Self {
        Self {
            target: target.into(),
            build_id: build_id.into(),
            artifact_name: artifact_name.into(),
        }
    }

    /// Download URL for this artifact under the given query base
    pub fn download_url(&self, query_url_base: &str) -> String {
        build_download_url(
            &self.target,
            &self.build_id,
            &self.artifact_name,
            query_url_base,
        )
    }
}

impl fmt::Display for ArtifactRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.target, self.build_id, self.artifact_name)
    }
}

/// Construct the download URL for an artifact
///
/// The build API does not accept `/` inside artifact names, so the name is
/// percent-encoded with only RFC 3986 unreserved characters left as-is. `/`,
/// `%` and every reserved character are escaped and the name always lands in a
/// single path segment. `target` and `build_id` are interpolated unchanged.
///
/// # Examples
///
/// ```
/// use fetchartifact::{DEFAULT_QUERY_URL_BASE, build_download_url};
///
/// let url = build_download_url(
///     "aosp_arm64-userdebug",
///     "1234",
///     "logs/kernel.log",
///     DEFAULT_QUERY_URL_BASE,
/// );
/// assert!(url.ends_with("/artifacts/logs%2Fkernel.log/url"));
/// ```
pub fn build_download_url(
    target: &str,
    build_id: &str,
    artifact_name: &str,
    query_url_base: &str,
) -> String {
    let artifact_name = urlencoding::encode(artifact_name);
    format!(
        "{query_url_base}/android/internal/build/v3/builds/{build_id}/{target}/\
         attempts/latest/artifacts/{artifact_name}/url"
    )
}
