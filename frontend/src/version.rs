/// Version information for the frontend application
pub struct Version;

impl Version {
    /// Returns the current version of the application
    pub fn current() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// Returns the application name
    pub fn name() -> &'static str {
        "AlgoArena"
    }

    /// Returns the full version string with name
    pub fn full() -> String {
        format!("{} v{}", Self::name(), Self::current())
    }

    /// Returns a short version string
    pub fn short() -> String {
        format!("v{}", Self::current())
    }

    /// Returns build information
    pub fn build_info() -> String {
        let build_date = option_env!("BUILD_DATE").unwrap_or("unknown");
        let git_commit = option_env!("GIT_COMMIT").unwrap_or("unknown");

        format!(
            "{} v{} (build: {}, commit: {})",
            Self::name(),
            Self::current(),
            build_date,
            git_commit
        )
    }
}
