//! Where a fetch is running.

/// The environment a fetcher runs in.
///
/// Passed in explicitly by the caller instead of being sniffed from the
/// process environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionContext {
    /// Serving a live page or running on demand.
    #[default]
    Live,

    /// Inside a static site build.
    StaticBuild,
}

impl ExecutionContext {
    /// Whether network side effects are allowed in this context.
    pub fn allows_network(self, fetch_during_build: bool) -> bool {
        match self {
            ExecutionContext::Live => true,
            ExecutionContext::StaticBuild => fetch_during_build,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_context_always_fetches() {
        assert!(ExecutionContext::Live.allows_network(false));
        assert!(ExecutionContext::Live.allows_network(true));
    }

    #[test]
    fn build_context_follows_flag() {
        assert!(!ExecutionContext::StaticBuild.allows_network(false));
        assert!(ExecutionContext::StaticBuild.allows_network(true));
    }
}
