//! Process-wide vision runtime.
//!
//! The provider and its HTTP client are initialized exactly once at
//! process start and reused for every request. There is no teardown; the
//! runtime lives for the life of the process.

use once_cell::sync::OnceCell;
use shelfscan_core::ScanError;

use crate::prompt::ANALYSIS_PROMPT;
use crate::vision::{describe_image, VisionProvider};

static RUNTIME: OnceCell<VisionRuntime> = OnceCell::new();

/// The one vision client for this process.
pub struct VisionRuntime {
    provider: VisionProvider,
    client: reqwest::Client,
}

impl VisionRuntime {
    /// Initialize the global runtime. Must be called once at startup,
    /// before any analysis; callers treat a failure here as fatal.
    pub fn initialize(provider: VisionProvider) -> Result<&'static VisionRuntime, ScanError> {
        let runtime = VisionRuntime {
            provider,
            client: reqwest::Client::new(),
        };
        RUNTIME
            .set(runtime)
            .map_err(|_| ScanError::RuntimeAlreadyInitialized)?;
        Ok(RUNTIME.get().expect("runtime was just set"))
    }

    /// The global runtime, if [`initialize`](Self::initialize) has run.
    pub fn global() -> Result<&'static VisionRuntime, ScanError> {
        RUNTIME.get().ok_or(ScanError::RuntimeUninitialized)
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Run one inference: the fixed analysis prompt against one image.
    pub async fn analyze(&self, image_bytes: &[u8], mime_type: &str) -> anyhow::Result<String> {
        describe_image(
            &self.client,
            &self.provider,
            image_bytes,
            mime_type,
            ANALYSIS_PROMPT,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_initialization_is_rejected() {
        let first = VisionRuntime::initialize(VisionProvider::gemini("test-key"));
        assert!(first.is_ok());
        assert_eq!(VisionRuntime::global().unwrap().provider_name(), "gemini");

        let second = VisionRuntime::initialize(VisionProvider::openai("other-key"));
        assert!(matches!(
            second,
            Err(ScanError::RuntimeAlreadyInitialized)
        ));
    }
}
