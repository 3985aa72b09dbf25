use async_trait::async_trait;

use crate::runtime::error::RuntimeError;

/// The three daemon operations the provisioning workflow uses. Keeping the
/// surface this narrow lets the orchestrator run against a stub in tests.
#[async_trait]
pub(crate) trait ContainerEngine: Send + Sync {
    /// Build an image tagged `tag` from an in-memory tar build context
    /// containing `dockerfile_name`.
    async fn build_image(
        &self,
        context: Vec<u8>,
        tag: &str,
        dockerfile_name: &str,
    ) -> Result<(), RuntimeError>;

    /// Create a container from `image` and return the engine-assigned id.
    async fn create_container(
        &self,
        image: &str,
        command: Vec<String>,
        tty: bool,
        name: &str,
    ) -> Result<String, RuntimeError>;

    async fn start_container(&self, container_id: &str) -> Result<(), RuntimeError>;
}
