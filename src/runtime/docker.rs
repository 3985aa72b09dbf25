use async_trait::async_trait;
use bollard::body_full;
use bollard::models::ContainerCreateBody;
use bollard::query_parameters::{
    BuildImageOptionsBuilder,
    CreateContainerOptionsBuilder,
    StartContainerOptionsBuilder,
};
use bollard::Docker;
use futures::StreamExt;

use crate::runtime::engine::ContainerEngine;
use crate::runtime::error::RuntimeError;

pub(crate) struct DockerEngine {
    docker: Docker,
}

/// Connect to the daemon using the process environment (DOCKER_HOST and
/// friends are interpreted by bollard) and negotiate the API version.
pub(crate) async fn connect() -> Result<DockerEngine, RuntimeError> {
    let docker = Docker::connect_with_defaults()
        .map_err(|e| RuntimeError::ConnectionFailed(format!("Failed to connect to Docker: {}", e)))?;

    let docker = docker
        .negotiate_version()
        .await
        .map_err(|e| RuntimeError::ConnectionFailed(format!("Docker version negotiation failed: {}", e)))?;

    Ok(DockerEngine { docker })
}

#[async_trait]
impl ContainerEngine for DockerEngine {
    async fn build_image(
        &self,
        context: Vec<u8>,
        tag: &str,
        dockerfile_name: &str,
    ) -> Result<(), RuntimeError> {
        let options = BuildImageOptionsBuilder::new()
            .dockerfile(dockerfile_name)
            .t(tag)
            .build();

        let mut stream = self
            .docker
            .build_image(options, None, Some(body_full(context.into())));

        // The build log goes to our own output, never back to the caller.
        while let Some(frame) = stream.next().await {
            let output = frame.map_err(|e| RuntimeError::ImageBuildFailed(e.to_string()))?;

            if let Some(message) = output.error {
                return Err(RuntimeError::ImageBuildFailed(message));
            }

            if let Some(line) = output.stream {
                let line = line.trim_end();
                if !line.is_empty() {
                    info!("{}", line);
                }
            }
        }

        Ok(())
    }

    async fn create_container(
        &self,
        image: &str,
        command: Vec<String>,
        tty: bool,
        name: &str,
    ) -> Result<String, RuntimeError> {
        let options = CreateContainerOptionsBuilder::new().name(name).build();

        let config = ContainerCreateBody {
            image: Some(image.to_string()),
            cmd: Some(command),
            tty: Some(tty),
            ..Default::default()
        };

        let container = self
            .docker
            .create_container(Some(options), config)
            .await
            .map_err(|e| RuntimeError::InstanceCreationFailed(e.to_string()))?;

        debug!("Docker create container {:?}", container.id);

        Ok(container.id)
    }

    async fn start_container(&self, container_id: &str) -> Result<(), RuntimeError> {
        let options = StartContainerOptionsBuilder::new().build();

        self.docker
            .start_container(container_id, Some(options))
            .await
            .map_err(|e| RuntimeError::InstanceStartFailed(e.to_string()))
    }
}
