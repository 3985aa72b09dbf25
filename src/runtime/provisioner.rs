use std::path::Path;

use crate::runtime::context::{tar_build_context, write_dockerfile, DOCKERFILE_NAME};
use crate::runtime::engine::ContainerEngine;
use crate::runtime::error::RuntimeError;

/// Provision a container from a base image: write the Dockerfile into
/// `workdir`, pack it as a build context, then build, create and start
/// against the engine. Aborts on the first failing step and returns the
/// engine-assigned container id on success.
///
/// If the start step fails after creation succeeded, the created container
/// is left behind; nothing is rolled back.
pub(crate) async fn provision(
    engine: &dyn ContainerEngine,
    workdir: &Path,
    container_name: &str,
    base_image: &str,
) -> Result<String, RuntimeError> {
    let dockerfile = write_dockerfile(workdir, base_image)?;
    let context = tar_build_context(&dockerfile, DOCKERFILE_NAME)?;

    let image_tag = format!("my-{}-image", base_image);

    debug!("Building image {} for container {}", image_tag, container_name);
    engine.build_image(context, &image_tag, DOCKERFILE_NAME).await?;

    let container_id = engine
        .create_container(&image_tag, vec!["/bin/bash".to_string()], true, container_name)
        .await?;

    engine.start_container(&container_id).await?;

    info!("Container {} started", container_id);

    Ok(container_id)
}
