use axum::extract::Path;
use axum::response::IntoResponse;
use axum::Json;
use http::StatusCode;
use tempdir::TempDir;

use crate::api::dto::container::OperationResult;
use crate::runtime::docker;
use crate::runtime::error::RuntimeError;
use crate::runtime::provisioner::provision;

/// POST /create/:create_os/:container_name
///
/// Both path parameters flow unvalidated into the Dockerfile, image tag and
/// container name; the caller gets back whatever the engine says about them.
pub(crate) async fn create(
    Path((create_os, container_name)): Path<(String, String)>,
) -> impl IntoResponse {
    info!("Create container {} from base image {}", container_name, create_os);

    let engine = match docker::connect().await {
        Ok(engine) => engine,
        Err(err) => return failure(err),
    };

    // Per-request working directory: concurrent requests never share a
    // Dockerfile path. Removed when the handler returns.
    let workdir = match TempDir::new("foundry") {
        Ok(workdir) => workdir,
        Err(err) => return failure(RuntimeError::from(err)),
    };

    match provision(&engine, workdir.path(), &container_name, &create_os).await {
        Ok(container_id) => (
            StatusCode::OK,
            Json(OperationResult::success(format!("Container {} started", container_id))),
        ),
        Err(err) => failure(err),
    }
}

fn failure(err: RuntimeError) -> (StatusCode, Json<OperationResult>) {
    let status = match &err {
        RuntimeError::ConnectionFailed(_) => StatusCode::SERVICE_UNAVAILABLE,
        RuntimeError::ImageBuildFailed(_)
        | RuntimeError::InstanceCreationFailed(_)
        | RuntimeError::InstanceStartFailed(_) => StatusCode::BAD_GATEWAY,
        RuntimeError::FileSystemError(_)
        | RuntimeError::ArchiveFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    error!("Container provisioning failed: {}", err);

    (status, Json(OperationResult::failure(err.to_string())))
}

#[cfg(test)]
mod tests {
    use http::StatusCode;

    use super::*;

    #[test]
    fn test_failure_maps_error_kinds_to_status_codes() {
        let (status, Json(result)) =
            failure(RuntimeError::ConnectionFailed("no daemon".to_string()));
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(result.error.contains("no daemon"));
        assert_eq!(result.message, "");

        let (status, _) = failure(RuntimeError::ImageBuildFailed("bad base".to_string()));
        assert_eq!(status, StatusCode::BAD_GATEWAY);

        let (status, _) = failure(RuntimeError::ArchiveFailed("short write".to_string()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
