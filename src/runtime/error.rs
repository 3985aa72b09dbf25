use std::fmt;

#[derive(Debug)]
pub enum RuntimeError {
    FileSystemError(String),
    ArchiveFailed(String),
    ConnectionFailed(String),
    ImageBuildFailed(String),
    InstanceCreationFailed(String),
    InstanceStartFailed(String),
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::FileSystemError(msg) => write!(f, "File system error: {}", msg),
            RuntimeError::ArchiveFailed(msg) => write!(f, "Build context archive failed: {}", msg),
            RuntimeError::ConnectionFailed(msg) => write!(f, "Engine connection failed: {}", msg),
            RuntimeError::ImageBuildFailed(msg) => write!(f, "Image build failed: {}", msg),
            RuntimeError::InstanceCreationFailed(msg) => {
                write!(f, "Container creation failed: {}", msg)
            }
            RuntimeError::InstanceStartFailed(msg) => write!(f, "Container start failed: {}", msg),
        }
    }
}

impl std::error::Error for RuntimeError {}

impl From<std::io::Error> for RuntimeError {
    fn from(err: std::io::Error) -> Self {
        RuntimeError::FileSystemError(format!("{}", err))
    }
}
