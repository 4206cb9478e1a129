#[derive(thiserror::Error, Debug)]
pub enum CreateError {
    #[error("conflict")]
    Conflict,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("no connection")]
    NoConnection,
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum FinishError {
    #[error("training session has incomplete sets")]
    Incomplete,
    #[error(transparent)]
    Store(#[from] CreateError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_error_from_create_error() {
        assert!(matches!(
            FinishError::from(CreateError::Conflict),
            FinishError::Store(CreateError::Conflict)
        ));
        assert!(matches!(
            FinishError::from(CreateError::Storage(StorageError::NoConnection)),
            FinishError::Store(CreateError::Storage(StorageError::NoConnection))
        ));
    }

    #[test]
    fn test_create_error_from_storage_error() {
        assert!(matches!(
            CreateError::from(StorageError::NoConnection),
            CreateError::Storage(StorageError::NoConnection)
        ));
        assert!(matches!(
            CreateError::from(StorageError::Other("foo".into())),
            CreateError::Storage(StorageError::Other(error)) if error.to_string() == "foo"
        ));
    }
}
