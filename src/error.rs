use thiserror::Error;

#[derive(Error, Debug)]
pub enum TasacionError {
    #[error("Error de configuración: {0}")]
    Config(String),

    #[error("Archivo no encontrado: {0}")]
    FileNotFound(String),

    #[error("La entrada está vacía: {0}")]
    EmptyInput(String),

    #[error("Error de selección interactiva: {0}")]
    Interactive(String),

    #[error("Error JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Error de E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] tasacion_common::Error),
}

pub type Result<T> = std::result::Result<T, TasacionError>;
