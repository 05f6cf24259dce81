//! Schema errors raised while validating review API payloads

use thiserror::Error;

/// Result type alias for validation operations
pub type Result<T> = std::result::Result<T, SchemaError>;

/// The API payload or a homework record does not have the expected shape
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Top-level response is not a JSON object
    #[error("Ответ API должен быть словарем")]
    ResponseNotObject,

    /// Required response key is absent
    #[error("В ответе API отсутствует ключ: '{0}'")]
    MissingKey(&'static str),

    /// `homeworks` is present but not an array
    #[error("Ключ \"homeworks\" должен содержать список")]
    HomeworksNotList,

    /// A homework record is not a JSON object
    #[error("Домашняя работа должна быть словарем")]
    HomeworkNotObject,

    /// Required homework field is absent
    #[error("В домашней работе отсутствует поле: '{0}'")]
    MissingField(&'static str),

    /// Status outside of the known enumeration
    #[error("Неожиданный статус домашней работы: {0}")]
    UnknownStatus(String),
}
