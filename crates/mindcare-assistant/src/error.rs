use mindcare_core::error::CoreError;
use mindcare_core::models::category::CategoryId;
use mindcare_instruments::error::InstrumentError;
use mindcare_storage::error::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("message is empty")]
    EmptyMessage,

    #[error("no assessment in progress")]
    NoActiveAssessment,

    #[error("category {0} has no assessment questions")]
    NoQuestions(CategoryId),

    #[error("no generated plan to accept")]
    NoPendingPlan,

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Instrument(#[from] InstrumentError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
