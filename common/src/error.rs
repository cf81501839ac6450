use crate::model::record::PHONE_COLUMN;
use crate::model::screen::Screen;

/// Failures of a whole user action. None of them mutate the session.
///
/// A single row failing validation is not an error: it is reported through
/// [`crate::model::report::ValidationReport`] and the batch goes on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorkflowError {
    /// The upload could not be read as a table.
    #[error("Erro ao processar arquivo: {0}")]
    FileParse(String),

    /// The table has no phone column.
    #[error("O arquivo deve conter uma coluna chamada '{}'", PHONE_COLUMN)]
    MissingColumn,

    /// Links were requested for an empty message.
    #[error("Digite uma mensagem antes de gerar os links")]
    EmptyMessage,

    /// The action is not available on the current screen.
    #[error("Ação indisponível na tela {actual}, esperado {expected}")]
    WrongScreen { expected: Screen, actual: Screen },
}

pub type WorkflowResult<T> = Result<T, WorkflowError>;
