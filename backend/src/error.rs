use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::error::WorkflowError;
use common::responses::ErrorResponse;

/// Errors returned by the API handlers.
///
/// Each one aborts the current action only; the session is left as it was.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Workflow(#[from] WorkflowError),

    #[error("Sessão não encontrada: {0}")]
    SessionNotFound(String),

    #[error("Nenhum arquivo enviado")]
    MissingFile,

    #[error("O arquivo excede o limite de {0} bytes")]
    UploadTooLarge(usize),

    #[error("Erro ao receber o arquivo: {0}")]
    Multipart(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Workflow(WorkflowError::WrongScreen { .. }) => StatusCode::CONFLICT,
            ApiError::Workflow(_) | ApiError::MissingFile | ApiError::Multipart(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::SessionNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::UploadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_errors_to_status_codes() {
        assert_eq!(
            ApiError::from(WorkflowError::MissingColumn).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::SessionNotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::UploadTooLarge(1).status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
    }

    #[test]
    fn parse_errors_keep_the_underlying_message() {
        let err = ApiError::from(WorkflowError::FileParse("linha 3 inválida".into()));
        assert_eq!(err.to_string(), "Erro ao processar arquivo: linha 3 inválida");
    }
}
