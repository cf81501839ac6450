//! Calls to the backend session API.
//!
//! Every function returns the decoded success payload, or the user-facing
//! message taken from the `ErrorResponse` body when the server refused the action.

use common::requests::GenerateLinksRequest;
use common::responses::{ErrorResponse, GenerateLinksResponse, SessionView, ValidateResponse};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use web_sys::{File, FormData};

const API_PATH: &str = "/api/sessions";

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if response.ok() {
        return response.json::<T>().await.map_err(|e| e.to_string());
    }

    let status = response.status();
    match response.json::<ErrorResponse>().await {
        Ok(body) => Err(body.error),
        Err(_) => Err(format!("Erro inesperado do servidor (HTTP {})", status)),
    }
}

pub async fn open_session() -> Result<SessionView, String> {
    let response = Request::post(API_PATH)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    decode(response).await
}

pub async fn validate(session_id: &str, file: &File) -> Result<ValidateResponse, String> {
    let form = FormData::new().map_err(|_| "Não foi possível preparar o envio".to_string())?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| "Não foi possível anexar o arquivo".to_string())?;

    let response = Request::post(&format!("{}/{}/validate", API_PATH, session_id))
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    decode(response).await
}

pub async fn back(session_id: &str) -> Result<SessionView, String> {
    let response = Request::post(&format!("{}/{}/back", API_PATH, session_id))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    decode(response).await
}

pub async fn generate(session_id: &str, message: &str) -> Result<GenerateLinksResponse, String> {
    let request = GenerateLinksRequest {
        message: message.to_string(),
    };
    let response = Request::post(&format!("{}/{}/generate", API_PATH, session_id))
        .json(&request)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    decode(response).await
}
