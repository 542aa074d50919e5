use std::collections::HashMap;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::core::{ImportError, ModelSpec};

const ANKI_CONNECT_URL: &str = "http://localhost:8765/";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Field {
    pub value: String,
    pub order: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub note_id: u64,
    pub fields: HashMap<String, Field>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub result: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn into_result(self) -> Result<Option<T>, ImportError> {
        match self.error {
            Some(message) => Err(ImportError::AnkiConnect(message)),
            None => Ok(self.result),
        }
    }
}

fn make_request<T: for<'de> Deserialize<'de>>(
    action: &str,
    params: Option<serde_json::Value>,
) -> Result<ApiResponse<T>, ImportError> {
    let mut body = serde_json::Map::new();
    body.insert("action".to_string(), serde_json::Value::String(action.to_string()));
    body.insert("version".to_string(), serde_json::Value::Number((6).into()));

    if let Some(params) = params {
        body.insert("params".to_string(), params);
    }

    let response: ApiResponse<T> =
        Client::new().post(ANKI_CONNECT_URL).json(&body).send()?.json()?;

    Ok(response)
}

// Used only to check whether AnkiConnect is reachable.
pub fn get_version() -> Result<u32, ImportError> {
    let response: ApiResponse<u32> = make_request("version", None)?;
    response
        .into_result()?
        .ok_or_else(|| ImportError::Custom("AnkiConnect returned no version".to_string()))
}

pub fn get_deck_ids() -> Result<HashMap<String, u64>, ImportError> {
    let response: ApiResponse<HashMap<String, u64>> = make_request("deckNamesAndIds", None)?;
    Ok(response.into_result()?.unwrap_or_default())
}

pub fn create_deck(name: &str) -> Result<u64, ImportError> {
    let params = serde_json::json!({ "deck": name });
    let response: ApiResponse<u64> = make_request("createDeck", Some(params))?;
    response
        .into_result()?
        .ok_or_else(|| ImportError::Custom(format!("createDeck returned no id for '{}'", name)))
}

pub fn get_model_ids() -> Result<HashMap<String, u64>, ImportError> {
    let response: ApiResponse<HashMap<String, u64>> = make_request("modelNamesAndIds", None)?;
    Ok(response.into_result()?.unwrap_or_default())
}

pub fn create_model(spec: &ModelSpec) -> Result<(), ImportError> {
    let templates: Vec<serde_json::Value> = spec
        .templates
        .iter()
        .map(|template| {
            serde_json::json!({
                "Name": template.name,
                "Front": template.qfmt,
                "Back": template.afmt,
            })
        })
        .collect();

    let params = serde_json::json!({
        "modelName": spec.name,
        "inOrderFields": spec.fields,
        "cardTemplates": templates,
    });

    let response: ApiResponse<serde_json::Value> = make_request("createModel", Some(params))?;
    response.into_result()?;
    Ok(())
}

pub fn get_note_ids(query: &str) -> Result<Vec<u64>, ImportError> {
    let params = serde_json::json!({ "query": query });
    let response: ApiResponse<Vec<u64>> = make_request("findNotes", Some(params))?;
    Ok(response.into_result()?.unwrap_or_default())
}

pub fn get_notes(note_ids: &[u64]) -> Result<Vec<Note>, ImportError> {
    let params = serde_json::json!({ "notes": note_ids });
    let response: ApiResponse<Vec<Note>> = make_request("notesInfo", Some(params))?;
    Ok(response.into_result()?.unwrap_or_default())
}

pub fn add_note(
    deck_name: &str,
    model_name: &str,
    fields: HashMap<&str, &str>,
    tags: &[&str],
) -> Result<u64, ImportError> {
    let params = serde_json::json!({
        "note": {
            "deckName": deck_name,
            "modelName": model_name,
            "fields": fields,
            "tags": tags,
            // Deduplication is this tool's policy; pre-existing duplicates
            // in the deck must not block an insert.
            "options": { "allowDuplicate": true },
        }
    });

    let response: ApiResponse<u64> = make_request("addNote", Some(params))?;
    response
        .into_result()?
        .ok_or_else(|| ImportError::Custom("addNote returned no note id".to_string()))
}

pub fn reload_collection() -> Result<(), ImportError> {
    let response: ApiResponse<serde_json::Value> = make_request("reloadCollection", None)?;
    response.into_result()?;
    Ok(())
}

pub fn deck_query(deck_name: &str) -> String {
    format!("deck:\"{}\"", deck_name.replace('"', "\\\""))
}
