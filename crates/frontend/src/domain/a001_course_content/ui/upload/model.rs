//! Upload - Model (API functions)

use crate::shared::api_utils::api_url;
use contracts::shared::api::{ApiMessage, UploadResponse};

/// Загрузить файл и получить его публичный URL
pub async fn upload_file(file: web_sys::File) -> Result<String, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

    let form_data = FormData::new().map_err(|e| format!("{e:?}"))?;
    form_data
        .append_with_blob_and_filename("file", &file, &file.name())
        .map_err(|e| format!("{e:?}"))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form_data);

    let url = api_url("/api/admin/upload");
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().unwrap_or_default();

    if !resp.ok() {
        let message = serde_json::from_str::<ApiMessage>(&text).unwrap_or_default();
        return Err(message.text_or_fallback());
    }

    let data: UploadResponse = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;
    Ok(data.url)
}
