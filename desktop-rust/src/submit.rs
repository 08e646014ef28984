use bfhl_client_common::{decode_response, BfhlResponse, Error, Result, SubmissionParts};
use reqwest::blocking::multipart::{Form, Part};

/// What the worker thread hands back to the UI.
#[derive(Debug)]
pub struct Reply {
    pub body: String,
    pub decoded: BfhlResponse,
}

/// Post the form and decode the reply. Runs on a worker thread, never
/// on the UI thread. Transport failures and non-2xx statuses both
/// collapse into `Error::Transfer`.
pub fn post_form(endpoint: &str, parts: SubmissionParts) -> Result<Reply> {
    let form = build_form(parts)?;

    let response = reqwest::blocking::Client::new()
        .post(endpoint)
        .multipart(form)
        .send()
        .map_err(|e| Error::Transfer(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Transfer(format!("HTTP {}", status)));
    }

    let body = response
        .text()
        .map_err(|e| Error::Transfer(e.to_string()))?;
    let decoded = decode_response(&body)?;

    Ok(Reply { body, decoded })
}

fn build_form(parts: SubmissionParts) -> Result<Form> {
    // `data` and `file_b64` always go out, `image` only when attached.
    let mut form = Form::new()
        .text("data", parts.data_json)
        .text("file_b64", parts.file_b64);

    if let Some(image) = parts.image {
        let part = Part::bytes(image.bytes)
            .file_name(image.file_name)
            .mime_str(&image.mime_type)
            .map_err(|e| Error::Transfer(e.to_string()))?;
        form = form.part("image", part);
    }

    Ok(form)
}
