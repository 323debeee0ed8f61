use contracts::transfer::{TransferRequest, TransferResponse};
use gloo_net::http::Request;
use web_sys::FormData;

use crate::shared::api_utils::api_url;

/// Kick off a style transfer run via `POST /transfer`.
///
/// The request is a plain form; the whole progress list comes back in one
/// response once the run has finished server-side.
pub async fn start_transfer(request: &TransferRequest) -> Result<TransferResponse, String> {
    let form = FormData::new().map_err(|e| format!("Failed to build form data: {e:?}"))?;
    for (name, value) in request.form_fields() {
        form.append_with_str(name, &value)
            .map_err(|e| format!("Failed to set field {name}: {e:?}"))?;
    }

    let response = Request::post(&api_url("/transfer"))
        .body(form)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Transfer failed: HTTP {}", response.status()));
    }

    response
        .json::<TransferResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
