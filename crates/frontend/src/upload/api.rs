use contracts::upload::UploadResponse;
use gloo_net::http::Request;
use web_sys::FormData;

use crate::shared::api_utils::api_url;

/// Send both images to `POST /upload` as a multipart form.
///
/// The browser fills in the multipart boundary itself; the field names are
/// what the service expects (`content_image` / `style_image`).
pub async fn upload_images(
    content: &web_sys::File,
    style: &web_sys::File,
) -> Result<UploadResponse, String> {
    let form = FormData::new().map_err(|e| format!("Failed to build form data: {e:?}"))?;
    form.append_with_blob_and_filename("content_image", content, &content.name())
        .map_err(|e| format!("Failed to attach content image: {e:?}"))?;
    form.append_with_blob_and_filename("style_image", style, &style.name())
        .map_err(|e| format!("Failed to attach style image: {e:?}"))?;

    let response = Request::post(&api_url("/upload"))
        .body(form)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Upload failed: HTTP {}", response.status()));
    }

    response
        .json::<UploadResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
