//! Image upload endpoints.
//!
//! ```text
//! POST /api/upload          (multipart/form-data, admin only)
//! GET  /uploads/{name}
//! ```

use actix_multipart::Multipart;
use actix_web::http::header::{self, CacheControl, CacheDirective};
use actix_web::{HttpResponse, get, post, web};
use futures_util::StreamExt;
use serde::Serialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::ports::ImageStoreError;
use crate::domain::{Error, ImageFormat, MAX_UPLOAD_BYTES, image_url};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

const IMAGE_MAX_AGE_SECS: u32 = 24 * 60 * 60;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    #[schema(example = "/uploads/0f8fad5b-d9cb-469f-a165-70867728950e.png")]
    pub image_url: String,
}

fn image_store_error(operation: &'static str) -> impl FnOnce(ImageStoreError) -> Error {
    move |error| Error::internal(format!("{operation}: {error}"))
}

fn malformed_upload(error: impl std::fmt::Display) -> Error {
    Error::invalid_request("Malformed multipart body").with_details(json!({
        "code": "invalid_upload",
        "reason": error.to_string(),
    }))
}

fn unsupported_type(declared: Option<&str>) -> Error {
    Error::invalid_request("Only PNG, JPEG, GIF and WebP images are accepted").with_details(
        json!({
            "code": "unsupported_media_type",
            "contentType": declared,
        }),
    )
}

fn too_large() -> Error {
    Error::invalid_request("Image exceeds the upload size limit").with_details(json!({
        "code": "upload_too_large",
        "maxBytes": MAX_UPLOAD_BYTES,
    }))
}

/// Read the first file field of `payload`. Non-file fields are skipped.
async fn read_image(payload: &mut Multipart) -> Result<(ImageFormat, Vec<u8>), Error> {
    while let Some(field) = payload.next().await {
        let mut field = field.map_err(malformed_upload)?;
        if field.content_disposition().get_filename().is_none() {
            continue;
        }
        let declared = field.content_type().map(|mime| mime.essence_str().to_owned());
        let format = declared
            .as_deref()
            .and_then(ImageFormat::from_content_type)
            .ok_or_else(|| unsupported_type(declared.as_deref()))?;

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(malformed_upload)?;
            if bytes.len() + chunk.len() > MAX_UPLOAD_BYTES {
                return Err(too_large());
            }
            bytes.extend_from_slice(&chunk);
        }
        if bytes.is_empty() {
            return Err(Error::invalid_request("Uploaded image is empty"));
        }
        return Ok((format, bytes));
    }
    Err(Error::invalid_request("No image file provided"))
}

/// Store an uploaded image and return its public URL.
#[utoipa::path(
    post,
    path = "/api/upload",
    request_body(content_type = "multipart/form-data", description = "One image file field"),
    responses(
        (status = 200, description = "Image stored", body = UploadResponse),
        (status = 400, description = "Missing, oversized or unsupported file", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["admin"],
    operation_id = "uploadImage"
)]
#[post("/upload")]
pub async fn upload_image(
    state: web::Data<HttpState>,
    session: SessionContext,
    mut payload: Multipart,
) -> ApiResult<web::Json<UploadResponse>> {
    session.require_admin()?;
    let (format, bytes) = read_image(&mut payload).await?;
    let size = bytes.len();
    let name = state
        .images
        .save(format, bytes)
        .await
        .map_err(image_store_error("store image"))?;
    tracing::info!(file = %name, %format, size, "image uploaded");
    Ok(web::Json(UploadResponse {
        image_url: image_url(&name),
    }))
}

/// Serve a stored image.
#[utoipa::path(
    get,
    path = "/uploads/{name}",
    params(("name" = String, Path, description = "Stored file name")),
    responses(
        (status = 200, description = "Image bytes"),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["uploads"],
    operation_id = "serveUpload",
    security([])
)]
#[get("/uploads/{name}")]
pub async fn serve_upload(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let name = path.into_inner();
    let image = state
        .images
        .load(&name)
        .await
        .map_err(image_store_error("load image"))?
        .ok_or_else(|| Error::not_found(format!("image {name} not found")))?;
    Ok(HttpResponse::Ok()
        .content_type(image.format.content_type())
        .insert_header(CacheControl(vec![
            CacheDirective::Public,
            CacheDirective::MaxAge(IMAGE_MAX_AGE_SECS),
        ]))
        .insert_header((header::X_CONTENT_TYPE_OPTIONS, "nosniff"))
        .body(image.bytes))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::ports::{MockImageStore, StoredImage};
    use crate::inbound::http::test_utils::{admin_cookie, memory_state, test_app};
    use actix_web::cookie::Cookie;
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use mockall::predicate::eq;
    use rstest::rstest;
    use serde_json::Value;

    const BOUNDARY: &str = "----upload-test-boundary";
    const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nfake";

    fn multipart_request(
        content_type: &str,
        filename: Option<&str>,
        bytes: &[u8],
        cookie: Option<Cookie<'static>>,
    ) -> actix_test::TestRequest {
        let disposition = match filename {
            Some(filename) => format!("form-data; name=\"image\"; filename=\"{filename}\""),
            None => "form-data; name=\"image\"".to_owned(),
        };
        let mut body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: {disposition}\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(bytes);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        let request = actix_test::TestRequest::post()
            .uri("/api/upload")
            .insert_header((
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            ))
            .set_payload(body);
        match cookie {
            Some(cookie) => request.cookie(cookie),
            None => request,
        }
    }

    #[actix_web::test]
    async fn stores_png_and_returns_public_url() {
        let (_, mut state) = memory_state().await;
        let mut images = MockImageStore::new();
        images
            .expect_save()
            .withf(|format, bytes| *format == ImageFormat::Png && bytes.as_slice() == PNG_BYTES)
            .times(1)
            .returning(|_, _| Ok("abc.png".to_owned()));
        state.images = Arc::new(images);
        let app = actix_test::init_service(test_app(state)).await;
        let cookie = admin_cookie(&app).await;

        let request =
            multipart_request("image/png", Some("me.png"), PNG_BYTES, Some(cookie)).to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["imageUrl"], "/uploads/abc.png");
    }

    #[actix_web::test]
    async fn upload_requires_admin() {
        let (_, state) = memory_state().await;
        let app = actix_test::init_service(test_app(state)).await;

        let request = multipart_request("image/png", Some("me.png"), PNG_BYTES, None).to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[rstest]
    #[case("application/pdf", Some("cv.pdf"), PNG_BYTES, "unsupported_media_type")]
    #[case("image/svg+xml", Some("logo.svg"), b"<svg/>", "unsupported_media_type")]
    #[actix_web::test]
    async fn rejects_non_images(
        #[case] content_type: &str,
        #[case] filename: Option<&str>,
        #[case] bytes: &[u8],
        #[case] code: &str,
    ) {
        let (_, state) = memory_state().await;
        let app = actix_test::init_service(test_app(state)).await;
        let cookie = admin_cookie(&app).await;

        let request =
            multipart_request(content_type, filename, bytes, Some(cookie)).to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["details"]["code"], code);
    }

    #[actix_web::test]
    async fn rejects_missing_file_field() {
        let (_, state) = memory_state().await;
        let app = actix_test::init_service(test_app(state)).await;
        let cookie = admin_cookie(&app).await;

        let request = multipart_request("text/plain", None, b"hello", Some(cookie)).to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["message"], "No image file provided");
    }

    #[actix_web::test]
    async fn rejects_oversized_images() {
        let (_, state) = memory_state().await;
        let app = actix_test::init_service(test_app(state)).await;
        let cookie = admin_cookie(&app).await;
        let bytes = vec![0_u8; MAX_UPLOAD_BYTES + 1];

        let request =
            multipart_request("image/jpeg", Some("big.jpg"), &bytes, Some(cookie)).to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["details"]["code"], "upload_too_large");
    }

    #[actix_web::test]
    async fn serves_stored_image_with_its_content_type() {
        let (_, mut state) = memory_state().await;
        let mut images = MockImageStore::new();
        images
            .expect_load()
            .with(eq("abc.webp"))
            .times(1)
            .returning(|_| {
                Ok(Some(StoredImage {
                    format: ImageFormat::Webp,
                    bytes: b"RIFF".to_vec(),
                }))
            });
        state.images = Arc::new(images);
        let app = actix_test::init_service(test_app(state)).await;

        let request = actix_test::TestRequest::get()
            .uri("/uploads/abc.webp")
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok()),
            Some("image/webp")
        );
        let body = actix_test::read_body(response).await;
        assert_eq!(body.as_ref(), b"RIFF");
    }

    #[actix_web::test]
    async fn unknown_image_is_not_found() {
        let (_, mut state) = memory_state().await;
        let mut images = MockImageStore::new();
        images.expect_load().returning(|_| Ok(None));
        state.images = Arc::new(images);
        let app = actix_test::init_service(test_app(state)).await;

        let request = actix_test::TestRequest::get()
            .uri("/uploads/missing.png")
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
