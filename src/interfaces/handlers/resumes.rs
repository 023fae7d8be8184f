use actix_multipart::form::MultipartForm;
use actix_web::{post, web, HttpResponse};
use uuid::Uuid;

use crate::entities::resume::{ResumeUpload, ResumeUploadForm, StoredResume};
use crate::errors::UploadError;
use crate::storage::resume_store::ResumeStorage;
use crate::use_cases::extractors::AuthClaims;
use crate::AppState;

/// Accepts a single `resume` file field, checks type and size in-process,
/// and only then writes to storage. The returned URL is what a profile
/// edit persists on the job-seeker row.
#[post("/resumes")]
pub async fn upload_resume(
    state: web::Data<AppState>,
    claims: AuthClaims,
    form: MultipartForm<ResumeUploadForm>,
) -> Result<HttpResponse, UploadError> {
    let form = form.into_inner();

    let file_name = form
        .resume
        .file_name
        .clone()
        .ok_or(UploadError::MissingFile)?;

    let data = tokio::fs::read(form.resume.file.path())
        .await
        .map_err(|e| UploadError::Storage(e.to_string()))?;

    let upload = ResumeUpload { file_name, data };
    let kind = upload.validate()?;

    let key = format!("{}/{}.{}", claims.0.sub, Uuid::new_v4(), kind.extension());
    state.resume_store.store(&key, &upload.data).await?;

    Ok(HttpResponse::Created().json(StoredResume {
        resume_url: state.resume_store.public_url(&key),
    }))
}
