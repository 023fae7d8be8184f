use validator::Validate;

use pravah_backend::constants::MAX_RESUME_BYTES;
use pravah_backend::entities::job::{Job, JobResponse};
use pravah_backend::entities::profile::{RegistrationRequest, RoleData, UserType};
use pravah_backend::entities::resume::{ResumeKind, ResumeUpload};
use pravah_backend::errors::UploadError;

fn pdf_bytes() -> Vec<u8> {
    let mut data = b"%PDF-1.4\n%pravah test fixture\n".to_vec();
    data.extend_from_slice(&[0u8; 64]);
    data
}

fn registration_json(user_type: &str) -> String {
    format!(
        r#"{{
            "email": "a@b.com",
            "password": "Xk7!mQpz#Vw2Lr",
            "confirm_password": "Xk7!mQpz#Vw2Lr",
            "user_type": "{user_type}",
            "first_name": "A",
            "last_name": "B",
            "experience_level": "junior",
            "company_name": "Acme",
            "contact_person": "R. Coyote"
        }}"#
    )
}

#[test]
fn resume_upload_accepts_pdf() {
    let upload = ResumeUpload {
        file_name: "resume.pdf".to_string(),
        data: pdf_bytes(),
    };

    assert_eq!(upload.validate().unwrap(), ResumeKind::Pdf);
}

#[test]
fn resume_upload_rejects_oversized_file() {
    let upload = ResumeUpload {
        file_name: "resume.pdf".to_string(),
        data: vec![0u8; MAX_RESUME_BYTES + 1],
    };

    assert!(matches!(
        upload.validate(),
        Err(UploadError::TooLarge { .. })
    ));
}

#[test]
fn resume_upload_rejects_unknown_extension() {
    let upload = ResumeUpload {
        file_name: "resume.txt".to_string(),
        data: pdf_bytes(),
    };

    assert!(matches!(
        upload.validate(),
        Err(UploadError::UnsupportedType(_))
    ));
}

#[test]
fn resume_upload_rejects_missing_extension() {
    let upload = ResumeUpload {
        file_name: "resume".to_string(),
        data: pdf_bytes(),
    };

    assert!(matches!(
        upload.validate(),
        Err(UploadError::UnsupportedType(_))
    ));
}

#[test]
fn resume_upload_rejects_mislabeled_content() {
    // A Windows executable wearing a .pdf extension.
    let mut data = b"MZ".to_vec();
    data.extend_from_slice(&[0u8; 128]);

    let upload = ResumeUpload {
        file_name: "resume.pdf".to_string(),
        data,
    };

    assert!(matches!(
        upload.validate(),
        Err(UploadError::UnsupportedType(_))
    ));
}

#[test]
fn resume_upload_rejects_unrecognizable_content() {
    let upload = ResumeUpload {
        file_name: "resume.pdf".to_string(),
        data: b"just some plain text, not a document".to_vec(),
    };

    assert!(matches!(
        upload.validate(),
        Err(UploadError::UnsupportedType(_))
    ));
}

#[test]
fn registration_json_deserializes_into_tagged_role() {
    let request: RegistrationRequest =
        serde_json::from_str(&registration_json("jobseeker")).unwrap();

    assert_eq!(request.role.user_type(), UserType::Jobseeker);
    match &request.role {
        RoleData::Jobseeker(details) => {
            assert_eq!(details.first_name, "A");
            assert_eq!(details.last_name, "B");
        }
        RoleData::Employer(_) => panic!("expected job seeker role data"),
    }

    let request: RegistrationRequest =
        serde_json::from_str(&registration_json("employer")).unwrap();
    assert_eq!(request.role.user_type(), UserType::Employer);
}

#[test]
fn registration_requires_strong_password() {
    let mut request: RegistrationRequest =
        serde_json::from_str(&registration_json("jobseeker")).unwrap();
    request.password = "password".to_string();
    request.confirm_password = "password".to_string();

    assert!(request.validate().is_err());

    // Complexity boxes ticked, still trivially guessable.
    request.password = "Aa1!Aa1!".to_string();
    request.confirm_password = "Aa1!Aa1!".to_string();
    assert!(request.validate().is_err());
}

#[test]
fn registration_detects_password_mismatch() {
    let mut request: RegistrationRequest =
        serde_json::from_str(&registration_json("jobseeker")).unwrap();

    assert!(request.validate().is_ok());
    assert!(request.ensure_passwords_match().is_ok());

    request.confirm_password = "Different1!Pw".to_string();
    assert!(request.ensure_passwords_match().is_err());
}

#[test]
fn registration_rejects_blank_role_fields() {
    let json = registration_json("employer").replace("Acme", "");
    let request: RegistrationRequest = serde_json::from_str(&json).unwrap();

    assert!(request.validate().is_err());
}

#[test]
fn job_response_withholds_hidden_salary() {
    let now = chrono::Utc::now();
    let job = Job {
        id: uuid::Uuid::new_v4(),
        employer_profile_id: uuid::Uuid::new_v4(),
        title: "Backend Engineer".to_string(),
        description: "Rust services".to_string(),
        country: None,
        min_salary: Some(1_200_000),
        max_salary: Some(2_400_000),
        hide_salary: true,
        min_experience: None,
        max_experience: None,
        openings: None,
        gender: None,
        status: "active".to_string(),
        expires_at: None,
        views_count: 0,
        applications_count: 0,
        created_at: now,
        updated_at: now,
    };

    let response = JobResponse::from(job);
    assert!(response.min_salary.is_none());
    assert!(response.max_salary.is_none());
    assert!(response.hide_salary);
}
