use super::*;

fn input(image_src: &str, key: &str) -> UploadInput {
    UploadInput { image_src: image_src.into(), key: key.into(), ..UploadInput::default() }
}

// =============================================================
// is_url_shaped
// =============================================================

#[test]
fn url_shape_accepts_known_schemes() {
    assert!(is_url_shaped("https://img.test/fern.jpg"));
    assert!(is_url_shaped("http://img.test/fern.jpg"));
    assert!(is_url_shaped("ftp://files.test/fern.jpg"));
}

#[test]
fn url_shape_rejects_plain_text() {
    assert!(!is_url_shaped("not a url"));
    assert!(!is_url_shaped(""));
    assert!(!is_url_shaped("img.test/fern.jpg"));
}

#[test]
fn url_shape_rejects_bare_scheme() {
    assert!(!is_url_shaped("https://"));
}

#[test]
fn url_shape_rejects_whitespace_and_quotes() {
    assert!(!is_url_shaped("https://img.test/a b.jpg"));
    assert!(!is_url_shaped("https://img.test/\"x\".jpg"));
    assert!(!is_url_shaped(" https://img.test/a.jpg"));
}

// =============================================================
// UploadForm::validate
// =============================================================

#[test]
fn valid_form_passes_with_empty_optionals() {
    let form = UploadForm::from_input(input("https://img.test/a.jpg", "anything"));
    assert!(form.validate().is_ok());
}

#[test]
fn empty_form_reports_required_fields_in_order() {
    let errors = UploadForm::new().validate().unwrap_err();
    assert_eq!(
        errors,
        vec![
            FieldError::Required { field: FieldName::ImageSrc },
            FieldError::Required { field: FieldName::Key },
        ]
    );
}

#[test]
fn non_url_image_src_is_a_pattern_error() {
    let errors = UploadForm::from_input(input("not a url", "on")).validate().unwrap_err();
    assert_eq!(errors, vec![FieldError::Pattern { field: FieldName::ImageSrc }]);
    assert_eq!(errors[0].field(), FieldName::ImageSrc);
}

#[test]
fn key_has_no_format_constraint() {
    let form = UploadForm::from_input(input("https://img.test/a.jpg", "  ?? "));
    assert!(form.key.validate().is_ok());
}

#[test]
fn required_flags_match_fields() {
    let form = UploadForm::new();
    let required: Vec<bool> = form.fields().iter().map(|f| f.required).collect();
    assert_eq!(required, vec![true, false, false, true]);
}

#[test]
fn clear_discards_values() {
    let mut form = UploadForm::from_input(UploadInput {
        image_src: "https://img.test/a.jpg".into(),
        name: "Fern".into(),
        username: "mara".into(),
        key: "on".into(),
    });
    form.clear();
    assert!(form.fields().iter().all(|f| f.value.is_empty()));
}

#[test]
fn field_error_messages_name_the_control() {
    assert_eq!(FieldError::Required { field: FieldName::Key }.to_string(), "key is required");
    assert_eq!(FieldError::Pattern { field: FieldName::ImageSrc }.to_string(), "imageSrc must be a URL");
}

// =============================================================
// UploadInput
// =============================================================

#[test]
fn upload_input_reads_missing_fields_as_empty() {
    let parsed: UploadInput = serde_json::from_str(r#"{"imageSrc":"https://img.test/a.jpg"}"#).unwrap();
    assert_eq!(parsed.image_src, "https://img.test/a.jpg");
    assert!(parsed.name.is_empty());
    assert!(parsed.key.is_empty());
}
