use super::*;

#[test]
fn normalize_base_url_trims_trailing_slashes() {
    assert_eq!(normalize_base_url("http://127.0.0.1:8090/"), "http://127.0.0.1:8090");
    assert_eq!(normalize_base_url(" https://notes.example.test// "), "https://notes.example.test");
}

#[test]
fn normalize_base_url_falls_back_when_blank() {
    assert_eq!(normalize_base_url(""), DEFAULT_BACKEND_URL);
    assert_eq!(normalize_base_url(" / "), DEFAULT_BACKEND_URL);
}

#[test]
fn backend_url_has_no_trailing_slash() {
    assert!(!backend_url().ends_with('/'));
    assert!(!backend_url().is_empty());
}

#[test]
fn records_endpoint_targets_notes_collection() {
    assert_eq!(
        records_endpoint("http://127.0.0.1:8090"),
        "http://127.0.0.1:8090/api/collections/notes/records"
    );
}

#[test]
fn list_endpoint_requests_first_page_newest_first() {
    assert_eq!(
        list_endpoint("http://h"),
        "http://h/api/collections/notes/records?page=1&perPage=30&sort=-id"
    );
}

#[test]
fn note_endpoint_limits_fields() {
    assert_eq!(
        note_endpoint("http://h", "r2d2"),
        "http://h/api/collections/notes/records/r2d2?fields=id,title,content,created"
    );
}

#[test]
fn note_endpoint_encodes_id_as_single_segment() {
    assert_eq!(
        note_endpoint("http://h", "x?fields=id&expand=owner"),
        "http://h/api/collections/notes/records/x%3Ffields%3Did%26expand%3Downer?fields=id,title,content,created"
    );
    assert_eq!(
        note_endpoint("http://h", "../users/abc"),
        "http://h/api/collections/notes/records/..%2Fusers%2Fabc?fields=id,title,content,created"
    );
}

#[test]
fn status_error_prefers_backend_message() {
    let err = status_error(400, Some("Failed to create record."));
    assert_eq!(err, ApiError::Status { status: 400, message: "Failed to create record.".to_owned() });
    assert_eq!(err.to_string(), "Failed to create record.");
}

#[test]
fn status_error_falls_back_to_status_code() {
    assert_eq!(status_error(404, None).to_string(), "backend returned status 404");
    assert_eq!(status_error(500, Some("  ")).to_string(), "backend returned status 500");
}

#[test]
fn api_error_display() {
    assert_eq!(ApiError::Request("offline".to_owned()).to_string(), "request failed: offline");
    assert_eq!(ApiError::Decode("eof".to_owned()).to_string(), "unexpected response: eof");
    assert_eq!(ApiError::Unavailable.to_string(), "backend not available on server");
}
