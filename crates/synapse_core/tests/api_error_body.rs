use synapse_core::api::response::DEFAULT_ERROR_MESSAGE;
use synapse_core::{api_error_message, ApiErrorBody, ErrorField};

#[test]
fn structured_error_uses_nested_message() {
    let body = serde_json::json!({
        "success": false,
        "error": {
            "code": "VALIDATION_ERROR",
            "message": "Campo 'phone': Telefone deve ter pelo menos 8 caracteres",
            "field": "phone"
        }
    })
    .to_string();

    assert_eq!(
        api_error_message(&body),
        "Campo 'phone': Telefone deve ter pelo menos 8 caracteres"
    );

    let decoded = ApiErrorBody::parse(&body).unwrap();
    assert_eq!(decoded.code(), Some("VALIDATION_ERROR"));
    assert_eq!(decoded.field(), Some("phone"));
    assert_eq!(decoded.success, Some(false));
}

#[test]
fn plain_text_error_and_top_level_message_are_supported() {
    let text = serde_json::json!({ "error": "Horário indisponível" }).to_string();
    assert_eq!(api_error_message(&text), "Horário indisponível");

    let message = serde_json::json!({ "success": false, "message": "Não autorizado" }).to_string();
    assert_eq!(api_error_message(&message), "Não autorizado");

    let decoded = ApiErrorBody::parse(&text).unwrap();
    assert_eq!(
        decoded.error,
        Some(ErrorField::Text("Horário indisponível".to_string()))
    );
    assert_eq!(decoded.code(), None);
}

#[test]
fn missing_or_empty_messages_fall_back_to_default() {
    let cases = [
        serde_json::json!({}),
        serde_json::json!({ "error": null, "message": "" }),
        serde_json::json!({ "error": { "code": "NOT_FOUND" } }),
    ];
    for body in cases {
        assert_eq!(
            api_error_message(&body.to_string()),
            DEFAULT_ERROR_MESSAGE,
            "body: {body}"
        );
    }
}

#[test]
fn unparseable_body_falls_back_to_default() {
    assert_eq!(api_error_message("Internal Server Error"), DEFAULT_ERROR_MESSAGE);
    assert_eq!(api_error_message("[1, 2"), DEFAULT_ERROR_MESSAGE);
}
