use super::*;

#[test]
fn detail_message_prefers_detail_field() {
    let v = serde_json::json!({ "detail": "Usuário ou senha inválidos" });
    assert_eq!(detail_message(&v), Some("Usuário ou senha inválidos"));
}

#[test]
fn detail_message_ignores_structured_detail() {
    let v = serde_json::json!({ "detail": [{ "loc": ["body", "username"], "msg": "field required" }] });
    assert_eq!(detail_message(&v), None);
}

#[test]
fn detail_message_ignores_blank_and_missing() {
    assert_eq!(detail_message(&serde_json::json!({ "detail": "  " })), None);
    assert_eq!(detail_message(&serde_json::json!({ "error": "x" })), None);
}

#[test]
fn base_url_drops_trailing_slash() -> anyhow::Result<()> {
    let c = RemoteClient::new("http://127.0.0.1:9/")?;
    assert_eq!(c.base_url(), "http://127.0.0.1:9");
    assert_eq!(c.url("/auth/login"), "http://127.0.0.1:9/auth/login");
    Ok(())
}
