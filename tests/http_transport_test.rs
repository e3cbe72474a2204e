use httpmock::prelude::*;
use postakodu_etl::config::toml_config::{PacingConfig, SourceConfig, TomlConfig};
use postakodu_etl::domain::ports::Transport;
use postakodu_etl::{EtlEngine, EtlError, HttpTransport, LocalStorage, ScrapePipeline};
use tempfile::TempDir;

const ROOT_PAGE: &str = r#"<!DOCTYPE html>
<html><body>
<form method="post" action="./" id="form1">
<input type="hidden" name="__EVENTTARGET" id="__EVENTTARGET" value="" />
<input type="hidden" name="__VIEWSTATE" id="__VIEWSTATE" value="ROOTVS" />
<input type="hidden" name="__EVENTVALIDATION" id="__EVENTVALIDATION" value="ROOTEV" />
<select name="ctl00$MainContent$DropDownList1" id="MainContent_DropDownList1">
    <option selected="selected" value="-1">Seçiniz</option>
    <option value="6">ANKARA</option>
</select>
</form>
</body></html>"#;

const PROVINCE_PAGE: &str = r#"<form>
<input type="hidden" name="__VIEWSTATE" id="__VIEWSTATE" value="ILVS" />
<input type="hidden" name="__EVENTVALIDATION" id="__EVENTVALIDATION" value="ILEV" />
<select name="ctl00$MainContent$DropDownList2" id="MainContent_DropDownList2">
    <option value="-1">Seçiniz</option>
    <option value="1130">ÇANKAYA</option>
</select>
</form>"#;

const DISTRICT_PAGE: &str = r#"<select name="ctl00$MainContent$DropDownList3" id="MainContent_DropDownList3">
    <option value="-1">Seçiniz</option>
    <option value="60001">KIZILAY MAH / ÇANKAYA / 06420</option>
    <option value="60002">BAHÇELİEVLER MAH / ÇANKAYA / 06490</option>
</select>"#;

#[tokio::test]
async fn test_get_returns_body() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200)
            .header("Content-Type", "text/html; charset=utf-8")
            .body(ROOT_PAGE);
    });

    let transport = HttpTransport::new(&SourceConfig::default()).unwrap();
    let body = transport.get(&server.url("/")).await.unwrap();

    mock.assert();
    assert!(body.contains("ROOTVS"));
}

#[tokio::test]
async fn test_non_success_status_is_error() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/");
        then.status(503);
    });

    let transport = HttpTransport::new(&SourceConfig::default()).unwrap();
    let fields = vec![("__EVENTTARGET".to_string(), String::new())];
    let result = transport.post(&server.url("/"), &fields).await;

    mock.assert();
    assert!(matches!(
        result,
        Err(EtlError::HttpStatusError { status: 503, .. })
    ));
}

#[tokio::test]
async fn test_session_cookie_and_form_fields_are_sent() {
    let server = MockServer::start();
    let root_mock = server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200)
            .header("Set-Cookie", "ASP.NET_SessionId=oturum123; path=/; HttpOnly")
            .body(ROOT_PAGE);
    });
    let province_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/")
            .header("cookie", "ASP.NET_SessionId=oturum123")
            .header("content-type", "application/x-www-form-urlencoded")
            .body_contains("__EVENTTARGET=ctl00%24MainContent%24DropDownList1")
            .body_contains("__VIEWSTATE=ROOTVS")
            .body_contains("ctl00%24MainContent%24DropDownList1=6");
        then.status(200).body(PROVINCE_PAGE);
    });
    let district_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/")
            .header("cookie", "ASP.NET_SessionId=oturum123")
            .body_contains("__EVENTTARGET=ctl00%24MainContent%24DropDownList2")
            .body_contains("__VIEWSTATE=ILVS")
            .body_contains("__EVENTVALIDATION=ILEV")
            .body_contains("ctl00%24MainContent%24DropDownList2=1130");
        then.status(200).body(DISTRICT_PAGE);
    });

    let temp_dir = TempDir::new().unwrap();
    let mut config = TomlConfig::default();
    config.source.endpoint = server.url("/");
    config.pacing = PacingConfig::disabled();
    config.load.output_dir = temp_dir.path().join("data").to_string_lossy().into_owned();
    config.load.status_file = temp_dir.path().join("README.md").to_string_lossy().into_owned();

    let transport = HttpTransport::new(&config.source).unwrap();
    let storage = LocalStorage::new(config.load.output_dir.clone());
    let pipeline = ScrapePipeline::new(transport, storage, config);

    let output_path = EtlEngine::new(pipeline).run().await.unwrap();

    root_mock.assert();
    province_mock.assert();
    district_mock.assert();

    let json = std::fs::read_to_string(output_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[0]["il_adi"], "Ankara");
    assert_eq!(value[0]["ilceler"][0]["ilce_adi"], "Çankaya");
    assert_eq!(value[0]["ilceler"][0]["mahalleler"][0]["mahalle_adi"], "Kızılay Mah");
    assert_eq!(value[0]["ilceler"][0]["mahalleler"][1]["mahalle_adi"], "Bahçelievler Mah");
    assert_eq!(value[0]["ilceler"][0]["mahalleler"][1]["posta_kodu"], "06490");
}

#[tokio::test]
async fn test_server_error_on_root_aborts_without_output() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(500);
    });

    let temp_dir = TempDir::new().unwrap();
    let mut config = TomlConfig::default();
    config.source.endpoint = server.url("/");
    config.pacing = PacingConfig::disabled();
    config.load.output_dir = temp_dir.path().join("data").to_string_lossy().into_owned();
    let output_dir = config.load.output_dir.clone();

    let transport = HttpTransport::new(&config.source).unwrap();
    let storage = LocalStorage::new(output_dir.clone());
    let pipeline = ScrapePipeline::new(transport, storage, config);

    let result = EtlEngine::new(pipeline).run().await;

    mock.assert();
    assert!(matches!(
        result,
        Err(EtlError::HttpStatusError { status: 500, .. })
    ));
    assert!(!std::path::Path::new(&output_dir).exists());
}
