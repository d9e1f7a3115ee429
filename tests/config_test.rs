use folio_site::utils::validation::Validate;
use folio_site::{CliConfig, FileSource, LocalStorage, Page, Phase, SiteEngine};
use std::io::Write;

fn flag_defaults() -> CliConfig {
    CliConfig {
        data_url: "data.json".to_string(),
        output_path: "./public".to_string(),
        output_file: "index.html".to_string(),
        config: None,
        verbose: false,
    }
}

#[test]
fn site_config_file_overrides_flag_values() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"data_url = "https://ada.example/data.json""#).unwrap();
    writeln!(file, r#"output_path = "./dist""#).unwrap();

    let mut config = flag_defaults();
    config.config = Some(file.path().to_str().unwrap().to_string());

    let merged = config.merged().unwrap();
    assert_eq!(merged.data_url, "https://ada.example/data.json");
    assert_eq!(merged.output_path, "./dist");
    // Keys absent from the file keep their flag values.
    assert_eq!(merged.output_file, "index.html");
    assert!(merged.is_remote());
    assert!(merged.validate().is_ok());
}

#[test]
fn config_file_wins_even_over_non_default_flags() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"data_url = "https://file.example/data.json""#).unwrap();

    let mut config = flag_defaults();
    config.data_url = "https://flag.example/data.json".to_string();
    config.config = Some(file.path().to_str().unwrap().to_string());

    let merged = config.merged().unwrap();
    assert_eq!(merged.data_url, "https://file.example/data.json");
}

#[test]
fn missing_config_file_is_an_error() {
    let mut config = flag_defaults();
    config.config = Some("/nonexistent/site.toml".to_string());
    assert!(config.merged().is_err());
}

#[tokio::test]
async fn file_source_renders_a_local_data_document() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("data.json"),
        serde_json::json!({
            "name": "Ada Lovelace",
            "social": [],
            "about": ["Local paragraph."],
            "education": [],
            "experience": [],
            "publications": [],
            "conferences": [],
            "awards": [],
            "footer": "local"
        })
        .to_string(),
    )
    .unwrap();

    let storage = LocalStorage::new(dir.path());
    let source = FileSource::new(storage, "data.json");

    let mut engine = SiteEngine::new(source, Page::portfolio_shell());
    assert_eq!(engine.run().await, Phase::Rendered);

    let page = engine.page();
    let about = page.by_id("about-content").unwrap();
    assert_eq!(page.html(about), "<p>Local paragraph.</p>");
}

#[tokio::test]
async fn missing_local_document_fails_the_pipeline() {
    let dir = tempfile::TempDir::new().unwrap();
    let storage = LocalStorage::new(dir.path());
    let source = FileSource::new(storage, "data.json");

    let mut engine = SiteEngine::new(source, Page::portfolio_shell());
    assert_eq!(engine.run().await, Phase::Failed);
    assert!(engine.page().body_override().is_some());
}
