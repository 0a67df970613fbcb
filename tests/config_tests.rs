use std::io::Write;
use tempfile::NamedTempFile;

use ghfinder::ui::heatmap::HeatmapTheme;
use ghfinder::util::config::AppConfig;
use ratatui::style::Color;

fn write_config(toml: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(toml.as_bytes()).unwrap();
    f
}

#[test]
fn test_load_full_config() {
    let f = write_config(
        r##"
[github]
api_url = "https://github.example.com/api/v3"

[heatmap]
palette = ["#000000", "#ffffff"]
"##,
    );

    let config = AppConfig::load(Some(f.path())).unwrap();
    assert_eq!(config.github.api_url, "https://github.example.com/api/v3");
    assert_eq!(config.heatmap.palette, vec!["#000000", "#ffffff"]);

    let theme = config.heatmap_theme().unwrap();
    assert_eq!(
        theme.levels,
        vec![Color::Rgb(0, 0, 0), Color::Rgb(0xff, 0xff, 0xff)]
    );
}

#[test]
fn test_load_empty_config_uses_all_defaults() {
    let f = write_config("");

    let config = AppConfig::load(Some(f.path())).unwrap();
    assert_eq!(config.github.api_url, "https://api.github.com");
    assert_eq!(config.heatmap.palette.len(), 5);
    assert_eq!(config.heatmap_theme().unwrap(), HeatmapTheme::default());
}

#[test]
fn test_load_partial_config_uses_defaults() {
    let f = write_config(
        r#"
[github]
api_url = "https://ghe.internal/api/v3"
"#,
    );

    let config = AppConfig::load(Some(f.path())).unwrap();
    assert_eq!(config.github.api_url, "https://ghe.internal/api/v3");
    assert_eq!(config.heatmap.palette[0], "#161b22");
}

#[test]
fn test_invalid_palette_colour_is_rejected() {
    let f = write_config(
        r##"
[heatmap]
palette = ["#161b22", "not-a-colour-at-all"]
"##,
    );

    let config = AppConfig::load(Some(f.path())).unwrap();
    assert!(config.heatmap_theme().is_err());
}

#[test]
fn test_empty_palette_is_rejected() {
    let f = write_config("[heatmap]\npalette = []\n");

    let config = AppConfig::load(Some(f.path())).unwrap();
    assert!(config.heatmap_theme().is_err());
}

#[test]
fn test_load_nonexistent_file_fails() {
    let result = AppConfig::load(Some(std::path::Path::new("/nonexistent/path/config.toml")));
    assert!(result.is_err());
}

#[test]
fn test_load_invalid_toml_fails() {
    let f = write_config("this is not [valid toml {{");

    let result = AppConfig::load(Some(f.path()));
    assert!(result.is_err());
}

#[test]
fn test_default_config() {
    let config = AppConfig::default();
    assert_eq!(config.github.api_url, "https://api.github.com");
    assert_eq!(
        config.heatmap.palette,
        vec!["#161b22", "#0e4429", "#006d32", "#26a641", "#39d353"]
    );
}

fn config_with_api(api_url: &str) -> AppConfig {
    let mut config = AppConfig::default();
    config.github.api_url = api_url.into();
    config
}

#[test]
fn test_web_url_for_public_api() {
    assert_eq!(AppConfig::default().web_url(), "https://github.com");
}

#[test]
fn test_web_url_for_enterprise_api() {
    assert_eq!(
        config_with_api("https://ghe.example.com/api/v3").web_url(),
        "https://ghe.example.com"
    );
    assert_eq!(
        config_with_api("https://ghe.example.com:8443/api/v3").web_url(),
        "https://ghe.example.com:8443"
    );
}

#[test]
fn test_web_url_falls_back_on_unparseable_api() {
    assert_eq!(config_with_api("not a url").web_url(), "https://github.com");
}
