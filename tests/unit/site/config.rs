use super::*;

#[test]
fn default_config_is_the_theater_site() {
    let c = SiteConfig::default();
    c.validate().unwrap();
    assert_eq!(c.pages.len(), 7);
    assert_eq!(c.pages[0].name, "index");
    assert_eq!(c.pages[0].dir(), "acceuil");
    assert_eq!(c.page("contact").unwrap().dir(), "contact");
    assert_eq!(c.ticket_page, "vente-de-billets");
    assert_eq!(c.lang, "fr");
    assert_eq!(c.static_files, vec!["logo.png", "style.css"]);
}

#[test]
fn parse_minimal_json_with_defaults() {
    let json = r#"{
        "organization": "Troupe",
        "copyright": "(c) Troupe",
        "pages": [
            {"name": "index", "title": "Home", "source_dir": "home"},
            {"name": "tickets", "title": "Tickets"}
        ],
        "ticket_page": "tickets"
    }"#;
    let c: SiteConfig = serde_json::from_str(json).unwrap();
    c.validate().unwrap();
    assert_eq!(c.lang, "fr");
    assert_eq!(c.static_files.len(), 2);
    assert_eq!(c.pages[0].dir(), "home");
    assert_eq!(c.pages[1].source_dir, None);
}

#[test]
fn validate_rejects_bad_pages() {
    let mut c = SiteConfig::default();
    c.ticket_page = "billets".to_string();
    assert!(c.validate().is_err());

    let mut c = SiteConfig::default();
    c.pages.push(PageConfig::new("contact", "Encore"));
    assert!(c.validate().unwrap_err().to_string().contains("duplicate page"));

    let mut c = SiteConfig::default();
    c.pages.push(PageConfig::new("../escape", "Nope"));
    assert!(c.validate().is_err());

    let mut c = SiteConfig::default();
    c.pages.clear();
    assert!(c.validate().is_err());
}

#[test]
fn from_json_file_reports_config_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("site.json");
    std::fs::write(&path, "{ not json").unwrap();
    let err = SiteConfig::from_json_file(&path).unwrap_err();
    assert!(err.to_string().starts_with("config error:"));

    let good = serde_json::to_string_pretty(&SiteConfig::default()).unwrap();
    std::fs::write(&path, good).unwrap();
    assert_eq!(SiteConfig::from_json_file(&path).unwrap(), SiteConfig::default());
}
