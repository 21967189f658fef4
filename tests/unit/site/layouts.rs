use super::*;
use crate::site::config::SiteConfig;

#[test]
fn page_has_title_nav_and_footer() {
    let config = SiteConfig::default();
    let ctx = PageContext {
        lang: &config.lang,
        organization: &config.organization,
        copyright: &config.copyright,
        page_title: "Programme",
        nav: &config.pages,
        content: "<h1>Saison</h1>",
    };
    let html = render_page(&ctx);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"<html lang="fr">"#));
    assert!(html.contains("<title>l&#39;Atelier théâtral de Longueuil - Programme</title>")
        || html.contains("<title>l'Atelier théâtral de Longueuil - Programme</title>"));
    assert!(html.contains(r#"<a href="index.html">Accueil</a>"#));
    assert!(html.contains(r#"<a href="vente-de-billets.html">Vente de billets</a>"#));
    assert!(html.contains("<main><h1>Saison</h1></main>"));
    assert!(html.contains("<footer><p>© Atelier théâtral de Longueuil</p></footer>"));
}

#[test]
fn navigation_keeps_config_order() {
    let config = SiteConfig::default();
    let ctx = PageContext {
        lang: "fr",
        organization: "Org",
        copyright: "c",
        page_title: "Accueil",
        nav: &config.pages,
        content: "",
    };
    let html = render_page(&ctx);
    let positions: Vec<usize> = config
        .pages
        .iter()
        .map(|p| html.find(&format!("href=\"{}.html\"", p.name)).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn seating_fragment_escapes_record_fields() {
    let record = EventRecord::parse("Roméo & Juliette\n<Salle>\nVendredi\nA1\n").unwrap();
    let html = seating_fragment(&record, "static/romeo.svg");
    assert!(html.contains("<th>Roméo &amp; Juliette</th>"));
    assert!(html.contains("<th>&lt;Salle&gt;</th>"));
    assert!(html.contains(r#"<td colspan="3"><img src="static/romeo.svg""#));
}
