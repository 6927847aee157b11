use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use uni_directory::catalog::{CatalogLocation, CatalogStore, FetchError};
use uni_directory::controller::{ControlEvent, DirectoryController};
use uni_directory::matching::MatchFocus;
use uni_directory::render::{
    DisplayFrame, DisplaySurface, HtmlSurface, Placeholder, ProgramDetailView,
};

#[derive(Default)]
struct RecordingSurface {
    frames: Vec<DisplayFrame>,
    details: Vec<ProgramDetailView>,
}

impl DisplaySurface for RecordingSurface {
    fn present(&mut self, frame: DisplayFrame) {
        self.frames.push(frame);
    }

    fn open_detail(&mut self, detail: ProgramDetailView) {
        self.details.push(detail);
    }
}

fn fixture(name: &str) -> CatalogLocation {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    CatalogLocation::parse(path.to_str().expect("utf-8 path"), false, Duration::from_secs(1))
        .expect("path location")
}

#[tokio::test]
async fn startup_renders_every_institution_collapsed() {
    let mut controller = DirectoryController::new(RecordingSurface::default());
    controller
        .start(&fixture("catalog.json"))
        .await
        .expect("catalog loads");

    let frames = &controller.surface().frames;
    assert_eq!(frames.len(), 1);
    let cards = frames[0].cards();
    assert_eq!(cards.len(), 3);
    assert!(cards.iter().all(|card| card.focus == MatchFocus::Institution));

    let alpha = &cards[0];
    assert_eq!(alpha.url, "https://alpha.example");
    assert_eq!(alpha.degree_badges, vec!["Bachelor", "Master"]);
    let names: Vec<&str> = alpha.programs.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Data Science", "Art History"]);
    assert!(alpha.programs.iter().all(|entry| !entry.expanded));

    assert!(cards[2].programs.is_empty());
    assert_eq!(cards[2].degrees_text(), "N/A");
}

#[tokio::test]
async fn missing_catalog_shows_single_error_placeholder() {
    let mut controller = DirectoryController::new(RecordingSurface::default());
    let error = controller
        .start(&fixture("does-not-exist.json"))
        .await
        .expect_err("load fails");

    assert!(matches!(error, FetchError::Read { .. }));
    let frames = &controller.surface().frames;
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].placeholder(), Some(Placeholder::LoadFailed));
    assert!(frames[0].cards().is_empty());

    controller.handle(ControlEvent::SearchInput("data".to_string()));
    assert_eq!(controller.surface().frames.len(), 1);
}

#[tokio::test]
async fn malformed_catalog_is_a_parse_failure() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(b"[{\"id\": \"alpha\"").expect("write body");
    let location = CatalogLocation::File(file.path().to_path_buf());

    let error = CatalogStore::load(&location)
        .await
        .expect_err("truncated body rejected");
    assert!(matches!(error, FetchError::Parse(_)));

    let mut controller = DirectoryController::new(RecordingSurface::default());
    assert!(controller.start(&location).await.is_err());
    assert_eq!(
        controller.surface().frames[0].placeholder(),
        Some(Placeholder::LoadFailed)
    );
}

#[tokio::test]
async fn typing_and_selecting_narrow_results() {
    let mut controller = DirectoryController::new(RecordingSurface::default());
    controller
        .start(&fixture("catalog.json"))
        .await
        .expect("catalog loads");

    controller.handle(ControlEvent::DegreeChanged("phd".to_string()));
    let cards = controller.surface().frames.last().expect("frame").cards();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].institution_id, "beta-college");
    assert_eq!(cards[0].programs[0].name, "Economics");
    assert!(cards[0].programs[0].expanded);

    controller.handle(ControlEvent::DegreeChanged("all".to_string()));
    controller.handle(ControlEvent::TypeChanged("public".to_string()));
    controller.handle(ControlEvent::SearchInput("Bosphorus".to_string()));
    let cards = controller.surface().frames.last().expect("frame").cards();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].name, "Alpha U");
    assert_eq!(cards[0].programs.len(), 2);

    controller.handle(ControlEvent::CountryChanged("spain".to_string()));
    let last = controller.surface().frames.last().expect("frame");
    assert_eq!(last.placeholder(), Some(Placeholder::NoResults));
}

#[tokio::test]
async fn program_detail_opens_for_known_address_only() {
    let mut controller = DirectoryController::new(RecordingSurface::default());
    controller
        .start(&fixture("catalog.json"))
        .await
        .expect("catalog loads");

    controller.open_program("alpha-u", "Data Science");
    controller.open_program("alpha-u", "Law");

    let details = &controller.surface().details;
    assert_eq!(details.len(), 1);
    assert_eq!(details[0].tuition, "6000 USD");
    assert_eq!(
        details[0].admission_requirements,
        "Bachelor in a quantitative field"
    );
}

#[tokio::test]
async fn html_surface_renders_cards_and_placeholders() {
    let mut controller = DirectoryController::new(HtmlSurface::new());
    controller
        .start(&fixture("catalog.json"))
        .await
        .expect("catalog loads");

    let html = controller.surface().list_html();
    assert_eq!(html.matches("class=\"university-card\"").count(), 3);
    assert!(html.contains("href=\"https://beta.example\""));

    controller.handle(ControlEvent::SearchInput("astronomy".to_string()));
    assert_eq!(
        controller.surface().list_html(),
        "<p class=\"no-results-message\">No universities found matching your criteria.</p>"
    );
}

#[tokio::test]
async fn filter_options_reflect_loaded_catalog() {
    let mut controller = DirectoryController::new(RecordingSurface::default());
    assert!(controller.filter_options().is_none());
    controller
        .start(&fixture("catalog.json"))
        .await
        .expect("catalog loads");

    let options = controller.filter_options().expect("options available");
    let countries: Vec<&str> = options.countries.iter().map(|c| c.value.as_str()).collect();
    assert_eq!(countries, vec!["spain", "turkey", "united kingdom"]);
    let degrees: Vec<&str> = options.degrees.iter().map(|d| d.value.as_str()).collect();
    assert_eq!(degrees, vec!["bachelor", "master", "phd"]);
}
