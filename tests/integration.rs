// SPDX-License-Identifier: MPL-2.0
use iced_folio::catalog::{Catalog, CategoryId};
use iced_folio::config::{self, Config};
use iced_folio::error::GalleryError;
use iced_folio::gallery::{Effect, Filter, GalleryController, Viewer, ViewerCommand};
use iced_folio::i18n::fluent::I18n;
use iced_folio::ui::theming::ThemeMode;
use std::sync::Arc;
use tempfile::tempdir;

fn controller_with(filter: Filter) -> GalleryController {
    let mut controller = GalleryController::new(Arc::new(Catalog::build()));
    controller.set_filter(filter);
    controller
}

#[test]
fn flattened_catalog_has_every_item() {
    let catalog = Catalog::build();
    let per_category: usize = CategoryId::ALL
        .iter()
        .map(|&category| catalog.items(category).len())
        .sum();

    assert_eq!(catalog.flatten().len(), per_category);
    assert_eq!(catalog.len(), per_category);
}

#[test]
fn unknown_category_yields_nothing() {
    let catalog = Catalog::build();
    assert!(catalog.items_for("landscapes").is_empty());
    assert!(catalog.items_for("").is_empty());

    let controller = controller_with(Filter::parse("landscapes"));
    assert!(controller.filtered_items().is_empty());
}

#[test]
fn next_then_prev_returns_to_start() {
    let mut controller = controller_with(Filter::All);
    let len = controller.filtered_items().len();

    for start in [0, 1, len / 2, len - 1] {
        controller.open(start).unwrap();
        controller.next().unwrap();
        controller.prev().unwrap();
        assert_eq!(controller.viewer(), Viewer::Open(start));
    }
}

#[test]
fn full_cycle_returns_to_start() {
    for filter in Filter::choices() {
        let mut controller = controller_with(filter);
        let len = controller.filtered_items().len();
        controller.open(0).unwrap();

        for _ in 0..len {
            controller.next().unwrap();
        }
        assert_eq!(controller.viewer(), Viewer::Open(0));
    }
}

#[test]
fn characters_filter_keeps_declared_order() {
    let controller = controller_with(Filter::parse("characters"));
    let catalog = Catalog::build();

    assert_eq!(controller.filtered_items().len(), 18);
    assert_eq!(
        controller.filtered_items(),
        catalog.items(CategoryId::Characters)
    );
}

#[test]
fn opening_first_item_shows_one_of_n() {
    let mut controller = controller_with(Filter::All);
    let total = controller.filtered_items().len();

    let effect = controller.open(0).unwrap();

    assert_eq!(effect, Effect::ShowItem { index: 0, total });
    assert_eq!(controller.counter(), Some(format!("1 / {total}")));
}

#[test]
fn empty_filter_rejects_navigation_without_panicking() {
    let mut controller = controller_with(Filter::parse("missing"));

    assert_eq!(controller.open(0), Err(GalleryError::EmptyFilterResult));
    assert_eq!(controller.next(), Err(GalleryError::EmptyFilterResult));
    assert_eq!(controller.prev(), Err(GalleryError::EmptyFilterResult));
    assert!(controller.current_item().is_none());
}

#[test]
fn filter_change_while_open_clamps_index() {
    let mut controller = controller_with(Filter::All);
    let last = controller.filtered_items().len() - 1;
    controller.open(last).unwrap();

    controller.set_filter(Filter::Category(CategoryId::Sketches));

    let sketches = controller.filtered_items().len();
    assert_eq!(controller.viewer(), Viewer::Open(sketches - 1));
    assert_eq!(
        controller.current_item().map(|item| item.category()),
        Some(CategoryId::Sketches)
    );
}

#[test]
fn commands_drive_the_viewer() {
    let mut controller = controller_with(Filter::Category(CategoryId::Full));
    controller.open(1).unwrap();

    controller.apply(ViewerCommand::Next).unwrap();
    controller.apply(ViewerCommand::Next).unwrap();
    assert_eq!(controller.viewer(), Viewer::Open(1));

    assert_eq!(controller.apply(ViewerCommand::Close), Ok(Effect::HideViewer));
    assert_eq!(
        controller.apply(ViewerCommand::Next),
        Err(GalleryError::ViewerClosed)
    );
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    config::save_to_path(&english, &path).expect("Failed to write initial config file");

    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("filter-all"), "All");

    let mut russian = loaded;
    russian.general.language = Some("ru".to_string());
    config::save_to_path(&russian, &path).expect("Failed to write russian config file");

    let loaded = config::load_from_path(&path).expect("Failed to load russian config");
    let i18n_ru = I18n::new(None, &loaded);
    assert_eq!(i18n_ru.current_locale().to_string(), "ru");
    assert_eq!(i18n_ru.tr("filter-all"), "Все");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn legacy_theme_file_migrates_and_resaves_sectioned() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "theme = \"dark\"\n").expect("Failed to write legacy file");

    let loaded = config::load_from_path(&path).expect("Failed to load legacy config");
    assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);

    config::save_to_path(&loaded, &path).expect("Failed to save migrated config");
    let content = std::fs::read_to_string(&path).expect("Failed to read config");
    assert!(content.contains("[general]"));
    assert_eq!(
        config::load_from_path(&path).expect("Failed to reload config"),
        loaded
    );
}

#[test]
fn configured_default_filter_selects_category() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[gallery]\ndefault_filter = \"comics\"\n")
        .expect("Failed to write config");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let controller = controller_with(loaded.gallery.filter());

    assert_eq!(controller.filtered_items().len(), 31);
    assert!(controller
        .filtered_items()
        .iter()
        .all(|item| item.category() == CategoryId::Comics));
}
