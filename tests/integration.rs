// SPDX-License-Identifier: MPL-2.0
//! End-to-end tests: load a portfolio file from disk and drive the card and
//! gallery state machines the way the application does.

use folio::portfolio::{self, LEGACY_GALLERY_TITLE};
use folio::scroll_lock::ScrollLock;
use folio::ui::{card, slideshow};
use std::fs;
use tempfile::tempdir;

fn write_portfolio(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("portfolio.toml");
    fs::write(&path, content).expect("failed to write portfolio file");
    (dir, path)
}

#[test]
fn gallery_project_opens_overlay_and_locks_scrolling() {
    let (_dir, path) = write_portfolio(
        r#"
title = "My Work"

[[projects]]
title = "Tracker"
description = "Tracks *things*."
dates = "Jan 2024 - Present"
tags = ["rust", "iced"]
images = ["shots/a.png", "shots/b.png", "shots/c.png"]
gallery = true

[[projects]]
title = "Plain"
description = "No gallery here."
dates = "2023"
image = "still.png"
"#,
    );

    let loaded = portfolio::load_from_path(&path).expect("load failed");
    assert_eq!(loaded.title.as_deref(), Some("My Work"));
    assert_eq!(loaded.projects.len(), 2);

    let lock = ScrollLock::new();
    let mut states: Vec<card::State> = loaded.projects.iter().map(card::State::new).collect();

    // Pressing the gallery card opens its overlay and locks page scrolling.
    let event = card::update(
        &mut states[0],
        &loaded.projects[0],
        card::Message::Pressed,
        &lock,
    );
    assert_eq!(event, card::Event::GalleryOpened);
    assert!(states[0].is_gallery_open());
    assert!(lock.is_locked());

    // Pressing the plain card does nothing.
    let event = card::update(
        &mut states[1],
        &loaded.projects[1],
        card::Message::Pressed,
        &lock,
    );
    assert_eq!(event, card::Event::None);
    assert!(!states[1].is_gallery_open());

    // Closing via the backdrop releases the lock.
    let event = card::update(
        &mut states[0],
        &loaded.projects[0],
        card::Message::CloseRequested,
        &lock,
    );
    assert_eq!(event, card::Event::GalleryClosed);
    assert!(!lock.is_locked());
}

#[test]
fn overlay_navigation_wraps_around_the_image_set() {
    let (_dir, path) = write_portfolio(
        r#"
[[projects]]
title = "Tracker"
description = "d"
dates = "2024"
images = ["a.png", "b.png", "c.png"]
gallery = true
"#,
    );

    let loaded = portfolio::load_from_path(&path).expect("load failed");
    let project = &loaded.projects[0];
    let lock = ScrollLock::new();
    let mut state = card::State::new(project);

    card::update(&mut state, project, card::Message::Pressed, &lock);
    for _ in 0..3 {
        card::update(
            &mut state,
            project,
            card::Message::Overlay(slideshow::Message::Next),
            &lock,
        );
    }

    // Three advances over three images lands back on the first; the inline
    // preview is untouched.
    let overlay = state.overlay_slideshow().expect("overlay should be open");
    assert_eq!(overlay.current(), 0);
    assert_eq!(overlay.direction(), slideshow::Direction::Forward);
    assert_eq!(state.inline_slideshow().current(), 0);

    // Reopening starts over at the first image.
    card::update(&mut state, project, card::Message::CloseRequested, &lock);
    card::update(&mut state, project, card::Message::Pressed, &lock);
    let overlay = state.overlay_slideshow().expect("overlay should be open");
    assert_eq!(overlay.current(), 0);
    assert_eq!(overlay.direction(), slideshow::Direction::Still);
}

#[test]
fn legacy_title_still_opens_the_gallery() {
    let (_dir, path) = write_portfolio(&format!(
        r#"
[[projects]]
title = "{LEGACY_GALLERY_TITLE}"
description = "Tracks microplastics in water samples."
dates = "2024"
images = ["a.png", "b.png"]
"#
    ));

    let loaded = portfolio::load_from_path(&path).expect("load failed");
    let project = &loaded.projects[0];
    assert!(project.has_gallery());

    let lock = ScrollLock::new();
    let mut state = card::State::new(project);
    let event = card::update(&mut state, project, card::Message::Pressed, &lock);
    assert_eq!(event, card::Event::GalleryOpened);
    assert!(lock.is_locked());
}

#[test]
fn dropping_all_cards_releases_every_lock_holder() {
    let (_dir, path) = write_portfolio(
        r#"
[[projects]]
title = "One"
description = "d"
dates = "2024"
images = ["a.png"]
gallery = true

[[projects]]
title = "Two"
description = "d"
dates = "2024"
images = ["b.png"]
gallery = true
"#,
    );

    let loaded = portfolio::load_from_path(&path).expect("load failed");
    let lock = ScrollLock::new();
    let mut states: Vec<card::State> = loaded.projects.iter().map(card::State::new).collect();

    for (state, project) in states.iter_mut().zip(&loaded.projects) {
        card::update(state, project, card::Message::Pressed, &lock);
    }
    assert!(lock.is_locked());

    states.clear();
    assert!(!lock.is_locked());
}

#[test]
fn link_presses_surface_copy_events() {
    let (_dir, path) = write_portfolio(
        r#"
[[projects]]
title = "Demo"
description = "d"
dates = "2024"
href = "https://example.com/demo"
image = "still.png"

[[projects.links]]
icon = "github"
label = "Source"
url = "https://github.com/example/demo"
"#,
    );

    let loaded = portfolio::load_from_path(&path).expect("load failed");
    let project = &loaded.projects[0];
    let lock = ScrollLock::new();
    let mut state = card::State::new(project);

    let event = card::update(&mut state, project, card::Message::PreviewPressed, &lock);
    assert_eq!(
        event,
        card::Event::CopyUrl("https://example.com/demo".to_string())
    );

    let event = card::update(
        &mut state,
        project,
        card::Message::LinkPressed(project.links[0].url.clone()),
        &lock,
    );
    assert_eq!(
        event,
        card::Event::CopyUrl("https://github.com/example/demo".to_string())
    );
}
