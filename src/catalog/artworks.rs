// SPDX-License-Identifier: MPL-2.0
//! Embedded artwork definitions.
//!
//! Locators follow `assets/images/<category>/<category>_<NN>.jpg` with a
//! two-digit, one-based number.

use super::{CategoryId, WorkItem};

/// Hand-authored items, in declaration order.
const FULL: &[(&str, &str)] = &[
    ("assets/images/full/full_01.jpg", "Иллюстрация 1"),
    ("assets/images/full/full_02.jpg", "Иллюстрация 2"),
];

const SKETCHES: &[(&str, &str)] = &[
    ("assets/images/sketches/sketches_01.jpg", "Скетч 1"),
    ("assets/images/sketches/sketches_02.jpg", "Скетч 2"),
    ("assets/images/sketches/sketches_03.jpg", "Скетч 3"),
];

const CHARACTER_COUNT: usize = 18;
const COMIC_COUNT: usize = 31;

pub(super) fn items(category: CategoryId) -> Vec<WorkItem> {
    match category {
        CategoryId::Full => listed(FULL, category),
        CategoryId::Characters => numbered(category, CHARACTER_COUNT, "Персонаж"),
        CategoryId::Comics => numbered(category, COMIC_COUNT, "Комикс"),
        CategoryId::Sketches => listed(SKETCHES, category),
    }
}

fn listed(entries: &[(&str, &str)], category: CategoryId) -> Vec<WorkItem> {
    entries
        .iter()
        .map(|(source, title)| WorkItem::new(*source, *title, category))
        .collect()
}

fn numbered(category: CategoryId, count: usize, label: &str) -> Vec<WorkItem> {
    (1..=count)
        .map(|n| {
            let key = category.key();
            WorkItem::new(
                format!("assets/images/{key}/{key}_{n:02}.jpg"),
                format!("{label} {n}"),
                category,
            )
        })
        .collect()
}
