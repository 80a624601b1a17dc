//! Deterministic ordering of mixed folder/file listings.

use std::cmp::Ordering;
use std::sync::LazyLock;

use icu_collator::options::{CollatorOptions, Strength};
use icu_collator::{Collator, CollatorBorrowed};
use tracing::warn;

use driveview_core::types::{SortDirection, SortField};
use driveview_entity::{FileSystemItem, ItemKind};

/// Root-locale collator at secondary strength: accents are significant,
/// case is not.
static NAME_COLLATOR: LazyLock<Option<CollatorBorrowed<'static>>> = LazyLock::new(|| {
    let mut options = CollatorOptions::default();
    options.strength = Some(Strength::Secondary);
    match Collator::try_new(Default::default(), options) {
        Ok(collator) => Some(collator),
        Err(e) => {
            warn!(error = %e, "Collation data unavailable, comparing case-folded names");
            None
        }
    }
});

/// Compare two names with locale-aware, case-insensitive collation.
///
/// Accented letters sort next to their base letter (`"éclair"` before
/// `"zebra"`), and names differing only in case compare equal so the
/// caller's tie-breaks decide.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    match NAME_COLLATOR.as_ref() {
        Some(collator) => collator.compare(a, b),
        None => a
            .chars()
            .flat_map(char::to_lowercase)
            .cmp(b.chars().flat_map(char::to_lowercase)),
    }
}

/// Return a sorted copy of `items`.
///
/// The order is total, so repeated calls on the same input always give the
/// same sequence:
///
/// 1. the chosen field, negated for [`SortDirection::Desc`];
/// 2. folders before files (files before folders when descending);
/// 3. name, ascending;
/// 4. raw identifier, ascending.
pub fn sort_items(
    items: &[FileSystemItem],
    field: SortField,
    direction: SortDirection,
) -> Vec<FileSystemItem> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| compare_items(a, b, field, direction));
    sorted
}

/// The full comparator used by [`sort_items`].
pub fn compare_items(
    a: &FileSystemItem,
    b: &FileSystemItem,
    field: SortField,
    direction: SortDirection,
) -> Ordering {
    let primary = compare_field(a, b, field);
    let primary = if direction.is_desc() {
        primary.reverse()
    } else {
        primary
    };

    primary
        .then_with(|| {
            let kinds = kind_rank(a.kind()).cmp(&kind_rank(b.kind()));
            if direction.is_desc() {
                kinds.reverse()
            } else {
                kinds
            }
        })
        .then_with(|| compare_names(a.name(), b.name()))
        .then_with(|| a.id().cmp(b.id()))
}

fn compare_field(a: &FileSystemItem, b: &FileSystemItem, field: SortField) -> Ordering {
    match field {
        SortField::Name => compare_names(a.name(), b.name()),
        SortField::Type => compare_names(&a.type_label(), &b.type_label()),
        SortField::Size => a.size().cmp(&b.size()),
        SortField::Created => a.created_at().cmp(&b.created_at()),
        SortField::Updated => a.updated_at().cmp(&b.updated_at()),
    }
}

fn kind_rank(kind: ItemKind) -> u8 {
    match kind {
        ItemKind::Folder => 0,
        ItemKind::File => 1,
    }
}
