//! The category catalog: display metadata for every focus area, in the
//! order the presentation layer lists them.

use std::sync::LazyLock;

use mindcare_core::models::category::{Category, CategoryId};

use crate::get_question_set;

static CATALOG: LazyLock<Vec<Category>> = LazyLock::new(|| {
    CategoryId::ALL
        .into_iter()
        .map(|id| {
            let (display_name, icon, color) = metadata(id);
            Category {
                id,
                display_name: display_name.to_string(),
                icon: icon.to_string(),
                color: color.to_string(),
            }
        })
        .collect()
});

fn metadata(id: CategoryId) -> (&'static str, &'static str, &'static str) {
    match id {
        CategoryId::Anxiety => ("Anxiety Disorders", "zap", "from-yellow-500 to-orange-500"),
        CategoryId::Depression => ("Depression", "heart", "from-blue-500 to-purple-500"),
        CategoryId::Stress => ("Stress Management", "target", "from-red-500 to-pink-500"),
        CategoryId::Trauma => ("Trauma & PTSD", "shield", "from-green-500 to-teal-500"),
        CategoryId::Relationships => {
            ("Relationship Issues", "heart", "from-purple-500 to-pink-500")
        }
        CategoryId::Sleep => ("Sleep Disorders", "clock", "from-indigo-500 to-blue-500"),
        CategoryId::Addiction => ("Addiction Recovery", "target", "from-orange-500 to-red-500"),
        CategoryId::Eating => ("Eating Disorders", "heart", "from-pink-500 to-rose-500"),
    }
}

/// Every category, in display order.
pub fn all_categories() -> &'static [Category] {
    &CATALOG
}

/// Metadata for one category.
pub fn category(id: CategoryId) -> &'static Category {
    // CATALOG is built from CategoryId::ALL, which is in declaration order.
    &CATALOG[id as usize]
}

/// The first `limit` categories, as offered on a suggestion message.
pub fn suggestion_categories(limit: usize) -> Vec<CategoryId> {
    CATALOG.iter().take(limit).map(|c| c.id).collect()
}

/// Whether an assessment can be started for `id`.
pub fn is_assessable(id: CategoryId) -> bool {
    get_question_set(id).is_some_and(|set| !set.is_empty())
}
