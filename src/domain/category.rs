use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic category assigned to every commit.
///
/// Declaration order is the canonical display order wherever commits are
/// grouped by type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Feat,
    Fix,
    Docs,
    Style,
    Refactor,
    Test,
    Perf,
    Ops,
    Chore,
    Other,
}

/// Static metadata for one category: its key, conventional prefixes,
/// and how it is displayed.
#[derive(Debug)]
pub struct CategoryInfo {
    pub category: Category,
    pub key: &'static str,
    pub prefixes: &'static [&'static str],
    pub label: &'static str,
    pub glyph: &'static str,
}

/// Shared lookup table for classification and rendering, in display order.
pub const CATEGORIES: [CategoryInfo; 10] = [
    CategoryInfo {
        category: Category::Feat,
        key: "feat",
        prefixes: &["feat"],
        label: "Features",
        glyph: "✨",
    },
    CategoryInfo {
        category: Category::Fix,
        key: "fix",
        prefixes: &["fix"],
        label: "Bug Fixes",
        glyph: "🐛",
    },
    CategoryInfo {
        category: Category::Docs,
        key: "docs",
        prefixes: &["docs"],
        label: "Documentation",
        glyph: "📚",
    },
    CategoryInfo {
        category: Category::Style,
        key: "style",
        prefixes: &["style"],
        label: "Code Style",
        glyph: "💎",
    },
    CategoryInfo {
        category: Category::Refactor,
        key: "refactor",
        prefixes: &["refactor"],
        label: "Code Refactoring",
        glyph: "♻️",
    },
    CategoryInfo {
        category: Category::Test,
        key: "test",
        prefixes: &["test"],
        label: "Tests",
        glyph: "✅",
    },
    CategoryInfo {
        category: Category::Perf,
        key: "perf",
        prefixes: &["perf"],
        label: "Performance",
        glyph: "⚡",
    },
    CategoryInfo {
        category: Category::Ops,
        key: "ops",
        prefixes: &["ci", "build", "ops"],
        label: "CI/CD & Build",
        glyph: "🚀",
    },
    CategoryInfo {
        category: Category::Chore,
        key: "chore",
        prefixes: &["chore"],
        label: "Chores",
        glyph: "🔧",
    },
    CategoryInfo {
        category: Category::Other,
        key: "other",
        prefixes: &[],
        label: "Other Changes",
        glyph: "📌",
    },
];

impl Category {
    /// All categories in display order.
    pub fn all() -> impl Iterator<Item = Category> {
        CATEGORIES.iter().map(|info| info.category)
    }

    pub fn info(self) -> &'static CategoryInfo {
        // The table is declared in enum order.
        &CATEGORIES[self as usize]
    }

    pub fn key(self) -> &'static str {
        self.info().key
    }

    pub fn label(self) -> &'static str {
        self.info().label
    }

    pub fn glyph(self) -> &'static str {
        self.info().glyph
    }

    /// Map a conventional-commit prefix (already trimmed and lowercased)
    /// to its category. Unknown prefixes yield `None`.
    pub fn from_prefix(prefix: &str) -> Option<Category> {
        CATEGORIES
            .iter()
            .find(|info| info.prefixes.contains(&prefix))
            .map(|info| info.category)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
