use crate::config::ClassifierConfig;
use crate::domain::Category;

/// Which part of a commit a keyword rule inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    FirstLine,
    Author,
    FullMessage,
}

/// One step of the classification cascade
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// `type: description` where `type` maps to a known category
    ConventionalPrefix,
    /// Any of the lowercase `keywords` occurs in the lowercased `scope`
    Keywords {
        scope: Scope,
        keywords: Vec<String>,
        category: Category,
    },
}

/// Lowercased views of a commit, computed once per classification
struct Subject<'a> {
    first_line: &'a str,
    first_line_lower: String,
    author_lower: String,
    message_lower: String,
}

impl Rule {
    fn keywords(scope: Scope, keywords: &[String], category: Category) -> Self {
        Rule::Keywords {
            scope,
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            category,
        }
    }

    fn evaluate(&self, subject: &Subject<'_>) -> Option<Category> {
        match self {
            Rule::ConventionalPrefix => subject
                .first_line
                .split_once(':')
                .and_then(|(prefix, _)| Category::from_prefix(&prefix.trim().to_lowercase())),
            Rule::Keywords {
                scope,
                keywords,
                category,
            } => {
                let text = match scope {
                    Scope::FirstLine => &subject.first_line_lower,
                    Scope::Author => &subject.author_lower,
                    Scope::FullMessage => &subject.message_lower,
                };
                keywords
                    .iter()
                    .any(|keyword| text.contains(keyword.as_str()))
                    .then_some(*category)
            }
        }
    }
}

/// Assigns exactly one category to a commit.
///
/// Rules are evaluated top to bottom and the first match wins; commits that
/// match nothing are `Category::Other`.
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<Rule>,
}

impl Classifier {
    /// Build the cascade: conventional prefix, bot authors, first-line
    /// keywords by category, then full-message fallback.
    pub fn new(config: &ClassifierConfig) -> Self {
        let k = &config.keywords;
        let rules = vec![
            Rule::ConventionalPrefix,
            Rule::keywords(Scope::Author, &config.bot_authors, Category::Chore),
            Rule::keywords(Scope::FirstLine, &k.fix, Category::Fix),
            Rule::keywords(Scope::FirstLine, &k.docs, Category::Docs),
            Rule::keywords(Scope::FirstLine, &k.feat, Category::Feat),
            Rule::keywords(Scope::FirstLine, &k.style, Category::Style),
            Rule::keywords(Scope::FirstLine, &k.refactor, Category::Refactor),
            Rule::keywords(Scope::FirstLine, &k.test, Category::Test),
            Rule::keywords(Scope::FirstLine, &k.perf, Category::Perf),
            Rule::keywords(Scope::FirstLine, &k.ops, Category::Ops),
            Rule::keywords(Scope::FirstLine, &k.chore, Category::Chore),
            Rule::keywords(Scope::FullMessage, &k.fallback_chore, Category::Chore),
        ];

        Classifier { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn classify(&self, first_line: &str, author: &str, full_message: &str) -> Category {
        let subject = Subject {
            first_line,
            first_line_lower: first_line.to_lowercase(),
            author_lower: author.to_lowercase(),
            message_lower: full_message.to_lowercase(),
        };

        self.rules
            .iter()
            .find_map(|rule| rule.evaluate(&subject))
            .unwrap_or(Category::Other)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Classifier::new(&ClassifierConfig::default())
    }
}
