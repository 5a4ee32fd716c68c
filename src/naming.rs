//! English pluralization for default table names.
//!
//! Rules are checked in order and the first match wins: uncountable words,
//! then irregular nouns, then the regular suffix rules (most specific last in
//! [`PLURALS`], so they are tried in reverse). Every rule is tried in an
//! upper-case form, as written, and case-insensitively, which keeps the
//! casing of the input: `Object` becomes `Objects`, `PERSON` becomes `PEOPLE`.

use once_cell::sync::Lazy;
use regex::Regex;

const PLURALS: &[(&str, &str)] = &[
    ("([a-z])$", "${1}s"),
    ("s$", "s"),
    ("^(ax|test)is$", "${1}es"),
    ("(octop|vir)us$", "${1}i"),
    ("(octop|vir)i$", "${1}i"),
    ("(alias|status|campus)$", "${1}es"),
    ("(bu)s$", "${1}ses"),
    ("(buffal|tomat)o$", "${1}oes"),
    ("([ti])um$", "${1}a"),
    ("([ti])a$", "${1}a"),
    ("sis$", "ses"),
    ("(?:([^f])fe|([lr])f)$", "${1}${2}ves"),
    ("(hive)$", "${1}s"),
    ("([^aeiouy]|qu)y$", "${1}ies"),
    ("(x|ch|ss|sh)$", "${1}es"),
    ("(matr|vert|ind)(?:ix|ex)$", "${1}ices"),
    ("^(m|l)ouse$", "${1}ice"),
    ("^(m|l)ice$", "${1}ice"),
    ("^(ox)$", "${1}en"),
    ("^(oxen)$", "${1}"),
    ("(quiz)$", "${1}zes"),
];

const IRREGULARS: &[(&str, &str)] = &[
    ("person", "people"),
    ("human", "humans"),
    ("man", "men"),
    ("child", "children"),
    ("sex", "sexes"),
    ("move", "moves"),
    ("zombie", "zombies"),
];

const UNCOUNTABLES: &[&str] = &[
    "equipment",
    "information",
    "rice",
    "money",
    "species",
    "series",
    "fish",
    "sheep",
    "jeans",
    "police",
];

struct Inflection {
    regex: Regex,
    replace: String,
}

impl Inflection {
    fn new(pattern: &str, replace: impl Into<String>) -> Option<Self> {
        Some(Self {
            regex: Regex::new(pattern).ok()?,
            replace: replace.into(),
        })
    }
}

static PLURAL_RULES: Lazy<Vec<Inflection>> = Lazy::new(|| {
    let uncountables = UNCOUNTABLES
        .iter()
        .filter_map(|word| Inflection::new(&format!("^(?i)({word})$"), "${1}"));

    let irregulars = IRREGULARS.iter().flat_map(|(singular, plural)| {
        [
            Inflection::new(
                &format!("{}$", singular.to_uppercase()),
                plural.to_uppercase(),
            ),
            Inflection::new(&format!("{}$", title(singular)), title(plural)),
            Inflection::new(&format!("{singular}$"), *plural),
        ]
        .into_iter()
        .flatten()
    });

    let regulars = PLURALS.iter().rev().flat_map(|(find, replace)| {
        [
            Inflection::new(&find.to_uppercase(), replace.to_uppercase()),
            Inflection::new(find, *replace),
            Inflection::new(&format!("(?i){find}"), *replace),
        ]
        .into_iter()
        .flatten()
    });

    uncountables.chain(irregulars).chain(regulars).collect()
});

fn title(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Returns the plural form of `word`, keeping its casing.
pub fn plural(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }
    PLURAL_RULES
        .iter()
        .find(|rule| rule.regex.is_match(word))
        .map_or_else(
            || word.to_owned(),
            |rule| rule.regex.replace(word, rule.replace.as_str()).into_owned(),
        )
}
