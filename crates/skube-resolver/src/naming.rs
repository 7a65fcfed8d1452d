//! Naming-convention variants of a multi-word name.

use skube_protocol::NamingConvention;

/// Rendering keys in fallback priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rendering {
    Hyphen,
    CamelCase,
    Underscore,
    PascalCase,
    NoSpace,
    Original,
}

const PRIORITY: [Rendering; 6] = [
    Rendering::Hyphen,
    Rendering::CamelCase,
    Rendering::Underscore,
    Rendering::PascalCase,
    Rendering::NoSpace,
    Rendering::Original,
];

impl Rendering {
    fn for_convention(convention: NamingConvention) -> Option<Self> {
        match convention {
            NamingConvention::Hyphen => Some(Self::Hyphen),
            NamingConvention::CamelCase => Some(Self::CamelCase),
            NamingConvention::Underscore => Some(Self::Underscore),
            NamingConvention::PascalCase => Some(Self::PascalCase),
            NamingConvention::Mixed | NamingConvention::Unknown => None,
        }
    }

    fn render(self, input: &str, words: &[&str]) -> String {
        match self {
            Self::Hyphen => words.join("-").to_lowercase(),
            Self::CamelCase => {
                let mut out = words[0].to_lowercase();
                for word in &words[1..] {
                    out.push_str(&capitalize(word));
                }
                out
            }
            Self::Underscore => words.join("_").to_lowercase(),
            Self::PascalCase => words.iter().map(|w| capitalize(w)).collect(),
            Self::NoSpace => words.concat().to_lowercase(),
            Self::Original => input.to_string(),
        }
    }
}

/// Uppercase the first char, lowercase the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Candidate spellings of `input` under common naming conventions.
///
/// Input without a space is returned unchanged as the only variant.
/// Otherwise six renderings are produced (hyphen, camelCase, underscore,
/// PascalCase, no separator, original) with the cluster's dominant
/// convention first. Renderings that coincide are listed once, at their
/// first position.
pub fn naming_variants(input: &str, convention: Option<NamingConvention>) -> Vec<String> {
    if !input.contains(' ') {
        return vec![input.to_string()];
    }

    let words: Vec<&str> = input.split_whitespace().collect();
    if words.is_empty() {
        return vec![input.to_string()];
    }

    let preferred = convention.and_then(Rendering::for_convention);
    let order = preferred
        .into_iter()
        .chain(PRIORITY.into_iter().filter(|r| Some(*r) != preferred));

    let mut variants: Vec<String> = Vec::with_capacity(PRIORITY.len());
    for rendering in order {
        let variant = rendering.render(input, &words);
        if !variants.contains(&variant) {
            variants.push(variant);
        }
    }
    variants
}
