use rand::Rng;

// Phonetic suffixes appended to base names
const SUFFIXES: &[&str] = &[
    "er", "us", "sen", "ther", "or", "in", "en", "ar", "on", "is", "as", "ion", "an", "el", "il",
    "al", "ol", "ul", "yn", "yn", "eth", "ath", "ith", "oth", "uth", "ash", "esh", "ish", "osh",
    "ush", "orn", "arn", "ern", "urn", "irn", "orn", "ian", "ean", "oan", "uan", "ian",
];

// Alternate characters for common endings: vowels swap with other vowels,
// a small consonant group swaps among itself
fn ending_alternates(last: char) -> Option<&'static [char]> {
    match last {
        'a' => Some(&['e', 'o', 'i', 'u', 'y']),
        'e' => Some(&['a', 'o', 'i', 'u', 'y']),
        'i' => Some(&['a', 'e', 'o', 'u', 'y']),
        'o' => Some(&['a', 'e', 'i', 'u', 'y']),
        'u' => Some(&['a', 'e', 'i', 'o', 'y']),
        'y' => Some(&['a', 'e', 'i', 'o', 'u']),
        'n' => Some(&['m', 'r', 'l', 's']),
        'r' => Some(&['n', 'l', 's', 'm']),
        'l' => Some(&['n', 'r', 's', 'm']),
        's' => Some(&['n', 'r', 'l', 'm']),
        _ => None,
    }
}

/// One transformation applied to a normalized token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Append a random phonetic suffix.
    Suffix,
    /// Swap or adjust the final character.
    ModifyEnding,
    /// Drop the last character, then append a random suffix.
    RemoveAndSuffix,
    /// Drop the last character, then append a fixed affix.
    TrimAppend(&'static str),
    /// Append a fixed affix.
    Append(&'static str),
}

/// Dispatch table for `variation`. One uniform pick over these entries
/// gives each transformation the same weight.
pub const STRATEGIES: [Strategy; 9] = [
    Strategy::Suffix,
    Strategy::ModifyEnding,
    Strategy::RemoveAndSuffix,
    Strategy::TrimAppend("er"),
    Strategy::TrimAppend("us"),
    Strategy::Append("er"),
    Strategy::Append("us"),
    Strategy::Append("en"),
    Strategy::Append("or"),
];

impl Strategy {
    pub fn apply(self, rng: &mut impl Rng, token: &str) -> String {
        match self {
            Strategy::Suffix => add_suffix(rng, token),
            Strategy::ModifyEnding => modify_ending(rng, token),
            Strategy::RemoveAndSuffix => {
                if token.chars().count() >= 3 {
                    add_suffix(rng, chop_last(token))
                } else {
                    add_suffix(rng, token)
                }
            }
            Strategy::TrimAppend(affix) => format!("{}{}", chop_last(token), affix),
            Strategy::Append(affix) => format!("{}{}", token, affix),
        }
    }
}

fn add_suffix(rng: &mut impl Rng, token: &str) -> String {
    let suffix = SUFFIXES[rng.random_range(0..SUFFIXES.len())];
    format!("{}{}", token, suffix)
}

fn modify_ending(rng: &mut impl Rng, token: &str) -> String {
    if token.chars().count() < 2 {
        return token.to_string();
    }
    let (idx, last) = match token.char_indices().last() {
        Some(pair) => pair,
        None => return token.to_string(),
    };
    let stem = &token[..idx];

    if let Some(alternates) = ending_alternates(last.to_ascii_lowercase()) {
        let replacement = alternates[rng.random_range(0..alternates.len())];
        let mut out = String::with_capacity(token.len());
        out.push_str(stem);
        out.push(replacement);
        return out;
    }

    // No registered alternate: drop the ending or append a common vowel
    match rng.random_range(0..4) {
        0 => stem.to_string(),
        1 => format!("{}e", token),
        2 => format!("{}a", token),
        _ => format!("{}i", token),
    }
}

// Token without its final character
fn chop_last(token: &str) -> &str {
    match token.char_indices().last() {
        Some((idx, _)) => &token[..idx],
        None => token,
    }
}

/// Lowercase first segment of a possibly camel-cased source name.
/// `"DarthVader"` becomes `"darth"`; single-segment names pass through.
pub fn normalize(raw: &str) -> String {
    let mut spaced = String::with_capacity(raw.len() + 4);
    for c in raw.chars() {
        if c.is_ascii_uppercase() {
            spaced.push(' ');
        }
        spaced.push(c);
    }
    let lowered = spaced.trim().to_lowercase();
    match lowered.split(' ').next() {
        Some(first) => first.to_string(),
        None => String::new(),
    }
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Produce one randomized variation of `base`. Empty input is returned
/// unchanged; every other input yields a capitalized, non-empty result.
pub fn variation(rng: &mut impl Rng, base: &str) -> String {
    if base.is_empty() {
        return String::new();
    }
    let token = normalize(base);
    let strategy = STRATEGIES[rng.random_range(0..STRATEGIES.len())];
    capitalize(&strategy.apply(rng, &token))
}
