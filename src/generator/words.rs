// Word pools for random-mode username generation

pub const ADJECTIVES: &[&str] = &[
    "swift", "clever", "brave", "bright", "calm", "cool", "daring", "eager", "fierce", "gentle",
    "jolly", "keen", "lively", "mighty", "noble", "proud", "quick", "radiant", "sharp", "tough",
    "witty", "zealous", "bold", "calm", "dazzling", "epic", "fancy", "gigantic", "heroic",
    "infinite", "jovial", "kind", "legendary", "magical", "neon", "oceanic", "powerful", "quantum",
    "rapid", "stellar", "titanic", "ultimate", "vibrant", "wild", "xenial", "youthful", "zenith",
    "atomic", "cosmic", "dynamic",
];

pub const NOUNS: &[&str] = &[
    "tiger", "fox", "eagle", "wolf", "lion", "bear", "hawk", "falcon", "panther", "jaguar",
    "phoenix", "dragon", "unicorn", "griffin", "raven", "cobra", "shark", "whale", "dolphin",
    "orca", "storm", "thunder", "lightning", "blaze", "frost", "shadow", "nova", "comet",
    "asteroid", "nebula", "warrior", "knight", "ranger", "mage", "rogue", "paladin", "ninja",
    "samurai", "viking", "spartan", "phoenix", "titan", "giant", "titan", "legend", "myth",
    "epic", "saga", "quest", "journey",
];

pub const VERBS: &[&str] = &[
    "leaping", "soaring", "striking", "charging", "blazing", "shining", "roaring", "howling",
    "diving", "racing", "flying", "running", "jumping", "climbing", "swimming", "dancing",
    "singing", "fighting", "winning", "conquering", "exploring", "discovering", "creating",
    "building", "designing", "coding", "hacking", "gaming", "streaming", "competing",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pools_are_non_empty() {
        assert!(!ADJECTIVES.is_empty());
        assert!(!NOUNS.is_empty());
        assert!(!VERBS.is_empty());
    }

    #[test]
    fn pool_words_are_lowercase_ascii() {
        for word in ADJECTIVES.iter().chain(NOUNS).chain(VERBS) {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "unexpected word form: {}",
                word
            );
        }
    }
}
