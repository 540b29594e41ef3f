use crate::themes::{Theme, THEMES};
use rand::seq::IndexedRandom;
use rand::Rng;

// Character names quoted to the model per request
const MAX_EXAMPLES: usize = 5;

/// Format the instruction sent to the language model: selected theme
/// names, a shuffled handful of character examples, and the names already
/// produced this run so the model avoids repeats.
pub fn build_prompt(
    rng: &mut impl Rng,
    selected: &[Theme],
    characters: &[&str],
    exclude: &[String],
) -> String {
    let theme_names: Vec<&str> = selected
        .iter()
        .filter(|t| **t != Theme::Random)
        .filter_map(|t| THEMES.get(t).map(|data| data.name))
        .collect();

    let examples: Vec<&str> = characters
        .choose_multiple(rng, MAX_EXAMPLES)
        .copied()
        .collect();

    let mut prompt = format!(
        "Generate a unique username inspired by the following themes: {}.\n\n\
         Examples of characters from these themes: {}\n\n",
        theme_names.join(", "),
        examples.join(", ")
    );

    if !exclude.is_empty() {
        prompt.push_str(&format!(
            "Already taken, do not suggest any of these: {}\n\n",
            exclude.join(", ")
        ));
    }

    prompt.push_str(
        "Requirements:\n\
         - The username should sound familiar and reference the lore/theme\n\
         - It should be a variation or derivative of existing names, not a direct copy\n\
         - Make it creative and unique (like \"Voljiner\", \"Aragornus\", \"Geralten\")\n\
         - Single word, no spaces\n\
         - Maximum 20 characters\n\
         - Should feel authentic to the theme\n\n\
         Generate only the username, nothing else.",
    );

    prompt
}
