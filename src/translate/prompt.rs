//! System instruction sent ahead of every translation.
//!
//! `{source}` and `{target}` are substituted with language names; the rules
//! themselves stay constant so they can be checked without a network call.

pub const DEFAULT_SOURCE_LANGUAGE: &str = "English";

/// Rule 1: who the model is and which direction it translates
pub const ROLE_RULE: &str = "You are a professional translator proficient in translating {source} text into {target}.\n\
Your task is to provide an accurate and natural-sounding translation of the given {source} text into {target}.";

/// Rule 2: the answer is the translation and nothing else
pub const OUTPUT_ONLY_RULES: [&str; 4] = [
    "Only provide the translated text.",
    "Do not include the original {source} text.",
    "Do not add any explanations, notes, or extra information.",
    "Do not start or end the response with phrases like 'Translation:', 'Here is the translation:', etc.",
];

/// Rule 3
pub const CORRECTNESS_RULE: &str = "Ensure proper grammar, spelling, and punctuation in {target}.";

/// Rule 4
pub const TONE_RULE: &str = "Preserve the original meaning and tone of the text.";

/// Rule 5
pub const IDIOM_RULE: &str = "If the text contains idioms, expressions, or cultural references, \
translate them appropriately so they make sense to a native {target} speaker.";

fn fill(template: &str, source: &str, target: &str) -> String {
    template.replace("{source}", source).replace("{target}", target)
}

/// Build the trimmed system prompt for one translation
pub fn build_system_prompt(target_language: &str, source_language: Option<&str>) -> String {
    let source = source_language.unwrap_or(DEFAULT_SOURCE_LANGUAGE);

    let mut prompt = fill(ROLE_RULE, source, target_language);
    prompt.push_str("\n\nInstructions:\n");
    for rule in OUTPUT_ONLY_RULES.iter().chain([&CORRECTNESS_RULE, &TONE_RULE]) {
        prompt.push_str("- ");
        prompt.push_str(&fill(rule, source, target_language));
        prompt.push('\n');
    }
    prompt.push('\n');
    prompt.push_str(&fill(IDIOM_RULE, source, target_language));

    prompt.trim().to_string()
}
