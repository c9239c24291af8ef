use scriptline::executor::Registry;

/// Prefix suggestions over command and modifier names.
pub struct Autocompleter {
    words: Vec<String>,
}

impl Autocompleter {
    pub fn new(registry: &Registry) -> Self {
        let mut words: Vec<String> = registry
            .command_names()
            .into_iter()
            .chain(registry.modifier_names())
            .map(str::to_string)
            .collect();
        words.sort();
        words.dedup();

        Self { words }
    }

    pub fn get_suggestions(&self, input: &str) -> Vec<String> {
        let input = input.trim().to_lowercase();
        if input.is_empty() {
            return Vec::new();
        }

        // Fall back to a shared first letter when nothing matches the prefix
        let mut suggestions: Vec<String> = self
            .words
            .iter()
            .filter(|word| word.starts_with(&input))
            .cloned()
            .collect();

        if suggestions.is_empty() {
            if let Some(first) = input.chars().next() {
                suggestions = self
                    .words
                    .iter()
                    .filter(|word| word.starts_with(first))
                    .cloned()
                    .collect();
            }
        }

        suggestions
    }
}
