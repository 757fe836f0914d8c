use blogsearch_core::types::SearchSettings;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaseMatching {
    Sensitive,
    #[default]
    Insensitive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub case_matching: CaseMatching,
    /// Queries shorter than this (in chars) display nothing.
    pub min_query_chars: usize,
    /// Strip leading/trailing whitespace before matching.
    pub trim_query: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            case_matching: CaseMatching::default(),
            min_query_chars: 2,
            trim_query: false,
        }
    }
}

impl From<&SearchSettings> for SearchConfig {
    fn from(settings: &SearchSettings) -> Self {
        Self {
            case_matching: if settings.case_sensitive {
                CaseMatching::Sensitive
            } else {
                CaseMatching::Insensitive
            },
            min_query_chars: settings.min_query_chars,
            trim_query: settings.trim_query,
        }
    }
}
