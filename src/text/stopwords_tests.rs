use super::*;

#[test]
fn test_english_filter_removes_stop_words() {
    let filter = StopWordsFilter::english();
    let tokens = vec!["the", "quick", "brown", "fox"];
    let filtered = filter.filter(&tokens);
    assert_eq!(filtered, vec!["quick", "brown", "fox"]);
}

#[test]
fn test_filter_preserves_case() {
    let filter = StopWordsFilter::english();
    let tokens = vec!["The", "Alps", "IS", "Stunning"];
    let filtered = filter.filter(&tokens);
    assert_eq!(filtered, vec!["Alps", "Stunning"]);
}

#[test]
fn test_is_stop_word_case_insensitive() {
    let filter = StopWordsFilter::english();
    assert!(filter.is_stop_word("the"));
    assert!(filter.is_stop_word("The"));
    assert!(filter.is_stop_word("THE"));
    assert!(!filter.is_stop_word("beach"));
}

#[test]
fn test_custom_stop_words() {
    let filter = StopWordsFilter::new(vec!["foo", "bar"]);
    let tokens = vec!["foo", "test", "bar", "data"];
    let filtered = filter.filter(&tokens);
    assert_eq!(filtered, vec!["test", "data"]);
}

#[test]
fn test_filtered_output_is_subset_of_input() {
    let filter = StopWordsFilter::english();
    let tokens = vec!["is", "this", "a", "test", "of", "the", "system"];
    let filtered = filter.filter(&tokens);
    for word in &filtered {
        assert!(
            tokens.iter().any(|t| *t == word.as_str()),
            "filtered contains '{word}' not in input"
        );
    }
    assert!(filtered.len() <= tokens.len());
}

#[test]
fn test_english_list_contains_core_words() {
    assert!(ENGLISH_STOP_WORDS.contains(&"the"));
    assert!(ENGLISH_STOP_WORDS.contains(&"and"));
    assert!(!ENGLISH_STOP_WORDS.contains(&"mountain"));
}

#[test]
fn test_len_and_is_empty() {
    let empty = StopWordsFilter::new(Vec::<String>::new());
    assert!(empty.is_empty());

    let english = StopWordsFilter::english();
    assert!(!english.is_empty());
    assert_eq!(english.len(), ENGLISH_STOP_WORDS.len());
}
