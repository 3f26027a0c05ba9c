use labflow::session::title::derive_title;

#[test]
fn test_strips_single_indonesian_prefix() {
    let title = derive_title("Tolong update Status Order ORD-XXX-001 menjadi Pending");
    assert!(title.starts_with("Update Status Order"));
    assert_eq!(title, "Update Status Order ORD-XXX-001 menjadi Pending");
}

#[test]
fn test_longer_phrase_wins_over_bare_prefix() {
    assert_eq!(derive_title("please explain why"), "Why");
    assert_eq!(derive_title("Please restock acetone"), "Restock acetone");
}

#[test]
fn test_only_first_prefix_removed() {
    // "tolong" goes, the following "please" stays
    assert_eq!(derive_title("tolong please cek stok"), "Please cek stok");
}

#[test]
fn test_prefix_needs_trailing_whitespace() {
    assert_eq!(derive_title("bisanya kapan?"), "Bisanya kapan?");
}

#[test]
fn test_question_words_are_kept() {
    assert_eq!(
        derive_title("Bagaimana penanganan pertama jika aseton terkena mata?"),
        "Bagaimana penanganan pertama jika aseton terkena mata?"
    );
}

#[test]
fn test_collapses_whitespace() {
    assert_eq!(derive_title("  how   many\n\tvials  left  "), "How many vials left");
}

#[test]
fn test_truncates_long_titles() {
    let text = "a".repeat(120);
    let title = derive_title(&text);
    assert_eq!(title.chars().count(), 81);
    assert!(title.ends_with('…'));
    assert!(title.starts_with('A'));
}

#[test]
fn test_exactly_eighty_chars_untouched() {
    let text = "b".repeat(80);
    let title = derive_title(&text);
    assert_eq!(title.chars().count(), 80);
    assert!(!title.ends_with('…'));
}

#[test]
fn test_bare_filler_keeps_unstripped_text() {
    assert_eq!(derive_title("please   "), "Please");
}

#[test]
fn test_length_and_capital_hold_for_varied_inputs() {
    let inputs = [
        "hello",
        "can you help me find the MSDS for toluene and also list every reagent that expires before the end of the quarter",
        "saya ingin bertanya mengenai stok etanol",
        "i need ten boxes of nitrile gloves",
        "tell me about the order status",
        "ápa kabar",
    ];
    for input in inputs {
        let title = derive_title(input);
        assert!(title.chars().count() <= 81, "{title}");
        let first = title.chars().next().unwrap();
        assert!(first.is_uppercase(), "{title}");
    }
}
