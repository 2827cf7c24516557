use sauda::interpreter::{interpret, normalize::normalize, Action};
use sauda::language::Language;
use sauda::utils::fuzzy::similarity;

#[test]
fn test_interpreter_survives_garbage_flood() {
    // Simulate a flood of random garbage transcripts
    let garbage = [
        "asdfghjkl",
        "!!! @@@ ###",
        "1234567890",
        "extremely long string that doesn't mean anything to the system at all but might cause buffer issues if we were in C but we are in Rust so it's just a long string",
        "",
        " ",
        "\t\n",
        "अआइईउऊ",
        "🛒🛒🛒",
        "under $",
        "item number",
        "add add add add add",
    ];

    for lang in [Language::English, Language::Hindi] {
        for text in garbage {
            let cmd = interpret(text, lang);
            // Always exactly one of the five actions, never a crash
            assert!(matches!(
                cmd.action,
                Action::Add
                    | Action::Remove
                    | Action::Search
                    | Action::Inventory
                    | Action::Category
            ));
            assert!(cmd.quantity > 0.0);
            // removal annotations are mutually exclusive
            assert!(!(cmd.remove_index.is_some() && cmd.remove_last));
        }
    }
}

#[test]
fn test_worst_case_command_shape() {
    let cmd = interpret("", Language::English);
    assert_eq!(cmd.action, Action::Add);
    assert_eq!(cmd.item, "");
    assert_eq!(cmd.quantity, 1.0);
    assert_eq!(cmd.unit, None);
    assert_eq!(cmd.max_price, None);
}

#[test]
fn test_normalize_idempotent_over_odd_inputs() {
    let inputs = [
        "Hello, WORLD!!",
        "दो बोतल पानी",
        "  mixed   spacing\tand\ttabs ",
        "émojis 🛒 and àccents",
        "",
    ];
    for s in inputs {
        let once = normalize(s);
        assert_eq!(normalize(&once), once);
    }
}

#[test]
fn test_similarity_bounds() {
    let phrases = ["milk", "orange juice", "fresh green salad", ""];
    for a in phrases {
        for b in phrases {
            let score = similarity(a, b);
            assert!((0.0..=1.0).contains(&score));
        }
        if !a.is_empty() {
            assert_eq!(similarity(a, a), 1.0);
        }
    }
    assert_eq!(similarity("milk", "bread"), 0.0);
}
