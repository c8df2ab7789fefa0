use super::{engine, tok};

#[test]
fn explain_reports_rule_per_token() {
    let tokens = vec![
        tok("do", "VBP", "").at(0),
        tok("n't", "RB", " ").at(1),
        tok("rekiss", "VB", " ").at(2),
        tok("the", "DT", " ").at(3),
        tok("blick", "NN", " ").at(4),
        tok("42", "CD", "").at(5),
    ];
    let explained = engine().explain_sentence(&tokens);
    let rules: Vec<&str> = explained.iter().map(|e| e.rule).collect();
    assert_eq!(
        rules,
        vec![
            "contraction-start",
            "contraction-end",
            "constructed",
            "lexicon",
            "phonetic",
            "phonetic"
        ]
    );
    assert_eq!(explained[0].whitespace, "");
    assert_eq!(explained[2].body, "𐑮𐑰𐑒𐑦𐑕[c]");
}

#[test]
fn explain_matches_convert() {
    let engine = engine();
    let tokens = vec![
        tok("cat", "NN", "").at(0),
        tok("'s", "POS", " ").at(1),
        tok("dogs", "NNS", "").at(2),
    ];
    let joined: String = engine
        .explain_sentence(&tokens)
        .iter()
        .map(|e| format!("{}{}", e.body, e.whitespace))
        .collect();
    assert_eq!(joined, engine.convert_sentence(&tokens));
}

#[test]
fn explain_serializes() {
    let explained = engine().explain_sentence(&[tok("the", "DT", "")]);
    let json = serde_json::to_string(&explained).unwrap();
    assert!(json.contains("\"rule\":\"lexicon\""));
    assert!(json.contains("\"body\":\"𐑞\""));
}
