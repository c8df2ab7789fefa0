use crate::lexicon::{Lexicon, UserLexicon};

#[test]
fn register_and_lookup() {
    let lex = UserLexicon::new();
    assert!(lex.register("Zorblax", None, "𐑟𐑹𐑚𐑤𐑨𐑒𐑕"));
    let entries = lex.lookup("zorblax");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].tag, "0");
    assert_eq!(entries[0].script, "𐑟𐑹𐑚𐑤𐑨𐑒𐑕");
}

#[test]
fn register_duplicate() {
    let lex = UserLexicon::new();
    assert!(lex.register("tomato", Some("NN"), "𐑑𐑩𐑥𐑭𐑑𐑴"));
    assert!(!lex.register("tomato", Some("NN"), "𐑑𐑩𐑥𐑭𐑑𐑴"));
    assert!(lex.register("tomato", Some("NNS"), "𐑑𐑩𐑥𐑭𐑑𐑴𐑟"));
    assert_eq!(lex.lookup("tomato").len(), 2);
}

#[test]
fn unregister_last_entry_removes_word() {
    let lex = UserLexicon::new();
    lex.register("tomato", None, "𐑑𐑩𐑥𐑭𐑑𐑴");
    assert!(lex.unregister("Tomato", "𐑑𐑩𐑥𐑭𐑑𐑴"));
    assert!(lex.lookup("tomato").is_empty());
    assert!(lex.list().is_empty());
}

#[test]
fn unregister_not_found() {
    let lex = UserLexicon::new();
    assert!(!lex.unregister("tomato", "𐑑𐑩𐑥𐑱𐑑𐑴"));
}

#[test]
fn list_sorted_by_word() {
    let lex = UserLexicon::new();
    lex.register("zeta", None, "𐑟𐑰𐑑𐑩");
    lex.register("alpha", None, "𐑨𐑤𐑓𐑩");
    let list = lex.list();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].0, "alpha");
    assert_eq!(list[1].0, "zeta");
}

#[test]
fn predict_by_prefix() {
    let lex = UserLexicon::new();
    lex.register("shavian", None, "𐑖𐑱𐑝𐑾𐑯");
    lex.register("shaw", None, "𐑖𐑷");
    lex.register("quikscript", None, "𐑒𐑢𐑦𐑒𐑕𐑒𐑮𐑦𐑐𐑑");
    let results = lex.predict("sha", 10);
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].word, "shavian");
}

#[test]
fn roundtrip_bytes() {
    let lex = UserLexicon::new();
    lex.register("tomato", Some("NN"), "𐑑𐑩𐑥𐑭𐑑𐑴");
    lex.register("tomato", Some("NNS"), "𐑑𐑩𐑥𐑭𐑑𐑴𐑟");
    let bytes = lex.to_bytes().unwrap();
    let lex2 = UserLexicon::from_bytes(&bytes).unwrap();
    assert_eq!(lex2.lookup("tomato"), lex.lookup("tomato"));
}

#[test]
fn from_bytes_rejects_bad_magic() {
    assert!(UserLexicon::from_bytes(b"XXXX\x01").is_err());
    assert!(UserLexicon::from_bytes(b"SHU").is_err());
}

#[test]
fn save_and_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("user.shul");
    let lex = UserLexicon::new();
    lex.register("shaw", None, "𐑖𐑷");
    lex.save(&path).unwrap();
    let opened = UserLexicon::open(&path).unwrap();
    assert_eq!(opened.lookup("shaw")[0].script, "𐑖𐑷");
}

#[test]
fn open_missing_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let lex = UserLexicon::open(&dir.path().join("none.shul")).unwrap();
    assert!(lex.list().is_empty());
}
