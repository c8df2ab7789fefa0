const SETTINGS: &str = "src/default_settings.toml";
const IPA_TABLE: &str = "src/phoneme/default_ipa.toml";

fn main() {
    let settings = parse(SETTINGS, include_str!("src/default_settings.toml"));
    for section in ["markers", "entities", "fallback"] {
        require_table(SETTINGS, &settings, section);
    }
    let ipa = parse(IPA_TABLE, include_str!("src/phoneme/default_ipa.toml"));
    require_table(IPA_TABLE, &ipa, "mappings");
}

fn parse(path: &str, content: &str) -> toml::Table {
    println!("cargo:rerun-if-changed={path}");
    content
        .parse()
        .unwrap_or_else(|e| panic!("{path} contains invalid TOML: {e}"))
}

fn require_table(path: &str, doc: &toml::Table, key: &str) {
    if !doc.get(key).is_some_and(toml::Value::is_table) {
        panic!("{path} is missing the [{key}] table");
    }
}
