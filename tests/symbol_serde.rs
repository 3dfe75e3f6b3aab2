use orbifold_notation::prelude::*;

#[test]
fn symbol_serializes_as_its_spelling() {
    let s = Symbol::parse("2*22").unwrap();
    let json = serde_json::to_string(&s).unwrap();
    assert_eq!(json, r#""2*22""#);

    let back: Symbol = serde_json::from_str(&json).unwrap();
    assert_eq!(back, s);
    assert_eq!(back.wallpaper_group().unwrap(), "pmg");
}

#[test]
fn deserialization_reparses() {
    let s: Symbol = serde_json::from_str(r#""x 3""#).unwrap();
    assert_eq!(s.crosscap_count(), 1);
    assert_eq!(s.components().len(), 2);

    let err = serde_json::from_str::<Symbol>(r#""*6?2""#).unwrap_err();
    assert!(err.to_string().contains("Unsupported character"));
}

#[test]
fn symbols_nest_in_other_structures() {
    let list: Vec<Symbol> = serde_json::from_str(r#"["o", "xx", "*"]"#).unwrap();
    let groups: Vec<_> = list.iter().map(|s| s.wallpaper_group().unwrap()).collect();
    assert_eq!(groups, ["p1", "pg", "pm"]);
}
