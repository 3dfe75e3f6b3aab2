use orbifold_notation::classify::wallpaper::lookup;
use orbifold_notation::prelude::*;

#[test]
fn classifies_known_symbols() {
    assert_eq!(Symbol::parse("*632").unwrap().wallpaper_group().unwrap(), "p6m");
    assert_eq!(Symbol::parse("*x").unwrap().wallpaper_group().unwrap(), "cm");
    assert_eq!(Symbol::parse("333").unwrap().wallpaper_group().unwrap(), "p3");
    assert_eq!(Symbol::parse("4*2").unwrap().wallpaper_group().unwrap(), "p4g");
    assert_eq!(Symbol::parse("o").unwrap().wallpaper_group().unwrap(), "p1");
}

#[test]
fn every_table_entry_round_trips_through_symbol() {
    for (key, group) in WALLPAPER_GROUPS {
        let s = Symbol::parse(key).unwrap();
        assert!(s.is_wallpaper_group());
        assert_eq!(s.wallpaper_group().unwrap(), group);
        assert_eq!(lookup(key), Some(group));
    }
}

#[test]
fn spaced_spelling_is_not_recognized() {
    let s = Symbol::parse("* 632").unwrap();
    assert!(!s.is_wallpaper_group());
    assert_eq!(
        s.wallpaper_group().unwrap_err(),
        OrbifoldError::UnrecognizedSymbol("* 632".into())
    );
}

#[test]
fn reordered_tokens_are_not_recognized() {
    // reversed spelling of a table key
    let s = Symbol::parse("*236").unwrap();
    let err = s.wallpaper_group().unwrap_err();
    assert!(!err.is_parse_error());
    assert_eq!(
        err.to_string(),
        "Orbifold symbol not recognized as a wallpaper group: *236"
    );
}

#[test]
fn failed_classification_leaves_characteristic_available() {
    let s = Symbol::parse("235").unwrap();
    assert!(s.wallpaper_group().is_err());
    assert!(s.euler_characteristic() > 0.0);
}

#[test]
fn classification_from_other_threads() {
    let symbols: Vec<Symbol> = ["*632", "xx", "22*"]
        .into_iter()
        .map(|s| Symbol::parse(s).unwrap())
        .collect();
    let handles: Vec<_> = symbols
        .into_iter()
        .map(|s| std::thread::spawn(move || s.wallpaper_group()))
        .collect();
    let groups: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().unwrap().unwrap())
        .collect();
    assert_eq!(groups, ["p6m", "pg", "pgg"]);
}
