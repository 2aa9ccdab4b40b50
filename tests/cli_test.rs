use clap::Parser;
use new_component::cli::Args;
use new_component::config::{Configuration, Lang};
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("new-component")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_basic_args() {
    let args = make_args(&["Button"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.component_name.as_deref(), Some("Button"));
    assert_eq!(parsed.lang, None);
    assert_eq!(parsed.dir, None);
    assert!(!parsed.barrel);
    assert!(!parsed.verbose);
}

#[test]
fn test_all_flags() {
    let args = make_args(&["--lang", "js", "--dir", "app/ui", "--barrel", "--verbose", "Card"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.component_name.as_deref(), Some("Card"));
    assert_eq!(parsed.lang, Some(Lang::Js));
    assert_eq!(parsed.dir, Some(PathBuf::from("app/ui")));
    assert!(parsed.barrel);
    assert!(parsed.verbose);
}

#[test]
fn test_short_flags() {
    let args = make_args(&["-l", "ts", "-d", "lib", "-v", "Card"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.lang, Some(Lang::Ts));
    assert_eq!(parsed.dir, Some(PathBuf::from("lib")));
    assert!(parsed.verbose);
}

#[test]
fn test_lang_is_case_insensitive() {
    let parsed = Args::try_parse_from(make_args(&["-l", "TS", "Card"])).unwrap();
    assert_eq!(parsed.lang, Some(Lang::Ts));

    let parsed = Args::try_parse_from(make_args(&["--lang", "Js", "Card"])).unwrap();
    assert_eq!(parsed.lang, Some(Lang::Js));
}

#[test]
fn test_unsupported_lang() {
    assert!(Args::try_parse_from(make_args(&["-l", "python", "Card"])).is_err());
    assert!(Args::try_parse_from(make_args(&["-l", "tsx", "Card"])).is_err());
}

#[test]
fn test_missing_name_is_left_to_the_pipeline() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();
    assert_eq!(parsed.component_name, None);

    let request = parsed.into_request(&Configuration::default());
    assert!(request.name.is_empty());
}

#[test]
fn test_too_many_args() {
    assert!(Args::try_parse_from(make_args(&["Card", "extra"])).is_err());
}

#[test]
fn test_into_request_prefers_command_line() {
    let config = Configuration {
        lang: Lang::Js,
        dir: PathBuf::from("from/config"),
        prettier_config: None,
    };

    let request = Args::try_parse_from(make_args(&["Card"])).unwrap().into_request(&config);
    assert_eq!(request.lang, Lang::Js);
    assert_eq!(request.dir, PathBuf::from("from/config"));
    assert!(!request.use_barrel);

    let request = Args::try_parse_from(make_args(&["-l", "ts", "-d", "cli", "--barrel", "Card"]))
        .unwrap()
        .into_request(&config);
    assert_eq!(request.name, "Card");
    assert_eq!(request.lang, Lang::Ts);
    assert_eq!(request.dir, PathBuf::from("cli"));
    assert!(request.use_barrel);
}
