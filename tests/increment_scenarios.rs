// tests/increment_scenarios.rs

use clipinc::filename::{
    count_leading_zeros, find_last_number, increment, increment_digits, increment_last_number,
    increment_with, remove_extensions, remove_last_extension, IncrementOutcome,
};
use clipinc::types::ExtensionMode;

#[test]
fn strips_every_extension_before_incrementing() {
    assert_eq!(remove_extensions("nav-style.min.css"), "nav-style");
    assert_eq!(increment("nav-style.min.css"), "nav-style (1)");
}

#[test]
fn increments_plain_and_bracketed_numbers() {
    assert_eq!(increment("Cool Car 23.jpg"), "Cool Car 24");
    assert_eq!(increment("cute cat (8).png"), "cute cat (9)");
    assert_eq!(increment("Report (3).pdf"), "Report (4)");
}

#[test]
fn keeps_zero_padding_when_width_does_not_grow() {
    assert_eq!(increment("01.json"), "02");
    assert_eq!(increment("some_song005.mp3"), "some_song006");
}

#[test]
fn drops_one_leading_zero_when_width_grows() {
    assert_eq!(increment("Cool Car (09).jpg"), "Cool Car (10)");
    assert_eq!(increment("vb~rr~0099.jpg"), "vb~rr~0100");
    assert_eq!(increment("take0009"), "take0010");
}

#[test]
fn all_zero_runs_lose_one_zero() {
    assert_eq!(increment("00.xml"), "01");
    assert_eq!(increment("000.ext.test"), "001");
}

#[test]
fn lone_zero_is_not_padding() {
    assert_eq!(count_leading_zeros("0"), 0);
    assert_eq!(increment("0.png"), "1");
}

#[test]
fn names_without_digits_get_suffix() {
    assert_eq!(increment("file.txt"), "file (1)");
    assert_eq!(increment("README"), "README (1)");
    assert_eq!(increment(""), " (1)");
}

#[test]
fn dotfiles_keep_their_leading_dot() {
    assert_eq!(remove_extensions(".gitignore"), ".gitignore");
    assert_eq!(remove_extensions(".gitignore.temp.old"), ".gitignore");
    assert_eq!(increment(".env2.bak"), ".env3");
}

#[test]
fn only_the_last_number_changes() {
    assert_eq!(increment("2024-05-01 scan 7.png"), "2024-05-01 scan 8");
    assert_eq!(increment("v1 build 99 final.zip"), "v1 build 100 final");
}

#[test]
fn huge_numbers_do_not_overflow() {
    assert_eq!(
        increment("big 99999999999999999999999999999999.bin"),
        "big 100000000000000000000000000000000"
    );
    assert_eq!(increment("x2147483647"), "x2147483648");
    assert_eq!(increment("x9223372036854775807"), "x9223372036854775808");
}

#[test]
fn last_number_reports_offsets_and_padding() {
    let number = find_last_number("a12b0034c").unwrap();
    assert_eq!(number.digits, "0034");
    assert_eq!(number.leading_zeros, 2);
    assert_eq!((number.start, number.end), (4, 8));
    assert_eq!(number.unpadded(), "34");

    assert!(find_last_number("no digits").is_none());
}

#[test]
fn non_ascii_digits_are_not_numbers() {
    // Arabic-Indic digits are `\d` in Unicode regexes, but not numbers here.
    assert_eq!(increment("page ٣"), "page ٣ (1)");
}

#[test]
fn digit_increment_carries() {
    assert_eq!(increment_digits("0").as_deref(), Some("1"));
    assert_eq!(increment_digits("199").as_deref(), Some("200"));
    assert_eq!(increment_digits("999").as_deref(), Some("1000"));
    assert_eq!(increment_digits(""), None);
    assert_eq!(increment_digits("12a"), None);
}

#[test]
fn outcome_records_which_rule_applied() {
    assert_eq!(
        increment_last_number("shot 4"),
        IncrementOutcome::Incremented("shot 5".to_string())
    );
    let suffixed = increment_last_number("shot");
    assert!(suffixed.is_suffixed());
    assert_eq!(suffixed.as_str(), "shot (1)");
}

#[test]
fn last_extension_mode_keeps_inner_extensions() {
    assert_eq!(remove_last_extension("a.min.css"), "a.min");
    assert_eq!(remove_last_extension(".gitignore"), ".gitignore");
    assert_eq!(remove_last_extension("plain"), "plain");
    assert_eq!(
        increment_with("backup 3.tar.gz", ExtensionMode::Last).into_string(),
        "backup 4.tar"
    );
    assert_eq!(
        increment_with("backup 3.tar.gz", ExtensionMode::All).into_string(),
        "backup 4"
    );
}

#[test]
fn increment_is_deterministic() {
    for name in ["Cool Car (09).jpg", "file.txt", "00.xml", ".gitignore"] {
        assert_eq!(increment(name), increment(name));
    }
}
