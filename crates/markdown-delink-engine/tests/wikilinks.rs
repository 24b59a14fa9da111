use markdown_delink_engine::{WikilinkOptions, remove_wikilinks};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn keep_alias(keep_alias: bool) -> WikilinkOptions {
    WikilinkOptions {
        keep_alias,
        ..Default::default()
    }
}

#[rstest]
#[case("[[example.md]]", true, "example.md")]
#[case("[[example.md|alias]]", true, "alias")]
#[case("[[example.md|alias]]", false, "example.md")]
#[case("![[example.png]]", true, "")]
#[case("![[example.png|300]]", true, "")]
#[case(
    "[[text with \\[escaped\\] brackets]]",
    true,
    "text with \\[escaped\\] brackets"
)]
#[case("[[text with \\[escaped\\] brackets|alias]]", true, "alias")]
#[case(
    "[[text with \\[escaped\\] brackets|alias]]",
    false,
    "text with \\[escaped\\] brackets"
)]
#[case("This is just plain text", true, "This is just plain text")]
#[case("Check out [[page1]] and [[page2|alias]]", true, "Check out page1 and alias")]
#[case("Check out [[page1]] and [[page2|alias]]", false, "Check out page1 and page2")]
#[case(
    "[[complex/path/file.md|Simple Name]] [link](https://example.com)",
    true,
    "Simple Name [link](https://example.com)"
)]
#[case(
    "[[complex/path/file.md|Simple Name]] [link](https://example.com)",
    false,
    "complex/path/file.md [link](https://example.com)"
)]
#[case(
    "[[page with [brackets] in name]] and [normal link](https://site.com)",
    true,
    "page with [brackets] in name and [normal link](https://site.com)"
)]
#[case("[[]] [link](url) ![[]] [[valid|alias]]", true, " [link](url)  alias")]
#[case("[[]] [link](url) ![[]] [[valid|alias]]", false, " [link](url)  valid")]
fn removes_wikilinks(#[case] input: &str, #[case] alias: bool, #[case] expected: &str) {
    assert_eq!(remove_wikilinks(input, &keep_alias(alias)), expected);
}

#[rstest]
#[case("[Google](https://google.com)", "[Google](https://google.com)")]
#[case(
    "See [external link](https://example.com) and [[wiki page]] for info",
    "See [external link](https://example.com) and wiki page for info"
)]
#[case(
    "[[wiki page]][hyperlink](https://example.com)",
    "wiki page[hyperlink](https://example.com)"
)]
#[case(
    "![[obsidian-image.png]] and ![markdown image](image.jpg)",
    " and ![markdown image](image.jpg)"
)]
#[case(
    "Line 1: [hyperlink](https://example.com)\nLine 2: [[wiki link]]\nLine 3: ![image](pic.jpg)",
    "Line 1: [hyperlink](https://example.com)\nLine 2: wiki link\nLine 3: ![image](pic.jpg)"
)]
fn hyperlinks_are_ignored(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(remove_wikilinks(input, &keep_alias(true)), expected);
}

#[test]
fn whitelist_matches_path_exactly() {
    let options = WikilinkOptions {
        whitelist: vec!["Index".into()],
        ..Default::default()
    };
    assert_eq!(
        remove_wikilinks("[[index]] [[index-old]] [[INDEX|home]]", &options),
        "[[index]] index-old [[INDEX|home]]"
    );
}

#[test]
fn whitelist_keys_off_path_not_alias() {
    let options = WikilinkOptions {
        whitelist: vec!["home".into()],
        ..Default::default()
    };
    assert_eq!(remove_wikilinks("[[index|home]]", &options), "home");
}

#[test]
fn whitelist_never_protects_embeds() {
    let options = WikilinkOptions {
        whitelist: vec!["example.png".into()],
        ..Default::default()
    };
    assert_eq!(remove_wikilinks("![[example.png|300]]", &options), "");
    assert_eq!(remove_wikilinks("[[example.png]]", &options), "[[example.png]]");
}

#[test]
fn blacklist_mode_removes_exact_paths_only() {
    let options = WikilinkOptions {
        blacklist_mode: true,
        blacklist: vec!["draft".into()],
        ..Default::default()
    };
    assert_eq!(
        remove_wikilinks("[[draft]] and [[draft-note]]", &options),
        "draft and [[draft-note]]"
    );
}

#[test]
fn blacklist_mode_uses_alias_rule() {
    let blacklist = vec!["Draft".to_string()];
    let keep = WikilinkOptions {
        blacklist_mode: true,
        blacklist: blacklist.clone(),
        ..Default::default()
    };
    let drop = WikilinkOptions {
        keep_alias: false,
        blacklist_mode: true,
        blacklist,
        ..Default::default()
    };
    assert_eq!(remove_wikilinks("[[draft|WIP]]", &keep), "WIP");
    assert_eq!(remove_wikilinks("[[draft|WIP]]", &drop), "draft");
}

#[test]
fn blacklist_mode_with_empty_blacklist_keeps_wikilinks() {
    let options = WikilinkOptions {
        blacklist_mode: true,
        ..Default::default()
    };
    assert_eq!(remove_wikilinks("[[a]] [[b|c]]", &options), "[[a]] [[b|c]]");
}

#[test]
fn blacklist_mode_still_strips_embeds() {
    let options = WikilinkOptions {
        blacklist_mode: true,
        blacklist: vec!["draft".into()],
        ..Default::default()
    };
    assert_eq!(remove_wikilinks("![[photo.jpg]] [[keep]]", &options), " [[keep]]");
}

#[test]
fn list_entries_keep_surrounding_spaces() {
    let blacklist = WikilinkOptions {
        blacklist_mode: true,
        blacklist: vec![" draft".into()],
        ..Default::default()
    };
    assert_eq!(
        remove_wikilinks("[[ draft]] [[draft]]", &blacklist),
        " draft [[draft]]"
    );

    let whitelist = WikilinkOptions {
        whitelist: vec!["index ".into()],
        ..Default::default()
    };
    assert_eq!(
        remove_wikilinks("[[Index ]] [[Index]]", &whitelist),
        "[[Index ]] Index"
    );
}
