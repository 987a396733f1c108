//! Behavioural tests for `format_output_summary`.

use rstest::rstest;
use summary_formatter::format_output_summary;
use summary_parser::parse_output_summary;
use tracing_test::traced_test;

#[rstest]
#[case::asterisk("*現病歴*: 高血圧症", "現病歴:高血圧症")]
#[case::fullwidth_asterisk("＊備考＊：特記事項なし", "備考：特記事項なし")]
#[case::hash("# 退院時状況: 軽快退院", "退院時状況:軽快退院")]
#[case::halfwidth_space("備考 : 定期フォローアップ必要", "備考:定期フォローアップ必要")]
#[case::combined("# *退院時状況* : 軽快退院", "退院時状況:軽快退院")]
#[case::repeated_markers("** # 退院時状況 ** : 軽快退院", "退院時状況:軽快退院")]
#[case::empty("", "")]
#[case::markers_only("# * ＊  ", "")]
#[case::newlines("入院経過: 順調に回復\n備考: なし", "入院経過:順調に回復\n備考:なし")]
#[case::fullwidth_kept("備考：特記事項なし", "備考：特記事項なし")]
fn test_format_output_summary(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(format_output_summary(input), expected);
}

#[test]
fn test_format_is_idempotent() {
    let once = format_output_summary("## *入院経過* : 順調\n* 退院");
    assert_eq!(format_output_summary(&once), once);
}

#[test]
fn test_formatted_text_still_parses() {
    let raw = "# **入院経過** : 第1病日より治療開始\n抗生剤投与\n＊備考＊：特記事項なし";
    let summary = parse_output_summary(&format_output_summary(raw));

    assert_eq!(summary.get("入院経過"), Some("第1病日より治療開始\n抗生剤投与"));
    assert_eq!(summary.get("備考"), Some("特記事項なし"));
}

#[test]
#[traced_test]
fn test_stripping_is_logged() {
    format_output_summary("# 備考: なし");
    assert!(logs_contain("Stripped decorative markup"));
}
