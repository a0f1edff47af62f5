mod helpers;

#[test]
fn fixtures_are_present_and_readable() {
    let en = helpers::read_fixture("sales_en.csv");
    let zh = helpers::read_fixture("sales_zh.csv");

    assert!(en.starts_with(b"Order ID,Content ID"));
    assert!(zh.starts_with(&[0xEF, 0xBB, 0xBF]));
    assert_ne!(en, zh);
}
