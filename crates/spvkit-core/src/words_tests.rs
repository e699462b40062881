use crate::words::{pack_str, push_str, str_word_count, unpack_str};

#[test]
fn word_count_includes_terminator() {
    assert_eq!(str_word_count(""), 1);
    assert_eq!(str_word_count("a"), 1);
    assert_eq!(str_word_count("abc"), 1);
    assert_eq!(str_word_count("abcd"), 2);
    assert_eq!(str_word_count("abcdefg"), 2);
    assert_eq!(str_word_count("abcdefgh"), 3);
}

#[test]
fn pack_main() {
    // "main" = 6d 61 69 6e, low byte first, then a zero word for the NUL
    assert_eq!(pack_str("main"), vec![0x6e69_616d, 0]);
}

#[test]
fn pack_pads_final_word() {
    assert_eq!(pack_str("ab"), vec![0x0000_6261]);
    assert_eq!(pack_str("hello"), vec![0x6c6c_6568, 0x0000_006f]);
}

#[test]
fn pack_empty_is_single_zero_word() {
    assert_eq!(pack_str(""), vec![0]);
}

#[test]
fn push_appends_after_existing_words() {
    let mut out = vec![7, 8];
    push_str(&mut out, "xy");

    assert_eq!(out, vec![7, 8, 0x0000_7978]);
}

#[test]
fn unpack_reports_words_consumed() {
    let mut words = pack_str("compute_main");
    words.push(99); // trailing operand after the string

    let (text, used) = unpack_str(&words).unwrap();
    assert_eq!(text, "compute_main");
    assert_eq!(used, str_word_count("compute_main"));
    assert_eq!(words[used], 99);
}

#[test]
fn unpack_without_terminator() {
    assert_eq!(unpack_str(&[0x6464_6464]), None);
    assert_eq!(unpack_str(&[]), None);
}
