use pretty_assertions::assert_eq;

use super::{Item, ItemKind};
use crate::{CharSet, ItemFlags};

fn literal(text: &str) -> Item<u8> {
    Item::new(ItemKind::Literal(text.as_bytes().to_vec()))
}

#[test]
fn bounds_follow_repetition_flags() {
    let mut item = literal("a");
    assert_eq!(item.bounds(), (1, Some(1)));

    item.flags = ItemFlags::STAR;
    assert_eq!(item.bounds(), (0, None));
    item.flags = ItemFlags::PLUS | ItemFlags::PREFIX;
    assert_eq!(item.bounds(), (1, None));
    item.flags = ItemFlags::QUESTION;
    assert_eq!(item.bounds(), (0, Some(1)));

    item.flags = ItemFlags::FIXED_COUNT;
    item.count = Some(3);
    assert_eq!(item.bounds(), (3, Some(3)));
}

#[test]
fn only_groups_have_children() {
    let group = Item::new(ItemKind::Group(vec![literal("a"), literal("b")]));
    assert_eq!(group.children().len(), 2);
    assert!(literal("a").children().is_empty());
}

#[test]
fn nonterminal_carries_its_flag() {
    let item = Item::<u8>::nonterminal("name".to_string());
    assert!(item.is_nonterminal());
    assert_eq!(item.to_string(), "'name'");
}

#[test]
fn display_escapes_delimiters_and_control_codes() {
    let mut item = literal("a\"\\\n\u{1}");
    item.flags = ItemFlags::FIXED_COUNT | ItemFlags::REVERSE;
    item.count = Some(2);
    assert_eq!(item.to_string(), r#""a\x22\x5C\n\x01"{2}r"#);
}

#[test]
fn display_folds_class_ranges() {
    let mut set = CharSet::new();
    set.insert_range(u32::from(b'0'), u32::from(b'9'));
    set.insert(u32::from(b'x'));
    set.insert(u32::from(b'y'));
    set.insert(u32::from(b']'));
    set.insert(0xFF);
    let item = Item::<u8>::new(ItemKind::CharClass(set));
    assert_eq!(item.to_string(), r"[0-9\x5Dxy\xFF]");
}

#[test]
fn narrow_codes_above_ascii_are_escaped() {
    let item = Item::new(ItemKind::Literal(vec![0xD0u8, 0xBC]));
    assert_eq!(item.to_string(), r#""\xD0\xBC""#);
    let wide = Item::new(ItemKind::Literal(vec!['м']));
    assert_eq!(wide.to_string(), "\"м\"");
}
