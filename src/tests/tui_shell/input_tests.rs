use super::*;

use crossterm::event::KeyCode;

#[test]
fn editing_handles_multibyte_characters() {
    let mut input = Input::default();
    for c in "Pão".chars() {
        input.insert_char(c);
    }
    input.move_left();
    input.backspace();
    assert_eq!(input.buf, "Po");
    assert_eq!(input.cursor, 1);

    input.insert_char('ã');
    assert_eq!(input.buf, "Pão");
    input.end();
    input.delete();
    assert_eq!(input.buf, "Pão");
}

#[test]
fn masked_hides_every_character() {
    let mut input = Input::default();
    input.set("senha".to_string());
    assert_eq!(input.masked(), "•••••");
    assert_eq!(input.cursor, 5);
}

#[test]
fn handle_key_reports_unhandled_keys() {
    let mut input = Input::default();
    assert!(input.handle_key(KeyCode::Char('a')));
    assert!(input.handle_key(KeyCode::Home));
    assert!(input.handle_key(KeyCode::Char('b')));
    assert_eq!(input.buf, "ba");
    assert!(!input.handle_key(KeyCode::Enter));
    input.clear();
    assert!(input.buf.is_empty());
}
