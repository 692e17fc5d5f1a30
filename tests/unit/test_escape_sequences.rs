//! Unit tests for the escape sequence driver

use blockclock::{Color, SharedBuffer, TerminalDriver};

fn capture(f: impl FnOnce(&mut TerminalDriver<SharedBuffer>)) -> String {
    let buffer = SharedBuffer::new();
    let mut driver = TerminalDriver::new(buffer.clone());
    f(&mut driver);
    buffer.to_string_lossy()
}

#[cfg(test)]
mod escape_sequence_tests {
    use super::*;

    #[test]
    fn test_clear_screen() {
        assert_eq!(capture(|d| d.clear_screen()), "\x1b[2J");
    }

    #[test]
    fn test_move_cursor() {
        assert_eq!(capture(|d| d.move_cursor(1, 1)), "\x1b[1;1H");
        assert_eq!(capture(|d| d.move_cursor(24, 80)), "\x1b[24;80H");
    }

    #[test]
    fn test_color_table() {
        let expected = [
            (Color::Red, "\x1b[31m"),
            (Color::Green, "\x1b[32m"),
            (Color::Blue, "\x1b[34m"),
            (Color::Yellow, "\x1b[33m"),
        ];
        for (color, code) in expected {
            assert_eq!(capture(|d| d.set_color(color)), code);
            assert_eq!(capture(|d| d.set_color_id(color.id())), code);
        }
    }

    #[test]
    fn test_reset_color() {
        assert_eq!(capture(|d| d.reset_color()), "\x1b[0m");
    }

    #[test]
    fn test_unrecognized_identity_changes_nothing() {
        let base = capture(|d| {
            d.move_cursor(5, 5);
            d.write_glyph('■');
        });

        for id in [-3, 0, 5, 31, i32::MAX] {
            let with_unknown = capture(|d| {
                d.move_cursor(5, 5);
                d.set_color_id(id);
                d.write_glyph('■');
            });
            assert_eq!(with_unknown, base, "identity {} emitted output", id);
        }
    }

    #[test]
    fn test_clock_text_is_literal() {
        assert_eq!(
            capture(|d| {
                d.move_cursor(24, 1);
                d.write_text("25:00:00");
            }),
            "\x1b[24;1H25:00:00"
        );
    }
}
