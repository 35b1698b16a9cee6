//! # Rendering Module
//!
//! Builds the fixed-width table as a `String`; the command handlers print
//! it. Column widths are measured in terminal cells (unicode-width), so
//! Cyrillic or CJK names keep the pipes aligned. Values longer than their
//! column are printed in full and push the row out.

use colored::Colorize;
use humans::api::{CmdMessage, MessageLevel};
use humans::model::DisplayHuman;
use unicode_width::UnicodeWidthStr;

pub const INDEX_WIDTH: usize = 4;
pub const NAME_WIDTH: usize = 30;
pub const SURNAME_WIDTH: usize = 14;
pub const GIVEN_NAME_WIDTH: usize = 15;
pub const ZODIAC_WIDTH: usize = 20;
pub const DATE_WIDTH: usize = 15;

pub const EMPTY_MESSAGE: &str = "List of humans is empty.";

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Success => println!("{}", message.content.green()),
        }
    }
}

/// Renders humans as a table, or the empty-list line when there are none.
pub fn render_human_table(humans: &[DisplayHuman]) -> String {
    if humans.is_empty() {
        return format!("{}\n", EMPTY_MESSAGE);
    }

    let line = separator();
    let mut out = String::new();

    out.push_str(&line);
    out.push('\n');
    out.push_str(&format!(
        "| {} | {} | {} | {} |\n",
        center("No", INDEX_WIDTH),
        center("Surname and name", NAME_WIDTH),
        center("Zodiac sign", ZODIAC_WIDTH),
        center("Birth date", DATE_WIDTH),
    ));
    out.push_str(&line);
    out.push('\n');

    for dh in humans {
        out.push_str(&format!(
            "| {} | {} {} | {} | {} |\n",
            center(&dh.index.to_string(), INDEX_WIDTH),
            pad_right(&dh.human.surname, SURNAME_WIDTH),
            pad_right(&dh.human.name, GIVEN_NAME_WIDTH),
            pad_right(&dh.human.zodiac, ZODIAC_WIDTH),
            pad_right(&dh.human.date, DATE_WIDTH),
        ));
    }

    out.push_str(&line);
    out.push('\n');
    out
}

fn separator() -> String {
    format!(
        "+-{}-+-{}-+-{}-+-{}-+",
        "-".repeat(INDEX_WIDTH),
        "-".repeat(NAME_WIDTH),
        "-".repeat(ZODIAC_WIDTH),
        "-".repeat(DATE_WIDTH),
    )
}

fn pad_right(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

// Odd leftover space goes to the right.
fn center(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    let left = padding / 2;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(padding - left))
}

#[cfg(test)]
mod tests {
    use super::*;
    use humans::model::{indexed, Human};

    const SEPARATOR: &str =
        "+------+--------------------------------+----------------------+-----------------+";

    #[test]
    fn empty_list_renders_only_the_message() {
        assert_eq!(render_human_table(&[]), "List of humans is empty.\n");
    }

    #[test]
    fn renders_single_row_table() {
        let listed = indexed(vec![Human::new("Ivan", "Ivanov", "Leo", "1990-01-01")]);
        let expected = [
            SEPARATOR,
            "|  No  |        Surname and name        |     Zodiac sign      |   Birth date    |",
            SEPARATOR,
            "|  1   | Ivanov         Ivan            | Leo                  | 1990-01-01      |",
            SEPARATOR,
            "",
        ]
        .join("\n");
        assert_eq!(render_human_table(&listed), expected);
    }

    #[test]
    fn rows_are_numbered_sequentially() {
        let listed = indexed(vec![
            Human::new("A", "Aa", "Leo", ""),
            Human::new("B", "Bb", "Leo", ""),
            Human::new("C", "Cc", "Leo", ""),
        ]);
        let output = render_human_table(&listed);
        let rows: Vec<&str> = output.lines().skip(3).take(3).collect();
        assert!(rows[0].starts_with("|  1   |"));
        assert!(rows[1].starts_with("|  2   |"));
        assert!(rows[2].starts_with("|  3   |"));
    }

    #[test]
    fn wide_characters_keep_columns_aligned() {
        let listed = indexed(vec![
            Human::new("Пётр", "Петров", "Дева", "1985-09-01"),
            Human::new("明", "王", "狮子座", "1990-08-01"),
        ]);
        let output = render_human_table(&listed);
        let widths: Vec<usize> = output.lines().map(|l| l.width()).collect();
        assert!(widths.iter().all(|w| *w == SEPARATOR.len()), "{:?}", widths);
    }

    #[test]
    fn missing_fields_render_as_blank_cells() {
        let listed = indexed(vec![Human::new("", "Solo", "", "")]);
        let output = render_human_table(&listed);
        let row = output.lines().nth(3).unwrap();
        assert_eq!(
            row,
            "|  1   | Solo                           |                      |                 |"
        );
    }

    #[test]
    fn center_puts_odd_space_on_the_right() {
        assert_eq!(center("1", 4), " 1  ");
        assert_eq!(center("No", 4), " No ");
    }

    #[test]
    fn pad_right_never_truncates() {
        assert_eq!(pad_right("abcdef", 3), "abcdef");
    }
}
