use std::io::Read;
use std::path::Path;

use anyhow::Context;

/// Characters that are stripped from both ends of a board before parsing,
/// e.g. when it was pasted into a code block or quoted.
const BOARD_DECORATION: [char; 6] = ['`', '"', '\'', ' ', '\t', '\n'];

/// Reads the board text from `path`, or from stdin if there is no path.
pub fn read_board(path: Option<&Path>) -> anyhow::Result<String> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Could not read board from '{}'", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .lock()
                .read_to_string(&mut buf)
                .context("Could not read board from stdin")?;
            buf
        }
    };
    Ok(clean_board_text(&raw))
}

/// Strips decoration around the board and trailing whitespace of each row.
///
/// The parser would otherwise take a trailing space as the goal.
pub fn clean_board_text(raw: &str) -> String {
    raw.trim_matches(|c: char| BOARD_DECORATION.contains(&c) || c == '\r')
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_code_fences_and_quotes() {
        assert_eq!(clean_board_text("```\nS..\n..X\n```\n"), "S..\n..X");
        assert_eq!(clean_board_text("'S.X'"), "S.X");
        assert_eq!(clean_board_text("\r\n\tS.\r\n.X \r\n"), "S.\n.X");
    }

    #[test]
    fn trailing_spaces_in_rows_are_removed() {
        let text = clean_board_text("S.. \n..X\t\n");
        assert_eq!(text, "S..\n..X");
        let board = gridpath::Board::parse(&text).unwrap();
        assert_eq!(board.goal, gridpath::Coord::new(2, 1));
    }
}
