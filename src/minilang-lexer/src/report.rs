//! Plain-text tables over tokenizer output.

use std::collections::BTreeSet;
use std::fmt;

use crate::lexer::{Token, TokenKind};
use crate::registry::IdRegistry;

const HEADER_PADDING: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// A grid table: `+---+` rules, `+===+` under the header, a rule after each row.
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    aligns: Vec<Align>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn column(mut self, header: &str, align: Align) -> Self {
        self.headers.push(header.to_string());
        self.aligns.push(align);
        self
    }

    /// Missing cells render empty, extra cells are dropped.
    pub fn row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        let mut row: Vec<String> = cells
            .into_iter()
            .take(self.headers.len())
            .map(|cell| cell.to_string())
            .collect();
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column widths; headers get two extra cells of room, as tabulate does.
    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(header.chars().count() + HEADER_PADDING))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

fn write_rule(f: &mut fmt::Formatter<'_>, widths: &[usize], fill: char) -> fmt::Result {
    write!(f, "+")?;
    for &width in widths {
        let line: String = std::iter::repeat_n(fill, width + 2).collect();
        write!(f, "{line}+")?;
    }
    writeln!(f)
}

fn write_row(
    f: &mut fmt::Formatter<'_>,
    cells: &[String],
    widths: &[usize],
    aligns: &[Align],
) -> fmt::Result {
    write!(f, "|")?;
    for ((cell, &width), align) in cells.iter().zip(widths).zip(aligns) {
        match align {
            Align::Left => write!(f, " {cell:<width$} |")?,
            Align::Right => write!(f, " {cell:>width$} |")?,
        }
    }
    writeln!(f)
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();
        write_rule(f, &widths, '-')?;
        write_row(f, &self.headers, &widths, &self.aligns)?;
        if self.rows.is_empty() {
            return write_rule(f, &widths, '-');
        }
        write_rule(f, &widths, '=')?;
        for row in &self.rows {
            write_row(f, row, &widths, &self.aligns)?;
            write_rule(f, &widths, '-')?;
        }
        Ok(())
    }
}

/// One row per token, in source order.
pub fn token_table(tokens: &[Token]) -> Table {
    let mut table = Table::new()
        .column("Index", Align::Right)
        .column("Token Type", Align::Left)
        .column("Lexeme", Align::Left)
        .column("Token ID", Align::Right);
    for (i, token) in tokens.iter().enumerate() {
        table.row([
            i.to_string(),
            token.kind.name().to_string(),
            token.lexeme.clone(),
            token.id.to_string(),
        ]);
    }
    table
}

/// Every binding in the registry, sorted by id.
pub fn id_map_table(registry: &IdRegistry) -> Table {
    let mut entries: Vec<_> = registry.iter().collect();
    entries.sort_by_key(|&(_, id)| id);

    let mut table = Table::new()
        .column("Token", Align::Left)
        .column("ID", Align::Right);
    for (lexeme, id) in entries {
        table.row([lexeme.to_string(), id.to_string()]);
    }
    table
}

/// Distinct identifier lexemes, sorted. Numbers and keywords are left out.
pub fn symbol_table(tokens: &[Token]) -> Table {
    let symbols: BTreeSet<&str> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Identifier)
        .map(|t| t.lexeme.as_str())
        .collect();

    let mut table = Table::new().column("Identifier", Align::Left);
    for symbol in symbols {
        table.row([symbol]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use pretty_assertions::assert_eq;

    #[test]
    fn grid_layout() {
        let mut table = Table::new()
            .column("Name", Align::Left)
            .column("N", Align::Right);
        table.row(["a", "1"]);
        table.row(["long", "100"]);

        let expected = "\
+--------+-----+
| Name   |   N |
+========+=====+
| a      |   1 |
+--------+-----+
| long   | 100 |
+--------+-----+
";
        assert_eq!(table.to_string(), expected);
    }

    #[test]
    fn short_rows_are_padded() {
        let mut table = Table::new()
            .column("A", Align::Left)
            .column("B", Align::Left);
        table.row(["x"]);
        table.row(["1", "2", "3"]);

        let expected = "\
+-----+-----+
| A   | B   |
+=====+=====+
| x   |     |
+-----+-----+
| 1   | 2   |
+-----+-----+
";
        assert_eq!(table.to_string(), expected);
    }

    #[test]
    fn empty_table_is_header_only() {
        let table = Table::new().column("Identifier", Align::Left);
        assert!(table.is_empty());
        assert_eq!(
            table.to_string(),
            "+--------------+\n| Identifier   |\n+--------------+\n"
        );
    }

    #[test]
    fn symbols_are_distinct_and_sorted() {
        let (tokens, _) = tokenize("rem = n + rem ; re = 0 , int").unwrap();
        let table = symbol_table(&tokens);

        let expected = "\
+--------------+
| Identifier   |
+==============+
| n            |
+--------------+
| re           |
+--------------+
| rem          |
+--------------+
";
        assert_eq!(table.len(), 3);
        assert_eq!(table.to_string(), expected);
    }

    #[test]
    fn tokens_listed_in_source_order() {
        let (tokens, _) = tokenize("x = 0 ;").unwrap();

        let expected = "\
+---------+--------------+----------+------------+
|   Index | Token Type   | Lexeme   |   Token ID |
+=========+==============+==========+============+
|       0 | IDENTIFIER   | x        |         16 |
+---------+--------------+----------+------------+
|       1 | ASSIGN       | =        |          8 |
+---------+--------------+----------+------------+
|       2 | NUMBER       | 0        |         17 |
+---------+--------------+----------+------------+
|       3 | SEMICOLON    | ;        |         11 |
+---------+--------------+----------+------------+
";
        assert_eq!(token_table(&tokens).to_string(), expected);
    }

    #[test]
    fn id_map_sorted_by_id() {
        let (_, registry) = tokenize("b a").unwrap();
        let table = id_map_table(&registry);
        let rendered = table.to_string();

        assert_eq!(table.len(), 13);
        let lexemes: Vec<&str> = rendered
            .lines()
            .filter(|line| line.starts_with('|'))
            .skip(1)
            .filter_map(|line| line.split('|').nth(1))
            .map(str::trim)
            .collect();
        assert_eq!(
            lexemes,
            vec![
                "int", "main", "(", ")", "begin", ",", "=", ";", "while", "+", "end", "b", "a"
            ]
        );
        assert!(rendered.starts_with("+---------+------+\n| Token   |   ID |\n"));
        assert!(rendered.contains("| b       |   16 |"));
    }
}
