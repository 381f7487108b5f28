/// Byte offsets of every line start in a source string.
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(source.match_indices('\n').map(|(i, _)| i + 1));
        Self { line_starts }
    }

    /// Zero-based (line, column) of a byte offset. The column counts bytes.
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let line = self.line_starts.partition_point(|&x| x <= offset) - 1;
        let column = offset - self.line_starts[line];
        (line, column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_map_to_lines_and_columns() {
        let source = "int main ( )\nbegin\n  end";
        let index = LineIndex::new(source);

        assert_eq!(index.line_col(0), (0, 0));
        assert_eq!(index.line_col(4), (0, 4));
        // the newline itself still belongs to the line it ends
        assert_eq!(index.line_col(12), (0, 12));
        assert_eq!(index.line_col(13), (1, 0));
        assert_eq!(index.line_col(21), (2, 2));
    }

    #[test]
    fn empty_source_has_one_line() {
        let index = LineIndex::new("");
        assert_eq!(index.line_col(0), (0, 0));
        assert_eq!(index.line_col(5), (0, 5));
    }
}
