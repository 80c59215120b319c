/// Collapse runs of blank lines to a single blank line and drop trailing blanks.
///
/// The first line of each blank run is kept as-is. Applying this twice gives the
/// same result as applying it once.
pub fn normalize_blank_lines<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let mut result: Vec<String> = Vec::with_capacity(lines.len());
    let mut last_was_blank = false;

    for line in lines {
        let line = line.as_ref();
        let is_blank = line.trim().is_empty();
        if !(is_blank && last_was_blank) {
            result.push(line.to_string());
        }
        last_was_blank = is_blank;
    }

    while result.last().is_some_and(|line| line.trim().is_empty()) {
        result.pop();
    }

    result
}
