use crate::FontMetrics;

/// Words are separated by plain spaces only, so no-break spaces and tabs stay inside their
/// word. Runs of spaces don't produce empty words.
pub(crate) fn words(segment: &str) -> impl Iterator<Item = &str> {
    segment.split(' ').filter(|word| !word.is_empty())
}

/// Break text into lines that each measure narrower than `col_width` in the active font.
///
/// # Wrapping Behavior
///
/// The text is first split at its explicit line breaks (`\n` or `\r\n`). A segment that
/// already fits is kept verbatim, including any runs of whitespace inside it. Segments that
/// don't fit are re-flowed greedily word by word, joining words with a single space. Words
/// are only ever separated by plain spaces, and a segment that holds no words at all
/// becomes an empty line.
///
/// A word that is at least as wide as the column can never fit on a line of its own, so it
/// is broken character by character instead. The only line that can end up as wide as or
/// wider than the column is one holding a single character that is itself too wide.
///
/// Widths are compared strictly: a line measuring exactly `col_width` does not fit.
///
/// Empty text produces no lines. `col_width` must be positive.
pub fn break_lines<M: FontMetrics + ?Sized>(metrics: &M, text: &str, col_width: f32) -> Vec<String> {
    let space_width = metrics.string_width(" ");
    let mut lines: Vec<String> = Vec::new();

    for segment in text.lines() {
        if metrics.string_width(segment) < col_width {
            lines.push(segment.to_string());
            continue;
        }

        let first_line = lines.len();
        let mut line = String::new();
        let mut line_width = 0.0;

        for word in words(segment) {
            let word_width = metrics.string_width(word);

            if word_width >= col_width {
                log::trace!("splitting oversize word {word:?} ({word_width} >= {col_width})");
                if !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                }
                line_width = 0.0;

                let mut buf = [0u8; 4];
                for ch in word.chars() {
                    let ch_width = metrics.string_width(ch.encode_utf8(&mut buf));
                    if !line.is_empty() && line_width + ch_width >= col_width {
                        lines.push(std::mem::take(&mut line));
                        line_width = 0.0;
                    }
                    line.push(ch);
                    line_width += ch_width;
                }
            } else if line.is_empty() {
                line.push_str(word);
                line_width = word_width;
            } else if line_width + space_width + word_width < col_width {
                line.push(' ');
                line.push_str(word);
                line_width += space_width + word_width;
            } else {
                lines.push(std::mem::take(&mut line));
                line.push_str(word);
                line_width = word_width;
            }
        }

        // whatever is left over becomes the last line of the segment
        if !line.is_empty() {
            lines.push(line);
        }
        // a segment of nothing but spaces still takes up a line
        if lines.len() == first_line {
            lines.push(String::new());
        }
    }

    for line in lines.iter() {
        log::trace!("line: {line:?}");
    }

    lines
}
