const WORDS_PER_MINUTE: usize = 200;

/// Reading-time label for rich-text content, e.g. `"4 min read"`.
pub fn estimate_read_time(content: &str) -> String {
    let words = strip_tags(content).split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    format!("{minutes} min read")
}

fn strip_tags(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                text.push(' ');
            }
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_content_reads_in_one_minute() {
        assert_eq!(estimate_read_time("<p>Hello</p>"), "1 min read");
        assert_eq!(estimate_read_time(""), "1 min read");
    }

    #[test]
    fn markup_is_not_counted() {
        let body = format!("<div class=\"a b c d e\">{}</div>", "word ".repeat(401));
        assert_eq!(estimate_read_time(&body), "3 min read");
    }
}
