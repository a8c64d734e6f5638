use crate::domain::ContentBlock;
use crate::richtext;

/// Average reading speed the estimate is based on.
pub const WORDS_PER_MINUTE: u32 = 200;

/// Estimate reading time in whole minutes for a post body.
///
/// Counts whitespace-separated words over every block's heading and its
/// body flattened to plain text, then rounds up. Empty content is the one
/// case that yields 0; anything with content reads as at least a minute.
pub fn estimate_duration(blocks: &[ContentBlock]) -> u32 {
    if blocks.is_empty() {
        return 0;
    }

    let words: u32 = blocks
        .iter()
        .map(|block| word_count(&block.heading) + word_count(&richtext::as_text(&block.body)))
        .sum();

    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

fn word_count(text: &str) -> u32 {
    text.split_whitespace().count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::richtext::RichTextNode;

    fn words(count: usize) -> String {
        let mut text = String::new();
        for i in 0..count {
            if i > 0 {
                text.push(' ');
            }
            text.push_str("word");
        }
        text
    }

    fn block(heading: &str, body_words: usize) -> ContentBlock {
        ContentBlock {
            heading: heading.into(),
            body: vec![RichTextNode::paragraph(&words(body_words))],
        }
    }

    #[test]
    fn test_empty_content_is_zero() {
        assert_eq!(estimate_duration(&[]), 0);
    }

    #[test]
    fn test_short_content_rounds_up_to_one() {
        assert_eq!(estimate_duration(&[block("Intro", 10)]), 1);
    }

    #[test]
    fn test_two_blocks_sum_words() {
        // 1 + 150 + 1 + 100 = 252 words, just over one minute's worth
        let blocks = vec![block("Intro", 150), block("Conclusion", 100)];
        assert_eq!(estimate_duration(&blocks), 2);
    }

    #[test]
    fn test_exact_multiple_does_not_round_up() {
        let blocks = vec![block("", 400)];
        assert_eq!(estimate_duration(&blocks), 2);
    }

    #[test]
    fn test_monotonic_in_word_count() {
        let shorter = vec![block("Intro", 180)];
        let mut longer = shorter.clone();
        longer.push(block("More", 250));
        assert!(estimate_duration(&longer) >= estimate_duration(&shorter));
    }

    #[test]
    fn test_blank_blocks_still_count_as_content() {
        // Degenerate but non-empty content never reads as zero minutes.
        let blocks = vec![ContentBlock {
            heading: String::new(),
            body: Vec::new(),
        }];
        assert_eq!(estimate_duration(&blocks), 1);
    }

    #[test]
    fn test_markup_is_not_counted() {
        // A span over the text must not inflate the word count.
        let mut node = RichTextNode::paragraph(&words(5));
        node.spans.push(crate::richtext::Span {
            start: 0,
            end: 4,
            kind: crate::richtext::SpanKind::Strong,
            data: None,
        });
        let blocks = vec![ContentBlock {
            heading: "Heading".into(),
            body: vec![node],
        }];
        assert_eq!(estimate_duration(&blocks), 1);
    }
}
