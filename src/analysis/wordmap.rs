// Key-word map — the word-cloud style visualization of the analyzed text.
//
// Weights are plain frequency counts over the cleaned input with English
// stop words removed. Rendering is a deterministic SVG: words flow left to
// right in rows, font size scaled by count relative to the most frequent
// word. No randomness, so the same input always renders the same map.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use stop_words::{get, LANGUAGE};

use crate::text;

/// Cap on the number of words in the map.
pub const MAX_WORDS: usize = 40;

const SVG_WIDTH: u32 = 400;
const SVG_HEIGHT: u32 = 200;
const MIN_FONT: f64 = 11.0;
const MAX_FONT: f64 = 34.0;

// Muted palette cycled across words.
const PALETTE: [&str; 5] = ["#1f6f8b", "#99522b", "#4a6f28", "#6b4f8b", "#8b2f4f"];

fn stop_word_set() -> &'static HashSet<String> {
    static SET: OnceLock<HashSet<String>> = OnceLock::new();
    SET.get_or_init(|| get(LANGUAGE::English).into_iter().collect())
}

/// One word in the map with its frequency weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordWeight {
    pub word: String,
    pub count: u32,
}

/// Count stop-word-filtered frequencies in the raw input, most frequent
/// first (alphabetical tie-break), capped at `max_words`.
pub fn word_frequencies(raw: &str, max_words: usize) -> Vec<WordWeight> {
    let cleaned = text::clean(raw);
    let stops = stop_word_set();

    let mut counts: HashMap<&str, u32> = HashMap::new();
    for token in text::tokenize(&cleaned) {
        if stops.contains(token) {
            continue;
        }
        *counts.entry(token).or_insert(0) += 1;
    }

    let mut ranked: Vec<(&str, u32)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(max_words);

    ranked
        .into_iter()
        .map(|(word, count)| WordWeight {
            word: word.to_string(),
            count,
        })
        .collect()
}

/// Render the word map as a self-contained SVG document.
///
/// Layout is a simple row flow with a crude per-glyph width estimate; words
/// that no longer fit are dropped rather than clipped.
pub fn render_svg(words: &[WordWeight]) -> String {
    let mut svg = String::with_capacity(2048);
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{SVG_WIDTH}\" height=\"{SVG_HEIGHT}\" \
         viewBox=\"0 0 {SVG_WIDTH} {SVG_HEIGHT}\">\
         <rect width=\"100%\" height=\"100%\" fill=\"white\"/>"
    ));

    let max_count = words.iter().map(|w| w.count).max().unwrap_or(1) as f64;

    let mut x = 8.0;
    let mut y = 8.0 + MAX_FONT;
    let mut row_height = 0.0f64;

    for (i, entry) in words.iter().enumerate() {
        let scale = entry.count as f64 / max_count;
        let font = MIN_FONT + (MAX_FONT - MIN_FONT) * scale;
        // Rough advance estimate: 0.6em per glyph plus a word gap.
        let width = font * 0.6 * entry.word.chars().count() as f64 + 10.0;

        if x + width > SVG_WIDTH as f64 - 8.0 {
            x = 8.0;
            y += row_height + 6.0;
            row_height = 0.0;
        }
        if y > SVG_HEIGHT as f64 - 4.0 {
            break;
        }

        let color = PALETTE[i % PALETTE.len()];
        svg.push_str(&format!(
            "<text x=\"{x:.1}\" y=\"{y:.1}\" font-family=\"sans-serif\" \
             font-size=\"{font:.1}\" fill=\"{color}\">{}</text>",
            escape(&entry.word)
        ));

        x += width;
        row_height = row_height.max(font);
    }

    svg.push_str("</svg>");
    svg
}

// Cleaned tokens are alphanumeric, but escape anyway so the renderer never
// depends on that invariant.
fn escape(word: &str) -> String {
    word.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_words_are_filtered() {
        let words = word_frequencies("the movie was the best movie of the year", MAX_WORDS);
        assert!(words.iter().all(|w| w.word != "the" && w.word != "was" && w.word != "of"));
        assert_eq!(words[0].word, "movie");
        assert_eq!(words[0].count, 2);
    }

    #[test]
    fn cap_is_respected() {
        let raw: String = (0..100).map(|i| format!("word{i} ")).collect();
        let words = word_frequencies(&raw, 10);
        assert_eq!(words.len(), 10);
    }

    #[test]
    fn svg_contains_the_words_and_is_deterministic() {
        let words = word_frequencies("brilliant brilliant soundtrack pacing", MAX_WORDS);
        let a = render_svg(&words);
        let b = render_svg(&words);
        assert_eq!(a, b);
        assert!(a.starts_with("<svg"));
        assert!(a.contains(">brilliant</text>"));
        assert!(a.contains(">soundtrack</text>"));
    }

    #[test]
    fn empty_input_renders_an_empty_map() {
        let words = word_frequencies("", MAX_WORDS);
        assert!(words.is_empty());
        let svg = render_svg(&words);
        assert!(svg.ends_with("</svg>"));
    }
}
