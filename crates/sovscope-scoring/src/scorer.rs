//! Lexicon scorer for consumer-product chatter, and the impact weighting.

/// Bumped whenever [`LEXICON`] changes so scores from different runs can be compared.
pub const LEXICON_VERSION: u32 = 1;

/// Word weights.
///
/// Keys are lowercase single words. Values in `(0.0, 1.0]` are positive,
/// in `[-1.0, 0.0)` are negative. The final score is clamped to `[-1.0, 1.0]`.
pub(crate) const LEXICON: &[(&str, f64)] = &[
    // Positive signals
    ("good", 0.3),
    ("great", 0.4),
    ("excellent", 0.5),
    ("amazing", 0.5),
    ("awesome", 0.5),
    ("love", 0.5),
    ("loved", 0.5),
    ("loving", 0.5),
    ("best", 0.5),
    ("recommend", 0.4),
    ("recommended", 0.4),
    ("quiet", 0.3),
    ("silent", 0.3),
    ("efficient", 0.4),
    ("saves", 0.3),
    ("saving", 0.3),
    ("smooth", 0.3),
    ("stylish", 0.3),
    ("sleek", 0.3),
    ("reliable", 0.4),
    ("happy", 0.4),
    ("worth", 0.3),
    ("nice", 0.3),
    ("impressed", 0.4),
    ("perfect", 0.5),
    ("smart", 0.2),
    // Negative signals
    ("bad", -0.4),
    ("poor", -0.4),
    ("worst", -0.6),
    ("terrible", -0.6),
    ("awful", -0.6),
    ("hate", -0.6),
    ("loud", -0.3),
    ("noisy", -0.4),
    ("noise", -0.3),
    ("broken", -0.5),
    ("broke", -0.5),
    ("defective", -0.6),
    ("faulty", -0.5),
    ("stopped", -0.4),
    ("failed", -0.4),
    ("issue", -0.3),
    ("issues", -0.3),
    ("problem", -0.3),
    ("complaint", -0.4),
    ("refund", -0.4),
    ("waste", -0.5),
    ("disappointed", -0.5),
    ("disappointing", -0.5),
    ("useless", -0.6),
    ("slow", -0.3),
    ("expensive", -0.3),
    ("overpriced", -0.4),
    ("scam", -0.7),
];

/// Flip the sign of the next scored word.
const NEGATORS: &[&str] = &[
    "not", "no", "never", "don't", "dont", "doesn't", "doesnt", "isn't", "isnt", "wasn't",
    "wasnt", "didn't", "didnt", "won't", "wont", "hardly",
];

/// Scale the next scored word.
const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.5),
    ("really", 1.5),
    ("extremely", 1.5),
    ("super", 1.5),
    ("so", 1.5),
    ("totally", 1.5),
];

fn lexicon_weight(word: &str) -> Option<f64> {
    LEXICON
        .iter()
        .find(|&&(lex_word, _)| lex_word == word)
        .map(|&(_, weight)| weight)
}

/// Score a text string using the lexicon.
///
/// Splits text into lowercase words and sums matching weights. A negator
/// flips the sign of the word after it and an intensifier scales it; both
/// expire after that word. Returns `0.0` for empty or unknown text.
#[must_use]
pub fn lexicon_score(text: &str) -> f64 {
    let mut score = 0.0_f64;
    let mut negate = false;
    let mut boost = 1.0_f64;

    for word in text.split_whitespace() {
        let w = word
            .replace('\u{2019}', "'")
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        if w.is_empty() {
            continue;
        }

        if NEGATORS.contains(&w.as_str()) {
            negate = true;
            continue;
        }
        if let Some(&(_, factor)) = INTENSIFIERS.iter().find(|&&(i, _)| i == w) {
            boost = factor;
            continue;
        }

        if let Some(weight) = lexicon_weight(&w) {
            let signed = if negate { -weight } else { weight };
            score += signed * boost;
        }
        negate = false;
        boost = 1.0;
    }

    score.clamp(-1.0, 1.0)
}

/// Three-bucket multiplier applied to engagement in the impact score.
///
/// Both thresholds are exclusive: a polarity of exactly `0.1` is neutral.
#[must_use]
pub fn sentiment_weight(polarity: f64) -> f64 {
    if polarity > 0.1 {
        1.5
    } else if polarity < -0.1 {
        0.5
    } else {
        1.0
    }
}
