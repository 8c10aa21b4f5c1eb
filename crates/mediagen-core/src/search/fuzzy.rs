//! Fuzzy scoring of a query against a single text field
//!
//! Scores are tiered: an exact match beats any prefix match, which beats a
//! match at a word boundary, which beats a plain substring, which beats a
//! scattered subsequence. Zero means the query does not match at all.

pub const EXACT_SCORE: f64 = 1000.0;
pub const PREFIX_BASE: f64 = 500.0;
pub const BOUNDARY_BASE: f64 = 300.0;
pub const SUBSTRING_BASE: f64 = 200.0;

/// Upper bound of the subsequence tier. Long scattered queries would
/// otherwise climb past the substring tier.
pub const SUBSEQUENCE_CEILING: f64 = SUBSTRING_BASE;

const PREFIX_SPAN: f64 = 100.0;
const SUBSTRING_SPAN: f64 = 50.0;

const MATCH_POINTS: f64 = 5.0;
const RUN_BASE_POINTS: f64 = 10.0;
const RUN_STEP_POINTS: f64 = 5.0;
const SEGMENT_START_BONUS: f64 = 15.0;

/// Characters after which a match counts as the start of a segment.
const SEGMENT_SEPARATORS: &[char] = &[' ', '-', '/'];

/// Score how well `query` matches `target`, ignoring case.
///
/// An empty query has no defined score here; callers treat it as "no filter".
pub fn fuzzy_score(query: &str, target: &str) -> f64 {
    score_lowercase(&query.to_lowercase(), &target.to_lowercase())
}

/// Same as [`fuzzy_score`] for inputs that are already lower-cased.
pub(crate) fn score_lowercase(q: &str, t: &str) -> f64 {
    if q.is_empty() {
        return 0.0;
    }
    if t == q {
        return EXACT_SCORE;
    }

    let coverage = q.chars().count() as f64 / t.chars().count().max(1) as f64;

    if t.starts_with(q) {
        return PREFIX_BASE + coverage * PREFIX_SPAN;
    }
    if t.contains(&format!(" {q}")) || t.contains(&format!("-{q}")) {
        return BOUNDARY_BASE + coverage * SUBSTRING_SPAN;
    }
    if t.contains(q) {
        return SUBSTRING_BASE + coverage * SUBSTRING_SPAN;
    }

    subsequence_score(q, t)
}

/// Running state of the left-to-right subsequence walk.
#[derive(Debug, Clone, Copy, Default)]
struct Walk {
    consumed: usize,
    run: usize,
    last_match: Option<usize>,
    previous: Option<char>,
    score: f64,
}

impl Walk {
    fn step(self, q: &[char], index: usize, c: char) -> Walk {
        let mut next = Walk {
            previous: Some(c),
            ..self
        };

        if self.consumed == q.len() || q[self.consumed] != c {
            return next;
        }

        let adjacent = self.last_match.is_some_and(|last| last + 1 == index);
        if adjacent {
            next.run = self.run + 1;
            next.score += RUN_BASE_POINTS + RUN_STEP_POINTS * next.run as f64;
        } else {
            next.run = 0;
            next.score += MATCH_POINTS;
        }

        let at_segment_start = match self.previous {
            None => true,
            Some(p) => SEGMENT_SEPARATORS.contains(&p),
        };
        if at_segment_start {
            next.score += SEGMENT_START_BONUS;
        }

        next.consumed += 1;
        next.last_match = Some(index);
        next
    }
}

fn subsequence_score(q: &str, t: &str) -> f64 {
    let q: Vec<char> = q.chars().collect();
    let walk = t
        .chars()
        .enumerate()
        .fold(Walk::default(), |walk, (i, c)| walk.step(&q, i, c));

    if walk.consumed < q.len() {
        return 0.0;
    }

    walk.score.min(SUBSEQUENCE_CEILING)
}
