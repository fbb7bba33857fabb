//! Response evaluation and per-session tallies. Scoring is pure and never
//! fails: any well-formed response yields a verdict.

use crate::quiz::{CorrectAnswer, GeneratedQuestion};

/// What the learner submitted: one option, or their full ordering.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Response {
    Single(String),
    Ordered(Vec<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Verdict {
    Correct,
    Wrong,
    /// Some positions of an ordered response matched, but not all.
    Partial { matched: usize, total: usize },
}

impl Verdict {
    pub fn score(&self) -> f64 {
        match self {
            Verdict::Correct => 1.0,
            Verdict::Wrong => 0.0,
            Verdict::Partial { matched, total } => *matched as f64 / *total as f64,
        }
    }

    pub fn is_fully_correct(&self) -> bool {
        matches!(self, Verdict::Correct)
    }
}

/// Compare a response against a question. A response of the wrong shape
/// (a single pick for an ordering question, or vice versa) is simply wrong.
pub fn evaluate(question: &GeneratedQuestion, response: &Response) -> Verdict {
    match (&question.answer, response) {
        (CorrectAnswer::Single(answer), Response::Single(selected)) => {
            if answer == selected {
                Verdict::Correct
            } else {
                Verdict::Wrong
            }
        }
        (CorrectAnswer::Ordered(answer), Response::Ordered(submitted)) => {
            score_ordered(answer, submitted)
        }
        _ => Verdict::Wrong,
    }
}

/// Position-by-position comparison with partial credit.
pub fn score_ordered(correct: &[String], submitted: &[String]) -> Verdict {
    let total = correct.len();
    let matched = correct
        .iter()
        .zip(submitted)
        .filter(|(a, b)| a == b)
        .count();

    if matched == total {
        Verdict::Correct
    } else if matched == 0 {
        Verdict::Wrong
    } else {
        Verdict::Partial { matched, total }
    }
}

/// Running tallies for one quiz session. Held by the caller; one value per
/// session, nothing shared.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Session {
    pub total_questions: usize,
    pub correct_answers: usize,
    pub wrong_answers: usize,
    pub score: f64,
}

impl Session {
    pub fn record(&mut self, verdict: &Verdict) {
        self.total_questions += 1;
        match verdict {
            Verdict::Correct => {
                self.score += 1.0;
                self.correct_answers += 1;
            }
            Verdict::Wrong => {
                self.wrong_answers += 1;
            }
            // Partial credit moves the score but neither tally, so
            // correct + wrong can undercount total_questions.
            Verdict::Partial { .. } => {
                self.score += verdict.score();
            }
        }
    }

    pub fn percent(&self) -> u32 {
        if self.total_questions == 0 {
            return 0;
        }
        (self.score / self.total_questions as f64 * 100.0).round() as u32
    }
}
