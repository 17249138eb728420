//! Quiz progression: one run through the question bank.

use crate::content::Question;

/// State for a single quiz run.
///
/// `score` can only grow by one per question, and only while that question is
/// current; `selected` is cleared on every advance.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    current: usize,
    selected: Option<usize>,
    score: usize,
    finished: bool,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            current: 0,
            selected: None,
            score: 0,
            finished: false,
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Record an answer for the current question. Ignored when an answer is
    /// already in or `idx` does not name an option. Never advances.
    pub fn submit_answer(&mut self, idx: usize) {
        if self.selected.is_some() {
            return;
        }
        let Some(question) = self.questions.get(self.current) else {
            return;
        };
        if idx >= question.options.len() {
            return;
        }
        self.selected = Some(idx);
        if idx == question.correct_index {
            self.score += 1;
        }
    }

    /// Move to the next question, or finish on the last one. The current
    /// index stays on the last question once finished.
    pub fn advance(&mut self) {
        if self.finished {
            return;
        }
        if self.current + 1 >= self.questions.len() {
            self.finished = true;
        } else {
            self.current += 1;
            self.selected = None;
        }
    }

    pub fn reset(&mut self) {
        self.current = 0;
        self.selected = None;
        self.score = 0;
        self.finished = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Correct indices: [1, 0, 2]
    fn three_questions() -> Vec<Question> {
        vec![
            Question {
                prompt: "first",
                options: vec!["a", "b", "c"],
                correct_index: 1,
                explanation: "because b",
            },
            Question {
                prompt: "second",
                options: vec!["a", "b"],
                correct_index: 0,
                explanation: "because a",
            },
            Question {
                prompt: "third",
                options: vec!["a", "b", "c", "d"],
                correct_index: 2,
                explanation: "because c",
            },
        ]
    }

    #[test]
    fn first_submit_records_answer_and_scores_correct_pick() {
        let mut quiz = QuizSession::new(three_questions());
        quiz.submit_answer(1);
        assert_eq!(quiz.selected(), Some(1));
        assert_eq!(quiz.score(), 1);
    }

    #[test]
    fn wrong_pick_does_not_score() {
        let mut quiz = QuizSession::new(three_questions());
        quiz.submit_answer(2);
        assert_eq!(quiz.selected(), Some(2));
        assert_eq!(quiz.score(), 0);
    }

    #[test]
    fn second_submit_is_ignored() {
        let mut quiz = QuizSession::new(three_questions());
        quiz.submit_answer(2);
        quiz.submit_answer(1);
        assert_eq!(quiz.selected(), Some(2));
        assert_eq!(quiz.score(), 0);
    }

    #[test]
    fn out_of_range_answer_is_ignored() {
        let mut quiz = QuizSession::new(three_questions());
        quiz.submit_answer(7);
        assert_eq!(quiz.selected(), None);
        assert_eq!(quiz.score(), 0);
    }

    #[test]
    fn advancing_through_all_questions_finishes() {
        let mut quiz = QuizSession::new(three_questions());
        quiz.advance();
        quiz.advance();
        quiz.advance();
        assert!(quiz.is_finished());
        assert_eq!(quiz.current_index(), 2);
    }

    #[test]
    fn advance_clears_selection() {
        let mut quiz = QuizSession::new(three_questions());
        quiz.submit_answer(0);
        quiz.advance();
        assert_eq!(quiz.selected(), None);
        assert_eq!(quiz.current_index(), 1);
    }

    #[test]
    fn advance_after_finish_is_a_no_op() {
        let mut quiz = QuizSession::new(three_questions());
        for _ in 0..5 {
            quiz.advance();
        }
        assert!(quiz.is_finished());
        assert_eq!(quiz.current_index(), 2);
    }

    #[test]
    fn full_round_scores_two_of_three() {
        let mut quiz = QuizSession::new(three_questions());
        for idx in [1, 1, 2] {
            quiz.submit_answer(idx);
            quiz.advance();
        }
        assert!(quiz.is_finished());
        assert_eq!(quiz.score(), 2);
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut quiz = QuizSession::new(three_questions());
        quiz.submit_answer(1);
        quiz.advance();
        quiz.submit_answer(0);
        quiz.advance();
        quiz.advance();
        assert!(quiz.is_finished());

        quiz.reset();
        assert_eq!(quiz.current_index(), 0);
        assert_eq!(quiz.selected(), None);
        assert_eq!(quiz.score(), 0);
        assert!(!quiz.is_finished());
    }
}
