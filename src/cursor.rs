use crate::record::QuestionRecord;

/// Result of moving forward through the questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Advanced,
    /// Already on the last question; answers are ready to submit.
    Finished,
}

/// Where a question sits relative to the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Answered,
    Current,
    Upcoming,
}

/// 1-based position into a list of parsed questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCursor {
    current: usize,
    total: usize,
}

impl QuestionCursor {
    pub fn new(total: usize) -> Self {
        Self { current: 1, total }
    }

    /// Cursor placed at `current`, clamped to `1..=total`.
    pub fn at(current: usize, total: usize) -> Self {
        Self {
            current: current.clamp(1, total.max(1)),
            total,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn current_record<'a>(&self, records: &'a [QuestionRecord]) -> Option<&'a QuestionRecord> {
        records.get(self.current - 1)
    }

    pub fn next(&mut self) -> Step {
        if self.current < self.total {
            self.current += 1;
            Step::Advanced
        } else {
            Step::Finished
        }
    }

    /// Move back one question. Returns false on the first question.
    pub fn previous(&mut self) -> bool {
        if self.current > 1 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    pub fn status(&self, index: usize) -> Status {
        match index.cmp(&self.current) {
            std::cmp::Ordering::Less => Status::Answered,
            std::cmp::Ordering::Equal => Status::Current,
            std::cmp::Ordering::Greater => Status::Upcoming,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::NO_FOLLOW_UP;

    fn records(n: usize) -> Vec<QuestionRecord> {
        (1..=n)
            .map(|i| QuestionRecord {
                main_question: format!("Question {i}?"),
                follow_up_question: NO_FOLLOW_UP.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_walk_forward_to_finish() {
        let mut cursor = QuestionCursor::new(3);
        assert_eq!(cursor.next(), Step::Advanced);
        assert_eq!(cursor.next(), Step::Advanced);
        assert_eq!(cursor.current(), 3);
        assert_eq!(cursor.next(), Step::Finished);
        assert_eq!(cursor.current(), 3);
    }

    #[test]
    fn test_previous_stops_at_first() {
        let mut cursor = QuestionCursor::new(2);
        assert!(!cursor.previous());
        cursor.next();
        assert!(cursor.previous());
        assert_eq!(cursor.current(), 1);
    }

    #[test]
    fn test_empty_list_finishes_immediately() {
        let mut cursor = QuestionCursor::new(0);
        assert_eq!(cursor.next(), Step::Finished);
        assert_eq!(cursor.current_record(&[]), None);
    }

    #[test]
    fn test_current_record() {
        let records = records(3);
        let mut cursor = QuestionCursor::new(records.len());
        cursor.next();
        assert_eq!(
            cursor.current_record(&records).map(|r| r.main_question.as_str()),
            Some("Question 2?")
        );
    }

    #[test]
    fn test_status_relative_to_current() {
        let cursor = QuestionCursor::at(2, 3);
        assert_eq!(cursor.status(1), Status::Answered);
        assert_eq!(cursor.status(2), Status::Current);
        assert_eq!(cursor.status(3), Status::Upcoming);
    }

    #[test]
    fn test_at_clamps() {
        assert_eq!(QuestionCursor::at(0, 3).current(), 1);
        assert_eq!(QuestionCursor::at(9, 3).current(), 3);
        assert_eq!(QuestionCursor::at(5, 0).current(), 1);
    }
}
