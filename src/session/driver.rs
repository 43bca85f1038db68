//! Study session driver
//!
//! Walks through a vocabulary set one card at a time. Each typed answer is
//! checked against the card's translation, recorded on the card's mastery
//! tracker and on the progress ledger. Finishing the last card reports the
//! pass to the ledger as a completed session.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;
use uuid::Uuid;

use crate::clock::Clock;
use crate::mastery::CardMastery;
use crate::progress::{StudyProgressLedger, StudySession};
use crate::vocabulary::{SetKind, VocabCard, VocabularySet};

#[derive(Error, Debug, PartialEq)]
pub enum SessionError {
    #[error("The current card has already been answered")]
    AlreadyAnswered,

    #[error("The current card has not been answered yet")]
    NotAnswered,

    #[error("The session is finished")]
    Finished,
}

pub type Result<T> = std::result::Result<T, SessionError>;

/// Result of checking one answer
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerOutcome {
    pub card_id: Uuid,
    pub correct: bool,
    /// The translation the answer was checked against
    pub expected: String,
}

/// What happened after moving past an answered card
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    /// Now showing the card at this index
    Next(usize),
    /// The pass is over; `None` when the ledger dropped it
    Completed(Option<StudySession>),
}

/// Case- and whitespace-insensitive comparison of a typed answer
pub fn answers_match(input: &str, expected: &str) -> bool {
    input.trim().to_lowercase() == expected.trim().to_lowercase()
}

pub struct SessionDriver {
    set_kind: SetKind,
    clock: Arc<dyn Clock>,
    cards: Vec<VocabCard>,
    mastery: HashMap<Uuid, CardMastery>,
    missed: Vec<VocabCard>,
    index: usize,
    answered_current: bool,
    correct_answers: u32,
    incorrect_answers: u32,
    started_at: DateTime<Utc>,
    finished: bool,
}

impl SessionDriver {
    /// Start a pass over `set` in its stored order
    pub fn start(set: &VocabularySet, clock: Arc<dyn Clock>) -> Self {
        let mastery = set
            .cards
            .iter()
            .map(|card| (card.id, CardMastery::new(card.id)))
            .collect();
        let started_at = clock.now();

        log::info!("Starting study session for {} ({} cards)", set.name, set.card_count());

        Self {
            set_kind: set.kind,
            clock,
            cards: set.cards.clone(),
            mastery,
            missed: Vec::new(),
            index: 0,
            answered_current: false,
            correct_answers: 0,
            incorrect_answers: 0,
            started_at,
            finished: set.cards.is_empty(),
        }
    }

    /// Start a pass over `set` in random order
    pub fn start_shuffled<R: Rng + ?Sized>(
        set: &VocabularySet,
        clock: Arc<dyn Clock>,
        rng: &mut R,
    ) -> Self {
        let mut driver = Self::start(set, clock);
        driver.cards.shuffle(rng);
        driver
    }

    pub fn set_kind(&self) -> SetKind {
        self.set_kind
    }

    pub fn current_card(&self) -> Option<&VocabCard> {
        if self.finished {
            return None;
        }
        self.cards.get(self.index)
    }

    /// Fraction of the pass behind us, 0.0 - 1.0
    pub fn progress(&self) -> f64 {
        if self.cards.is_empty() {
            return 0.0;
        }
        if self.finished {
            return 1.0;
        }
        self.index as f64 / self.cards.len() as f64
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn correct_answers(&self) -> u32 {
        self.correct_answers
    }

    pub fn incorrect_answers(&self) -> u32 {
        self.incorrect_answers
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Cards answered incorrectly during this pass
    pub fn missed_cards(&self) -> &[VocabCard] {
        &self.missed
    }

    pub fn mastery(&self, card_id: Uuid) -> Option<&CardMastery> {
        self.mastery.get(&card_id)
    }

    /// Cards of the current pass that are due for review at `now`
    pub fn due_cards(&self, now: DateTime<Utc>) -> Vec<&VocabCard> {
        self.cards
            .iter()
            .filter(|card| {
                self.mastery
                    .get(&card.id)
                    .map_or(true, |m| m.due_for_review(now))
            })
            .collect()
    }

    /// Check `input` against the current card and record the outcome
    pub fn submit_answer(
        &mut self,
        input: &str,
        ledger: &mut StudyProgressLedger,
    ) -> Result<AnswerOutcome> {
        if self.answered_current {
            return Err(SessionError::AlreadyAnswered);
        }
        let card = self.current_card().ok_or(SessionError::Finished)?.clone();

        let correct = answers_match(input, &card.translation);
        let now = self.clock.now();
        self.mastery
            .entry(card.id)
            .or_insert_with(|| CardMastery::new(card.id))
            .record_attempt_at(correct, now);

        if correct {
            self.correct_answers += 1;
            ledger.record_success();
        } else {
            self.incorrect_answers += 1;
            ledger.record_failure();
            self.missed.push(card.clone());
        }
        self.answered_current = true;

        log::debug!(
            "Answer for {} was {}",
            card.character,
            if correct { "correct" } else { "incorrect" }
        );

        Ok(AnswerOutcome {
            card_id: card.id,
            correct,
            expected: card.translation,
        })
    }

    /// Move past the answered card, completing the session after the last one
    pub fn next_card(&mut self, ledger: &mut StudyProgressLedger) -> Result<Advance> {
        if self.finished {
            return Err(SessionError::Finished);
        }
        if !self.answered_current {
            return Err(SessionError::NotAnswered);
        }

        self.answered_current = false;
        if self.index + 1 < self.cards.len() {
            self.index += 1;
            return Ok(Advance::Next(self.index));
        }

        self.finished = true;
        let elapsed = (self.clock.now() - self.started_at).num_milliseconds() as f64 / 1000.0;
        let studied = self.correct_answers + self.incorrect_answers;
        let session = ledger.complete_session(studied, self.correct_answers, elapsed);
        Ok(Advance::Completed(session))
    }

    /// Restart with only the cards that were missed, returning false if there are none
    pub fn review_mistakes(&mut self) -> bool {
        if self.missed.is_empty() {
            return false;
        }

        self.cards = std::mem::take(&mut self.missed);
        self.index = 0;
        self.answered_current = false;
        self.correct_answers = 0;
        self.incorrect_answers = 0;
        self.started_at = self.clock.now();
        self.finished = false;

        log::info!("Reviewing {} missed cards", self.cards.len());
        true
    }
}
