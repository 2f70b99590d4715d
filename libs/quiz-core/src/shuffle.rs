//! Option shuffling with letter labels.

use crate::error::ShuffleError;
use crate::types::{LabeledOption, PresentedQuestion, Question};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeSet;

/// Maximum number of options a question may present.
pub const MAX_OPTIONS: usize = 10;

/// Letters assigned to shuffled options, in order.
pub const OPTION_LETTERS: [char; MAX_OPTIONS] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J'];

/// Shuffle a question's options and label them A, B, C…
///
/// The permutation is uniform (Fisher-Yates via `SliceRandom::shuffle`).
/// Correctness is remapped by option text: the shuffle destroys index
/// correspondence, so a shuffled option is correct iff its text appears
/// in `correct_options`.
///
/// Questions with more than [`MAX_OPTIONS`] options are rejected rather
/// than truncated; non-quizzable questions (no options, or no correct
/// option) are rejected so callers filter them out before a run.
pub fn present<R: Rng + ?Sized>(
    question: &Question,
    rng: &mut R,
) -> Result<PresentedQuestion, ShuffleError> {
    if !question.is_quizzable() {
        return Err(ShuffleError::NotQuizzable);
    }
    if question.options.len() > MAX_OPTIONS {
        return Err(ShuffleError::TooManyOptions {
            count: question.options.len(),
        });
    }

    let mut options = question.options.clone();
    options.shuffle(rng);

    let mut labeled_options = Vec::with_capacity(options.len());
    let mut correct_letters = BTreeSet::new();
    for (letter, text) in OPTION_LETTERS.into_iter().zip(options) {
        if question.correct_options.contains(&text) {
            correct_letters.insert(letter);
        }
        labeled_options.push(LabeledOption { letter, text });
    }

    Ok(PresentedQuestion {
        stem: question.stem.clone(),
        labeled_options,
        correct_letters,
    })
}
