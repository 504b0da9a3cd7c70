//! Maintenance status prediction.
//!
//! A multinomial naive Bayes classifier over lower-cased word tokens with Laplace
//! smoothing, trained in-process on a small fixed set of examples. Tokens never seen
//! during training are ignored. When nothing in the input is known, or both classes
//! score the same, the prediction is `Open`.

use std::collections::{HashMap, HashSet};

use crate::server::model::maintenance::MaintenanceStatus;

/// Fixed training examples as (problem description, resulting status).
const TRAINING_SET: [(&str, MaintenanceStatus); 8] = [
    ("oil change", MaintenanceStatus::Completed),
    ("general service", MaintenanceStatus::Completed),
    ("flat tire", MaintenanceStatus::Completed),
    ("engine failing", MaintenanceStatus::Open),
    ("electrical problem", MaintenanceStatus::Open),
    ("strange noise in the brakes", MaintenanceStatus::Open),
    ("chain adjustment", MaintenanceStatus::Completed),
    ("faulty injection system", MaintenanceStatus::Open),
];

fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
}

/// Word statistics for one class.
#[derive(Debug, Default)]
struct ClassModel {
    documents: usize,
    word_counts: HashMap<String, usize>,
    total_words: usize,
}

impl ClassModel {
    fn log_likelihood(&self, token: &str, vocabulary_size: usize) -> f64 {
        let count = self.word_counts.get(token).copied().unwrap_or(0);

        ((count + 1) as f64 / (self.total_words + vocabulary_size) as f64).ln()
    }
}

/// Trained status classifier. Immutable after training and shared behind an `Arc`.
#[derive(Debug)]
pub struct StatusClassifier {
    open: ClassModel,
    completed: ClassModel,
    vocabulary: HashSet<String>,
}

impl StatusClassifier {
    /// Trains the classifier on the built-in examples.
    pub fn train() -> Self {
        Self::train_on(&TRAINING_SET)
    }

    fn train_on(examples: &[(&str, MaintenanceStatus)]) -> Self {
        let mut open = ClassModel::default();
        let mut completed = ClassModel::default();
        let mut vocabulary = HashSet::new();

        for (text, status) in examples {
            let class = match status {
                MaintenanceStatus::Open => &mut open,
                MaintenanceStatus::Completed => &mut completed,
            };
            class.documents += 1;

            for token in tokenize(text) {
                *class.word_counts.entry(token.clone()).or_insert(0) += 1;
                class.total_words += 1;
                vocabulary.insert(token);
            }
        }

        Self {
            open,
            completed,
            vocabulary,
        }
    }

    /// Predicts whether a maintenance with this description ends up open or completed.
    ///
    /// # Arguments
    /// - `problems` - Free text problem description
    ///
    /// # Returns
    /// - `MaintenanceStatus` - Most likely status, `Open` on ties or unknown input
    pub fn predict(&self, problems: &str) -> MaintenanceStatus {
        let known: Vec<String> = tokenize(problems)
            .filter(|token| self.vocabulary.contains(token))
            .collect();

        if known.is_empty() {
            return MaintenanceStatus::Open;
        }

        let total_documents = (self.open.documents + self.completed.documents) as f64;
        let vocabulary_size = self.vocabulary.len();
        let score = |class: &ClassModel| {
            let prior = (class.documents as f64 / total_documents).ln();
            known
                .iter()
                .map(|token| class.log_likelihood(token, vocabulary_size))
                .sum::<f64>()
                + prior
        };

        if score(&self.completed) > score(&self.open) {
            MaintenanceStatus::Completed
        } else {
            MaintenanceStatus::Open
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicts_open_for_engine_failure() {
        let classifier = StatusClassifier::train();
        assert_eq!(
            classifier.predict("Engine failing badly"),
            MaintenanceStatus::Open
        );
    }

    #[test]
    fn predicts_completed_for_oil_change() {
        let classifier = StatusClassifier::train();
        assert_eq!(
            classifier.predict("oil change needed"),
            MaintenanceStatus::Completed
        );
    }

    #[test]
    fn unknown_words_predict_open() {
        let classifier = StatusClassifier::train();
        assert_eq!(classifier.predict("xyzzy"), MaintenanceStatus::Open);
        assert_eq!(classifier.predict(""), MaintenanceStatus::Open);
    }

    #[test]
    fn punctuation_and_case_are_ignored() {
        let classifier = StatusClassifier::train();
        assert_eq!(
            classifier.predict("FLAT, tire!"),
            MaintenanceStatus::Completed
        );
    }
}
