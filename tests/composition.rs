// Composition tests — the full pipeline chained end to end:
//   clean -> split -> TF-IDF -> train (both models) -> persist -> analyze
// without any network access. Artifact files go to a temp directory.

use litmus::analysis;
use litmus::features::TfidfVectorizer;
use litmus::model::bundle::ModelArtifact;
use litmus::model::{ModelBundle, ModelKind, Sentiment};
use litmus::text;
use litmus::train::{self, metrics, ReviewDataset};
use ndarray::Array1;

fn labeled_corpus() -> ReviewDataset {
    let positive = [
        "An absolutely wonderful film with great acting and a great story",
        "Great soundtrack and wonderful pacing, I loved every minute",
        "Wonderful cast, great direction, a joy from start to finish",
        "Loved the story, great characters and wonderful photography",
        "Great fun, wonderful humor, easily the best film this year",
        "A wonderful experience with great performances all around",
    ];
    let negative = [
        "An awful film with terrible acting and a terrible story",
        "Terrible soundtrack and awful pacing, I hated every minute",
        "Awful cast, terrible direction, a chore from start to finish",
        "Hated the story, terrible characters and awful photography",
        "Awful bore, terrible humor, easily the worst film this year",
        "A terrible experience with awful performances all around",
    ];

    let mut reviews = Vec::new();
    let mut labels = Vec::new();
    for r in positive {
        reviews.push(text::clean(r));
        labels.push(1);
    }
    for r in negative {
        reviews.push(text::clean(r));
        labels.push(0);
    }
    ReviewDataset { reviews, labels }
}

fn trained_bundle() -> ModelBundle {
    let dataset = labeled_corpus();
    let vectorizer = TfidfVectorizer::fit(&dataset.reviews, 100).unwrap();

    let x = train::vectorize_all(&vectorizer, &dataset.reviews);
    let y = Array1::from(dataset.labels.clone());

    let logistic = train::logistic::fit(x.clone(), y.clone()).unwrap();
    let sgd = train::sgd::fit(&x, &y, &train::sgd::SgdOptions::default());

    let logistic_metrics = metrics::evaluate(&logistic, &x, y.view());
    let sgd_metrics = metrics::evaluate(&sgd, &x, y.view());
    let trained_at = chrono::Utc::now();

    ModelBundle {
        vectorizer,
        logistic: ModelArtifact {
            model: logistic,
            metrics: logistic_metrics,
            trained_at,
            n_training_samples: dataset.len(),
        },
        sgd: ModelArtifact {
            model: sgd,
            metrics: sgd_metrics,
            trained_at,
            n_training_samples: dataset.len(),
        },
    }
}

// ============================================================
// Chain: train -> analyze
// ============================================================

#[test]
fn both_models_separate_the_training_sentiments() {
    let bundle = trained_bundle();

    for kind in ModelKind::ALL {
        let m = bundle.artifact(kind);
        assert!(
            m.metrics.accuracy > 0.9,
            "{kind} training accuracy was {}",
            m.metrics.accuracy
        );

        let positive = analysis::analyze(&bundle, kind, "a wonderful great film", 0.5).unwrap();
        assert_eq!(positive.sentiment, Sentiment::Positive, "{kind} on positive input");

        let negative = analysis::analyze(&bundle, kind, "an awful terrible film", 0.5).unwrap();
        assert_eq!(negative.sentiment, Sentiment::Negative, "{kind} on negative input");
    }
}

#[test]
fn attribution_names_the_sentiment_words() {
    let bundle = trained_bundle();
    let result =
        analysis::analyze(&bundle, ModelKind::Logistic, "wonderful acting, awful story", 0.5)
            .unwrap();

    let words: Vec<&str> = result.contributions.iter().map(|c| c.word.as_str()).collect();
    assert!(words.contains(&"wonderful"), "missing 'wonderful' in {words:?}");
    assert!(words.contains(&"awful"), "missing 'awful' in {words:?}");
}

#[test]
fn word_map_reflects_the_raw_input() {
    let bundle = trained_bundle();
    let result = analysis::analyze(
        &bundle,
        ModelKind::Logistic,
        "Soundtrack, soundtrack, SOUNDTRACK! And the pacing.",
        0.5,
    )
    .unwrap();

    assert_eq!(result.word_map[0].word, "soundtrack");
    assert_eq!(result.word_map[0].count, 3);
    // Stop words ("and", "the") never appear in the map.
    assert!(result.word_map.iter().all(|w| w.word != "and" && w.word != "the"));
}

// ============================================================
// Artifact persistence round trip
// ============================================================

#[test]
fn saved_bundle_loads_and_predicts_identically() {
    let bundle = trained_bundle();
    let dir = tempfile::tempdir().unwrap();

    bundle.save(dir.path()).unwrap();
    assert!(ModelBundle::artifacts_present(dir.path()));

    let reloaded = ModelBundle::load(dir.path()).unwrap();
    assert_eq!(
        reloaded.vectorizer.n_features(),
        bundle.vectorizer.n_features()
    );

    let input = "a wonderful film with terrible pacing";
    for kind in ModelKind::ALL {
        let before = analysis::analyze(&bundle, kind, input, 0.5).unwrap();
        let after = analysis::analyze(&reloaded, kind, input, 0.5).unwrap();
        assert_eq!(before.sentiment, after.sentiment);
        assert_eq!(before.positive_probability, after.positive_probability);
    }
}

#[test]
fn loading_from_an_empty_directory_fails_with_guidance() {
    let dir = tempfile::tempdir().unwrap();
    let err = ModelBundle::load(dir.path()).unwrap_err();
    assert!(err.to_string().contains("litmus train"));
}

// ============================================================
// Dataset split feeding the pipeline
// ============================================================

#[test]
fn split_corpus_still_trains_a_working_model() {
    let dataset = labeled_corpus();
    let (train_set, test_set) = dataset.split(0.25, 42);
    assert_eq!(test_set.len(), 3);

    let vectorizer = TfidfVectorizer::fit(&train_set.reviews, 100).unwrap();
    let x = train::vectorize_all(&vectorizer, &train_set.reviews);
    let y = Array1::from(train_set.labels.clone());
    let model = train::sgd::fit(&x, &y, &train::sgd::SgdOptions::default());

    let x_test = train::vectorize_all(&vectorizer, &test_set.reviews);
    let y_test = Array1::from(test_set.labels.clone());
    let m = metrics::evaluate(&model, &x_test, y_test.view());
    assert!(m.accuracy > 0.6, "held-out accuracy was {}", m.accuracy);
}
