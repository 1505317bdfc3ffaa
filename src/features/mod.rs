// Feature extraction — turning cleaned text into numeric vectors.

pub mod tfidf;

pub use tfidf::TfidfVectorizer;
