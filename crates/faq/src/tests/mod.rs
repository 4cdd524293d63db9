//! Matching scenarios against the built-in corpus.
