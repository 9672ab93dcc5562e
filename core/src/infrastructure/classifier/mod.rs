pub mod tract_classifier;
