mod classifier_tests;
mod formatter_tests;
