mod coverage_tests;
mod separators_tests;
mod unclosed_tests;
