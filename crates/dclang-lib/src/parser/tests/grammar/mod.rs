mod assignments_tests;
mod blocks_tests;
mod calls_tests;
mod expression_root_tests;
mod layout_tests;
mod references_tests;
mod trivia_tests;
