mod sentence_test;
mod structured_test;
