mod tail_test;
mod watch_test;
