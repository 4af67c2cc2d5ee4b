pub mod billiards;

#[cfg(test)]
mod billiards_tests;
