// Property-based tests for the board engine

mod property;
