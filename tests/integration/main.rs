//! Integration tests for vidcue


mod player_test;
