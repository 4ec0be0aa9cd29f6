pub mod fisher;
