mod common;
mod rows;
