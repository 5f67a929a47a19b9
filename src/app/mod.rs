// Application layer: the `prompt-cat` command, kept out of main.rs so it can
// write into any sink.

pub mod cat;
