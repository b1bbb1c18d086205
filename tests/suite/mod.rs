mod catalog;
mod cli;
mod entry_flow;
