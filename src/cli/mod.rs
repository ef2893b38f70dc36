mod args;
mod commands;

pub use args::Cli;

#[cfg(test)]
mod tests;
