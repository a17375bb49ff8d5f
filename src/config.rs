//! Pipeline configuration.
//!
//! Built once by the driver and passed by reference into
//! [`compile_source`](crate::compile_source). Nothing in the pipeline keeps
//! global state of its own.

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Dump the token stream, the AST and the generated assembly at debug level
    pub verbose: bool,
}

impl Config {
    pub fn new(verbose: bool) -> Self {
        Config { verbose }
    }
}
