pub mod config;
pub mod emitter;
pub mod error;
pub mod fileio;
pub mod log;
mod opcode;
mod scanner;
mod table;

pub use config::Config;
pub use emitter::{Emitter, Target};
pub use error::{Error, IrgenResult};
pub use opcode::Opcode;
pub use scanner::{extract, TokenKind};
pub use table::*;

/// A rendered artifact and the table it was rendered from.
#[derive(Clone, Debug, PartialEq)]
pub struct Generated {
    pub table: OpcodeTable,
    pub text: String,
}

/// Extract, number and render, without touching the disk.
pub fn generate(config: &Config) -> IrgenResult<Generated> {
    let table = config.assign()?;
    let text = emitter::render(&table, config)?;
    Ok(Generated { table, text })
}

/// Regenerate the artifact at `config.output` from scratch.
pub fn run(config: &Config) -> IrgenResult<Generated> {
    let generated = generate(config)?;
    fileio::write_artifact(&config.output, &generated.text)?;
    info!(
        "wrote {} opcodes to {} ({})",
        generated.table.len(),
        config.output.display(),
        config.target
    );
    Ok(generated)
}

/// Whether `config.output` already holds what [run] would write.
pub fn check(config: &Config) -> IrgenResult<bool> {
    let generated = generate(config)?;
    Ok(fileio::is_up_to_date(&config.output, &generated.text)?)
}
