// Render the payreq man page to stdout

use clap::CommandFactory;
use std::io::Write;

fn main() -> std::io::Result<()> {
    let cmd = payreq::cli::Cli::command();
    let man = clap_mangen::Man::new(cmd);
    let mut buffer: Vec<u8> = Vec::new();
    man.render(&mut buffer)?;
    std::io::stdout().write_all(&buffer)
}
