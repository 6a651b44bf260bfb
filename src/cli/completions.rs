//! Static shell completions

use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::cli::Cli;

/// Write completions for `shell` to stdout
pub fn run(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_completions_mention_commands() {
        let mut cmd = Cli::command();
        let mut buf = Vec::new();
        generate(Shell::Bash, &mut cmd, "tokenauth", &mut buf);

        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("tokenauth"));
        assert!(script.contains("login"));
        assert!(script.contains("whoami"));
    }
}
