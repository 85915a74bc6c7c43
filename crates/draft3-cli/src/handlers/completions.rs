//! Shell completions command handler

use crate::cli::CompletionsArgs;
use crate::error::Result;
use clap::CommandFactory;
use std::io::Write;

/// Handle the completions command
pub fn handle_completions(args: CompletionsArgs) -> Result<()> {
    handle_completions_to(args, &mut std::io::stdout())
}

fn handle_completions_to(args: CompletionsArgs, out: &mut dyn Write) -> Result<()> {
    use clap_complete::generate;

    let mut cmd = crate::cli::Cli::command();
    let name = cmd.get_name().to_string();

    generate(args.shell.to_clap_shell(), &mut cmd, name, out);
    out.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Shell;

    #[test]
    fn test_bash_completions_mention_subcommands() {
        let mut buffer = Vec::new();
        handle_completions_to(CompletionsArgs { shell: Shell::Bash }, &mut buffer).unwrap();

        let script = String::from_utf8(buffer).unwrap();
        assert!(script.contains("draft3"));
        assert!(script.contains("check-schema"));
    }
}
