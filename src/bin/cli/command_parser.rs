use clap::Command;

pub fn arg_parser_repl() -> Command {
    Command::new("libris")
        .about("Add books to a catalog service")
        .multicall(true)
        .subcommand_required(true)
        .subcommand(
            Command::new("add")
                .about("Add something (currently only books)")
                .subcommand_required(true)
                .subcommand(Command::new("book")),
        )
        .subcommand(Command::new("genres").about("List the genres a book can be filed under"))
        .subcommand(Command::new("exit").about("Leave the repl"))
}

pub fn arg_parser_cli() -> Command {
    arg_parser_repl().subcommand(Command::new("repl").about("Launch a read eval print loop"))
}

pub fn generate_completions() -> Vec<String> {
    fn walk(prefix: &str, cmd: &Command, out: &mut Vec<String>) {
        let name = format!("{prefix} {}", cmd.get_name()).trim().to_string();
        out.push(name.clone());
        for subcmd in cmd.get_subcommands() {
            walk(&name, subcmd, out);
        }
    }
    let cmd = arg_parser_repl();
    let mut completions = vec![];
    for subcmd in cmd.get_subcommands() {
        walk("", subcmd, &mut completions);
    }
    completions.sort();
    completions
}
