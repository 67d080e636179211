use std::{env, process::exit};

use anyhow::Result;
use dotenvy::dotenv;
use reedline::Signal;

mod command_parser;
mod interactive;
mod prompt;
mod repl;

use libris::{
    api::HttpCatalogApi,
    config::Config,
    form::AddBookForm,
    notify::TerminalNotifier,
    types::{book::Book, genre::Genre},
};

async fn add_book(
    api: &HttpCatalogApi,
    notifier: &TerminalNotifier,
    config: &Config,
) -> Result<()> {
    let mut form = AddBookForm::new(api, notifier).with_on_success(|book: &Book| {
        println!("{}", book.render(config));
    });
    interactive::fill_book_form(&mut form)?;
    println!("Adding book...");
    form.submit().await;
    Ok(())
}

async fn handle_command(
    command: String,
    api: &HttpCatalogApi,
    notifier: &TerminalNotifier,
    config: &Config,
) -> Result<()> {
    let args = command_parser::arg_parser_repl();
    let Some(command) = shlex::split(&command) else {
        anyhow::bail!("Invalid command");
    };
    let matches = match args.try_get_matches_from(command) {
        Ok(matches) => matches,
        Err(e) => anyhow::bail!(e),
    };
    match matches.subcommand() {
        Some(("add", matches)) => match matches.subcommand() {
            Some(("book", _)) => {
                add_book(api, notifier, config).await?;
            }
            Some((name, _)) => unimplemented!("{}", name),
            None => unreachable!("subcommand required"),
        },
        Some(("genres", _)) => {
            for genre in Genre::ALL {
                println!("{}", config.output_genre.format_str(genre));
            }
        }
        Some(("exit", _)) => {
            exit(0);
        }
        Some((name, _)) => unimplemented!("{}", name),
        None => unreachable!("subcommand required"),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let config = Config::read_config()?;
    let api = HttpCatalogApi::new(&config)?;
    let notifier = TerminalNotifier::new(config.clone());

    let args_parsed = command_parser::arg_parser_cli().get_matches_from(env::args_os().skip(1));

    if let Some(("repl", _)) = args_parsed.subcommand() {
        let mut repl = repl::Repl::new(command_parser::generate_completions(), &config);
        loop {
            match repl.read_line() {
                Ok(Signal::Success(buffer)) => {
                    match handle_command(buffer, &api, &notifier, &config).await {
                        Ok(_) => (),
                        Err(e) => println!("Error: {}", e),
                    };
                }
                Ok(Signal::CtrlD) | Ok(Signal::CtrlC) => {
                    println!("\nAborted!");
                    break;
                }
                x => {
                    println!("Event: {:?}", x);
                }
            }
        }
    } else {
        let args = env::args_os()
            .skip(1)
            .map(|x| x.into_string().expect("Invalid unicode in arguments"))
            .collect::<Vec<String>>()
            .join(" ");
        handle_command(args, &api, &notifier, &config).await?;
    }

    Ok(())
}
