use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::process;

use paperden_core::{
    SiteConfig, collect_images, doc_for_page, paper_fallback, parse_feed, render_gallery,
    render_paper, render_paper_sanitized, render_updates, sample_images, standalone_page,
    updates_fallback,
};

#[derive(Clone, Copy)]
enum Command {
    Paper,
    Updates,
    Gallery,
}

fn main() {
    let mut command: Option<Command> = None;
    let mut input: Option<String> = None;
    let mut sanitized = false;
    let mut standalone = false;
    let mut config_path: Option<String> = None;
    let mut page: Option<String> = None;
    let mut doc: Option<String> = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "--sanitized" => sanitized = true,
            "--standalone" => standalone = true,
            "--config" => config_path = Some(expect_value(&mut args, "--config")),
            "--page" => page = Some(expect_value(&mut args, "--page")),
            "--doc" => doc = Some(expect_value(&mut args, "--doc")),
            "paper" if command.is_none() => command = Some(Command::Paper),
            "updates" if command.is_none() => command = Some(Command::Updates),
            "gallery" if command.is_none() => command = Some(Command::Gallery),
            _ => {
                if input.is_none() {
                    input = Some(arg);
                } else {
                    eprintln!("unexpected argument: {}", arg);
                    print_usage();
                    process::exit(2);
                }
            }
        }
    }

    let config = match config_path {
        Some(path) => match SiteConfig::load(Path::new(&path)) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("{}", err);
                process::exit(2);
            }
        },
        None => SiteConfig::default(),
    };

    match command.unwrap_or(Command::Paper) {
        Command::Paper => run_paper(input, page, doc, &config, sanitized, standalone),
        Command::Updates => run_updates(input),
        Command::Gallery => run_gallery(input, &config),
    }
}

fn run_paper(
    input: Option<String>,
    page: Option<String>,
    doc: Option<String>,
    config: &SiteConfig,
    sanitized: bool,
    standalone: bool,
) {
    // A positional file wins; otherwise --page/--doc stand in for the
    // browser address and the document name is derived from them.
    let path = input.or_else(|| {
        (page.is_some() || doc.is_some())
            .then(|| doc_for_page(doc.as_deref(), page.as_deref().unwrap_or("")))
    });

    let source = match &path {
        Some(path) => match fs::read_to_string(path) {
            Ok(source) => source,
            Err(err) => {
                eprintln!("failed to read {}: {}", path, err);
                println!("{}", paper_fallback(&format!("Paper not found: {}", path)));
                process::exit(1);
            }
        },
        None => read_stdin(),
    };

    let paper = if sanitized {
        render_paper_sanitized(&source, config)
    } else {
        render_paper(&source, config)
    };

    if standalone {
        let title = paper.title.as_deref().unwrap_or(&config.site_name);
        print!("{}", standalone_page(title, &paper.html));
    } else {
        println!("{}", paper.html);
    }
}

fn run_updates(input: Option<String>) {
    let json = match &input {
        Some(path) => match fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) => {
                eprintln!("failed to read {}: {}", path, err);
                println!("{}", updates_fallback());
                process::exit(1);
            }
        },
        None => read_stdin(),
    };

    match parse_feed(&json) {
        Ok(feed) => println!("{}", render_updates(&feed)),
        Err(err) => {
            eprintln!("{}", err);
            println!("{}", updates_fallback());
            process::exit(1);
        }
    }
}

fn run_gallery(input: Option<String>, config: &SiteConfig) {
    let dir = input.unwrap_or_else(|| config.gallery_dir.clone());
    match collect_images(Path::new(&dir)) {
        Ok(images) => {
            let picks = sample_images(&images, config.gallery_count);
            println!("{}", render_gallery(&dir, &picks));
        }
        Err(err) => {
            eprintln!("{}", err);
            println!("{}", render_gallery(&dir, &[]));
            process::exit(1);
        }
    }
}

fn read_stdin() -> String {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .unwrap_or_else(|err| {
            eprintln!("failed to read stdin: {}", err);
            process::exit(1);
        });
    buffer
}

fn expect_value(args: &mut impl Iterator<Item = String>, flag: &str) -> String {
    args.next().unwrap_or_else(|| {
        eprintln!("{} expects a value", flag);
        print_usage();
        process::exit(2)
    })
}

fn print_usage() {
    eprintln!(
        "Usage: paperden-cli [--sanitized] [--standalone] [--config <path>] [--page <path>] [--doc <name>] [paper|updates|gallery] [input]"
    );
}
