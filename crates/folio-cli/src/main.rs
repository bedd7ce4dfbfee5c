use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use folio_config::Config;
use folio_engine::{Post, PostId, content, html, io};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    env,
    io::{Stdout, stdout},
    path::PathBuf,
    process,
};

mod app;
mod ui;

use app::App;

enum Command {
    Read { posts_path: Option<PathBuf> },
    Export { id: PostId, posts_path: Option<PathBuf> },
}

fn usage(program: &str) -> ! {
    eprintln!("Usage: {program} [posts-folder-path]");
    eprintln!("       {program} export <post-id> [posts-folder-path]");
    process::exit(1);
}

fn parse_args(args: &[String]) -> Command {
    let program = args.first().map(String::as_str).unwrap_or("folio-cli");
    match args.get(1..).unwrap_or_default() {
        [] => Command::Read { posts_path: None },
        [cmd, id] if cmd == "export" => Command::Export {
            id: PostId::from(id.as_str()),
            posts_path: None,
        },
        [cmd, id, path] if cmd == "export" => Command::Export {
            id: PostId::from(id.as_str()),
            posts_path: Some(PathBuf::from(path)),
        },
        [cmd, ..] if cmd == "export" => usage(program),
        [path] => Command::Read {
            posts_path: Some(PathBuf::from(path)),
        },
        _ => usage(program),
    }
}

/// Loads posts from the CLI path, else the configured path, else the bundled posts.
fn load_posts(cli_path: Option<PathBuf>, config: &Config, from_config: bool) -> Vec<Post> {
    let Some(posts_path) = cli_path.or_else(|| config.posts_path.clone()) else {
        log::debug!("no posts path configured, using bundled posts");
        return content::bundled_posts();
    };

    match io::load_posts(&posts_path) {
        Ok(posts) => posts,
        Err(e) => {
            let source = if from_config {
                format!(" from config file '{}'", Config::config_path().display())
            } else {
                String::new()
            };
            eprintln!(
                "Error: Posts path '{}'{} is invalid: {e}",
                posts_path.display(),
                source
            );
            process::exit(1);
        }
    }
}

fn main() -> Result<()> {
    // Terminal UI owns stdout; keep logging quiet unless RUST_LOG asks for more
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let args: Vec<String> = env::args().collect();
    let command = parse_args(&args);

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };
    let from_config = config.is_some();
    let config = config.unwrap_or_default();

    match command {
        Command::Export { id, posts_path } => {
            let from_config = from_config && posts_path.is_none();
            let posts = load_posts(posts_path, &config, from_config);
            let Some(post) = posts.iter().find(|p| p.id() == &id) else {
                eprintln!("Error: No post with id '{id}'");
                process::exit(1);
            };
            print!(
                "{}",
                html::render_article(post, post.reading_minutes(config.words_per_minute))
            );
            Ok(())
        }
        Command::Read { posts_path } => {
            let from_config = from_config && posts_path.is_none();
            let posts = load_posts(posts_path, &config, from_config);
            run_terminal(App::new(posts, &config))
        }
    }
}

fn run_terminal(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| ui::ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_arguments_reads_default_posts() {
        assert!(matches!(
            parse_args(&args(&["folio-cli"])),
            Command::Read { posts_path: None }
        ));
    }

    #[test]
    fn single_argument_is_a_posts_path() {
        match parse_args(&args(&["folio-cli", "/srv/posts"])) {
            Command::Read { posts_path } => {
                assert_eq!(posts_path, Some(PathBuf::from("/srv/posts")))
            }
            Command::Export { .. } => panic!("expected read command"),
        }
    }

    #[test]
    fn export_with_id_and_path() {
        match parse_args(&args(&["folio-cli", "export", "b2", "/srv/posts"])) {
            Command::Export { id, posts_path } => {
                assert_eq!(id, PostId::from("b2"));
                assert_eq!(posts_path, Some(PathBuf::from("/srv/posts")));
            }
            Command::Read { .. } => panic!("expected export command"),
        }
    }
}
