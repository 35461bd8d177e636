//! catalog - browse the product catalog from the terminal.

use std::path::PathBuf;

use anyhow::{Context, Result};
use catalog_core::{
    fixture::{self, Fixtures},
    join, prepare_rows,
    view::{self, PanelEntry},
    Catalog, FilterState, UserFilter,
};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "catalog")]
#[command(version, about, long_about = None)]
struct Cli {
    /// JSON file with users, categories and products (defaults to the
    /// built-in fixtures)
    #[arg(short, long, global = true)]
    fixtures: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the products that match the given filters
    #[command(alias = "ls")]
    List {
        /// Case-insensitive text to look for in product names
        #[arg(short, long, default_value = "")]
        query: String,

        /// Show only products owned by this user ("all" for everyone)
        #[arg(short, long, default_value = "all")]
        user: UserFilter,

        /// Show only products in this category; repeat to select several
        #[arg(short, long = "category")]
        categories: Vec<String>,
    },

    /// List the users that can be selected as owner
    Users,

    /// List the categories that can be selected
    Categories,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .context("invalid log level")?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let catalog = load_catalog(cli.fixtures.as_ref())?;

    match cli.command {
        Commands::List { query, user, categories } => {
            list(&catalog, &filter_state(query, user, categories))
        }
        Commands::Users => {
            print_entries(&view::owner_tabs(&catalog, &FilterState::default()));
            Ok(())
        }
        Commands::Categories => {
            print_entries(&view::category_buttons(&catalog, &FilterState::default()));
            Ok(())
        }
    }
}

/// Turns the `list` flags into a filter. Categories are selected, never
/// toggled, so naming one twice still selects it.
fn filter_state(query: String, user: UserFilter, categories: Vec<String>) -> FilterState {
    FilterState {
        selected_categories: categories.into_iter().collect(),
        ..FilterState::new().with_query(query).select_user(user)
    }
}

fn load_catalog(path: Option<&PathBuf>) -> Result<Catalog> {
    let fixtures = match path {
        Some(path) => Fixtures::from_path(path)
            .with_context(|| format!("failed to load fixtures from {}", path.display()))?,
        None => fixture::builtin(),
    };
    let catalog = fixtures.into_catalog().context("invalid fixture data")?;
    info!(
        users = catalog.users().count(),
        categories = catalog.categories().count(),
        products = catalog.products().count(),
        "loaded catalog"
    );
    Ok(catalog)
}

fn list(catalog: &Catalog, state: &FilterState) -> Result<()> {
    let rows = join(catalog).context("failed to join catalog")?;
    let visible = prepare_rows(&rows, state);
    info!(?state, visible = visible.len(), "filtered products");
    print!("{}", view::render_text(&view::table_view(&visible)));
    Ok(())
}

fn print_entries(entries: &[PanelEntry]) {
    // skip the "All" entry; it is not a value the user can type
    for entry in entries.iter().skip(1) {
        println!("{}", entry.label);
    }
}

#[cfg(test)]
mod test {
    use std::collections::BTreeSet;

    use super::*;

    fn parse_list(args: &[&str]) -> FilterState {
        let cli = Cli::try_parse_from(["catalog", "list"].iter().chain(args)).unwrap();
        match cli.command {
            Commands::List { query, user, categories } => filter_state(query, user, categories),
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn cli_list_defaults_to_no_filter() {
        assert_eq!(parse_list(&[]), FilterState::default());
    }

    #[test]
    fn cli_list_repeated_category_stays_selected() {
        let state = parse_list(&["-c", "Drinks", "-c", "Drinks"]);
        assert_eq!(state.selected_categories, BTreeSet::from(["Drinks".to_string()]));

        let catalog = load_catalog(None).unwrap();
        let rows = join(&catalog).unwrap();
        let names: Vec<_> =
            prepare_rows(&rows, &state).iter().map(|row| row.product.name.as_str()).collect();
        assert_eq!(names, vec!["Milk", "Cola"]);
    }

    #[test]
    fn cli_list_maps_every_flag() {
        let state = parse_list(&[
            "--query",
            " SHIRT ",
            "--user",
            "Max",
            "--category",
            "Clothes",
            "-c",
            "Drinks",
        ]);
        assert_eq!(state.query, " SHIRT ");
        assert_eq!(state.selected_user, UserFilter::named("Max"));
        assert_eq!(
            state.selected_categories,
            BTreeSet::from(["Clothes".to_string(), "Drinks".to_string()])
        );
    }

    #[test]
    fn cli_list_user_all_selects_everyone() {
        assert_eq!(parse_list(&["-u", "all"]).selected_user, UserFilter::All);
        assert_eq!(parse_list(&["-u", "All"]).selected_user, UserFilter::named("All"));
    }

    #[test]
    fn cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["catalog", "users", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.log_level, "debug");
        assert!(cli.fixtures.is_none());
        assert!(matches!(cli.command, Commands::Users));
    }
}
