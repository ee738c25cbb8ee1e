//! storefront - product admin for the DummyJSON catalogue
//!
//! List, search, inspect, add, edit and delete products from the
//! terminal. Add/edit take `field=value` pairs, e.g.
//!
//! ```text
//! storefront add title=Phone price=500 stock=10 brand=Acme category=Electronics
//! storefront edit 12 price=99.5 "description=Now with case"
//! ```

mod config;
mod input;
mod logger;
mod render;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use config::Config;
use shared::{AppError, FieldValue, ProductId};
use storefront_client::{FormSubmission, ProductForm, RemoteStorefront};

#[derive(Debug, Parser)]
#[command(name = "storefront", version, about = "Product admin for the DummyJSON catalogue")]
struct Cli {
    /// Product API base URL (overrides STOREFRONT_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Request timeout in seconds (overrides STOREFRONT_TIMEOUT_SECS)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Log as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List all products
    List,
    /// Search products by keyword
    Search { term: String },
    /// Show a single product
    Show { id: ProductId },
    /// Add a product from field=value pairs
    Add {
        #[arg(required = true)]
        fields: Vec<String>,
    },
    /// Edit a product with field=value pairs
    Edit {
        id: ProductId,
        #[arg(required = true)]
        fields: Vec<String>,
    },
    /// Delete a product
    Delete { id: ProductId },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv::dotenv();

    let cli = Cli::parse();
    let mut config = Config::from_env();
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }
    config.log_json |= cli.log_json;

    logger::init_logger(&config.log_level, config.log_json, config.log_dir.as_deref())?;
    tracing::debug!(api_url = %config.api_url, "Starting storefront");

    let mut storefront = RemoteStorefront::connect(&config.client_config())?;
    run(&mut storefront, cli.command).await
}

async fn run(storefront: &mut RemoteStorefront, command: Command) -> anyhow::Result<()> {
    match command {
        Command::List => {
            storefront.load().await.context("Failed to load products")?;
            print!("{}", render::product_table(storefront.products()));
        }
        Command::Search { term } => {
            storefront
                .search(&term)
                .await
                .with_context(|| format!("Search for '{}' failed", term))?;
            print!("{}", render::product_table(storefront.products()));
        }
        Command::Show { id } => match storefront.details(id).await {
            Ok(product) => print!("{}", render::product_card(&product)),
            Err(e) if e.is_not_found() => println!("No product found"),
            Err(e) => return Err(e).context("Failed to fetch product"),
        },
        Command::Add { fields } => {
            storefront.load().await.context("Failed to load products")?;
            let mut form = ProductForm::create();
            apply_fields(&mut form, &fields)?;
            submit(storefront, form).await?;
        }
        Command::Edit { id, fields } => {
            storefront.load().await.context("Failed to load products")?;
            let original = match storefront.store().get(id) {
                Some(product) => product.clone(),
                None => storefront
                    .details(id)
                    .await
                    .with_context(|| format!("Product {} not found", id))?,
            };
            let mut form = ProductForm::edit(original);
            apply_fields(&mut form, &fields)?;
            submit(storefront, form).await?;
        }
        Command::Delete { id } => {
            storefront.load().await.context("Failed to load products")?;
            storefront
                .delete(id)
                .await
                .with_context(|| format!("Failed to delete product {}", id))?;
            println!("Deleted product {}", id);
            print!("{}", render::product_table(storefront.products()));
        }
    }
    Ok(())
}

fn apply_fields(form: &mut ProductForm, fields: &[String]) -> Result<(), AppError> {
    for field in fields {
        let value = FieldValue::parse_assignment(field)?;
        form.set_field(input::apply_input_limits(value));
    }
    Ok(())
}

async fn submit(storefront: &mut RemoteStorefront, mut form: ProductForm) -> anyhow::Result<()> {
    let action = form.action_label();
    match storefront
        .submit_form(&mut form)
        .await
        .with_context(|| format!("{} failed", action))?
    {
        FormSubmission::Saved(product) => {
            println!("{}: saved product {}", form.title(), product.id.unwrap_or_default());
            print!("{}", render::product_table(storefront.products()));
            Ok(())
        }
        FormSubmission::Invalid(errors) => {
            eprintln!("{}: please fix the following fields", form.title());
            eprint!("{}", render::field_errors(&errors));
            bail!(AppError::validation(&errors))
        }
    }
}
